//! Optional face assets and the availability probe.
//!
//! The face needs two custom fonts and one logo image from the external
//! filesystem. Presence is a plain existence check; the content format
//! belongs to the surface that loads them.

use crate::surface::{FontId, Surface};

/// Font for widget values.
pub const TEKO_FONT: &str = "/fonts/teko.bin";

/// Seven-segment font for the digital time label.
pub const SEGMENT_FONT: &str = "/fonts/7segments_40.bin";

/// Logo shown at twelve o'clock.
pub const LOGO_IMAGE: &str = "/images/pine_small.bin";

/// Every asset the face requires.
pub const REQUIRED_ASSETS: [&str; 3] = [TEKO_FONT, SEGMENT_FONT, LOGO_IMAGE];

/// Read-only view of the asset filesystem.
pub trait AssetStore {
    /// Whether `path` exists and can be opened.
    fn exists(
        &self,
        path: &str,
    ) -> bool;
}

/// Whether the face can be offered: every required asset is present.
pub fn is_available<A: AssetStore + ?Sized>(store: &A) -> bool { REQUIRED_ASSETS.iter().all(|path| store.exists(path)) }

/// Fonts the face loaded. `None` entries fall back to the surface default.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct FaceFonts {
    /// Digital time label.
    pub segment: Option<FontId>,
    /// Widget values.
    pub teko: Option<FontId>,
}

impl FaceFonts {
    /// Load both fonts, skipping any that are missing from `store`.
    pub fn load<S: Surface, A: AssetStore + ?Sized>(
        surface: &mut S,
        store: &A,
    ) -> Self {
        Self {
            segment: load_font(surface, store, SEGMENT_FONT),
            teko: load_font(surface, store, TEKO_FONT),
        }
    }

    /// Hand every loaded font back to the surface.
    pub fn free<S: Surface>(
        self,
        surface: &mut S,
    ) {
        for font in [self.segment, self.teko].into_iter().flatten() {
            surface.free_font(font);
        }
    }
}

fn load_font<S: Surface, A: AssetStore + ?Sized>(
    surface: &mut S,
    store: &A,
    path: &str,
) -> Option<FontId> {
    if !store.exists(path) {
        log_warn!("assets: {} missing, using default font", path);
        return None;
    }
    let font = surface.load_font(path);
    if font.is_none() {
        log_warn!("assets: {} could not be loaded", path);
    }
    font
}

/// Asset store backed by a fixed list of present paths.
#[derive(Clone, Copy, Debug)]
pub struct StaticAssets<'a> {
    paths: &'a [&'a str],
}

impl<'a> StaticAssets<'a> {
    pub const fn new(paths: &'a [&'a str]) -> Self { Self { paths } }
}

impl StaticAssets<'static> {
    /// Store holding every required asset.
    pub const fn complete() -> Self { Self { paths: &REQUIRED_ASSETS } }
}

impl AssetStore for StaticAssets<'_> {
    fn exists(
        &self,
        path: &str,
    ) -> bool {
        self.paths.iter().any(|known| *known == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::mock::MockSurface;

    #[test]
    fn test_available_only_with_all_assets() {
        assert!(is_available(&StaticAssets::complete()));
        assert!(!is_available(&StaticAssets::new(&[TEKO_FONT, SEGMENT_FONT])));
        assert!(!is_available(&StaticAssets::new(&[TEKO_FONT, LOGO_IMAGE])));
        assert!(!is_available(&StaticAssets::new(&[])));
    }

    #[test]
    fn test_missing_font_degrades_to_none() {
        let mut surface = MockSurface::new();
        surface.loadable_fonts = vec![SEGMENT_FONT, TEKO_FONT];
        let fonts = FaceFonts::load(&mut surface, &StaticAssets::new(&[SEGMENT_FONT]));
        assert_eq!(fonts.segment, Some(FontId::new(0)));
        assert_eq!(fonts.teko, None);
    }

    #[test]
    fn test_unloadable_font_degrades_to_none() {
        let mut surface = MockSurface::new();
        let fonts = FaceFonts::load(&mut surface, &StaticAssets::complete());
        assert_eq!(fonts, FaceFonts::default());
    }

    #[test]
    fn test_free_releases_loaded_fonts_only() {
        let mut surface = MockSurface::new();
        surface.loadable_fonts = vec![TEKO_FONT];
        let fonts = FaceFonts::load(&mut surface, &StaticAssets::complete());
        fonts.free(&mut surface);
        assert_eq!(surface.freed_fonts, vec![FontId::new(0)]);
    }
}
