//! Color constants for the watch face.
//!
//! Standard colors come from the `RgbColor` trait constants; the grays are
//! the face's own palette, converted from 24-bit hex to RGB565.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Face background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Hands, ticks and the logo.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Cyan (0x00FFFF). Digital time label and widget gauge indicators.
pub const CYAN: Rgb565 = Rgb565::CYAN;

/// Lime green. Battery charge glyph.
pub const LIME: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Custom Colors
// =============================================================================

/// Mid gray (0x808080). Gauge tracks and widget glyphs.
/// RGB565: (16, 32, 16).
pub const GAUGE_GRAY: Rgb565 = Rgb565::new(16, 32, 16);

/// Light gray (0x999999). Status icons in the top corners.
/// RGB565: (19, 38, 19).
pub const ICON_GRAY: Rgb565 = Rgb565::new(19, 38, 19);

// =============================================================================
// Widget Palette
// =============================================================================

/// Colors applied to one circular widget.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WidgetColors {
    /// Gauge indicator (filled part of the arc).
    pub arc_fg: Rgb565,
    /// Gauge track (unfilled part of the arc).
    pub arc_bg: Rgb565,
    /// Glyph and value label color.
    pub objects: Rgb565,
}

/// Palette every carousel widget receives on creation.
pub const DEFAULT_WIDGET_COLORS: WidgetColors = WidgetColors {
    arc_fg: CYAN,
    arc_bg: GAUGE_GRAY,
    objects: GAUGE_GRAY,
};
