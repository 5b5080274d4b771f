//! Retained scene drawn with embedded-graphics.
//!
//! [`Scene`] is a fixed-capacity arena of drawable objects that implements
//! [`Surface`]. The face mutates it through the trait; a render loop calls
//! [`Scene::draw`] onto any `DrawTarget<Color = Rgb565>` whenever
//! [`Scene::take_dirty`] reports a change.
//!
//! # Capacity
//!
//! Creation takes the first free slot. When every slot is taken the scene
//! logs a warning and returns [`ObjectId::NONE`]; calls on that id (or on
//! any deleted id) are ignored.
//!
//! # Fonts
//!
//! Asset font paths map to bundled `profont` sizes:
//!
//! | Path | Font |
//! |------|------|
//! | `/fonts/7segments_40.bin` | `PROFONT_24_POINT` |
//! | `/fonts/teko.bin` | `PROFONT_14_POINT` |
//! | default | `PROFONT_10_POINT` |

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use heapless::String;
use profont::{PROFONT_10_POINT, PROFONT_14_POINT, PROFONT_24_POINT};

use crate::assets::{SEGMENT_FONT, TEKO_FONT};
use crate::colors::{BLACK, GAUGE_GRAY, WHITE};
use crate::config::{HALF_SCREEN, SCREEN_WIDTH};
use crate::surface::{Anchor, ColorPart, FontId, LineStyle, ObjectId, Surface};

// =============================================================================
// Constants
// =============================================================================

/// Object capacity that fits the complete face with room for a carousel swap.
pub const FACE_CAPACITY: usize = 96;

/// Longest label text kept; longer text is truncated.
pub const LABEL_CAPACITY: usize = 16;

/// Number of fonts that can be loaded at once.
const MAX_FONTS: usize = 4;

/// Font for labels created without one, or whose font was freed.
const DEFAULT_FONT: &MonoFont<'static> = &PROFONT_10_POINT;

/// Bounding box of an image object.
const IMAGE_SIZE: Size = Size::new(24, 28);

/// Centered text, vertically middle-aligned on its anchor point.
const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Scene Objects
// =============================================================================

/// What a scene object draws.
#[derive(Clone, Debug)]
pub enum Shape {
    Line {
        style: LineStyle,
        points: [Point; 2],
    },
    Label {
        font: Option<FontId>,
        color: Rgb565,
        text: String<LABEL_CAPACITY>,
    },
    Arc {
        diameter: u32,
        width: u8,
        max: u32,
        value: u32,
        indicator: Rgb565,
        track: Rgb565,
    },
    Image {
        tint: Rgb565,
    },
}

/// One retained object.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub shape: Shape,
    pub anchor: Anchor,
    pub offset: Point,
    pub hidden: bool,
}

impl SceneObject {
    const fn new(shape: Shape) -> Self {
        Self {
            shape,
            anchor: Anchor::Center,
            offset: Point::zero(),
            hidden: false,
        }
    }

    /// Label text, if this is a label.
    pub fn text(&self) -> Option<&str> {
        match &self.shape {
            Shape::Label { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Line endpoints, if this is a line.
    pub const fn points(&self) -> Option<[Point; 2]> {
        match &self.shape {
            Shape::Line { points, .. } => Some(*points),
            _ => None,
        }
    }

    /// Gauge `(value, max)`, if this is an arc.
    pub const fn arc_value(&self) -> Option<(u32, u32)> {
        match &self.shape {
            Shape::Arc { value, max, .. } => Some((*value, *max)),
            _ => None,
        }
    }
}

// =============================================================================
// Scene
// =============================================================================

/// Fixed-capacity retained scene for the 240x240 face.
pub struct Scene<const N: usize> {
    objects: [Option<SceneObject>; N],
    fonts: [Option<&'static MonoFont<'static>>; MAX_FONTS],
    dirty: bool,
}

impl<const N: usize> Default for Scene<N> {
    fn default() -> Self { Self::new() }
}

impl<const N: usize> Scene<N> {
    pub const fn new() -> Self {
        Self {
            objects: [const { None }; N],
            fonts: [None; MAX_FONTS],
            dirty: true,
        }
    }

    /// Live object behind `id`.
    pub fn get(
        &self,
        id: ObjectId,
    ) -> Option<&SceneObject> {
        self.objects.get(id.index()).and_then(Option::as_ref)
    }

    /// Run `apply` on the live object behind `id`; the scene turns dirty only
    /// when `apply` reports that it changed something.
    fn modify(
        &mut self,
        id: ObjectId,
        apply: impl FnOnce(&mut SceneObject) -> bool,
    ) {
        if let Some(object) = self.objects.get_mut(id.index()).and_then(Option::as_mut)
            && apply(object)
        {
            self.dirty = true;
        }
    }

    /// Number of live objects.
    pub fn len(&self) -> usize { self.objects.iter().filter(|o| o.is_some()).count() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub const fn capacity(&self) -> usize { N }

    /// Whether anything changed since the last call.
    pub fn take_dirty(&mut self) -> bool { core::mem::take(&mut self.dirty) }

    fn insert(
        &mut self,
        shape: Shape,
    ) -> ObjectId {
        let Some(index) = self.objects.iter().position(Option::is_none) else {
            log_warn!("scene: all {} slots in use", N);
            return ObjectId::NONE;
        };
        self.objects[index] = Some(SceneObject::new(shape));
        self.dirty = true;
        ObjectId::new(index as u16)
    }

    fn font(
        &self,
        font: Option<FontId>,
    ) -> &'static MonoFont<'static> {
        font.and_then(|id| self.fonts.get(id.index()).copied().flatten())
            .unwrap_or(DEFAULT_FONT)
    }

    /// Bounding size used to resolve anchors.
    fn size_of(
        &self,
        shape: &Shape,
    ) -> Size {
        match shape {
            Shape::Line { .. } => Size::zero(),
            Shape::Label { font, text, .. } => text_size(self.font(*font), text.chars().count() as u32),
            Shape::Arc { diameter, .. } => Size::new_equal(*diameter),
            Shape::Image { .. } => IMAGE_SIZE,
        }
    }

    /// Draw every visible object over a black background.
    pub fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.clear(BLACK)?;
        for object in self.objects.iter().flatten().filter(|o| !o.hidden) {
            self.draw_object(object, target)?;
        }
        Ok(())
    }

    fn draw_object<D>(
        &self,
        object: &SceneObject,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let size = self.size_of(&object.shape);
        let top_left = anchor_top_left(object.anchor, object.offset, size);

        match &object.shape {
            Shape::Line { style, points } => draw_line(target, *style, *points),
            Shape::Label { font, color, text } => {
                let center = top_left + Point::new((size.width / 2) as i32, (size.height / 2) as i32);
                Text::with_text_style(text, center, MonoTextStyle::new(self.font(*font), *color), CENTERED_MIDDLE)
                    .draw(target)?;
                Ok(())
            }
            Shape::Arc {
                diameter,
                width,
                max,
                value,
                indicator,
                track,
            } => draw_gauge(target, top_left, *diameter, *width, (*value).min(*max), *max, *indicator, *track),
            Shape::Image { tint } => draw_logo(target, top_left, *tint),
        }
    }
}

// =============================================================================
// Layout Helpers
// =============================================================================

/// Pixel size of `chars` characters in `font`.
fn text_size(
    font: &MonoFont<'_>,
    chars: u32,
) -> Size {
    if chars == 0 {
        return Size::zero();
    }
    let width = chars * font.character_size.width + (chars - 1) * font.character_spacing;
    Size::new(width, font.character_size.height)
}

/// Top-left corner of an object of `size` placed at `offset` from `anchor`.
pub fn anchor_top_left(
    anchor: Anchor,
    offset: Point,
    size: Size,
) -> Point {
    let w = size.width as i32;
    let h = size.height as i32;
    let screen = SCREEN_WIDTH as i32;
    match anchor {
        Anchor::Center => Point::new(HALF_SCREEN - w / 2, HALF_SCREEN - h / 2) + offset,
        Anchor::TopLeft => offset,
        Anchor::TopRight => Point::new(screen - w, 0) + offset,
        Anchor::TopMid => Point::new(HALF_SCREEN - w / 2, 0) + offset,
    }
}

// =============================================================================
// Drawing Helpers
// =============================================================================

fn draw_line<D>(
    target: &mut D,
    style: LineStyle,
    points: [Point; 2],
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let width = u32::from(style.width);
    Line::new(points[0], points[1])
        .into_styled(PrimitiveStyle::with_stroke(style.color, width))
        .draw(target)?;

    if style.rounded && width > 1 {
        let cap = PrimitiveStyle::with_fill(style.color);
        for point in points {
            Circle::with_center(point, width).into_styled(cap).draw(target)?;
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_gauge<D>(
    target: &mut D,
    top_left: Point,
    diameter: u32,
    width: u8,
    value: u32,
    max: u32,
    indicator: Rgb565,
    track: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let width = u32::from(width);
    Circle::new(top_left, diameter)
        .into_styled(PrimitiveStyle::with_stroke(track, width))
        .draw(target)?;

    if max > 0 && value > 0 {
        // Gauges fill clockwise from nine o'clock
        let sweep = 360.0 * value as f32 / max as f32;
        Arc::new(top_left, diameter, 180.0.deg(), sweep.deg())
            .into_styled(PrimitiveStyle::with_stroke(indicator, width))
            .draw(target)?;
    }
    Ok(())
}

/// Pine tree placeholder for the logo image.
fn draw_logo<D>(
    target: &mut D,
    top_left: Point,
    tint: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let w = IMAGE_SIZE.width as i32;
    let h = IMAGE_SIZE.height as i32;
    let fill = PrimitiveStyle::with_fill(tint);

    Triangle::new(
        top_left + Point::new(w / 2, 0),
        top_left + Point::new(0, h - 6),
        top_left + Point::new(w - 1, h - 6),
    )
    .into_styled(fill)
    .draw(target)?;
    Rectangle::new(top_left + Point::new(w / 2 - 2, h - 6), Size::new(4, 6))
        .into_styled(fill)
        .draw(target)?;
    Ok(())
}

// =============================================================================
// Surface Implementation
// =============================================================================

impl<const N: usize> Surface for Scene<N> {
    fn create_line(
        &mut self,
        style: LineStyle,
    ) -> ObjectId {
        self.insert(Shape::Line {
            style,
            points: [Point::zero(); 2],
        })
    }

    fn set_line_points(
        &mut self,
        line: ObjectId,
        new_points: [Point; 2],
    ) {
        self.modify(line, |object| match &mut object.shape {
            Shape::Line { points, .. } => {
                *points = new_points;
                true
            }
            _ => false,
        });
    }

    fn create_label(
        &mut self,
        font: Option<FontId>,
        color: Rgb565,
    ) -> ObjectId {
        self.insert(Shape::Label {
            font,
            color,
            text: String::new(),
        })
    }

    fn set_label_text(
        &mut self,
        label: ObjectId,
        new_text: &str,
    ) {
        self.modify(label, |object| {
            let Shape::Label { text, .. } = &mut object.shape else {
                return false;
            };
            text.clear();
            for c in new_text.chars() {
                if text.push(c).is_err() {
                    break;
                }
            }
            true
        });
    }

    fn create_arc(
        &mut self,
        diameter: u32,
        width: u8,
    ) -> ObjectId {
        self.insert(Shape::Arc {
            diameter,
            width,
            max: 100,
            value: 0,
            indicator: WHITE,
            track: GAUGE_GRAY,
        })
    }

    fn set_arc_range(
        &mut self,
        arc: ObjectId,
        new_max: u32,
    ) {
        self.modify(arc, |object| match &mut object.shape {
            Shape::Arc { max, .. } => {
                *max = new_max;
                true
            }
            _ => false,
        });
    }

    fn set_arc_value(
        &mut self,
        arc: ObjectId,
        new_value: u32,
    ) {
        self.modify(arc, |object| match &mut object.shape {
            Shape::Arc { value, .. } => {
                *value = new_value;
                true
            }
            _ => false,
        });
    }

    fn create_image(
        &mut self,
        _source: &str,
    ) -> ObjectId {
        self.insert(Shape::Image { tint: WHITE })
    }

    fn set_color(
        &mut self,
        object: ObjectId,
        part: ColorPart,
        color: Rgb565,
    ) {
        self.modify(object, |object| {
            let slot = match (&mut object.shape, part) {
                (Shape::Line { style, .. }, ColorPart::Main) => &mut style.color,
                (Shape::Label { color: c, .. }, ColorPart::Main) => c,
                (Shape::Arc { indicator, .. }, ColorPart::Main) => indicator,
                (Shape::Arc { track, .. }, ColorPart::Track) => track,
                (Shape::Image { tint }, ColorPart::Main) => tint,
                _ => return false,
            };
            *slot = color;
            true
        });
    }

    fn set_position(
        &mut self,
        object: ObjectId,
        anchor: Anchor,
        offset: Point,
    ) {
        self.modify(object, |object| {
            object.anchor = anchor;
            object.offset = offset;
            true
        });
    }

    fn set_hidden(
        &mut self,
        object: ObjectId,
        hidden: bool,
    ) {
        self.modify(object, |object| {
            object.hidden = hidden;
            true
        });
    }

    fn delete(
        &mut self,
        object: ObjectId,
    ) {
        if let Some(slot) = self.objects.get_mut(object.index())
            && slot.take().is_some()
        {
            self.dirty = true;
        }
    }

    fn load_font(
        &mut self,
        path: &str,
    ) -> Option<FontId> {
        let font: &'static MonoFont<'static> = match path {
            SEGMENT_FONT => &PROFONT_24_POINT,
            TEKO_FONT => &PROFONT_14_POINT,
            _ => return None,
        };
        let index = self.fonts.iter().position(Option::is_none)?;
        self.fonts[index] = Some(font);
        Some(FontId::new(index as u8))
    }

    fn free_font(
        &mut self,
        font: FontId,
    ) {
        if let Some(slot) = self.fonts.get_mut(font.index()) {
            *slot = None;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
