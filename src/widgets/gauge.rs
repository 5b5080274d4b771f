//! The arc, glyph and value label every circular widget is built from.

use embedded_graphics::prelude::Point;

use crate::colors::{DEFAULT_WIDGET_COLORS, WidgetColors};
use crate::config::{GAUGE_DIAMETER, GAUGE_WIDTH, WIDGET_ICON_OFFSET, WIDGET_VALUE_OFFSET};
use crate::surface::{Anchor, ColorPart, FontId, ObjectId, Surface};

/// Surface objects shared by all widget kinds, placed relative to one center.
#[derive(Debug)]
pub struct GaugeParts {
    pub(crate) arc: ObjectId,
    pub(crate) glyph: ObjectId,
    pub(crate) value: ObjectId,
    position: Point,
    hidden: bool,
}

impl GaugeParts {
    /// Create the gauge with range `0..=max`, centered at `position`.
    pub fn create<S: Surface>(
        surface: &mut S,
        position: Point,
        max: u32,
        glyph_text: &str,
        value_font: Option<FontId>,
    ) -> Self {
        let arc = surface.create_arc(GAUGE_DIAMETER, GAUGE_WIDTH);
        surface.set_arc_range(arc, max);

        let glyph = surface.create_label(None, DEFAULT_WIDGET_COLORS.objects);
        surface.set_label_text(glyph, glyph_text);

        let value = surface.create_label(value_font, DEFAULT_WIDGET_COLORS.objects);

        let mut parts = Self {
            arc,
            glyph,
            value,
            position,
            hidden: false,
        };
        parts.place(surface, position);
        parts
    }

    /// Move every part so the gauge is centered at `position` (an offset
    /// from the face center).
    pub fn place<S: Surface>(
        &mut self,
        surface: &mut S,
        position: Point,
    ) {
        self.position = position;
        surface.set_position(self.arc, Anchor::Center, position);
        surface.set_position(self.glyph, Anchor::Center, position + Point::new(0, WIDGET_ICON_OFFSET));
        surface.set_position(self.value, Anchor::Center, position + Point::new(0, WIDGET_VALUE_OFFSET));
    }

    /// Current center offset.
    #[inline]
    pub const fn position(&self) -> Point { self.position }

    /// Whether the gauge is currently hidden.
    #[inline]
    pub const fn is_hidden(&self) -> bool { self.hidden }

    pub fn set_hidden<S: Surface>(
        &mut self,
        surface: &mut S,
        hidden: bool,
    ) {
        self.hidden = hidden;
        for object in self.objects() {
            surface.set_hidden(object, hidden);
        }
    }

    /// Recolor the arc indicator and track, the glyph and the value label.
    pub fn change_colors<S: Surface>(
        &self,
        surface: &mut S,
        colors: WidgetColors,
    ) {
        surface.set_color(self.arc, ColorPart::Main, colors.arc_fg);
        surface.set_color(self.arc, ColorPart::Track, colors.arc_bg);
        surface.set_color(self.glyph, ColorPart::Main, colors.objects);
        surface.set_color(self.value, ColorPart::Main, colors.objects);
    }

    #[inline]
    pub const fn objects(&self) -> [ObjectId; 3] { [self.arc, self.glyph, self.value] }

    #[inline]
    pub const fn arc(&self) -> ObjectId { self.arc }

    #[inline]
    pub const fn glyph(&self) -> ObjectId { self.glyph }

    #[inline]
    pub const fn value_label(&self) -> ObjectId { self.value }

    /// Delete every part from the surface.
    pub fn destroy<S: Surface>(
        self,
        surface: &mut S,
    ) {
        for object in self.objects() {
            surface.delete(object);
        }
    }
}
