//! Retained-mode drawing surface.
//!
//! The face never draws pixels itself. It creates long-lived objects (lines,
//! labels, gauge arcs, images) on a [`Surface`] once, then mutates only the
//! properties that changed. The surface decides when and how to repaint.
//!
//! [`Scene`](crate::scene::Scene) is the embedded-graphics backed
//! implementation; a platform with its own toolkit implements the trait
//! directly.
//!
//! # Degraded Operation
//!
//! Creation never fails from the caller's point of view. A surface that runs
//! out of room hands back [`ObjectId::NONE`] and ignores every later call on
//! it, so the face keeps running with a missing primitive rather than
//! stopping.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;

// =============================================================================
// Handles
// =============================================================================

/// Handle to an object owned by a [`Surface`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ObjectId(u16);

impl ObjectId {
    /// Placeholder for an object the surface could not create.
    pub const NONE: Self = Self(u16::MAX);

    /// Wrap a surface-specific index.
    #[inline]
    pub const fn new(index: u16) -> Self { Self(index) }

    /// Index the surface assigned to this object.
    #[inline]
    pub const fn index(self) -> usize { self.0 as usize }

    /// Whether this is the [`NONE`](Self::NONE) placeholder.
    #[inline]
    pub const fn is_none(self) -> bool { self.0 == u16::MAX }
}

/// Handle to a font loaded by a [`Surface`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontId(u8);

impl FontId {
    /// Wrap a surface-specific font index.
    #[inline]
    pub const fn new(index: u8) -> Self { Self(index) }

    /// Index the surface assigned to this font.
    #[inline]
    pub const fn index(self) -> usize { self.0 as usize }
}

// =============================================================================
// Styling
// =============================================================================

/// Stroke of a line object.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LineStyle {
    /// Stroke width in pixels.
    pub width: u8,
    /// Stroke color.
    pub color: Rgb565,
    /// Round end caps (hand bodies) or square ends (traces, ticks).
    pub rounded: bool,
}

impl LineStyle {
    /// Square-ended stroke.
    pub const fn square(
        width: u8,
        color: Rgb565,
    ) -> Self {
        Self {
            width,
            color,
            rounded: false,
        }
    }

    /// Round-ended stroke.
    pub const fn rounded(
        width: u8,
        color: Rgb565,
    ) -> Self {
        Self {
            width,
            color,
            rounded: true,
        }
    }
}

/// Reference point an object's offset is measured from.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Anchor {
    /// Object center at screen center + offset.
    #[default]
    Center,
    /// Object top-left corner at the screen's top-left corner + offset.
    TopLeft,
    /// Object top-right corner at the screen's top-right corner + offset.
    TopRight,
    /// Object top edge centered on the screen's top edge + offset.
    TopMid,
}

/// Which color of an object [`Surface::set_color`] changes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorPart {
    /// Line stroke, label text, gauge indicator or image tint.
    Main,
    /// Gauge track behind the indicator.
    Track,
}

// =============================================================================
// Surface Trait
// =============================================================================

/// A retained-mode drawing surface.
///
/// Operations on unknown or deleted ids must be silently ignored.
pub trait Surface {
    /// Create a two-point line. Points start at the origin until set.
    fn create_line(
        &mut self,
        style: LineStyle,
    ) -> ObjectId;

    /// Move both endpoints of a line.
    fn set_line_points(
        &mut self,
        line: ObjectId,
        points: [Point; 2],
    );

    /// Create an empty text label. `None` selects the surface's default font.
    fn create_label(
        &mut self,
        font: Option<FontId>,
        color: Rgb565,
    ) -> ObjectId;

    /// Replace a label's text.
    fn set_label_text(
        &mut self,
        label: ObjectId,
        text: &str,
    );

    /// Create a full-circle gauge arc with range `0..=100` and value 0.
    fn create_arc(
        &mut self,
        diameter: u32,
        width: u8,
    ) -> ObjectId;

    /// Set the upper end of a gauge's range (the lower end is always 0).
    fn set_arc_range(
        &mut self,
        arc: ObjectId,
        max: u32,
    );

    /// Set how much of a gauge is filled. Values above the range are clamped.
    fn set_arc_value(
        &mut self,
        arc: ObjectId,
        value: u32,
    );

    /// Create an image object from an asset path.
    fn create_image(
        &mut self,
        source: &str,
    ) -> ObjectId;

    /// Recolor part of an object.
    fn set_color(
        &mut self,
        object: ObjectId,
        part: ColorPart,
        color: Rgb565,
    );

    /// Place an object relative to `anchor`.
    fn set_position(
        &mut self,
        object: ObjectId,
        anchor: Anchor,
        offset: Point,
    );

    /// Show or hide an object.
    fn set_hidden(
        &mut self,
        object: ObjectId,
        hidden: bool,
    );

    /// Destroy an object. Its id may be reused by later creations.
    fn delete(
        &mut self,
        object: ObjectId,
    );

    /// Load a font from an asset path. `None` when the surface cannot use it.
    fn load_font(
        &mut self,
        path: &str,
    ) -> Option<FontId>;

    /// Release a font returned by [`load_font`](Self::load_font).
    fn free_font(
        &mut self,
        font: FontId,
    );
}

// =============================================================================
// Recording Mock (tests only)
// =============================================================================

#[cfg(test)]
pub(crate) mod mock {
    use std::string::String;
    use std::vec::Vec;

    use super::*;

    /// Every mutating call the face issued, in order.
    #[derive(Clone, PartialEq, Debug)]
    pub enum Call {
        LinePoints(ObjectId, [Point; 2]),
        LabelText(ObjectId, String),
        ArcRange(ObjectId, u32),
        ArcValue(ObjectId, u32),
        Color(ObjectId, ColorPart, Rgb565),
        Position(ObjectId, Anchor, Point),
        Hidden(ObjectId, bool),
        Delete(ObjectId),
    }

    #[derive(Clone, Default, Debug)]
    pub struct MockObject {
        pub points: [Point; 2],
        pub text: String,
        pub arc_max: u32,
        pub arc_value: u32,
        pub offset: Point,
        pub hidden: bool,
        pub deleted: bool,
        pub source: String,
    }

    /// Surface that keeps every object forever and logs every call.
    #[derive(Default)]
    pub struct MockSurface {
        pub objects: Vec<MockObject>,
        pub calls: Vec<Call>,
        pub loadable_fonts: Vec<&'static str>,
        pub freed_fonts: Vec<FontId>,
    }

    impl MockSurface {
        pub fn new() -> Self { Self::default() }

        pub fn object(
            &self,
            id: ObjectId,
        ) -> &MockObject {
            &self.objects[id.index()]
        }

        pub fn live_objects(&self) -> usize { self.objects.iter().filter(|o| !o.deleted).count() }

        pub fn clear_calls(&mut self) { self.calls.clear(); }

        /// Number of recorded calls touching `id`.
        pub fn calls_for(
            &self,
            id: ObjectId,
        ) -> usize {
            self.calls
                .iter()
                .filter(|call| match call {
                    Call::LinePoints(o, _)
                    | Call::LabelText(o, _)
                    | Call::ArcRange(o, _)
                    | Call::ArcValue(o, _)
                    | Call::Color(o, _, _)
                    | Call::Position(o, _, _)
                    | Call::Hidden(o, _)
                    | Call::Delete(o) => *o == id,
                })
                .count()
        }

        pub fn line_updates(&self) -> usize { self.calls.iter().filter(|c| matches!(c, Call::LinePoints(..))).count() }

        pub fn arc_value_updates(
            &self,
            id: ObjectId,
        ) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::ArcValue(o, _) if *o == id))
                .count()
        }

        fn push(&mut self) -> ObjectId {
            self.objects.push(MockObject::default());
            ObjectId::new((self.objects.len() - 1) as u16)
        }
    }

    impl Surface for MockSurface {
        fn create_line(
            &mut self,
            _style: LineStyle,
        ) -> ObjectId {
            self.push()
        }

        fn set_line_points(
            &mut self,
            line: ObjectId,
            points: [Point; 2],
        ) {
            self.objects[line.index()].points = points;
            self.calls.push(Call::LinePoints(line, points));
        }

        fn create_label(
            &mut self,
            _font: Option<FontId>,
            _color: Rgb565,
        ) -> ObjectId {
            self.push()
        }

        fn set_label_text(
            &mut self,
            label: ObjectId,
            text: &str,
        ) {
            self.objects[label.index()].text = String::from(text);
            self.calls.push(Call::LabelText(label, String::from(text)));
        }

        fn create_arc(
            &mut self,
            _diameter: u32,
            _width: u8,
        ) -> ObjectId {
            let id = self.push();
            self.objects[id.index()].arc_max = 100;
            id
        }

        fn set_arc_range(
            &mut self,
            arc: ObjectId,
            max: u32,
        ) {
            self.objects[arc.index()].arc_max = max;
            self.calls.push(Call::ArcRange(arc, max));
        }

        fn set_arc_value(
            &mut self,
            arc: ObjectId,
            value: u32,
        ) {
            let object = &mut self.objects[arc.index()];
            object.arc_value = value.min(object.arc_max);
            self.calls.push(Call::ArcValue(arc, value));
        }

        fn create_image(
            &mut self,
            source: &str,
        ) -> ObjectId {
            let id = self.push();
            self.objects[id.index()].source = String::from(source);
            id
        }

        fn set_color(
            &mut self,
            object: ObjectId,
            part: ColorPart,
            color: Rgb565,
        ) {
            self.calls.push(Call::Color(object, part, color));
        }

        fn set_position(
            &mut self,
            object: ObjectId,
            anchor: Anchor,
            offset: Point,
        ) {
            self.objects[object.index()].offset = offset;
            self.calls.push(Call::Position(object, anchor, offset));
        }

        fn set_hidden(
            &mut self,
            object: ObjectId,
            hidden: bool,
        ) {
            self.objects[object.index()].hidden = hidden;
            self.calls.push(Call::Hidden(object, hidden));
        }

        fn delete(
            &mut self,
            object: ObjectId,
        ) {
            self.objects[object.index()].deleted = true;
            self.calls.push(Call::Delete(object));
        }

        fn load_font(
            &mut self,
            path: &str,
        ) -> Option<FontId> {
            self.loadable_fonts
                .iter()
                .position(|p| *p == path)
                .map(|i| FontId::new(i as u8))
        }

        fn free_font(
            &mut self,
            font: FontId,
        ) {
            self.freed_fonts.push(font);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_none() {
        assert!(ObjectId::NONE.is_none());
        assert!(!ObjectId::new(0).is_none());
        assert_eq!(ObjectId::new(7).index(), 7);
    }

    #[test]
    fn test_line_style_constructors() {
        let style = LineStyle::rounded(7, crate::colors::WHITE);
        assert!(style.rounded);
        assert_eq!(style.width, 7);
        assert!(!LineStyle::square(3, crate::colors::WHITE).rounded);
    }

    #[test]
    fn test_anchor_default_is_center() {
        assert_eq!(Anchor::default(), Anchor::Center);
    }
}
