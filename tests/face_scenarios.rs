//! End-to-end scenarios against the embedded-graphics scene.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use modern_analog_face::assets::{SEGMENT_FONT, StaticAssets, TEKO_FONT};
use modern_analog_face::carousel::{Rotation, Slot};
use modern_analog_face::clock::{ClockType, TimeSample, hand_segments, hour_angle, minute_angle, second_angle, second_hand};
use modern_analog_face::colors::{CYAN, WHITE};
use modern_analog_face::config::{HOUR_LENGTH, MINUTE_LENGTH};
use modern_analog_face::scene::FACE_CAPACITY;
use modern_analog_face::surface::{Anchor, ColorPart, FontId, LineStyle, ObjectId};
use modern_analog_face::widgets::WidgetKind;
use modern_analog_face::{FaceOptions, Scene, SourceSnapshot, Surface, TouchEvent, WatchFace};

// =============================================================================
// Counting Surface
// =============================================================================

/// Scene wrapper that counts mutating calls.
#[derive(Default)]
struct Counting {
    scene: Scene<FACE_CAPACITY>,
    line_points: usize,
    label_texts: usize,
    arc_values: Vec<ObjectId>,
    other: usize,
}

impl Counting {
    fn reset(&mut self) {
        self.line_points = 0;
        self.label_texts = 0;
        self.arc_values.clear();
        self.other = 0;
    }

    fn total(&self) -> usize { self.line_points + self.label_texts + self.arc_values.len() + self.other }

    fn arc_updates(
        &self,
        arc: ObjectId,
    ) -> usize {
        self.arc_values.iter().filter(|id| **id == arc).count()
    }

    fn text(
        &self,
        id: ObjectId,
    ) -> &str {
        self.scene.get(id).and_then(|o| o.text()).unwrap_or_default()
    }

    fn points(
        &self,
        id: ObjectId,
    ) -> [Point; 2] {
        self.scene.get(id).and_then(|o| o.points()).unwrap_or_default()
    }

    fn hidden(
        &self,
        id: ObjectId,
    ) -> bool {
        self.scene.get(id).is_some_and(|o| o.hidden)
    }
}

impl Surface for Counting {
    fn create_line(
        &mut self,
        style: LineStyle,
    ) -> ObjectId {
        self.scene.create_line(style)
    }

    fn set_line_points(
        &mut self,
        line: ObjectId,
        points: [Point; 2],
    ) {
        self.line_points += 1;
        self.scene.set_line_points(line, points);
    }

    fn create_label(
        &mut self,
        font: Option<FontId>,
        color: Rgb565,
    ) -> ObjectId {
        self.scene.create_label(font, color)
    }

    fn set_label_text(
        &mut self,
        label: ObjectId,
        text: &str,
    ) {
        self.label_texts += 1;
        self.scene.set_label_text(label, text);
    }

    fn create_arc(
        &mut self,
        diameter: u32,
        width: u8,
    ) -> ObjectId {
        self.scene.create_arc(diameter, width)
    }

    fn set_arc_range(
        &mut self,
        arc: ObjectId,
        max: u32,
    ) {
        self.other += 1;
        self.scene.set_arc_range(arc, max);
    }

    fn set_arc_value(
        &mut self,
        arc: ObjectId,
        value: u32,
    ) {
        self.arc_values.push(arc);
        self.scene.set_arc_value(arc, value);
    }

    fn create_image(
        &mut self,
        source: &str,
    ) -> ObjectId {
        self.scene.create_image(source)
    }

    fn set_color(
        &mut self,
        object: ObjectId,
        part: ColorPart,
        color: Rgb565,
    ) {
        self.other += 1;
        self.scene.set_color(object, part, color);
    }

    fn set_position(
        &mut self,
        object: ObjectId,
        anchor: Anchor,
        offset: Point,
    ) {
        self.other += 1;
        self.scene.set_position(object, anchor, offset);
    }

    fn set_hidden(
        &mut self,
        object: ObjectId,
        hidden: bool,
    ) {
        self.other += 1;
        self.scene.set_hidden(object, hidden);
    }

    fn delete(
        &mut self,
        object: ObjectId,
    ) {
        self.other += 1;
        self.scene.delete(object);
    }

    fn load_font(
        &mut self,
        path: &str,
    ) -> Option<FontId> {
        self.scene.load_font(path)
    }

    fn free_font(
        &mut self,
        font: FontId,
    ) {
        self.scene.free_font(font);
    }
}

// =============================================================================
// Helpers
// =============================================================================

const W: usize = 240;

struct FrameBuffer {
    pixels: Vec<Rgb565>,
}

impl FrameBuffer {
    fn new() -> Self { Self { pixels: vec![Rgb565::BLACK; W * W] } }

    fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size { Size::new(W as u32, W as u32) }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 && (point.x as usize) < W && (point.y as usize) < W {
                self.pixels[point.y as usize * W + point.x as usize] = color;
            }
        }
        Ok(())
    }
}

fn build(sources: &SourceSnapshot) -> (Counting, WatchFace) {
    let mut surface = Counting::default();
    let face = WatchFace::new(&mut surface, sources, &StaticAssets::complete(), FaceOptions::default());
    surface.reset();
    (surface, face)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_afternoon_time_in_24_hour_mode() {
    let sources = SourceSnapshot::new(TimeSample::at(14, 30, 45));
    let (surface, face) = build(&sources);
    let hands = face.hands();

    assert_eq!(minute_angle(30), 180);
    assert_eq!(hour_angle(14, 30), 75);
    assert_eq!(second_angle(45), 270);

    assert_eq!(surface.text(hands.label()), "14:30");
    assert_eq!(surface.points(hands.minute_body()), hand_segments(MINUTE_LENGTH, 180).body);
    assert_eq!(surface.points(hands.hour_body()), hand_segments(HOUR_LENGTH, 75).body);
    assert_eq!(surface.points(hands.second_body()), second_hand(270));
}

#[test]
fn test_afternoon_time_in_12_hour_mode() {
    let sources = SourceSnapshot {
        clock_type: ClockType::H12,
        ..SourceSnapshot::new(TimeSample::at(14, 30, 45))
    };
    let (surface, face) = build(&sources);
    assert_eq!(surface.text(face.hands().label()), "2:30");
    assert_eq!(surface.points(face.hands().hour_body()), hand_segments(HOUR_LENGTH, 75).body);
}

#[test]
fn test_unchanged_battery_skips_gauge_update() {
    let sources = SourceSnapshot {
        battery_percent: 55,
        ..SourceSnapshot::default()
    };
    let (mut surface, mut face) = build(&sources);
    let battery = face.carousel().widget(Slot::Trailing);
    assert_eq!(battery.kind(), WidgetKind::Battery);
    let arc = battery.parts().arc();

    face.refresh(&mut surface, &sources);
    face.refresh(&mut surface, &sources);
    assert_eq!(surface.arc_updates(arc), 0);

    let drained = SourceSnapshot {
        battery_percent: 54,
        ..sources
    };
    face.refresh(&mut surface, &drained);
    assert_eq!(surface.arc_updates(arc), 1);
}

#[test]
fn test_same_second_issues_no_redraw() {
    let sources = SourceSnapshot::new(TimeSample::at(10, 15, 30));
    let (mut surface, mut face) = build(&sources);

    for _ in 0..5 {
        let redraw = face.refresh(&mut surface, &sources);
        assert!(!redraw.any());
    }
    assert_eq!(surface.total(), 0);
}

#[test]
fn test_one_second_later_moves_only_second_hand() {
    let mut sources = SourceSnapshot::new(TimeSample::at(10, 15, 30));
    let (mut surface, mut face) = build(&sources);

    sources.time = TimeSample::at(10, 15, 31);
    face.refresh(&mut surface, &sources);
    assert_eq!(surface.line_points, 1);
    assert_eq!(surface.label_texts, 0);
}

#[test]
fn test_rotation_from_date_lead_brings_heart_rate() {
    let sources = SourceSnapshot::default();
    let (mut surface, mut face) = build(&sources);
    assert_eq!(face.carousel().kind(Slot::Leading), WidgetKind::Date);

    assert!(face.on_touch_event(&mut surface, &sources, TouchEvent::SwipeLeft));
    assert_eq!(face.carousel().rotation(), Rotation::Rotating { progress: 10 });
    assert!(surface.hidden(face.carousel().widget(Slot::Leading).parts().arc()));

    for refresh in 1..=17i16 {
        face.refresh(&mut surface, &sources);
        assert_eq!(face.carousel().rotation(), Rotation::Rotating { progress: (refresh + 1) * 10 });
        if refresh == 8 {
            // A swipe halfway through changes nothing
            assert!(face.on_touch_event(&mut surface, &sources, TouchEvent::SwipeLeft));
            assert_eq!(face.carousel().rotation(), Rotation::Rotating { progress: 90 });
        }
    }
    assert!(surface.hidden(face.carousel().widget(Slot::Leading).parts().arc()));
    face.refresh(&mut surface, &sources);

    let carousel = face.carousel();
    assert_eq!(carousel.rotation(), Rotation::Idle);
    assert_eq!(carousel.kind(Slot::Trailing), WidgetKind::Steps);
    assert_eq!(carousel.kind(Slot::Middle), WidgetKind::Date);
    assert_eq!(carousel.kind(Slot::Leading), WidgetKind::HeartRate);
    assert!(!surface.hidden(carousel.widget(Slot::Leading).parts().arc()));
    for slot in Slot::ALL {
        assert_eq!(carousel.widget(slot).position(), slot.rest_position());
    }
}

#[test]
fn test_scene_capacity_covers_repeated_rotations() {
    let sources = SourceSnapshot::default();
    let (mut surface, mut face) = build(&sources);
    let settled = surface.scene.len();

    for _ in 0..8 {
        face.on_touch_event(&mut surface, &sources, TouchEvent::SwipeLeft);
        for _ in 0..18 {
            face.refresh(&mut surface, &sources);
        }
        for slot in Slot::ALL {
            assert!(!face.carousel().widget(slot).parts().arc().is_none());
        }
    }
    // Back at the starting kinds after eight rotations
    assert_eq!(surface.scene.len(), settled);
    assert!(settled < FACE_CAPACITY);
}

#[test]
fn test_teardown_empties_scene() {
    let sources = SourceSnapshot::default();
    let mut surface = Counting::default();
    let face = WatchFace::new(&mut surface, &sources, &StaticAssets::complete(), FaceOptions::default());
    face.teardown(&mut surface);
    assert!(surface.scene.is_empty());

    // Both fonts were released, so every font slot is free again
    for path in [SEGMENT_FONT, TEKO_FONT, SEGMENT_FONT, TEKO_FONT] {
        assert!(surface.scene.load_font(path).is_some());
    }
}

#[test]
fn test_face_draws_ticks_hands_and_label() {
    let sources = SourceSnapshot::new(TimeSample::at(10, 10, 0));
    let (surface, _face) = build(&sources);

    let mut fb = FrameBuffer::new();
    surface.scene.draw(&mut fb).unwrap();
    assert!(fb.count(WHITE) > 0);
    assert!(fb.count(CYAN) > 0);
}
