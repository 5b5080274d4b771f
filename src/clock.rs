//! Time samples, hand angles and the clock-hands updater.
//!
//! # Hand Angles
//!
//! Angles are clock angles in device-degrees (clockwise from twelve o'clock):
//!
//! | Hand | Angle |
//! |------|-------|
//! | Hour | `(hour * 30 + minute / 2) mod 360` |
//! | Minute | `minute * 6` |
//! | Second | `second * 6` |
//!
//! The hour hand always uses the 24-hour value; `hour * 30` wraps at 12 on
//! its own, so the dial is correct in both display modes.
//!
//! # Redraw Gating
//!
//! [`ClockHands`] keeps one [`ChangeTracker`] per field. A refresh pushes
//! geometry only for hands whose field moved:
//!
//! | Field changed | Redrawn |
//! |---------------|---------|
//! | second | second hand |
//! | minute | minute hand + trace, hour hand + trace, time label |
//! | hour | hour hand + trace, time label |

use core::fmt::Write;

use embedded_graphics::prelude::Point;
use heapless::String;

use crate::colors::{CYAN, WHITE};
use crate::config::{
    HAND_BODY_START,
    HOUR_LENGTH,
    MINUTE_LENGTH,
    SECOND_LENGTH,
    SECOND_TAIL,
    TIME_LABEL_OFFSET,
    TRACE_END,
    TRACE_START,
};
use crate::dirty::ChangeTracker;
use crate::geometry::point_at;
use crate::surface::{Anchor, FontId, LineStyle, ObjectId, Surface};

// =============================================================================
// Time Sample
// =============================================================================

/// Day of the week.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Three-letter uppercase abbreviation.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Monday => "MON",
            Self::Tuesday => "TUE",
            Self::Wednesday => "WED",
            Self::Thursday => "THU",
            Self::Friday => "FRI",
            Self::Saturday => "SAT",
            Self::Sunday => "SUN",
        }
    }

    /// The following day.
    pub const fn next(self) -> Self {
        match self {
            Self::Monday => Self::Tuesday,
            Self::Tuesday => Self::Wednesday,
            Self::Wednesday => Self::Thursday,
            Self::Thursday => Self::Friday,
            Self::Friday => Self::Saturday,
            Self::Saturday => Self::Sunday,
            Self::Sunday => Self::Monday,
        }
    }
}

/// One read of the wall clock.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeSample {
    pub year: u16,
    /// 1..=12
    pub month: u8,
    /// 1..=31
    pub day: u8,
    pub weekday: Weekday,
    /// 0..=23
    pub hour: u8,
    /// 0..=59
    pub minute: u8,
    /// 0..=59
    pub second: u8,
}

impl TimeSample {
    /// Sample at `hour:minute:second` on the default date.
    pub const fn at(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self {
            year: 2024,
            month: 1,
            day: 1,
            weekday: Weekday::Monday,
            hour,
            minute,
            second,
        }
    }
}

impl Default for TimeSample {
    fn default() -> Self { Self::at(0, 0, 0) }
}

// =============================================================================
// Display Mode
// =============================================================================

/// Digital label display preference.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockType {
    H12,
    #[default]
    H24,
}

impl ClockType {
    /// Switch between 12-hour and 24-hour display.
    pub const fn toggle(self) -> Self {
        match self {
            Self::H12 => Self::H24,
            Self::H24 => Self::H12,
        }
    }
}

/// How 12-hour mode folds a 24-hour value.
///
/// The two rules disagree at noon (12 vs 0) and midnight stays 0 under both.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourWrap {
    /// `hour > 12` becomes `hour - 12` (noon shows 12).
    #[default]
    Subtract12,
    /// `hour % 12` (noon shows 0).
    Modulo12,
}

/// Hour shown on the digital label.
pub const fn display_hour(
    hour: u8,
    clock_type: ClockType,
    wrap: HourWrap,
) -> u8 {
    match (clock_type, wrap) {
        (ClockType::H24, _) => hour,
        (ClockType::H12, HourWrap::Subtract12) if hour > 12 => hour - 12,
        (ClockType::H12, HourWrap::Subtract12) => hour,
        (ClockType::H12, HourWrap::Modulo12) => hour % 12,
    }
}

/// Digital label text: unpadded hour, zero-padded minute.
pub fn time_label(
    hour: u8,
    minute: u8,
) -> String<8> {
    let mut text = String::new();
    let _ = write!(text, "{hour}:{minute:02}");
    text
}

// =============================================================================
// Hand Geometry
// =============================================================================

/// Hour hand angle, advanced half a degree per minute.
#[inline]
pub const fn hour_angle(
    hour: u8,
    minute: u8,
) -> i16 {
    (hour as i16 * 30 + minute as i16 / 2) % 360
}

/// Minute hand angle.
#[inline]
pub const fn minute_angle(minute: u8) -> i16 { (minute as i16 * 6) % 360 }

/// Second hand angle.
#[inline]
pub const fn second_angle(second: u8) -> i16 { (second as i16 * 6) % 360 }

/// Body and trace stub of an hour or minute hand.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HandSegments {
    pub body: [Point; 2],
    pub trace: [Point; 2],
}

/// Segments of a hand of `length` at clock angle `angle`.
pub const fn hand_segments(
    length: i32,
    angle: i16,
) -> HandSegments {
    HandSegments {
        body: [point_at(HAND_BODY_START, angle), point_at(length, angle)],
        trace: [point_at(TRACE_START, angle), point_at(TRACE_END, angle)],
    }
}

/// Second hand, tail first.
pub const fn second_hand(angle: i16) -> [Point; 2] { [point_at(SECOND_TAIL, angle), point_at(SECOND_LENGTH, angle)] }

// =============================================================================
// Clock-Hands Updater
// =============================================================================

/// Out-of-range start value so the first sample always draws.
const UNSET: u8 = u8::MAX;

/// Which hands one update redrew.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct HandRedraw {
    pub hour: bool,
    pub minute: bool,
    pub second: bool,
}

impl HandRedraw {
    /// Whether anything was pushed to the surface.
    #[inline]
    pub const fn any(self) -> bool { self.hour || self.minute || self.second }
}

/// The analog hands and the digital label, redrawn per changed field.
pub struct ClockHands {
    hour: ChangeTracker<u8>,
    minute: ChangeTracker<u8>,
    second: ChangeTracker<u8>,

    label: ObjectId,
    minute_body: ObjectId,
    minute_trace: ObjectId,
    hour_body: ObjectId,
    hour_trace: ObjectId,
    second_body: ObjectId,
}

impl ClockHands {
    /// Create the label and the hand lines. Nothing is positioned until the
    /// first [`update`](Self::update).
    pub fn new<S: Surface>(
        surface: &mut S,
        digits_font: Option<FontId>,
    ) -> Self {
        let label = surface.create_label(digits_font, CYAN);
        surface.set_position(label, Anchor::Center, Point::new(0, TIME_LABEL_OFFSET));

        // Creation order is stacking order: second hand on top
        let minute_body = surface.create_line(LineStyle::rounded(7, WHITE));
        let minute_trace = surface.create_line(LineStyle::square(3, WHITE));
        let hour_body = surface.create_line(LineStyle::rounded(7, WHITE));
        let hour_trace = surface.create_line(LineStyle::square(3, WHITE));
        let second_body = surface.create_line(LineStyle::rounded(3, WHITE));

        Self {
            hour: ChangeTracker::new(UNSET),
            minute: ChangeTracker::new(UNSET),
            second: ChangeTracker::new(UNSET),
            label,
            minute_body,
            minute_trace,
            hour_body,
            hour_trace,
            second_body,
        }
    }

    /// Push geometry for every hand whose field changed since the last call.
    pub fn update<S: Surface>(
        &mut self,
        surface: &mut S,
        time: &TimeSample,
        clock_type: ClockType,
        wrap: HourWrap,
    ) -> HandRedraw {
        let hour_changed = self.hour.update(time.hour);
        let minute_changed = self.minute.update(time.minute);
        let second_changed = self.second.update(time.second);

        let redraw = HandRedraw {
            hour: hour_changed || minute_changed,
            minute: minute_changed,
            second: second_changed,
        };

        if redraw.minute {
            let hand = hand_segments(MINUTE_LENGTH, minute_angle(time.minute));
            surface.set_line_points(self.minute_body, hand.body);
            surface.set_line_points(self.minute_trace, hand.trace);
        }

        if redraw.hour {
            let hand = hand_segments(HOUR_LENGTH, hour_angle(time.hour, time.minute));
            surface.set_line_points(self.hour_body, hand.body);
            surface.set_line_points(self.hour_trace, hand.trace);

            let shown = display_hour(time.hour, clock_type, wrap);
            surface.set_label_text(self.label, &time_label(shown, time.minute));
        }

        if redraw.second {
            surface.set_line_points(self.second_body, second_hand(second_angle(time.second)));
        }

        redraw
    }

    /// Every surface object owned by the hands.
    pub const fn objects(&self) -> [ObjectId; 6] {
        [
            self.label,
            self.minute_body,
            self.minute_trace,
            self.hour_body,
            self.hour_trace,
            self.second_body,
        ]
    }

    /// Digital label object.
    #[inline]
    pub const fn label(&self) -> ObjectId { self.label }

    /// Hour hand body object.
    #[inline]
    pub const fn hour_body(&self) -> ObjectId { self.hour_body }

    /// Minute hand body object.
    #[inline]
    pub const fn minute_body(&self) -> ObjectId { self.minute_body }

    /// Second hand object.
    #[inline]
    pub const fn second_body(&self) -> ObjectId { self.second_body }
}

// =============================================================================
// Unit Tests
// =============================================================================
