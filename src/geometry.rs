//! Fixed-point trigonometry and face coordinate mapping.
//!
//! # Angle Conventions
//!
//! Two conventions meet here:
//!
//! - **Trig table**: [`sine`] / [`cosine`] take integer degrees where 0 points
//!   at three o'clock and angles grow clockwise on the y-down display. Tick
//!   marks and widget orbits are laid out directly in this convention.
//! - **Clock**: [`point_at`] treats its angle as clockwise from twelve o'clock.
//!   It feeds `sine` into x and `cosine` into y, which swaps the axes and turns
//!   "0 = three o'clock" into "0 = twelve o'clock" without any offset.
//!
//! # Fixed Point
//!
//! Trig values are integers scaled by [`TRIG_SCALE`] (the table value of
//! `sin(90)`). Products are formed in `i32` and divided with Rust's truncating
//! division, so hand tips land on exactly the pixels the tuned face expects.
//! Nothing in this module touches floating point.

use embedded_graphics::prelude::Point;

use crate::config::{
    HALF_SCREEN,
    TICK_ANGLE_OFFSET,
    TICK_ANGLE_STEP,
    TICK_COUNT,
    TICK_LONG_EVERY,
    TICK_LONG_INNER_RADIUS,
    TICK_OUTER_RADIUS,
    TICK_SHORT_INNER_RADIUS,
};

// =============================================================================
// Sine Table
// =============================================================================

/// `round(32767 * sin(deg))` for 0..=90 degrees.
const SIN_0_90: [i16; 91] = [
    0, 572, 1144, 1715, 2286, 2856, 3425, 3993, 4560, 5126, 5690, 6252, 6813, 7371, 7927, 8481, 9032, 9580, 10126,
    10668, 11207, 11743, 12275, 12803, 13328, 13848, 14364, 14876, 15383, 15886, 16383, 16876, 17364, 17846, 18323,
    18794, 19260, 19720, 20173, 20621, 21062, 21497, 21925, 22347, 22762, 23170, 23571, 23964, 24351, 24730, 25101,
    25465, 25821, 26169, 26509, 26841, 27165, 27481, 27788, 28087, 28377, 28659, 28932, 29196, 29451, 29697, 29934,
    30162, 30381, 30591, 30791, 30982, 31163, 31335, 31498, 31650, 31794, 31927, 32051, 32165, 32269, 32364, 32448,
    32523, 32587, 32642, 32687, 32722, 32747, 32762, 32767,
];

/// Fixed-point scale of [`sine`] and [`cosine`]: `sine(90)`.
pub const TRIG_SCALE: i32 = SIN_0_90[90] as i32;

/// Fixed-point sine of an integer angle in degrees. Any angle is accepted;
/// it is reduced modulo 360 first.
pub const fn sine(angle: i16) -> i16 {
    let angle = angle.rem_euclid(360) as usize;
    match angle {
        0..90 => SIN_0_90[angle],
        90..180 => SIN_0_90[180 - angle],
        180..270 => -SIN_0_90[angle - 180],
        _ => -SIN_0_90[360 - angle],
    }
}

/// Fixed-point cosine: `sine(angle + 90)`.
pub const fn cosine(angle: i16) -> i16 {
    // Reduce first so `angle + 90` cannot overflow near i16::MAX
    sine(angle.rem_euclid(360) + 90)
}

// =============================================================================
// Coordinate Mapping
// =============================================================================

/// Shift a center-origin x coordinate into the top-left-origin display space.
#[inline]
pub const fn relocate_x(x: i32) -> i32 { x + HALF_SCREEN }

/// Map a center-origin, up-positive y coordinate into display space.
///
/// For every radius that fits on the face `y - HALF_SCREEN` is negative, so
/// the absolute value is the usual flip to y-down.
#[inline]
pub const fn relocate_y(y: i32) -> i32 { (y - HALF_SCREEN).abs() }

/// Display point at `radius` from the face center along clock angle `angle`
/// (clockwise from twelve o'clock). Negative radii point the opposite way.
pub const fn point_at(
    radius: i32,
    angle: i16,
) -> Point {
    Point::new(
        relocate_x(radius * sine(angle) as i32 / TRIG_SCALE),
        relocate_y(radius * cosine(angle) as i32 / TRIG_SCALE),
    )
}

/// Offset from the face center at `radius` along trig-table angle `angle`
/// (0 = three o'clock, clockwise). Used for center-aligned widget placement.
pub const fn orbit_offset(
    radius: i32,
    angle: i16,
) -> Point {
    Point::new(
        radius * cosine(angle) as i32 / TRIG_SCALE,
        radius * sine(angle) as i32 / TRIG_SCALE,
    )
}

// =============================================================================
// Tick Marks
// =============================================================================

/// One tick mark around the dial.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TickMark {
    /// Hour positions get a longer, thicker tick.
    pub long: bool,
    /// Outer and inner endpoints in display coordinates.
    pub points: [Point; 2],
}

/// Angle of tick `index` in trig-table convention.
#[inline]
pub const fn tick_angle(index: usize) -> i16 { index as i16 * TICK_ANGLE_STEP + TICK_ANGLE_OFFSET }

/// Geometry of tick `index` (0..[`TICK_COUNT`]).
pub const fn tick_mark(index: usize) -> TickMark {
    let long = index % TICK_LONG_EVERY == 0;
    let inner = if long { TICK_LONG_INNER_RADIUS } else { TICK_SHORT_INNER_RADIUS };
    let angle = tick_angle(index);
    let cos = cosine(angle) as i32;
    let sin = sine(angle) as i32;

    TickMark {
        long,
        points: [
            Point::new(
                TICK_OUTER_RADIUS * cos / TRIG_SCALE + HALF_SCREEN,
                TICK_OUTER_RADIUS * sin / TRIG_SCALE + HALF_SCREEN,
            ),
            Point::new(
                inner * cos / TRIG_SCALE + HALF_SCREEN,
                inner * sin / TRIG_SCALE + HALF_SCREEN,
            ),
        ],
    }
}

/// Iterate over every tick mark of the dial.
pub fn tick_marks() -> impl Iterator<Item = TickMark> { (0..TICK_COUNT).map(tick_mark) }

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trig_scale_is_sine_90() {
        assert_eq!(TRIG_SCALE, 32767);
        assert_eq!(sine(90) as i32, TRIG_SCALE);
    }

    #[test]
    fn test_sine_quadrants() {
        assert_eq!(sine(0), 0);
        assert_eq!(sine(30), 16383);
        assert_eq!(sine(150), 16383);
        assert_eq!(sine(180), 0);
        assert_eq!(sine(210), -16383);
        assert_eq!(sine(270), -32767);
        assert_eq!(sine(330), -16383);
    }

    #[test]
    fn test_sine_reduces_out_of_range_angles() {
        for angle in -720i16..720 {
            assert_eq!(sine(angle), sine(angle.rem_euclid(360)), "angle {angle}");
        }
        assert_eq!(sine(i16::MAX), sine(i16::MAX.rem_euclid(360)));
        assert_eq!(sine(i16::MIN), sine(i16::MIN.rem_euclid(360)));
    }

    #[test]
    fn test_cosine_is_shifted_sine() {
        for angle in -360i16..720 {
            assert_eq!(cosine(angle), sine(angle + 90), "angle {angle}");
        }
        assert_eq!(cosine(0), 32767);
        assert_eq!(cosine(180), -32767);
    }

    #[test]
    fn test_relocate() {
        assert_eq!(relocate_x(0), 120);
        assert_eq!(relocate_x(-20), 100);
        assert_eq!(relocate_y(90), 30);
        assert_eq!(relocate_y(-90), 210);
        assert_eq!(relocate_y(0), 120);
    }

    #[test]
    fn test_point_at_cardinal_directions() {
        assert_eq!(point_at(90, 0), Point::new(120, 30));
        assert_eq!(point_at(90, 90), Point::new(210, 120));
        assert_eq!(point_at(90, 180), Point::new(120, 210));
        assert_eq!(point_at(90, 270), Point::new(30, 120));
    }

    #[test]
    fn test_point_at_negative_radius_points_backwards() {
        // Second hand tail at twelve o'clock sits below the hub
        assert_eq!(point_at(-20, 0), Point::new(120, 140));
        assert_eq!(point_at(-20, 90), Point::new(100, 120));
    }

    #[test]
    fn test_point_at_is_periodic() {
        for radius in [-20, 5, 30, 31, 70, 90, 110] {
            for angle in 0i16..360 {
                assert_eq!(point_at(radius, angle), point_at(radius, angle + 360));
                assert_eq!(point_at(radius, angle), point_at(radius, angle - 360));
            }
        }
    }

    #[test]
    fn test_point_at_truncates_toward_zero() {
        // 90 * sin(6) = 90 * 3425 / 32767 = 9.40.. -> 9
        assert_eq!(point_at(90, 6).x, 129);
        // 90 * sin(354) = -9.40.. -> -9 (not -10)
        assert_eq!(point_at(90, 354).x, 111);
    }

    #[test]
    fn test_trace_stays_collinear_with_body() {
        for angle in (0i16..360).step_by(6) {
            let hub = point_at(0, angle);
            let near = point_at(31, angle);
            let far = point_at(90, angle);
            // Cross product of (near - hub) x (far - hub) stays within rounding error
            let cross = (near.x - hub.x) * (far.y - hub.y) - (near.y - hub.y) * (far.x - hub.x);
            assert!(cross.abs() <= 90, "angle {angle}: cross {cross}");
        }
    }

    #[test]
    fn test_orbit_offset_matches_slot_rest_positions() {
        assert_eq!(orbit_offset(60, 0), Point::new(60, 0));
        assert_eq!(orbit_offset(60, 90), Point::new(0, 60));
        assert_eq!(orbit_offset(60, 180), Point::new(-60, 0));
        assert_eq!(orbit_offset(60, 270), Point::new(0, -60));
    }

    #[test]
    fn test_tick_count_and_lengths() {
        let ticks: heapless::Vec<TickMark, TICK_COUNT> = tick_marks().collect();
        assert_eq!(ticks.len(), 51);
        assert_eq!(ticks.iter().filter(|t| t.long).count(), 11);
        assert!(ticks[0].long);
        assert!(!ticks[1].long);
        assert!(ticks[50].long);
    }

    #[test]
    fn test_first_tick_is_one_o_clock() {
        // 300 degrees in trig convention: up and to the right of center
        let tick = tick_mark(0);
        assert_eq!(tick_angle(0), 300);
        assert_eq!(tick.points[0], Point::new(177, 21));
        assert_eq!(tick.points[1], Point::new(172, 30));
    }

    #[test]
    fn test_last_tick_is_eleven_o_clock() {
        assert_eq!(tick_angle(50), 600);
        let tick = tick_mark(50);
        assert_eq!(tick.points[0], Point::new(63, 21));
        assert_eq!(tick.points[1], Point::new(68, 30));
    }

    #[test]
    fn test_no_tick_at_twelve() {
        let top = Point::new(120, 5);
        assert!(tick_marks().all(|t| t.points[0] != top));
    }
}
