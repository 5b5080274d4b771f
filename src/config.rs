//! Display and layout configuration constants.
//!
//! All radii are in pixels measured from the face center; all angles are in
//! device-degrees. Everything here is `const` so the refresh path never
//! recomputes layout.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (round 240x240 panel).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Half the screen width. Center-origin coordinates are shifted by this.
pub const HALF_SCREEN: i32 = (SCREEN_WIDTH / 2) as i32;

/// Nominal refresh period of the display scheduler in milliseconds.
pub const REFRESH_PERIOD_MS: u64 = 30;

// =============================================================================
// Clock Hands
// =============================================================================

/// Hour hand tip radius.
pub const HOUR_LENGTH: i32 = 70;

/// Minute hand tip radius.
pub const MINUTE_LENGTH: i32 = 90;

/// Second hand tip radius.
pub const SECOND_LENGTH: i32 = 110;

/// Inner radius of the hour and minute bodies (they start off the hub).
pub const HAND_BODY_START: i32 = 30;

/// Inner radius of the thin trace stub drawn under the hour and minute bodies.
pub const TRACE_START: i32 = 5;

/// Outer radius of the trace stub. Overlaps the body by one pixel.
pub const TRACE_END: i32 = 31;

/// Second hand tail. Negative: the hand extends past the hub on the far side.
pub const SECOND_TAIL: i32 = -20;

// =============================================================================
// Tick Marks
// =============================================================================

/// Number of tick marks. The 60 minute positions minus the nine around twelve
/// o'clock where the logo sits.
pub const TICK_COUNT: usize = 51;

/// Every fifth tick (an hour position) is long.
pub const TICK_LONG_EVERY: usize = 5;

/// Outer radius of every tick.
pub const TICK_OUTER_RADIUS: i32 = 115;

/// Inner radius of long (hour) ticks.
pub const TICK_LONG_INNER_RADIUS: i32 = 105;

/// Inner radius of short (minute) ticks.
pub const TICK_SHORT_INNER_RADIUS: i32 = 110;

/// Angular distance between neighbouring ticks.
pub const TICK_ANGLE_STEP: i16 = 6;

/// Angle of the first tick in trig-table convention (0 = three o'clock,
/// clockwise). 300 is the one o'clock mark.
pub const TICK_ANGLE_OFFSET: i16 = 300;

/// Stroke width of long ticks.
pub const TICK_LONG_WIDTH: u8 = 4;

/// Stroke width of short ticks.
pub const TICK_SHORT_WIDTH: u8 = 2;

// =============================================================================
// Widget Carousel
// =============================================================================

/// Radius of the circle the widget centers sit on.
pub const WIDGET_ROTATION_RADIUS: i32 = 60;

/// Progress added per refresh while the carousel rotates.
pub const ROTATION_STEP: i16 = 10;

/// Progress at which a rotation completes.
pub const ROTATION_END: i16 = 180;

/// Diameter of a widget's gauge arc (30% of the screen width).
pub const GAUGE_DIAMETER: u32 = SCREEN_WIDTH * 3 / 10;

/// Stroke width of gauge arcs.
pub const GAUGE_WIDTH: u8 = 4;

/// Vertical offset of a widget glyph from the widget center.
pub const WIDGET_ICON_OFFSET: i32 = 10;

/// Vertical offset of a widget value label from the widget center.
pub const WIDGET_VALUE_OFFSET: i32 = -10;

/// Vertical offset of the battery charge glyph from the widget center.
pub const WIDGET_CHARGE_OFFSET: i32 = 24;

// =============================================================================
// Labels
// =============================================================================

/// Vertical offset of the digital time label from the face center.
pub const TIME_LABEL_OFFSET: i32 = -(GAUGE_DIAMETER as i32) + 10;

/// Gauge range for the heart-rate widget (beats per minute).
pub const HEART_RATE_GAUGE_MAX: u32 = 220;

/// Gauge range for the date widget (days in the longest month).
pub const DATE_GAUGE_MAX: u32 = 31;

/// Gauge range for the battery widget (percent).
pub const BATTERY_GAUGE_MAX: u32 = 100;
