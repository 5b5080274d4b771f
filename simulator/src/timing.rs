//! Timing constants for the simulator.
//!
//! The face only reacts to `refresh` calls from whatever scheduler hosts it,
//! so frame pacing belongs to the host loop.

use std::time::Duration;

use modern_analog_face::config::REFRESH_PERIOD_MS;

/// Target frame time, matching the watch's display tick.
pub const FRAME_TIME: Duration = Duration::from_millis(REFRESH_PERIOD_MS);

/// Simulated time per real second in fast-forward mode.
pub const FAST_FORWARD_FACTOR: u32 = 60;
