//! Read-only data sources.
//!
//! The face pulls every input through [`DataSources`] on each refresh. All
//! accessors are non-blocking snapshot reads of state that other subsystems
//! keep up to date; the face never writes back and never validates ranges
//! (an hour of 25 is an upstream defect, not something to recover from here).

use crate::clock::{ClockType, TimeSample};

/// Heart-rate sensor state.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeartRateState {
    /// Measurement switched off.
    #[default]
    Stopped,
    /// Measuring but no stable reading yet.
    NotEnoughData,
    /// Measuring but the sensor lost skin contact.
    NoTouch,
    /// Measuring with a valid reading.
    Running,
}

impl HeartRateState {
    /// Whether the reported heart rate is meaningful.
    #[inline]
    pub const fn has_reading(self) -> bool { matches!(self, Self::Running) }
}

/// Everything the face reads from the rest of the system.
pub trait DataSources {
    /// Current wall-clock time.
    fn time(&self) -> TimeSample;

    /// Battery charge in percent (0..=100).
    fn battery_percent(&self) -> u8;

    /// Whether the charger is connected.
    fn is_charging(&self) -> bool;

    /// Steps counted today.
    fn step_count(&self) -> u32;

    /// Whether the motion sensor is healthy.
    fn is_motion_sensor_ok(&self) -> bool;

    /// Last heart-rate reading in beats per minute.
    fn heart_rate(&self) -> u8;

    /// Heart-rate sensor state.
    fn heart_rate_state(&self) -> HeartRateState;

    /// Whether a phone is connected over Bluetooth.
    fn is_ble_connected(&self) -> bool;

    /// Number of unread notifications.
    fn notification_count(&self) -> usize;

    /// 12-hour or 24-hour display preference.
    fn clock_type(&self) -> ClockType;

    /// Configured daily step goal.
    fn steps_goal(&self) -> u32;
}

/// Plain-value [`DataSources`] implementation.
///
/// Used by the simulator and by tests; a platform can also fill one from its
/// controllers once per tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SourceSnapshot {
    pub time: TimeSample,
    pub battery_percent: u8,
    pub charging: bool,
    pub step_count: u32,
    pub motion_sensor_ok: bool,
    pub heart_rate: u8,
    pub heart_rate_state: HeartRateState,
    pub ble_connected: bool,
    pub notification_count: usize,
    pub clock_type: ClockType,
    pub steps_goal: u32,
}

/// Default daily step goal.
pub const DEFAULT_STEPS_GOAL: u32 = 10_000;

impl SourceSnapshot {
    /// Snapshot at `time` with everything else at rest values.
    pub const fn new(time: TimeSample) -> Self {
        Self {
            time,
            battery_percent: 100,
            charging: false,
            step_count: 0,
            motion_sensor_ok: true,
            heart_rate: 0,
            heart_rate_state: HeartRateState::Stopped,
            ble_connected: false,
            notification_count: 0,
            clock_type: ClockType::H24,
            steps_goal: DEFAULT_STEPS_GOAL,
        }
    }
}

impl Default for SourceSnapshot {
    fn default() -> Self { Self::new(TimeSample::default()) }
}

impl DataSources for SourceSnapshot {
    fn time(&self) -> TimeSample { self.time }

    fn battery_percent(&self) -> u8 { self.battery_percent }

    fn is_charging(&self) -> bool { self.charging }

    fn step_count(&self) -> u32 { self.step_count }

    fn is_motion_sensor_ok(&self) -> bool { self.motion_sensor_ok }

    fn heart_rate(&self) -> u8 { self.heart_rate }

    fn heart_rate_state(&self) -> HeartRateState { self.heart_rate_state }

    fn is_ble_connected(&self) -> bool { self.ble_connected }

    fn notification_count(&self) -> usize { self.notification_count }

    fn clock_type(&self) -> ClockType { self.clock_type }

    fn steps_goal(&self) -> u32 { self.steps_goal }
}
