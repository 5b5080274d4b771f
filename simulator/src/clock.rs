//! Simulated wall clock.
//!
//! Starts at a fixed date and advances with real elapsed time, optionally
//! fast-forwarded so hour and date changes can be watched.

use std::time::{Duration, Instant};

use modern_analog_face::clock::{TimeSample, Weekday};

use crate::timing::FAST_FORWARD_FACTOR;

pub struct SimClock {
    now: TimeSample,
    carry: Duration,
    last_tick: Instant,
    fast_forward: bool,
}

impl SimClock {
    pub fn new(start: TimeSample) -> Self {
        Self {
            now: start,
            carry: Duration::ZERO,
            last_tick: Instant::now(),
            fast_forward: false,
        }
    }

    pub const fn now(&self) -> TimeSample { self.now }

    pub const fn is_fast_forward(&self) -> bool { self.fast_forward }

    pub fn toggle_fast_forward(&mut self) { self.fast_forward = !self.fast_forward; }

    /// Advance by the real time elapsed since the last call.
    pub fn tick(&mut self) -> TimeSample {
        let elapsed = self.last_tick.elapsed();
        self.last_tick = Instant::now();

        self.carry += if self.fast_forward { elapsed * FAST_FORWARD_FACTOR } else { elapsed };
        while self.carry >= Duration::from_secs(1) {
            self.carry -= Duration::from_secs(1);
            self.now = next_second(self.now);
        }
        self.now
    }
}

fn next_second(mut time: TimeSample) -> TimeSample {
    time.second += 1;
    if time.second < 60 {
        return time;
    }
    time.second = 0;
    time.minute += 1;
    if time.minute < 60 {
        return time;
    }
    time.minute = 0;
    time.hour += 1;
    if time.hour < 24 {
        return time;
    }
    time.hour = 0;
    next_day(time)
}

fn next_day(mut time: TimeSample) -> TimeSample {
    time.weekday = time.weekday.next();
    time.day += 1;
    if time.day <= days_in_month(time.year, time.month) {
        return time;
    }
    time.day = 1;
    time.month += 1;
    if time.month > 12 {
        time.month = 1;
        time.year += 1;
    }
    time
}

const fn days_in_month(
    year: u16,
    month: u8,
) -> u8 {
    match month {
        2 if year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400)) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Friday 14 June 2024, shortly before ten past ten.
pub const START: TimeSample = TimeSample {
    year: 2024,
    month: 6,
    day: 14,
    weekday: Weekday::Friday,
    hour: 10,
    minute: 9,
    second: 50,
};
