//! Wall clock state advanced by the timer interrupt.

use super::Instant;

/// Consistent copy of the wall clock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeSnapshot {
    /// Milliseconds since the last second rollover, 0-999
    pub millis: u16,
    /// Seconds, 0-59
    pub seconds: u8,
    /// Minutes, 0-59
    pub minutes: u8,
    /// Hours, 0-23
    pub hours: u8,
}

/// Monotonic millisecond counter with a derived h:m:s wall clock.
///
/// Mutated exclusively by the 1 ms timer interrupt via [`tick`]; read by any
/// context through [`snapshot`] / [`now`] taken under a critical section.
/// Fields cascade in a fixed order (millis, seconds, minutes, hours) so a
/// snapshot taken with the tick interrupt masked is always self-consistent.
///
/// [`tick`]: WallClock::tick
/// [`snapshot`]: WallClock::snapshot
/// [`now`]: WallClock::now
#[derive(Debug, Clone, Default)]
pub struct WallClock {
    millis: u16,
    seconds: u8,
    minutes: u8,
    hours: u8,
    /// Free-running millisecond counter, never reset, wraps at u32::MAX.
    ticks: u32,
}

impl WallClock {
    /// Create a clock at midnight.
    pub const fn new() -> Self {
        Self {
            millis: 0,
            seconds: 0,
            minutes: 0,
            hours: 0,
            ticks: 0,
        }
    }

    /// Advance the clock by one millisecond.
    ///
    /// Call only from the periodic timer interrupt.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);

        self.millis += 1;
        if self.millis == 1000 {
            self.millis = 0;
            self.seconds += 1;
        }
        if self.seconds == 60 {
            self.seconds = 0;
            self.minutes += 1;
        }
        if self.minutes == 60 {
            self.minutes = 0;
            self.hours += 1;
        }
        if self.hours == 24 {
            self.hours = 0;
        }
    }

    /// Consistent copy of the current wall-clock fields.
    pub fn snapshot(&self) -> TimeSnapshot {
        TimeSnapshot {
            millis: self.millis,
            seconds: self.seconds,
            minutes: self.minutes,
            hours: self.hours,
        }
    }

    /// Current value of the free-running millisecond counter.
    pub fn now(&self) -> Instant {
        Instant(self.ticks)
    }

    /// Set the wall clock (e.g. to a known time at boot).
    ///
    /// Out-of-range components are wrapped into range rather than rejected;
    /// the free-running counter is untouched.
    pub fn set_time(&mut self, hours: u8, minutes: u8, seconds: u8) {
        self.hours = hours % 24;
        self.minutes = minutes % 60;
        self.seconds = seconds % 60;
        self.millis = 0;
    }
}
