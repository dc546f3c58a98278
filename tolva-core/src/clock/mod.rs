//! Millisecond timebase and wall clock
//!
//! A 1 kHz timer interrupt drives [`WallClock::tick`]; everything else reads
//! time through snapshots. Two notions of time coexist:
//!
//! - the wall clock (h:m:s:ms), which wraps at midnight and exists for the
//!   meal schedule, and
//! - a free-running, never-reset millisecond counter ([`Instant`]) used for
//!   interval timing (debouncing, display holds, note durations), correct
//!   across u32 wraparound.
//!
//! The clock itself is not synchronized: the firmware keeps it inside a
//! critical section and calls `tick` only from the timer interrupt and
//! `snapshot`/`now` only with that interrupt masked, so a snapshot is never
//! torn mid-cascade.

mod wall;

pub use wall::{TimeSnapshot, WallClock};

/// A captured value of the free-running millisecond counter.
///
/// Intervals are computed with wrapping subtraction, so they stay correct
/// across counter wraparound as long as the true interval is below half the
/// counter range (~24.8 days).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(pub u32);

impl Instant {
    /// Milliseconds elapsed from `self` to `now`.
    pub fn elapsed_ms(self, now: Instant) -> u32 {
        now.0.wrapping_sub(self.0)
    }
}
