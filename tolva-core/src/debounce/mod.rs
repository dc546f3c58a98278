//! Time-qualified filtering of noisy digital inputs
//!
//! [`DebounceFilter`] turns a bouncing raw sample into a stable confirmed
//! level: a change is accepted only after the new level has held
//! continuously for the settle time. [`EdgeDetector`] is the simpler
//! companion for the push button, where the original hardware is clean
//! enough that a plain falling-edge compare suffices.

use crate::clock::Instant;

/// Default settle time for the eating sensor, in milliseconds.
pub const SENSOR_SETTLE_MS: u32 = 5000;

/// Hysteresis filter requiring a level to hold before it is reported.
///
/// Pure function of (previous state, new sample, time): deterministic and
/// reusable for any number of inputs, each with its own instance and settle
/// time.
#[derive(Debug, Clone)]
pub struct DebounceFilter {
    settle_ms: u32,
    candidate: bool,
    candidate_since: Instant,
    confirmed: bool,
}

impl DebounceFilter {
    /// Create a filter with the given settle time and initial level.
    ///
    /// The initial level is reported as already confirmed, so a stable input
    /// at boot produces no spurious transition.
    pub const fn new(settle_ms: u32, initial: bool) -> Self {
        Self {
            settle_ms,
            candidate: initial,
            candidate_since: Instant(0),
            confirmed: initial,
        }
    }

    /// Feed one raw sample at the given time; returns the confirmed level.
    ///
    /// Any raw transition away from the current candidate restarts the
    /// settle timer; the confirmed level changes only after the candidate
    /// has held for the full settle time.
    pub fn update(&mut self, raw: bool, now: Instant) -> bool {
        if raw != self.candidate {
            self.candidate = raw;
            self.candidate_since = now;
        } else if self.candidate != self.confirmed
            && self.candidate_since.elapsed_ms(now) >= self.settle_ms
        {
            self.confirmed = self.candidate;
        }
        self.confirmed
    }

    /// Last confirmed level without feeding a new sample.
    pub fn confirmed(&self) -> bool {
        self.confirmed
    }
}

/// Falling/rising edge detector over successive raw samples.
#[derive(Debug, Clone)]
pub struct EdgeDetector {
    previous: bool,
}

impl EdgeDetector {
    /// Create a detector with a known initial level.
    pub const fn new(initial: bool) -> Self {
        Self { previous: initial }
    }

    /// Feed one sample; returns `true` on a high-to-low transition.
    pub fn falling_edge(&mut self, raw: bool) -> bool {
        let edge = self.previous && !raw;
        self.previous = raw;
        edge
    }
}
