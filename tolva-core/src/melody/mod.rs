//! Feeding-call melody sequencer
//!
//! The melody plays from its own periodic timer interrupt, completely
//! independent of the main loop: musical timing must not degrade when the
//! loop is busy redrawing the display or blocking on the dispenser. The
//! interrupt calls [`Sequencer::tick`] with the elapsed milliseconds and
//! applies whatever [`ToneStep`] comes back to the tone output.

mod score;

pub use score::{Note, Pitch, DINNER_CALL};

/// Tone-output change requested by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneStep {
    /// Reprogram the output for a new note (a [`Pitch::Rest`] silences it).
    Play(Pitch),
    /// Score exhausted; stop the output.
    Finished,
}

/// Step sequencer over a fixed score.
///
/// The index only advances; reaching the end of the score stops output and
/// deactivates the sequencer. [`start`] is re-entrant and restarts from the
/// first note.
///
/// [`start`]: Sequencer::start
#[derive(Debug, Clone)]
pub struct Sequencer {
    score: &'static [Note],
    index: usize,
    elapsed_ms: u16,
    active: bool,
}

impl Sequencer {
    /// Create an inactive sequencer over a score.
    pub const fn new(score: &'static [Note]) -> Self {
        Self {
            score,
            index: 0,
            elapsed_ms: 0,
            active: false,
        }
    }

    /// (Re)start playback from the first note.
    ///
    /// Returns the pitch to drive immediately. An empty score returns
    /// [`Pitch::Rest`] and leaves the sequencer inactive.
    pub fn start(&mut self) -> Pitch {
        self.index = 0;
        self.elapsed_ms = 0;
        match self.score.first() {
            Some(note) => {
                self.active = true;
                note.pitch
            }
            None => {
                self.active = false;
                Pitch::Rest
            }
        }
    }

    /// Advance playback time. Melody-timer-interrupt context.
    ///
    /// Returns a [`ToneStep`] when the output must change: the next note's
    /// pitch, or [`ToneStep::Finished`] once the score is exhausted.
    pub fn tick(&mut self, delta_ms: u16) -> Option<ToneStep> {
        if !self.active {
            return None;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        if self.elapsed_ms < self.score[self.index].duration_ms {
            return None;
        }

        self.elapsed_ms = 0;
        self.index += 1;
        match self.score.get(self.index) {
            Some(note) => Some(ToneStep::Play(note.pitch)),
            None => {
                self.active = false;
                Some(ToneStep::Finished)
            }
        }
    }

    /// True while the score is still playing.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(&DINNER_CALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: [Note; 3] = [
        Note::new(Pitch::Note(440), 100),
        Note::new(Pitch::Rest, 50),
        Note::new(Pitch::Note(523), 100),
    ];

    fn run_ms(seq: &mut Sequencer, ms: u16) -> std::vec::Vec<ToneStep> {
        let mut steps = std::vec::Vec::new();
        for _ in 0..ms {
            if let Some(step) = seq.tick(1) {
                steps.push(step);
            }
        }
        steps
    }

    #[test]
    fn test_start_drives_first_note() {
        let mut seq = Sequencer::new(&SHORT);
        assert!(!seq.is_active());
        assert_eq!(seq.start(), Pitch::Note(440));
        assert!(seq.is_active());
    }

    #[test]
    fn test_advances_through_score() {
        let mut seq = Sequencer::new(&SHORT);
        seq.start();
        let steps = run_ms(&mut seq, 250);
        assert_eq!(
            steps,
            [
                ToneStep::Play(Pitch::Rest),
                ToneStep::Play(Pitch::Note(523)),
                ToneStep::Finished
            ]
        );
        assert!(!seq.is_active());
    }

    #[test]
    fn test_terminates_after_total_duration() {
        let mut seq = Sequencer::new(&DINNER_CALL);
        seq.start();
        let total: u32 = DINNER_CALL.iter().map(|n| u32::from(n.duration_ms)).sum();
        for _ in 0..total + 10 {
            seq.tick(1);
        }
        assert!(!seq.is_active());
    }

    #[test]
    fn test_inactive_sequencer_ignores_ticks() {
        let mut seq = Sequencer::new(&SHORT);
        assert_eq!(seq.tick(1000), None);
    }

    #[test]
    fn test_restart_replays_from_first_note() {
        let mut seq = Sequencer::new(&SHORT);
        seq.start();
        run_ms(&mut seq, 300);
        assert!(!seq.is_active());

        assert_eq!(seq.start(), Pitch::Note(440));
        let steps = run_ms(&mut seq, 250);
        assert_eq!(steps.last(), Some(&ToneStep::Finished));
    }

    #[test]
    fn test_restart_mid_playback() {
        let mut seq = Sequencer::new(&SHORT);
        seq.start();
        run_ms(&mut seq, 120); // inside the second note
        assert_eq!(seq.start(), Pitch::Note(440));
        // Full playback still runs to completion from the top
        let steps = run_ms(&mut seq, 250);
        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn test_coarse_ticks() {
        // A slow 60ms tick still walks the whole score
        let mut seq = Sequencer::new(&SHORT);
        seq.start();
        let mut finished = false;
        for _ in 0..10 {
            if seq.tick(60) == Some(ToneStep::Finished) {
                finished = true;
            }
        }
        assert!(finished);
    }

    #[test]
    fn test_empty_score() {
        const EMPTY: [Note; 0] = [];
        let mut seq = Sequencer::new(&EMPTY);
        assert_eq!(seq.start(), Pitch::Rest);
        assert!(!seq.is_active());
        assert_eq!(seq.tick(100), None);
    }
}
