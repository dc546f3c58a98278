//! The feeding-call score.

/// A note frequency, or silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pitch {
    /// Drive the tone output at this frequency in Hz.
    Note(u16),
    /// No output for the duration of the note.
    Rest,
}

/// Fourth-octave pitches used by the score.
pub const DO: Pitch = Pitch::Note(262);
pub const RE: Pitch = Pitch::Note(294);
pub const MI: Pitch = Pitch::Note(330);
pub const FA: Pitch = Pitch::Note(349);
pub const SOL: Pitch = Pitch::Note(392);
pub const LA: Pitch = Pitch::Note(440);
pub const SI: Pitch = Pitch::Note(494);
pub const DO_M: Pitch = Pitch::Note(523);

/// One score entry: a pitch held for a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub pitch: Pitch,
    pub duration_ms: u16,
}

impl Note {
    pub const fn new(pitch: Pitch, duration_ms: u16) -> Self {
        Self { pitch, duration_ms }
    }
}

const R: Pitch = Pitch::Rest;

/// The melody announcing a meal ("Jingle Bells", 26 notes).
pub const DINNER_CALL: [Note; 26] = [
    Note::new(MI, 400),
    Note::new(SOL, 400),
    Note::new(LA, 400),
    Note::new(SOL, 400),
    Note::new(MI, 400),
    Note::new(R, 200),
    Note::new(MI, 400),
    Note::new(SOL, 400),
    Note::new(LA, 400),
    Note::new(SOL, 400),
    Note::new(MI, 400),
    Note::new(R, 200),
    Note::new(SOL, 400),
    Note::new(LA, 400),
    Note::new(SI, 400),
    Note::new(DO_M, 400),
    Note::new(SI, 400),
    Note::new(LA, 400),
    Note::new(SOL, 800),
    Note::new(R, 200),
    Note::new(MI, 400),
    Note::new(SOL, 400),
    Note::new(LA, 400),
    Note::new(SOL, 400),
    Note::new(MI, 400),
    Note::new(R, 1000),
];
