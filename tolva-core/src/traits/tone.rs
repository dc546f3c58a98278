//! Tone output collaborator trait.

use crate::melody::Pitch;

/// Trait for the buzzer/PWM tone output.
///
/// Driven only by the tone sequencer's timer interrupt.
pub trait ToneOutput {
    /// Reprogram the output: a frequency for [`Pitch::Note`], silence for
    /// [`Pitch::Rest`].
    fn set_pitch(&mut self, pitch: Pitch);

    /// Stop all output.
    fn stop(&mut self);
}
