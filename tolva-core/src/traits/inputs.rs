//! Raw digital input collaborator trait.

/// Trait for the board's digital inputs, polled once per main-loop
/// iteration.
pub trait DigitalInputs {
    /// Raw push-button level. High when released (pull-up wiring); the
    /// manual-dispense trigger is the falling edge.
    fn button_level(&self) -> bool;

    /// Raw eating-sensor level. High when the bowl is undisturbed.
    fn sensor_level(&self) -> bool;
}
