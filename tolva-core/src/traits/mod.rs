//! Hardware abstraction traits
//!
//! These traits define the seams between the coordination logic and the
//! hardware-specific collaborators: the TFT library, the dispensing servo,
//! the buzzer output, and the raw digital inputs. The core only ever calls
//! through these interfaces and never inspects collaborator state.

pub mod dispenser;
pub mod display;
pub mod inputs;
pub mod screens;
pub mod tone;

pub use dispenser::{dispense_duration_ms, Dispenser};
pub use display::{Color, FeederDisplay, TextPos};
pub use inputs::DigitalInputs;
pub use screens::{render, Screen};
pub use tone::ToneOutput;
