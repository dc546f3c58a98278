//! Board-agnostic core logic for the pet feeder firmware
//!
//! This crate contains the real-time coordination layer that must stay
//! correct under concurrent access from interrupt handlers and the main
//! polling loop, independent of any specific hardware:
//!
//! - Millisecond/wall-clock timebase (timer-interrupt driven)
//! - SPSC byte queues for the serial interrupt boundary
//! - Command channel (line protocol over the byte queues)
//! - Tone sequencer for the feeding melody
//! - Debounce filter for noisy digital inputs
//! - Feeder orchestrator state machine and ration curve
//! - Hardware abstraction traits (display, dispenser, tone, inputs)
//!
//! Nothing here touches registers or disables interrupts; the firmware
//! crate owns the critical sections and calls in here from inside them.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod channel;
pub mod clock;
pub mod debounce;
pub mod feeder;
pub mod melody;
pub mod queue;
pub mod traits;
