//! Tolva Serial Configuration Protocol
//!
//! This crate defines the line-oriented ASCII protocol spoken over the
//! feeder's serial port. A host (terminal or companion app) configures the
//! pet's weight and meal times; the feeder answers with advisory text lines.
//!
//! # Protocol Overview
//!
//! One command per line, terminated by `\n` or `\r`, case-sensitive:
//!
//! ```text
//! Peso:<kg>                  set pet weight in kilograms
//! Primera Comida:<HHMM>      first meal time (hour*100 + minute)
//! Segunda Comida:<HHMM>      second meal time
//! Mostrar Config             request the current configuration report
//! ```
//!
//! There is no escaping, no checksum, and no mandatory acknowledgement.
//! Unrecognized lines are silently ignored. Responses are advisory text
//! only; the protocol never requires them.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod line;
pub mod report;

pub use command::{Command, MealTime};
pub use line::{LineAccumulator, MAX_LINE_LEN};
pub use report::ReportLine;
