//! Feeder orchestration: the ration policy and the top-level state machine.

pub mod machine;
pub mod ration;

pub use machine::{Action, Actions, Feeder, Mode, PollContext, STATUS_HOLD_MS, WELCOME_HOLD_MS};
pub use ration::{daily_ration_g, portion_g, DEFAULT_WEIGHT_KG, MEALS_PER_DAY};
