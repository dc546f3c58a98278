//! Top-level feeder state machine
//!
//! [`Feeder`] is pure logic: the main loop gathers inputs into a
//! [`PollContext`], calls [`Feeder::poll`] once per iteration, and performs
//! the returned [`Action`]s against the hardware collaborators. The machine
//! never touches a peripheral and never blocks, which keeps every mode
//! transition and scheduling rule testable on the host.

use heapless::Vec;

use tolva_protocol::command::MealTime;
use tolva_protocol::report::{self, ReportLine};

use crate::clock::{Instant, TimeSnapshot};
use crate::debounce::{DebounceFilter, EdgeDetector, SENSOR_SETTLE_MS};
use crate::traits::Screen;

use super::ration::{daily_ration_g, portion_g, DEFAULT_WEIGHT_KG};

/// How long the boot greeting stays on screen.
pub const WELCOME_HOLD_MS: u32 = 2000;

/// How long a status/acknowledgement screen stays up before returning home.
pub const STATUS_HOLD_MS: u32 = 2000;

/// Most actions a single poll can emit: a full config report plus acks, a
/// scheduled dispense, and a sensor announcement all in one iteration still
/// fit with room to spare.
pub const MAX_ACTIONS: usize = 24;

/// Actions emitted by one poll, in execution order.
pub type Actions = Vec<Action, MAX_ACTIONS>;

/// What the feeder is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Boot greeting on screen.
    Welcome,
    /// Waiting for a meal time, a button press, or a command.
    Idle,
    /// The dispenser is pouring; scheduling and the button are masked.
    Dispensing,
    /// A status screen is up and will time out back to [`Mode::Idle`].
    ShowingStatus,
}

/// Side effect requested by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Queue an advisory line on the serial channel.
    SendLine(ReportLine),
    /// Clear the host terminal before a report block.
    ClearTerminal,
    /// Start the feeding-call melody.
    StartMelody,
    /// Run the blocking dispense cycle for this many grams.
    Dispense { grams: u32 },
    /// Draw a screen on the display.
    Show(Screen),
}

/// Everything the main loop sampled for one poll.
///
/// The pending-event fields come from the command channel's `take_*` methods
/// and are therefore already consumed: the machine must act on every `Some`
/// it is handed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PollContext {
    /// Wall-clock snapshot for meal scheduling.
    pub time: TimeSnapshot,
    /// Free-running millisecond counter for interval timing.
    pub now: Instant,
    /// Raw push-button level.
    pub button_level: bool,
    /// Raw eating-sensor level.
    pub sensor_level: bool,
    /// Weight update received over serial.
    pub weight_update: Option<u32>,
    /// First-meal-slot update received over serial.
    pub first_meal_update: Option<MealTime>,
    /// Second-meal-slot update received over serial.
    pub second_meal_update: Option<MealTime>,
    /// Configuration report requested over serial.
    pub show_config: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct MealSlot {
    time: Option<MealTime>,
    /// Set when the slot dispenses; cleared once the wall clock leaves the
    /// slot's minute, so the slot fires at most once per day.
    fired: bool,
}

impl MealSlot {
    fn matches(&self, time: &TimeSnapshot) -> bool {
        match self.time {
            Some(meal) => meal.hour == time.hours && meal.minute == time.minutes,
            None => false,
        }
    }
}

/// The feeder state machine.
#[derive(Debug, Clone)]
pub struct Feeder {
    mode: Mode,
    mode_entered_at: Instant,
    weight_kg: Option<u32>,
    first: MealSlot,
    second: MealSlot,
    sensor: DebounceFilter,
    sensor_confirmed: bool,
    button: EdgeDetector,
}

impl Default for Feeder {
    fn default() -> Self {
        Self::new()
    }
}

impl Feeder {
    /// Create a feeder in [`Mode::Welcome`] with nothing configured.
    ///
    /// Both inputs idle high at boot (pull-up wiring).
    pub const fn new() -> Self {
        Self {
            mode: Mode::Welcome,
            mode_entered_at: Instant(0),
            weight_kg: None,
            first: MealSlot {
                time: None,
                fired: false,
            },
            second: MealSlot {
                time: None,
                fired: false,
            },
            sensor: DebounceFilter::new(SENSOR_SETTLE_MS, true),
            sensor_confirmed: true,
            button: EdgeDetector::new(true),
        }
    }

    /// Actions for the boot transition: clear the host terminal and put the
    /// greeting up. Call once before the first poll.
    pub fn boot(&mut self, now: Instant) -> Actions {
        self.mode = Mode::Welcome;
        self.mode_entered_at = now;
        let mut actions = Actions::new();
        let _ = actions.push(Action::ClearTerminal);
        let _ = actions.push(Action::Show(Screen::Welcome));
        actions
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Configured weight, if any.
    pub fn weight_kg(&self) -> Option<u32> {
        self.weight_kg
    }

    /// Grams the next dispense will pour.
    pub fn current_portion_g(&self) -> u32 {
        portion_g(self.weight_kg.unwrap_or(DEFAULT_WEIGHT_KG))
    }

    /// Run one iteration of the orchestration logic.
    ///
    /// Order matters and mirrors the event priorities: serial configuration
    /// first, then meal scheduling, then the manual button, then the eating
    /// sensor, and finally timed screen transitions.
    pub fn poll(&mut self, ctx: &PollContext) -> Actions {
        let mut actions = Actions::new();

        self.handle_config_events(ctx, &mut actions);
        self.clear_stale_fired_flags(&ctx.time);
        self.handle_schedule(ctx, &mut actions);
        self.handle_button(ctx, &mut actions);
        self.handle_sensor(ctx, &mut actions);
        self.handle_timed_transitions(ctx, &mut actions);

        actions
    }

    /// The blocking dispense cycle finished; return to the home screen.
    pub fn dispense_finished(&mut self, now: Instant) -> Actions {
        let mut actions = Actions::new();
        if self.mode == Mode::Dispensing {
            self.enter(Mode::Idle, now);
            let _ = actions.push(Action::Show(Screen::Home));
        }
        actions
    }

    fn enter(&mut self, mode: Mode, now: Instant) {
        self.mode = mode;
        self.mode_entered_at = now;
    }

    fn status_screen(&self) -> Screen {
        Screen::Status {
            weight_kg: self.weight_kg,
            portion_g: self.current_portion_g(),
        }
    }

    fn show_status(&mut self, now: Instant, actions: &mut Actions) {
        // Dispensing keeps its own screen; the status flashes afterwards
        // would only fight with it.
        if self.mode != Mode::Dispensing {
            self.enter(Mode::ShowingStatus, now);
            let _ = actions.push(Action::Show(self.status_screen()));
        }
    }

    fn handle_config_events(&mut self, ctx: &PollContext, actions: &mut Actions) {
        let mut updated = false;

        if let Some(kg) = ctx.weight_update {
            self.weight_kg = Some(kg);
            let _ = actions.push(Action::SendLine(report::weight_ack(kg)));
            updated = true;
        }
        if let Some(meal) = ctx.first_meal_update {
            self.first = MealSlot {
                time: Some(meal),
                fired: false,
            };
            let _ = actions.push(Action::SendLine(report::first_meal_ack(meal)));
            updated = true;
        }
        if let Some(meal) = ctx.second_meal_update {
            self.second = MealSlot {
                time: Some(meal),
                fired: false,
            };
            let _ = actions.push(Action::SendLine(report::second_meal_ack(meal)));
            updated = true;
        }

        if ctx.show_config {
            let _ = actions.push(Action::ClearTerminal);
            let report = report::config_report(
                self.weight_kg,
                daily_ration_g(self.weight_kg.unwrap_or(DEFAULT_WEIGHT_KG)),
                self.first.time,
                self.second.time,
            );
            for line in report {
                let _ = actions.push(Action::SendLine(line));
            }
            updated = true;
        }

        if updated {
            self.show_status(ctx.now, actions);
        }
    }

    fn clear_stale_fired_flags(&mut self, time: &TimeSnapshot) {
        if self.first.fired && !self.first.matches(time) {
            self.first.fired = false;
        }
        if self.second.fired && !self.second.matches(time) {
            self.second.fired = false;
        }
    }

    fn handle_schedule(&mut self, ctx: &PollContext, actions: &mut Actions) {
        if self.mode == Mode::Dispensing {
            return;
        }

        let second_slot = if self.first.matches(&ctx.time) && !self.first.fired {
            self.first.fired = true;
            false
        } else if self.second.matches(&ctx.time) && !self.second.fired {
            self.second.fired = true;
            true
        } else {
            return;
        };

        let _ = actions.push(Action::SendLine(report::meal_announcement(second_slot)));
        self.start_dispense(ctx.now, actions);
    }

    fn handle_button(&mut self, ctx: &PollContext, actions: &mut Actions) {
        let pressed = self.button.falling_edge(ctx.button_level);
        if pressed && self.mode != Mode::Dispensing {
            self.start_dispense(ctx.now, actions);
        }
    }

    fn start_dispense(&mut self, now: Instant, actions: &mut Actions) {
        let _ = actions.push(Action::StartMelody);
        let _ = actions.push(Action::Show(Screen::Dispensing));
        let _ = actions.push(Action::Dispense {
            grams: self.current_portion_g(),
        });
        self.enter(Mode::Dispensing, now);
    }

    fn handle_sensor(&mut self, ctx: &PollContext, actions: &mut Actions) {
        let confirmed = self.sensor.update(ctx.sensor_level, ctx.now);
        if confirmed != self.sensor_confirmed {
            self.sensor_confirmed = confirmed;
            // High means the bowl is undisturbed again
            let _ = actions.push(Action::SendLine(report::eating_announcement(confirmed)));
            if !confirmed {
                self.show_status(ctx.now, actions);
            }
        }
    }

    fn handle_timed_transitions(&mut self, ctx: &PollContext, actions: &mut Actions) {
        let held = self.mode_entered_at.elapsed_ms(ctx.now);
        let expired = match self.mode {
            Mode::Welcome => held >= WELCOME_HOLD_MS,
            Mode::ShowingStatus => held >= STATUS_HOLD_MS,
            Mode::Idle | Mode::Dispensing => false,
        };
        if expired {
            self.enter(Mode::Idle, ctx.now);
            let _ = actions.push(Action::Show(Screen::Home));
        }
    }
}
