//! Hatch servo driver
//!
//! Standard hobby-servo timing on a 50 Hz PWM channel: a 2.0 ms pulse swings
//! the hatch open, 1.0 ms parks it closed. `dispense` is the one sanctioned
//! blocking operation in the firmware; the wait runs with interrupts live,
//! so the clock, melody, and serial traffic keep moving while kibble pours.

use stm32f7xx_hal::prelude::*;

use tolva_core::traits::{dispense_duration_ms, Dispenser};

/// Time for the horn to travel back before anything else moves.
const CLOSE_SETTLE_MS: u32 = 300;

pub struct ServoDispenser<PWM, Wait> {
    pwm: PWM,
    wait_ms: Wait,
    open_duty: u16,
    closed_duty: u16,
}

impl<PWM, Wait> ServoDispenser<PWM, Wait>
where
    PWM: _embedded_hal_PwmPin<Duty = u16>,
    Wait: FnMut(u32),
{
    /// Take over a 50 Hz PWM channel and park the hatch closed.
    pub fn new(mut pwm: PWM, wait_ms: Wait) -> Self {
        let max = pwm.get_max_duty();
        // 2.0 ms and 1.0 ms pulses out of the 20 ms period
        let open_duty = max / 10;
        let closed_duty = max / 20;
        pwm.set_duty(closed_duty);
        pwm.enable();
        Self {
            pwm,
            wait_ms,
            open_duty,
            closed_duty,
        }
    }
}

impl<PWM, Wait> Dispenser for ServoDispenser<PWM, Wait>
where
    PWM: _embedded_hal_PwmPin<Duty = u16>,
    Wait: FnMut(u32),
{
    fn dispense(&mut self, grams: u32) {
        self.pwm.set_duty(self.open_duty);
        (self.wait_ms)(dispense_duration_ms(grams));
        self.pwm.set_duty(self.closed_duty);
        (self.wait_ms)(CLOSE_SETTLE_MS);
    }
}
