//! Buzzer square-wave generation
//!
//! The piezo is driven by a plain push-pull pin toggled from the TIM3
//! update interrupt: the counter runs at twice the audio frequency, so each
//! interrupt is one half-period. Changing the note is just restarting the
//! counter at a new rate.

use stm32f7xx_hal::gpio::{gpioe, Output, PushPull};
use stm32f7xx_hal::pac;
use stm32f7xx_hal::prelude::*;
use stm32f7xx_hal::timer::{CounterHz, Event};

use tolva_core::melody::Pitch;
use tolva_core::traits::ToneOutput;

pub struct Buzzer {
    counter: CounterHz<pac::TIM3>,
    pin: gpioe::PE3<Output<PushPull>>,
}

impl Buzzer {
    pub fn new(counter: CounterHz<pac::TIM3>, pin: gpioe::PE3<Output<PushPull>>) -> Self {
        Self { counter, pin }
    }

    /// One half-period elapsed. TIM3 interrupt context.
    pub fn on_toggle(&mut self) {
        self.counter.clear_interrupt(Event::Update);
        self.pin.toggle();
    }
}

impl ToneOutput for Buzzer {
    fn set_pitch(&mut self, pitch: Pitch) {
        match pitch {
            Pitch::Note(freq) => {
                let _ = self.counter.cancel();
                let _ = self.counter.start((u32::from(freq) * 2).Hz());
                self.counter.listen(Event::Update);
            }
            Pitch::Rest => self.stop(),
        }
    }

    fn stop(&mut self) {
        let _ = self.counter.cancel();
        self.pin.set_low();
    }
}
