//! Board digital inputs.
//!
//! Both inputs are wired to ground through their switch, so they idle high
//! on the internal pull-ups: the button reads low while pressed, the eating
//! sensor reads low while the bowl is disturbed.

use stm32f7xx_hal::gpio::{gpiob, Input, PullUp};

use tolva_core::traits::DigitalInputs;

pub struct BoardInputs {
    button: gpiob::PB8<Input<PullUp>>,
    sensor: gpiob::PB9<Input<PullUp>>,
}

impl BoardInputs {
    pub fn new(button: gpiob::PB8<Input<PullUp>>, sensor: gpiob::PB9<Input<PullUp>>) -> Self {
        Self { button, sensor }
    }
}

impl DigitalInputs for BoardInputs {
    fn button_level(&self) -> bool {
        self.button.is_high()
    }

    fn sensor_level(&self) -> bool {
        self.sensor.is_high()
    }
}
