//! Tolva - Automated Pet Feeder Firmware
//!
//! Main firmware binary for STM32F767-based feeder boards.
//!
//! Named after the Spanish "tolva" (hopper) - the funnel-shaped bin that
//! gravity-feeds kibble into the dispensing drum.
//!
//! Interrupt layout:
//! - TIM2 at 1 kHz advances the wall clock
//! - TIM5 at 1 kHz steps the melody sequencer
//! - TIM3 toggles the buzzer pin at twice the current note frequency
//! - USART3 feeds received bytes to the command channel and drains the
//!   outbound queue one byte per transmit-ready interrupt
//!
//! The main loop polls the feeder state machine once per wakeup and performs
//! the actions it returns. Only the dispense cycle blocks, and it blocks
//! with interrupts live.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::info;
use stm32f7xx_hal::{
    pac,
    pac::interrupt,
    prelude::*,
    serial::{self, Serial},
    timer::Event as TimerEvent,
};
use {defmt_rtt as _, panic_probe as _};

use tolva_core::channel::TxStatus;
use tolva_core::feeder::{Action, Feeder, PollContext};
use tolva_core::melody::ToneStep;
use tolva_core::traits::{render, DigitalInputs, Dispenser};
use tolva_protocol::report::CLEAR_SCREEN;

mod display;
mod inputs;
mod servo;
mod shared;
mod tone;

use display::RttDisplay;
use inputs::BoardInputs;
use servo::ServoDispenser;
use tone::Buzzer;
use tolva_core::traits::ToneOutput;

/// Host terminal link speed.
const BAUD: u32 = 9600;

#[entry]
fn main() -> ! {
    info!("tolva firmware starting");

    let dp = pac::Peripherals::take().unwrap();

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.sysclk(216.MHz()).freeze();

    let gpiob = dp.GPIOB.split();
    let gpiod = dp.GPIOD.split();
    let gpioe = dp.GPIOE.split();

    // Serial link to the host terminal
    let tx = gpiod.pd8.into_alternate::<7>();
    let rx = gpiod.pd9.into_alternate::<7>();
    let usart_cfg = serial::Config {
        baud_rate: BAUD.bps(),
        ..Default::default()
    };
    let mut port = Serial::new(dp.USART3, (tx, rx), &clocks, usart_cfg);
    port.listen(serial::Event::Rxne);

    // 1 kHz timebase tick
    let mut tick_timer = dp.TIM2.counter_hz(&clocks);
    tick_timer.start(1.kHz()).unwrap();
    tick_timer.listen(TimerEvent::Update);

    // 1 kHz melody tick
    let mut melody_timer = dp.TIM5.counter_hz(&clocks);
    melody_timer.start(1.kHz()).unwrap();
    melody_timer.listen(TimerEvent::Update);

    // Buzzer square wave from TIM3
    let buzzer = Buzzer::new(
        dp.TIM3.counter_hz(&clocks),
        gpioe.pe3.into_push_pull_output(),
    );

    // Hatch servo on TIM4 channel 1
    let servo_pin = gpiob.pb6.into_alternate::<2>();
    let servo_pwm = dp.TIM4.pwm_hz(servo_pin, 50.Hz(), &clocks).split();
    let mut servo = ServoDispenser::new(servo_pwm, wait_ms);

    let inputs = BoardInputs::new(
        gpiob.pb8.into_pull_up_input(),
        gpiob.pb9.into_pull_up_input(),
    );
    let mut display = RttDisplay::new();

    critical_section::with(|cs| {
        shared::TICK_TIMER.borrow_ref_mut(cs).replace(tick_timer);
        shared::MELODY_TIMER.borrow_ref_mut(cs).replace(melody_timer);
        shared::TONE.borrow_ref_mut(cs).replace(buzzer);
        shared::SERIAL
            .borrow_ref_mut(cs)
            .replace(shared::SerialLink { port, carry: None });
    });

    // Safety: state above is installed; handlers find everything in place
    unsafe {
        cortex_m::peripheral::NVIC::unmask(pac::Interrupt::TIM2);
        cortex_m::peripheral::NVIC::unmask(pac::Interrupt::TIM5);
        cortex_m::peripheral::NVIC::unmask(pac::Interrupt::TIM3);
        cortex_m::peripheral::NVIC::unmask(pac::Interrupt::USART3);
    }

    info!("peripherals initialized, entering poll loop");

    let mut feeder = Feeder::new();
    for action in feeder.boot(shared::now()) {
        match action {
            Action::Show(screen) => render(&screen, &mut display),
            Action::ClearTerminal => send_line(CLEAR_SCREEN),
            _ => {}
        }
    }

    loop {
        let (now, time, weight_update, first_meal_update, second_meal_update, show_config) =
            critical_section::with(|cs| {
                let clock = shared::CLOCK.borrow_ref(cs);
                let mut channel = shared::CHANNEL.borrow_ref_mut(cs);
                (
                    clock.now(),
                    clock.snapshot(),
                    channel.take_pending_weight(),
                    channel.take_first_meal(),
                    channel.take_second_meal(),
                    channel.take_show_config_request(),
                )
            });

        let ctx = PollContext {
            time,
            now,
            button_level: inputs.button_level(),
            sensor_level: inputs.sensor_level(),
            weight_update,
            first_meal_update,
            second_meal_update,
            show_config,
        };

        for action in feeder.poll(&ctx) {
            match action {
                Action::SendLine(line) => send_line(&line),
                Action::ClearTerminal => send_line(CLEAR_SCREEN),
                Action::StartMelody => start_melody(),
                Action::Show(screen) => render(&screen, &mut display),
                Action::Dispense { grams } => {
                    info!("dispensing {} g", grams);
                    servo.dispense(grams);
                    for follow in feeder.dispense_finished(shared::now()) {
                        if let Action::Show(screen) = follow {
                            render(&screen, &mut display);
                        }
                    }
                }
            }
        }

        // The 1 ms tick wakes us right back up
        cortex_m::asm::wfi();
    }
}

/// Queue a text line and make sure the transmit interrupt is running.
fn send_line(text: &str) {
    critical_section::with(|cs| {
        let mut channel = shared::CHANNEL.borrow_ref_mut(cs);
        channel.enqueue_line(text);
        if channel.has_pending_tx() {
            if let Some(link) = shared::SERIAL.borrow_ref_mut(cs).as_mut() {
                link.port.listen(serial::Event::Txe);
            }
        }
    });
}

/// Restart the feeding melody and drive its first note.
fn start_melody() {
    critical_section::with(|cs| {
        let pitch = shared::MELODY.borrow_ref_mut(cs).start();
        if let Some(tone) = shared::TONE.borrow_ref_mut(cs).as_mut() {
            tone.set_pitch(pitch);
        }
    });
}

/// Block for `ms` milliseconds against the shared wall clock.
///
/// Interrupts stay live, so the clock keeps ticking while we wait.
fn wait_ms(ms: u32) {
    let start = shared::now();
    while start.elapsed_ms(shared::now()) < ms {
        cortex_m::asm::wfi();
    }
}

#[interrupt]
fn TIM2() {
    critical_section::with(|cs| {
        if let Some(timer) = shared::TICK_TIMER.borrow_ref_mut(cs).as_mut() {
            timer.clear_interrupt(TimerEvent::Update);
        }
        shared::CLOCK.borrow_ref_mut(cs).tick();
    });
}

#[interrupt]
fn TIM5() {
    critical_section::with(|cs| {
        if let Some(timer) = shared::MELODY_TIMER.borrow_ref_mut(cs).as_mut() {
            timer.clear_interrupt(TimerEvent::Update);
        }
        let step = shared::MELODY.borrow_ref_mut(cs).tick(1);
        if let Some(step) = step {
            if let Some(tone) = shared::TONE.borrow_ref_mut(cs).as_mut() {
                match step {
                    ToneStep::Play(pitch) => tone.set_pitch(pitch),
                    ToneStep::Finished => tone.stop(),
                }
            }
        }
    });
}

#[interrupt]
fn TIM3() {
    critical_section::with(|cs| {
        if let Some(tone) = shared::TONE.borrow_ref_mut(cs).as_mut() {
            tone.on_toggle();
        }
    });
}

#[interrupt]
fn USART3() {
    critical_section::with(|cs| {
        let mut channel = shared::CHANNEL.borrow_ref_mut(cs);
        if let Some(link) = shared::SERIAL.borrow_ref_mut(cs).as_mut() {
            // Drain everything the receiver has
            while let Ok(byte) = link.port.read() {
                channel.on_byte_received(byte);
            }

            // Feed the transmitter one byte per transmit-ready interrupt
            let next = link.carry.take().or_else(|| match channel.drive_transmit() {
                TxStatus::Byte(byte) => Some(byte),
                TxStatus::Idle => None,
            });
            match next {
                Some(byte) => {
                    if link.port.write(byte).is_err() {
                        link.carry = Some(byte);
                    }
                }
                None => link.port.unlisten(serial::Event::Txe),
            }
        }
    });
}
