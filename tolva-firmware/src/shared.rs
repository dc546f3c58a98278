//! Interrupt-shared state
//!
//! Everything touched from both interrupt handlers and the main loop lives
//! here behind critical-section mutexes. The pure-logic state (wall clock,
//! command channel, melody sequencer) is const-initialized; the hardware
//! handles are installed by `main` before the interrupts are unmasked.

use core::cell::RefCell;

use critical_section::Mutex;
use stm32f7xx_hal::gpio::{gpiod, Alternate};
use stm32f7xx_hal::pac;
use stm32f7xx_hal::serial::Serial;
use stm32f7xx_hal::timer::CounterHz;

use tolva_core::channel::CommandChannel;
use tolva_core::clock::{Instant, WallClock};
use tolva_core::melody::{Sequencer, DINNER_CALL};

use crate::tone::Buzzer;

/// Serial link to the host terminal (USART3 on PD8/PD9).
pub type SerialPort =
    Serial<pac::USART3, (gpiod::PD8<Alternate<7>>, gpiod::PD9<Alternate<7>>)>;

/// Serial port plus a one-byte carry for when the data register is busy.
pub struct SerialLink {
    pub port: SerialPort,
    pub carry: Option<u8>,
}

/// Wall clock, advanced by the TIM2 tick interrupt.
pub static CLOCK: Mutex<RefCell<WallClock>> = Mutex::new(RefCell::new(WallClock::new()));

/// Command channel, fed by the USART3 interrupt and drained by the main loop.
pub static CHANNEL: Mutex<RefCell<CommandChannel>> =
    Mutex::new(RefCell::new(CommandChannel::new()));

/// Melody sequencer, stepped by the TIM5 interrupt.
pub static MELODY: Mutex<RefCell<Sequencer>> =
    Mutex::new(RefCell::new(Sequencer::new(&DINNER_CALL)));

/// TIM2 1 kHz timebase counter (the interrupt handler clears its flag).
pub static TICK_TIMER: Mutex<RefCell<Option<CounterHz<pac::TIM2>>>> =
    Mutex::new(RefCell::new(None));

/// TIM5 1 kHz melody counter.
pub static MELODY_TIMER: Mutex<RefCell<Option<CounterHz<pac::TIM5>>>> =
    Mutex::new(RefCell::new(None));

/// Buzzer square-wave generator (TIM3 plus output pin).
pub static TONE: Mutex<RefCell<Option<Buzzer>>> = Mutex::new(RefCell::new(None));

/// Serial link state shared with the USART3 interrupt.
pub static SERIAL: Mutex<RefCell<Option<SerialLink>>> = Mutex::new(RefCell::new(None));

/// Current value of the free-running millisecond counter.
pub fn now() -> Instant {
    critical_section::with(|cs| CLOCK.borrow_ref(cs).now())
}
