//! Command channel: the line protocol layered over the byte queues
//!
//! The receive interrupt hands every byte to [`CommandChannel::on_byte_received`],
//! which accumulates lines and parses completed commands right there -
//! parsing is bounded and allocation-free, so it is safe at interrupt
//! priority, and the result lands in "pending event" fields the main loop
//! drains with the `take_*` methods (read-and-clear, at-most-once).
//!
//! Outbound text goes the other way: the main loop enqueues whole lines
//! best-effort, and the transmit-ready interrupt pops one byte at a time via
//! [`CommandChannel::drive_transmit`].
//!
//! The channel holds no locks itself. The firmware wraps the whole struct in
//! a critical-section mutex, which subsumes the queues' SPSC contract.

use tolva_protocol::command::{Command, MealTime};
use tolva_protocol::line::{FeedResult, LineAccumulator, MAX_LINE_LEN};

use crate::queue::ByteQueue;

/// Inbound raw-byte queue capacity.
pub const RX_QUEUE_LEN: usize = 200;
/// Outbound byte queue capacity.
pub const TX_QUEUE_LEN: usize = 200;

/// What the transmit interrupt should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxStatus {
    /// Hand this byte to the serial peripheral.
    Byte(u8),
    /// Nothing queued; disable the transmit interrupt.
    Idle,
}

/// Serial command channel state.
#[derive(Debug)]
pub struct CommandChannel {
    rx: ByteQueue<RX_QUEUE_LEN>,
    tx: ByteQueue<TX_QUEUE_LEN>,
    line: LineAccumulator<MAX_LINE_LEN>,
    pending_weight: Option<u32>,
    pending_first_meal: Option<MealTime>,
    pending_second_meal: Option<MealTime>,
    show_config_requested: bool,
}

impl Default for CommandChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandChannel {
    /// Create an idle channel.
    ///
    /// `const` so the firmware can hold the channel in a static.
    pub const fn new() -> Self {
        Self {
            rx: ByteQueue::new(),
            tx: ByteQueue::new(),
            line: LineAccumulator::new(),
            pending_weight: None,
            pending_first_meal: None,
            pending_second_meal: None,
            show_config_requested: false,
        }
    }

    /// Handle one received byte. Receive-interrupt context.
    ///
    /// The byte is mirrored into the inbound queue (raw-stream access for
    /// [`read_byte`]) and fed to the line accumulator; a terminator parses
    /// the completed line and latches the matching pending event. Malformed
    /// lines are dropped without touching any pending field.
    ///
    /// [`read_byte`]: CommandChannel::read_byte
    pub fn on_byte_received(&mut self, byte: u8) {
        // Raw mirror is best-effort: a full queue drops the byte.
        let _ = self.rx.try_push(byte);

        match self.line.feed(byte) {
            FeedResult::LineComplete => {
                if let Some(cmd) = Command::parse(self.line.line()) {
                    self.latch(cmd);
                }
                self.line.reset();
            }
            FeedResult::Pending | FeedResult::Overflow => {}
        }
    }

    fn latch(&mut self, cmd: Command) {
        match cmd {
            Command::SetWeight(kg) => self.pending_weight = Some(kg),
            Command::SetFirstMeal(meal) => self.pending_first_meal = Some(meal),
            Command::SetSecondMeal(meal) => self.pending_second_meal = Some(meal),
            Command::ShowConfig => self.show_config_requested = true,
        }
    }

    /// Pop one raw byte from the inbound queue. Main-loop context.
    pub fn read_byte(&mut self) -> Option<u8> {
        self.rx.try_pop()
    }

    /// Take the pending weight update, if any. Read-and-clear.
    pub fn take_pending_weight(&mut self) -> Option<u32> {
        self.pending_weight.take()
    }

    /// Take the pending first-meal update, if any. Read-and-clear.
    pub fn take_first_meal(&mut self) -> Option<MealTime> {
        self.pending_first_meal.take()
    }

    /// Take the pending second-meal update, if any. Read-and-clear.
    pub fn take_second_meal(&mut self) -> Option<MealTime> {
        self.pending_second_meal.take()
    }

    /// Take the pending configuration-report request. Read-and-clear.
    pub fn take_show_config_request(&mut self) -> bool {
        core::mem::take(&mut self.show_config_requested)
    }

    /// Queue a text line for transmission, best-effort.
    ///
    /// If the outbound queue fills mid-line the remaining bytes are dropped;
    /// this is a telemetry channel, not a guaranteed transport. Returns the
    /// number of bytes actually queued.
    pub fn enqueue_line(&mut self, text: &str) -> usize {
        let mut queued = 0;
        for &b in text.as_bytes() {
            if !self.tx.try_push(b) {
                break;
            }
            queued += 1;
        }
        queued
    }

    /// Fetch the next outbound byte. Transmit-interrupt context.
    ///
    /// Returns [`TxStatus::Idle`] when the queue drains so the interrupt
    /// handler can disable the transmit interrupt.
    pub fn drive_transmit(&mut self) -> TxStatus {
        match self.tx.try_pop() {
            Some(byte) => TxStatus::Byte(byte),
            None => TxStatus::Idle,
        }
    }

    /// True if outbound bytes are waiting (transmit interrupt should run).
    pub fn has_pending_tx(&self) -> bool {
        !self.tx.is_empty()
    }
}
