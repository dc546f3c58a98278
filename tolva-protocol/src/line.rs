//! Bounded line accumulation for the serial receive path.
//!
//! Bytes arrive one at a time from the receive interrupt. The accumulator
//! buffers them until a terminator (`\n` or `\r`) completes the line. A line
//! longer than the buffer is truncated: overflow bytes are dropped and the
//! surviving prefix is still delivered on the terminator, so a runaway
//! sender can never overrun memory.

use heapless::Vec;

/// Maximum command line length in bytes, terminator excluded.
///
/// The longest valid command (`Segunda Comida:2359`) is 19 bytes, so 30
/// leaves comfortable slack without inviting abuse.
pub const MAX_LINE_LEN: usize = 30;

/// Byte-at-a-time line accumulator.
///
/// Feed it every received byte; it yields the buffered line each time a
/// terminator arrives. Empty lines (terminator with nothing buffered) are
/// yielded as empty slices and are harmless to parse.
#[derive(Debug, Clone, Default)]
pub struct LineAccumulator<const L: usize = MAX_LINE_LEN> {
    buffer: Vec<u8, L>,
}

/// Result of feeding one byte to the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedResult {
    /// Byte consumed, line still in progress.
    Pending,
    /// A terminator arrived; the completed line is ready via `take_line`.
    LineComplete,
    /// Byte dropped because the buffer is full (line will be truncated).
    Overflow,
}

impl<const L: usize> LineAccumulator<L> {
    /// Create an empty accumulator.
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Feed a single received byte.
    ///
    /// Bounded time, no allocation; safe to call at interrupt priority.
    pub fn feed(&mut self, byte: u8) -> FeedResult {
        if byte == b'\n' || byte == b'\r' {
            return FeedResult::LineComplete;
        }
        // One slot is reserved so a truncated line still parses as text.
        if self.buffer.len() < L.saturating_sub(1) {
            // Cannot fail: length was just checked.
            let _ = self.buffer.push(byte);
            FeedResult::Pending
        } else {
            FeedResult::Overflow
        }
    }

    /// Borrow the completed line and reset for the next one.
    ///
    /// Call once after `feed` returned [`FeedResult::LineComplete`]; the
    /// returned closure-style pattern is avoided on purpose - the caller
    /// parses the borrowed bytes and the buffer is cleared by `reset`.
    pub fn line(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the buffer for the next line.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Number of bytes currently buffered.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
