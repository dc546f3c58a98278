//! Fixed-capacity byte queues for the serial interrupt boundary
//!
//! One queue per direction: the receive interrupt produces and the main
//! loop consumes, or the main loop produces and the transmit interrupt
//! consumes. The single-producer/single-consumer discipline is what makes
//! the index handshake safe: each index is written by exactly one side, so
//! the other side's plain read needs no critical section. Never let two
//! contexts push to (or pop from) the same queue.

/// Fixed-capacity circular byte queue.
///
/// One storage slot is sacrificed to distinguish empty from full, so a
/// `ByteQueue<N>` holds at most `N - 1` bytes. Push and pop never block and
/// never allocate.
#[derive(Debug, Clone)]
pub struct ByteQueue<const N: usize> {
    storage: [u8; N],
    /// Producer index: next slot to write. Written only by the producer.
    head: usize,
    /// Consumer index: next slot to read. Written only by the consumer.
    tail: usize,
}

impl<const N: usize> Default for ByteQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ByteQueue<N> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            storage: [0; N],
            head: 0,
            tail: 0,
        }
    }

    /// Usable capacity (`N - 1`).
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// True if no bytes are queued.
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// True if a push would be rejected.
    pub fn is_full(&self) -> bool {
        (self.head + 1) % N == self.tail
    }

    /// Number of bytes currently queued.
    pub fn len(&self) -> usize {
        (self.head + N - self.tail) % N
    }

    /// Append a byte at the head.
    ///
    /// Returns `false` (byte dropped) if the queue is full. Producer side
    /// only.
    pub fn try_push(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.storage[self.head] = byte;
        self.head = (self.head + 1) % N;
        true
    }

    /// Remove the byte at the tail.
    ///
    /// Returns `None` if the queue is empty. Consumer side only.
    pub fn try_pop(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let byte = self.storage[self.tail];
        self.tail = (self.tail + 1) % N;
        Some(byte)
    }

    /// Drop all queued bytes.
    pub fn clear(&mut self) {
        self.tail = self.head;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queue_empty() {
        let q: ByteQueue<8> = ByteQueue::new();
        assert!(q.is_empty());
        assert!(!q.is_full());
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), 7);
    }

    #[test]
    fn test_capacity_is_n_minus_one() {
        let mut q: ByteQueue<8> = ByteQueue::new();
        for i in 0..7 {
            assert!(q.try_push(i), "push {} should succeed", i);
        }
        assert!(q.is_full());
        assert!(!q.try_push(0xFF));
        assert_eq!(q.len(), 7);
    }

    #[test]
    fn test_fifo_order() {
        let mut q: ByteQueue<8> = ByteQueue::new();
        for b in [10, 20, 30] {
            q.try_push(b);
        }
        assert_eq!(q.try_pop(), Some(10));
        assert_eq!(q.try_pop(), Some(20));
        assert_eq!(q.try_pop(), Some(30));
        assert_eq!(q.try_pop(), None);
    }

    #[test]
    fn test_wraparound() {
        let mut q: ByteQueue<4> = ByteQueue::new();
        // Cycle enough times to wrap the indices several times over
        for round in 0..10u8 {
            assert!(q.try_push(round));
            assert!(q.try_push(round.wrapping_add(100)));
            assert_eq!(q.try_pop(), Some(round));
            assert_eq!(q.try_pop(), Some(round.wrapping_add(100)));
        }
        assert!(q.is_empty());
    }

    #[test]
    fn test_drain_to_empty_after_full() {
        let mut q: ByteQueue<8> = ByteQueue::new();
        for i in 0..7 {
            q.try_push(i);
        }
        for i in 0..7 {
            assert_eq!(q.try_pop(), Some(i));
        }
        assert!(q.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut q: ByteQueue<8> = ByteQueue::new();
        q.try_push(1);
        q.try_push(2);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.try_pop(), None);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Interleaved push/pop sequences preserve FIFO order and never
            // exceed capacity.
            #[test]
            fn fifo_under_interleaving(ops in proptest::collection::vec(any::<Option<u8>>(), 0..200)) {
                let mut q: ByteQueue<16> = ByteQueue::new();
                let mut model: std::collections::VecDeque<u8> = Default::default();

                for op in ops {
                    match op {
                        Some(b) => {
                            let accepted = q.try_push(b);
                            prop_assert_eq!(accepted, model.len() < q.capacity());
                            if accepted {
                                model.push_back(b);
                            }
                        }
                        None => {
                            prop_assert_eq!(q.try_pop(), model.pop_front());
                        }
                    }
                    prop_assert_eq!(q.len(), model.len());
                    prop_assert!(q.len() <= q.capacity());
                }
            }
        }
    }
}
