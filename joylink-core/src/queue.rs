//! Event queue between button scanning and serial transmit
//!
//! Button scanning runs every tick and can produce several events at once,
//! while the transmitter drains one byte per tick. The queue absorbs the
//! difference. Each event takes two entries: the button id followed by the
//! direction code.
//!
//! # Overflow policy
//!
//! [`EventQueue::push`] never fails. When the queue is full the oldest
//! unread entry is evicted to make room, so under sustained overflow the
//! consumer sees only the newest `N` entries. Evictions are counted in
//! [`EventQueue::overwritten`]; raising `N` is the only mitigation.

use heapless::Deque;
use joylink_protocol::{ButtonEvent, Direction};

/// Default queue capacity in entries (two entries per event)
pub const EVENT_QUEUE_CAPACITY: usize = 64;

/// Errors from queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueError {
    /// Pop with nothing queued
    Empty,
}

/// Fixed-capacity FIFO of small integers, oldest entry evicted on overflow
#[derive(Debug, Clone)]
pub struct EventQueue<const N: usize = EVENT_QUEUE_CAPACITY> {
    entries: Deque<u8, N>,
    overwritten: u32,
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EventQueue<N> {
    // Events are pushed as pairs; an even capacity keeps evictions from
    // leaving half an event at the head once a pair push completes.
    const EVEN_CAPACITY: () = assert!(N >= 2 && N % 2 == 0, "capacity must be even");

    /// Create an empty queue
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::EVEN_CAPACITY;
        Self {
            entries: Deque::new(),
            overwritten: 0,
        }
    }

    /// Append a value, evicting the oldest unread value if full
    pub fn push(&mut self, value: u8) {
        if self.entries.is_full() {
            self.entries.pop_front();
            self.overwritten = self.overwritten.saturating_add(1);
        }
        // Cannot fail: a slot is free at this point
        let _ = self.entries.push_back(value);
    }

    /// Remove and return the oldest value
    pub fn pop(&mut self) -> Result<u8, QueueError> {
        self.entries.pop_front().ok_or(QueueError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Entries evicted by overflow since creation (saturating)
    pub fn overwritten(&self) -> u32 {
        self.overwritten
    }

    /// Push one event as its (id, direction code) pair
    pub fn push_event(&mut self, event: ButtonEvent) {
        self.push(event.id);
        self.push(event.direction.code());
    }

    /// True when at least one whole (id, direction) pair is queued
    pub fn has_pair(&self) -> bool {
        self.entries.len() >= 2
    }

    /// Pop one raw (id, direction code) pair
    ///
    /// Fails with [`QueueError::Empty`] unless both halves are present; in
    /// that case nothing is removed.
    pub fn pop_pair(&mut self) -> Result<(u8, u8), QueueError> {
        if !self.has_pair() {
            return Err(QueueError::Empty);
        }
        let id = self.pop()?;
        let code = self.pop()?;
        Ok((id, code))
    }

    /// Pop one pair and decode it as an event
    ///
    /// Returns `Ok(None)` for a pair whose direction code is invalid.
    pub fn pop_event(&mut self) -> Result<Option<ButtonEvent>, QueueError> {
        let (id, code) = self.pop_pair()?;
        Ok(Direction::from_code(code).map(|direction| ButtonEvent::new(id, direction)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joylink_protocol::{format_event, Button};
    use proptest::prelude::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = EventQueue::<8>::new();
        queue.push(1);
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.pop(), Ok(1));
        assert_eq!(queue.pop(), Ok(2));
        assert_eq!(queue.pop(), Ok(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_pop_empty() {
        let mut queue = EventQueue::<4>::new();
        assert_eq!(queue.pop(), Err(QueueError::Empty));
    }

    #[test]
    fn test_overflow_keeps_newest() {
        let mut queue = EventQueue::<4>::new();
        for value in 0..10 {
            queue.push(value);
        }
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.overwritten(), 6);
        assert_eq!(queue.pop(), Ok(6));
        assert_eq!(queue.pop(), Ok(7));
        assert_eq!(queue.pop(), Ok(8));
        assert_eq!(queue.pop(), Ok(9));
        assert_eq!(queue.pop(), Err(QueueError::Empty));
    }

    #[test]
    fn test_overflow_keeps_pairs_aligned() {
        let mut queue = EventQueue::<4>::new();
        queue.push_event(ButtonEvent::pressed(Button::Left));
        queue.push_event(ButtonEvent::pressed(Button::Right));
        queue.push_event(ButtonEvent::released(Button::Left));

        assert_eq!(queue.pop_event(), Ok(Some(ButtonEvent::pressed(Button::Right))));
        assert_eq!(queue.pop_event(), Ok(Some(ButtonEvent::released(Button::Left))));
        assert_eq!(queue.pop_event(), Err(QueueError::Empty));
    }

    #[test]
    fn test_pop_pair_needs_both_halves() {
        let mut queue = EventQueue::<4>::new();
        queue.push(Button::Up.bit());
        assert!(!queue.has_pair());
        assert_eq!(queue.pop_pair(), Err(QueueError::Empty));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_invalid_direction_code() {
        let mut queue = EventQueue::<4>::new();
        queue.push(Button::Up.bit());
        queue.push(7);
        assert_eq!(queue.pop_event(), Ok(None));
        assert!(queue.is_empty());
    }

    proptest! {
        #[test]
        fn prop_queueing_preserves_lines(
            events in proptest::collection::vec((0u8..32, 0u8..2), 0..32)
        ) {
            let mut queue = EventQueue::<64>::new();
            for &(id, code) in &events {
                queue.push(id);
                queue.push(code);
            }
            for &(id, code) in &events {
                let (got_id, got_code) = queue.pop_pair().unwrap();
                let got = format_event(got_id, got_code);
                let want = format_event(id, code);
                prop_assert_eq!(got.as_bytes(), want.as_bytes());
            }
            prop_assert!(queue.is_empty());
            prop_assert_eq!(queue.overwritten(), 0);
        }

        #[test]
        fn prop_overflow_yields_newest(values in proptest::collection::vec(any::<u8>(), 0..40)) {
            let mut queue = EventQueue::<8>::new();
            for &value in &values {
                queue.push(value);
            }
            let start = values.len().saturating_sub(8);
            for &expected in &values[start..] {
                prop_assert_eq!(queue.pop(), Ok(expected));
            }
            prop_assert_eq!(queue.pop(), Err(QueueError::Empty));
            prop_assert_eq!(queue.overwritten() as usize, start);
        }
    }
}
