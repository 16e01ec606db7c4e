//! Button transition detection
//!
//! Compares two successive button bitmasks and yields one event per bit
//! that changed, in ascending bit order. Simultaneous changes are reported
//! independently; nothing is coalesced.

use joylink_protocol::{ButtonEvent, Direction};

use crate::queue::EventQueue;
use crate::ButtonBitmask;

/// Iterator over the transitions between two bitmasks
#[derive(Debug, Clone)]
pub struct Transitions {
    changed: ButtonBitmask,
    previous: ButtonBitmask,
}

impl Transitions {
    pub fn new(previous: ButtonBitmask, current: ButtonBitmask) -> Self {
        Self {
            changed: previous ^ current,
            previous,
        }
    }
}

impl Iterator for Transitions {
    type Item = ButtonEvent;

    fn next(&mut self) -> Option<ButtonEvent> {
        if self.changed == 0 {
            return None;
        }

        let bit = self.changed.trailing_zeros();
        let mask = 1 << bit;
        self.changed &= !mask;

        // A bit that was clear and flipped is now engaged
        let direction = if self.previous & mask == 0 {
            Direction::Pressed
        } else {
            Direction::Released
        };
        Some(ButtonEvent::new(bit as u8, direction))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.changed.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Transitions {}

/// Transitions from `previous` to `current`
pub fn detect(previous: ButtonBitmask, current: ButtonBitmask) -> Transitions {
    Transitions::new(previous, current)
}

/// Push every transition onto the queue
///
/// Returns the number of events pushed.
pub fn record_transitions<const N: usize>(
    previous: ButtonBitmask,
    current: ButtonBitmask,
    queue: &mut EventQueue<N>,
) -> usize {
    let mut count = 0;
    for event in detect(previous, current) {
        queue.push_event(event);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use joylink_protocol::Button;
    use proptest::prelude::*;

    #[test]
    fn test_no_change() {
        assert_eq!(detect(0x2479, 0x2479).count(), 0);
    }

    #[test]
    fn test_left_pressed() {
        let events: Vec<_> = detect(0, Button::Left.mask()).collect();
        assert_eq!(events, [ButtonEvent::pressed(Button::Left)]);
    }

    #[test]
    fn test_user_released() {
        let events: Vec<_> = detect(Button::User.mask(), 0).collect();
        assert_eq!(events, [ButtonEvent::released(Button::User)]);
    }

    #[test]
    fn test_simultaneous_in_bit_order() {
        let previous = Button::Fire.mask();
        let current = Button::Mode.mask() | Button::Down.mask();
        let events: Vec<_> = detect(previous, current).collect();
        assert_eq!(
            events,
            [
                ButtonEvent::pressed(Button::Mode),
                ButtonEvent::pressed(Button::Down),
                ButtonEvent::released(Button::Fire),
            ]
        );
    }

    #[test]
    fn test_record_pushes_pairs() {
        let mut queue = EventQueue::<8>::new();
        let pushed = record_transitions(0, Button::Left.mask(), &mut queue);
        assert_eq!(pushed, 1);
        assert_eq!(queue.pop(), Ok(Button::Left.bit()));
        assert_eq!(queue.pop(), Ok(0));
        assert!(queue.is_empty());
    }

    proptest! {
        #[test]
        fn prop_one_event_per_changed_bit(previous in any::<u32>(), current in any::<u32>()) {
            let events: Vec<_> = detect(previous, current).collect();
            prop_assert_eq!(events.len() as u32, (previous ^ current).count_ones());

            for pair in events.windows(2) {
                prop_assert!(pair[0].id < pair[1].id);
            }
            for event in &events {
                let was_set = previous & (1 << event.id) != 0;
                let expected = if was_set { Direction::Released } else { Direction::Pressed };
                prop_assert_eq!(event.direction, expected);
            }
        }
    }
}
