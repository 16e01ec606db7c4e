//! Event line formatting
//!
//! Renders a queued (id, direction code) pair into `"<NAME> <STATUS>\r\n"`
//! and hands the line out one byte at a time to the transmitter.

use heapless::Vec;

use crate::events::{Button, Direction};

/// Fallback token for unmapped ids and direction codes
const UNKNOWN: &str = "ERR";

const LINE_END: &[u8] = b"\r\n";

/// Longest possible event line ("RIGHT RELEASED\r\n")
pub const MAX_LINE_LEN: usize = longest_name() + 1 + longest_status() + LINE_END.len();

const fn longest_name() -> usize {
    let mut longest = UNKNOWN.len();
    let mut i = 0;
    while i < Button::ALL.len() {
        let len = Button::ALL[i].name().len();
        if len > longest {
            longest = len;
        }
        i += 1;
    }
    longest
}

const fn longest_status() -> usize {
    let pressed = Direction::Pressed.status().len();
    let released = Direction::Released.status().len();
    if pressed > released {
        pressed
    } else {
        released
    }
}

/// The line currently being transmitted
///
/// Holds at most one line plus a cursor to the next unsent byte. An empty
/// or fully sent line is "drained" and may be refilled.
#[derive(Debug, Clone, Default)]
pub struct OutputLine {
    bytes: Vec<u8, MAX_LINE_LEN>,
    cursor: usize,
}

impl OutputLine {
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            cursor: 0,
        }
    }

    /// Replace the contents with the line for one event and rewind
    pub fn format(&mut self, id: u8, direction_code: u8) {
        let name = Button::from_bit(id).map_or(UNKNOWN, Button::name);
        let status = Direction::from_code(direction_code).map_or(UNKNOWN, Direction::status);

        self.bytes.clear();
        self.cursor = 0;
        // MAX_LINE_LEN is derived from the same tables
        let fits = self.bytes.extend_from_slice(name.as_bytes()).is_ok()
            && self.bytes.push(b' ').is_ok()
            && self.bytes.extend_from_slice(status.as_bytes()).is_ok()
            && self.bytes.extend_from_slice(LINE_END).is_ok();
        debug_assert!(fits, "event line longer than MAX_LINE_LEN");
    }

    /// True once every byte of the current line has been taken
    pub fn is_drained(&self) -> bool {
        self.cursor >= self.bytes.len()
    }

    /// Take the next unsent byte, advancing the cursor
    pub fn next_byte(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(byte)
    }

    /// Bytes not yet taken
    pub fn remaining(&self) -> &[u8] {
        &self.bytes[self.cursor.min(self.bytes.len())..]
    }

    /// The whole current line, sent or not
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Format one event into a fresh line
pub fn format_event(id: u8, direction_code: u8) -> OutputLine {
    let mut line = OutputLine::new();
    line.format(id, direction_code);
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_max_line_len() {
        assert_eq!(MAX_LINE_LEN, "RIGHT RELEASED\r\n".len());
    }

    #[test]
    fn test_left_pressed() {
        let line = format_event(Button::Left.bit(), 0);
        assert_eq!(line.as_bytes(), b"LEFT PRESSED\r\n");
    }

    #[test]
    fn test_user_released() {
        let line = format_event(Button::User.bit(), 1);
        assert_eq!(line.as_bytes(), b"USER RELEASED\r\n");
    }

    #[test]
    fn test_unknown_id() {
        let line = format_event(7, 0);
        assert_eq!(line.as_bytes(), b"ERR PRESSED\r\n");
    }

    #[test]
    fn test_unknown_direction() {
        let line = format_event(Button::Fire.bit(), 2);
        assert_eq!(line.as_bytes(), b"FIRE ERR\r\n");
    }

    #[test]
    fn test_drain_bytes_in_order() {
        let mut line = format_event(Button::Up.bit(), 0);
        let mut sent = heapless::Vec::<u8, MAX_LINE_LEN>::new();
        while let Some(byte) = line.next_byte() {
            sent.push(byte).unwrap();
        }
        assert_eq!(sent.as_slice(), b"UP PRESSED\r\n");
        assert!(line.is_drained());
        assert!(line.remaining().is_empty());
    }

    #[test]
    fn test_new_line_is_drained() {
        let mut line = OutputLine::new();
        assert!(line.is_drained());
        assert_eq!(line.next_byte(), None);
    }

    #[test]
    fn test_reformat_rewinds() {
        let mut line = format_event(Button::Mode.bit(), 0);
        line.next_byte();
        line.format(Button::Down.bit(), 1);
        assert_eq!(line.remaining(), b"DOWN RELEASED\r\n");
    }

    #[test]
    fn test_every_name_and_status_fits() {
        let ids = Button::ALL.iter().map(|b| b.bit()).chain([1, 31, 255]);
        for id in ids {
            for code in [0, 1, 2] {
                let line = format_event(id, code);
                assert!(line.as_bytes().len() <= MAX_LINE_LEN);
                assert!(line.as_bytes().ends_with(LINE_END));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_format_is_total(id in any::<u8>(), code in any::<u8>()) {
            let line = format_event(id, code);
            let bytes = line.as_bytes();
            prop_assert!(bytes.len() > LINE_END.len());
            prop_assert!(bytes.len() <= MAX_LINE_LEN);
            prop_assert!(bytes.ends_with(LINE_END));
        }
    }
}
