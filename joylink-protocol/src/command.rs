//! LED command frames received from the host
//!
//! Frame format (exactly 3 bytes, no checksum):
//! - MARKER (1 byte): `'L'`
//! - LED (1 byte): `'R'` red, `'G'` green, `'B'` blue, `'g'` secondary green
//! - ACTION (1 byte): `'1'` on, `'0'` off, `'T'` toggle
//!
//! A marker byte arriving mid-frame discards the partial frame and starts a
//! new one. Unknown LED or action bytes turn the frame into a no-op.

/// Frame synchronization byte
pub const COMMAND_MARKER: u8 = b'L';

/// Number of bytes in a command frame
pub const COMMAND_LEN: usize = 3;

/// LEDs addressable by commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedId {
    Red,
    Green,
    Blue,
    /// Board LED, separate from the RGB cluster
    SecondaryGreen,
}

// Wire format values
const LED_RED: u8 = b'R';
const LED_GREEN: u8 = b'G';
const LED_BLUE: u8 = b'B';
const LED_SECONDARY_GREEN: u8 = b'g';

impl LedId {
    pub const ALL: [LedId; 4] = [LedId::Red, LedId::Green, LedId::Blue, LedId::SecondaryGreen];

    /// Parse an LED from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            LED_RED => Some(LedId::Red),
            LED_GREEN => Some(LedId::Green),
            LED_BLUE => Some(LedId::Blue),
            LED_SECONDARY_GREEN => Some(LedId::SecondaryGreen),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            LedId::Red => LED_RED,
            LedId::Green => LED_GREEN,
            LedId::Blue => LED_BLUE,
            LedId::SecondaryGreen => LED_SECONDARY_GREEN,
        }
    }
}

/// What to do with the addressed LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedAction {
    On,
    Off,
    Toggle,
}

const ACTION_ON: u8 = b'1';
const ACTION_OFF: u8 = b'0';
const ACTION_TOGGLE: u8 = b'T';

impl LedAction {
    /// Parse an action from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            ACTION_ON => Some(LedAction::On),
            ACTION_OFF => Some(LedAction::Off),
            ACTION_TOGGLE => Some(LedAction::Toggle),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            LedAction::On => ACTION_ON,
            LedAction::Off => ACTION_OFF,
            LedAction::Toggle => ACTION_TOGGLE,
        }
    }
}

/// A complete, raw command frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandFrame(pub [u8; COMMAND_LEN]);

impl CommandFrame {
    pub fn marker(&self) -> u8 {
        self.0[0]
    }

    pub fn led(&self) -> u8 {
        self.0[1]
    }

    pub fn action(&self) -> u8 {
        self.0[2]
    }
}

/// A recognized LED command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    pub led: LedId,
    pub action: LedAction,
}

impl Command {
    pub fn new(led: LedId, action: LedAction) -> Self {
        Self { led, action }
    }

    /// Decode a frame
    ///
    /// Returns `None` for anything that is not a well-formed command; those
    /// frames are dropped without a reply.
    pub fn from_frame(frame: &CommandFrame) -> Option<Self> {
        if frame.marker() != COMMAND_MARKER {
            return None;
        }
        let action = LedAction::from_byte(frame.action())?;
        let led = LedId::from_byte(frame.led())?;
        Some(Self { led, action })
    }

    /// Encode as a frame
    pub fn to_frame(self) -> CommandFrame {
        CommandFrame([COMMAND_MARKER, self.led.to_byte(), self.action.to_byte()])
    }
}

/// State machine for parsing incoming command frames
#[derive(Debug, Clone)]
pub struct CommandParser {
    state: ParseState,
    frame: [u8; COMMAND_LEN],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Waiting for the marker byte
    Seeking,
    /// Marker seen, `usize` bytes of the frame held
    Collecting(usize),
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    /// Create a new command parser
    pub const fn new() -> Self {
        Self {
            state: ParseState::Seeking,
            frame: [0; COMMAND_LEN],
        }
    }

    /// Drop any partial frame
    pub fn reset(&mut self) {
        self.state = ParseState::Seeking;
        self.frame = [0; COMMAND_LEN];
    }

    /// True while a frame is partially collected
    pub fn is_collecting(&self) -> bool {
        matches!(self.state, ParseState::Collecting(_))
    }

    /// Feed a single byte to the parser
    ///
    /// Returns the frame once its third byte arrives. The frame is raw: use
    /// [`Command::from_frame`] to decode it.
    pub fn feed(&mut self, byte: u8) -> Option<CommandFrame> {
        if byte == COMMAND_MARKER {
            // Resynchronize on every marker, even mid-frame
            self.frame = [0; COMMAND_LEN];
            self.frame[0] = byte;
            self.state = ParseState::Collecting(1);
            return None;
        }

        match self.state {
            ParseState::Seeking => None,
            ParseState::Collecting(len) => {
                self.frame[len] = byte;
                let len = len + 1;
                if len == COMMAND_LEN {
                    let frame = CommandFrame(self.frame);
                    self.reset();
                    Some(frame)
                } else {
                    self.state = ParseState::Collecting(len);
                    None
                }
            }
        }
    }

    /// Feed bytes until a frame completes
    ///
    /// Returns the frame and how many bytes were consumed. Bytes after the
    /// completed frame are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Option<(CommandFrame, usize)> {
        for (i, &byte) in bytes.iter().enumerate() {
            if let Some(frame) = self.feed(byte) {
                return Some((frame, i + 1));
            }
        }
        None
    }
}
