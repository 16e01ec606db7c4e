//! Button events reported to the host

/// Buttons known to the protocol
///
/// Each button owns one bit of the polarity-normalized button bitmask. The
/// bit position doubles as the button identifier carried in events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// AT mode button (active-high)
    Mode,
    /// Joystick left
    Left,
    /// Joystick right
    Right,
    /// Joystick up
    Up,
    /// Joystick down
    Down,
    /// Joystick push
    Fire,
    /// Board user button
    User,
}

// Bitmask positions
const BIT_MODE: u8 = 0;
const BIT_LEFT: u8 = 3;
const BIT_RIGHT: u8 = 4;
const BIT_UP: u8 = 5;
const BIT_DOWN: u8 = 6;
const BIT_FIRE: u8 = 10;
const BIT_USER: u8 = 13;

/// Bits of the button bitmask that belong to a real button
pub const BUTTON_MASK: u32 = (1 << BIT_MODE)
    | (1 << BIT_LEFT)
    | (1 << BIT_RIGHT)
    | (1 << BIT_UP)
    | (1 << BIT_DOWN)
    | (1 << BIT_FIRE)
    | (1 << BIT_USER);

impl Button {
    /// Every button, in ascending bit order
    pub const ALL: [Button; 7] = [
        Button::Mode,
        Button::Left,
        Button::Right,
        Button::Up,
        Button::Down,
        Button::Fire,
        Button::User,
    ];

    /// Look up a button by its bit position
    pub fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            BIT_MODE => Some(Button::Mode),
            BIT_LEFT => Some(Button::Left),
            BIT_RIGHT => Some(Button::Right),
            BIT_UP => Some(Button::Up),
            BIT_DOWN => Some(Button::Down),
            BIT_FIRE => Some(Button::Fire),
            BIT_USER => Some(Button::User),
            _ => None,
        }
    }

    /// Bit position in the button bitmask
    pub const fn bit(self) -> u8 {
        match self {
            Button::Mode => BIT_MODE,
            Button::Left => BIT_LEFT,
            Button::Right => BIT_RIGHT,
            Button::Up => BIT_UP,
            Button::Down => BIT_DOWN,
            Button::Fire => BIT_FIRE,
            Button::User => BIT_USER,
        }
    }

    /// Single-bit mask for this button
    pub const fn mask(self) -> u32 {
        1 << self.bit()
    }

    /// Name printed in event lines
    pub const fn name(self) -> &'static str {
        match self {
            Button::Mode => "MODE",
            Button::Left => "LEFT",
            Button::Right => "RIGHT",
            Button::Up => "UP",
            Button::Down => "DOWN",
            Button::Fire => "FIRE",
            Button::User => "USER",
        }
    }
}

/// Which way a button moved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Button became engaged
    Pressed,
    /// Button was let go
    Released,
}

// Wire format values, as stored in the event queue
const DIRECTION_PRESSED: u8 = 0;
const DIRECTION_RELEASED: u8 = 1;

impl Direction {
    /// Parse a direction from its queue code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            DIRECTION_PRESSED => Some(Direction::Pressed),
            DIRECTION_RELEASED => Some(Direction::Released),
            _ => None,
        }
    }

    /// Convert to queue code
    pub const fn code(self) -> u8 {
        match self {
            Direction::Pressed => DIRECTION_PRESSED,
            Direction::Released => DIRECTION_RELEASED,
        }
    }

    /// Status word printed in event lines
    pub const fn status(self) -> &'static str {
        match self {
            Direction::Pressed => "PRESSED",
            Direction::Released => "RELEASED",
        }
    }
}

/// A single button transition
///
/// `id` is a raw bit position rather than a [`Button`]. An id with no
/// button name that reaches the line formatter renders as `ERR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub id: u8,
    pub direction: Direction,
}

impl ButtonEvent {
    pub fn new(id: u8, direction: Direction) -> Self {
        Self { id, direction }
    }

    pub fn pressed(button: Button) -> Self {
        Self::new(button.bit(), Direction::Pressed)
    }

    pub fn released(button: Button) -> Self {
        Self::new(button.bit(), Direction::Released)
    }

    /// The button this event refers to, if the id is mapped
    pub fn button(&self) -> Option<Button> {
        Button::from_bit(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_roundtrip() {
        for button in Button::ALL {
            assert_eq!(Button::from_bit(button.bit()), Some(button));
        }
    }

    #[test]
    fn test_mask_covers_all_buttons() {
        let mask = Button::ALL.iter().fold(0u32, |acc, b| acc | b.mask());
        assert_eq!(mask, BUTTON_MASK);
        assert_eq!(BUTTON_MASK, 0x2479);
    }

    #[test]
    fn test_unknown_bit() {
        assert!(Button::from_bit(1).is_none());
        assert!(Button::from_bit(31).is_none());
    }

    #[test]
    fn test_direction_codes() {
        assert_eq!(Direction::Pressed.code(), 0);
        assert_eq!(Direction::Released.code(), 1);
        assert_eq!(Direction::from_code(1), Some(Direction::Released));
        assert!(Direction::from_code(2).is_none());
    }

    #[test]
    fn test_event_button() {
        assert_eq!(ButtonEvent::pressed(Button::Left).button(), Some(Button::Left));
        assert_eq!(ButtonEvent::new(2, Direction::Pressed).button(), None);
    }
}
