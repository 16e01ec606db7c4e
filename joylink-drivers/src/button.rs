//! GPIO button panel
//!
//! Samples every button pin and folds the results into the bitmask the
//! bridge works with. Active-low buttons are inverted here so that a set
//! bit always means "engaged".

use heapless::Vec;

use joylink_core::config::{ButtonLine, BUTTON_COUNT};
use joylink_core::traits::ButtonSource;
use joylink_core::ButtonBitmask;
use joylink_hal::InputPin;
use joylink_protocol::Button;

/// One button pin
pub struct ButtonInput<P> {
    button: Button,
    pin: P,
    /// If true, pressed = pin LOW
    inverted: bool,
}

impl<P: InputPin> ButtonInput<P> {
    pub fn new(button: Button, pin: P, inverted: bool) -> Self {
        Self {
            button,
            pin,
            inverted,
        }
    }

    /// Build from a configured line
    pub fn from_line(line: &ButtonLine, pin: P) -> Self {
        Self::new(line.button, pin, line.pin.inverted)
    }

    pub fn button(&self) -> Button {
        self.button
    }

    /// Check if the button is engaged right now
    pub fn is_engaged(&mut self) -> bool {
        self.pin.is_high() != self.inverted
    }
}

/// All buttons of the board
pub struct ButtonPanel<P> {
    inputs: Vec<ButtonInput<P>, BUTTON_COUNT>,
}

impl<P: InputPin> Default for ButtonPanel<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: InputPin> ButtonPanel<P> {
    /// Create an empty panel
    pub fn new() -> Self {
        Self { inputs: Vec::new() }
    }

    /// Add a button
    ///
    /// Hands the input back if the panel already holds one input per button.
    pub fn add(&mut self, input: ButtonInput<P>) -> Result<(), ButtonInput<P>> {
        self.inputs.push(input)
    }

    /// Builder-style [`ButtonPanel::add`]
    pub fn with(mut self, input: ButtonInput<P>) -> Result<Self, ButtonInput<P>> {
        self.add(input)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl<P: InputPin> ButtonSource for ButtonPanel<P> {
    fn read_bitmask(&mut self) -> ButtonBitmask {
        self.inputs
            .iter_mut()
            .filter_map(|input| input.is_engaged().then(|| input.button.mask()))
            .fold(0, |acc, mask| acc | mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joylink_core::config::BoardConfig;

    /// Mock input pin for testing
    #[derive(Clone, Copy)]
    struct MockPin {
        high: bool,
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_polarity_normalized() {
        let mut panel = ButtonPanel::new()
            .with(ButtonInput::new(Button::Mode, MockPin { high: true }, false))
            .ok()
            .unwrap()
            .with(ButtonInput::new(Button::Left, MockPin { high: false }, true))
            .ok()
            .unwrap()
            .with(ButtonInput::new(Button::User, MockPin { high: true }, true))
            .ok()
            .unwrap();

        assert_eq!(panel.len(), 3);
        assert_eq!(
            panel.read_bitmask(),
            Button::Mode.mask() | Button::Left.mask()
        );
    }

    #[test]
    fn test_idle_board_reads_zero() {
        // Active-low pins idle high, active-high pins idle low
        let config = BoardConfig::nucleo_f411();
        let mut panel = ButtonPanel::new();
        for line in &config.buttons {
            let idle = MockPin { high: line.pin.inverted };
            assert!(panel.add(ButtonInput::from_line(line, idle)).is_ok());
        }
        assert_eq!(panel.read_bitmask(), 0);
    }

    #[test]
    fn test_panel_full() {
        let config = BoardConfig::nucleo_f411();
        let mut panel = ButtonPanel::new();
        for line in &config.buttons {
            assert!(panel.add(ButtonInput::from_line(line, MockPin { high: true })).is_ok());
        }
        let extra = ButtonInput::new(Button::Fire, MockPin { high: true }, false);
        assert!(panel.add(extra).is_err());
    }
}
