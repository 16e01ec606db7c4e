//! Board wiring and runtime settings

use joylink_hal::UartConfig;
use joylink_protocol::{Button, LedId};

use super::pins::PinConfig;

/// Default interval between queue status log lines
pub const DEFAULT_STATUS_INTERVAL_MS: u32 = 5_000;

/// Number of buttons on the board
pub const BUTTON_COUNT: usize = Button::ALL.len();

/// Number of command-addressable LEDs
pub const LED_COUNT: usize = LedId::ALL.len();

/// Errors found when validating a board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Baud rate of zero
    InvalidBaudrate,
    /// Two lines share a physical pin
    PinConflict,
    /// A button is listed twice
    DuplicateButton(Button),
    /// An LED is listed twice
    DuplicateLed(LedId),
}

/// A button and the pin it is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLine {
    pub button: Button,
    pub pin: PinConfig,
}

/// An LED and the pin it is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedLine {
    pub led: LedId,
    pub pin: PinConfig,
}

/// Complete board description
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Host serial link settings
    pub serial: UartConfig,
    /// Interval between queue status log lines (ms)
    pub status_interval_ms: u32,
    /// Button wiring, one entry per button
    pub buttons: [ButtonLine; BUTTON_COUNT],
    /// LED wiring, one entry per LED
    pub leds: [LedLine; LED_COUNT],
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::nucleo_f411()
    }
}

impl BoardConfig {
    /// Nucleo-F411RE with a joystick shield and an RGB LED
    ///
    /// The joystick and user button pull their pins low when pressed; the
    /// AT mode button drives high. The RGB LED is common-anode (active-low)
    /// while the board LED on PA5 is active-high.
    pub const fn nucleo_f411() -> Self {
        Self {
            serial: UartConfig::with_baudrate(9600),
            status_interval_ms: DEFAULT_STATUS_INTERVAL_MS,
            buttons: [
                ButtonLine { button: Button::Mode, pin: PinConfig::new('A', 0) },
                ButtonLine { button: Button::Left, pin: PinConfig::inverted('B', 3) },
                ButtonLine { button: Button::Right, pin: PinConfig::inverted('B', 4) },
                ButtonLine { button: Button::Up, pin: PinConfig::inverted('B', 5) },
                ButtonLine { button: Button::Down, pin: PinConfig::inverted('B', 6) },
                ButtonLine { button: Button::Fire, pin: PinConfig::inverted('B', 10) },
                ButtonLine { button: Button::User, pin: PinConfig::inverted('C', 13) },
            ],
            leds: [
                LedLine { led: LedId::Red, pin: PinConfig::inverted('A', 6) },
                LedLine { led: LedId::Green, pin: PinConfig::inverted('A', 7) },
                LedLine { led: LedId::Blue, pin: PinConfig::inverted('B', 0) },
                LedLine { led: LedId::SecondaryGreen, pin: PinConfig::new('A', 5) },
            ],
        }
    }

    /// Wiring of one button
    pub fn button(&self, button: Button) -> Option<&ButtonLine> {
        self.buttons.iter().find(|line| line.button == button)
    }

    /// Wiring of one LED
    pub fn led(&self, led: LedId) -> Option<&LedLine> {
        self.leds.iter().find(|line| line.led == led)
    }

    /// Set the polarity of one button
    pub fn set_button_inverted(&mut self, button: Button, inverted: bool) {
        if let Some(line) = self.buttons.iter_mut().find(|line| line.button == button) {
            line.pin = line.pin.with_inverted(inverted);
        }
    }

    /// Set the polarity of one LED
    pub fn set_led_inverted(&mut self, led: LedId, inverted: bool) {
        if let Some(line) = self.leds.iter_mut().find(|line| line.led == led) {
            line.pin = line.pin.with_inverted(inverted);
        }
    }

    /// Check the configuration for wiring mistakes
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.serial.baudrate == 0 {
            return Err(ConfigError::InvalidBaudrate);
        }

        for (i, line) in self.buttons.iter().enumerate() {
            if self.buttons[..i].iter().any(|other| other.button == line.button) {
                return Err(ConfigError::DuplicateButton(line.button));
            }
        }

        for (i, line) in self.leds.iter().enumerate() {
            if self.leds[..i].iter().any(|other| other.led == line.led) {
                return Err(ConfigError::DuplicateLed(line.led));
            }
        }

        let mut pins = self
            .buttons
            .iter()
            .map(|line| line.pin)
            .chain(self.leds.iter().map(|line| line.pin));
        while let Some(pin) = pins.next() {
            if pins.clone().any(|other| other.same_pin(&pin)) {
                return Err(ConfigError::PinConflict);
            }
        }

        Ok(())
    }
}
