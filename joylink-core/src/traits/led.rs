//! LED output traits

use joylink_protocol::{Command, LedAction, LedId};

/// A single LED
///
/// Works in logical terms: `on` lights the LED whatever the wiring polarity.
pub trait LedDriver {
    /// Light the LED
    fn on(&mut self);

    /// Extinguish the LED
    fn off(&mut self);

    /// Invert the current output state
    fn flip(&mut self);

    /// Check if the LED is currently lit
    fn is_on(&self) -> bool;

    /// Perform a command action
    fn apply(&mut self, action: LedAction) {
        match action {
            LedAction::On => self.on(),
            LedAction::Off => self.off(),
            LedAction::Toggle => self.flip(),
        }
    }
}

/// The set of LEDs addressable by commands
///
/// Every [`LedId`] maps to exactly one LED.
pub trait LedBank {
    /// Perform `action` on the LED named by `led`
    fn apply(&mut self, led: LedId, action: LedAction);

    /// Execute a decoded command
    fn execute(&mut self, command: Command) {
        self.apply(command.led, command.action);
    }

    /// Turn every LED off
    fn all_off(&mut self) {
        for led in LedId::ALL {
            self.apply(led, LedAction::Off);
        }
    }
}

impl<T: LedBank + ?Sized> LedBank for &mut T {
    fn apply(&mut self, led: LedId, action: LedAction) {
        (**self).apply(led, action);
    }
}
