//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs, plus [`Compat`] for pins that already implement the
//! `embedded-hal` 1.0 digital traits with an infallible error type.

use core::convert::Infallible;

use embedded_hal::digital::{InputPin as EhInputPin, OutputPin as EhOutputPin, StatefulOutputPin};

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Toggle the pin state
    fn toggle(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Reads take `&mut self`, matching `embedded-hal` 1.0.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Adapter from `embedded-hal` 1.0 pins to the traits of this crate
///
/// Only pins whose operations cannot fail are accepted, which covers
/// memory-mapped GPIO on every supported chip. `embedded-hal` reads output
/// state through `&mut self`, so the commanded level is mirrored here.
#[derive(Debug)]
pub struct Compat<P> {
    pin: P,
    high: bool,
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl<P: StatefulOutputPin<Error = Infallible>> Compat<P> {
    /// Wrap an output pin, capturing its current level
    pub fn output(mut pin: P) -> Self {
        let high = infallible(StatefulOutputPin::is_set_high(&mut pin));
        Self { pin, high }
    }
}

impl<P: EhInputPin<Error = Infallible>> Compat<P> {
    /// Wrap an input pin
    pub fn input(pin: P) -> Self {
        Self { pin, high: false }
    }
}

impl<P> Compat<P> {
    /// Unwrap the inner pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for Compat<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        infallible(EhOutputPin::set_high(&mut self.pin));
        self.high = true;
    }

    fn set_low(&mut self) {
        infallible(EhOutputPin::set_low(&mut self.pin));
        self.high = false;
    }

    fn toggle(&mut self) {
        infallible(StatefulOutputPin::toggle(&mut self.pin));
        self.high = !self.high;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

impl<P> InputPin for Compat<P>
where
    P: EhInputPin<Error = Infallible>,
{
    fn is_high(&mut self) -> bool {
        infallible(EhInputPin::is_high(&mut self.pin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    /// Mock embedded-hal pin for testing
    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl EhOutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    impl StatefulOutputPin for MockPin {
        fn is_set_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high)
        }
    }

    impl EhInputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high)
        }
    }

    #[test]
    fn test_output_captures_initial_level() {
        let pin = Compat::output(MockPin { high: true });
        assert!(pin.is_set_high());
    }

    #[test]
    fn test_output_toggle_tracks_pin() {
        let mut pin = Compat::output(MockPin { high: false });
        pin.toggle();
        assert!(pin.is_set_high());
        assert!(pin.into_inner().high);
    }

    #[test]
    fn test_set_state() {
        let mut pin = Compat::output(MockPin { high: true });
        pin.set_state(false);
        assert!(!pin.is_set_high());
        pin.set_state(true);
        assert!(pin.is_set_high());
    }

    #[test]
    fn test_input_reads_pin() {
        let mut pin = Compat::input(MockPin { high: false });
        assert!(pin.is_low());
        let mut pin = Compat::input(MockPin { high: true });
        assert!(pin.is_high());
    }
}
