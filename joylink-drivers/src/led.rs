//! GPIO LED output
//!
//! LEDs wired straight to a GPIO pin, either sourcing current (active-high)
//! or sinking it (active-low, e.g. a common-anode RGB LED).

use joylink_core::traits::{LedBank, LedDriver};
use joylink_hal::OutputPin;
use joylink_protocol::{LedAction, LedId};

/// GPIO LED
pub struct Led<P> {
    pin: P,
    /// If true, LED ON = pin LOW
    inverted: bool,
}

impl<P: OutputPin> Led<P> {
    /// Create a new LED, initially off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the LED lights when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self { pin, inverted };
        led.off();
        led
    }

    /// Create a new LED with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new LED with active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Release the pin
    pub fn into_pin(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> LedDriver for Led<P> {
    fn on(&mut self) {
        // Normal: high; inverted: low
        self.pin.set_state(!self.inverted);
    }

    fn off(&mut self) {
        self.pin.set_state(self.inverted);
    }

    fn flip(&mut self) {
        self.pin.toggle();
    }

    fn is_on(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }
}

/// The four command-addressable LEDs
pub struct LedSet<P> {
    pub red: Led<P>,
    pub green: Led<P>,
    pub blue: Led<P>,
    pub secondary_green: Led<P>,
}

impl<P: OutputPin> LedSet<P> {
    /// Look up the LED for an identifier
    pub fn get_mut(&mut self, led: LedId) -> &mut Led<P> {
        match led {
            LedId::Red => &mut self.red,
            LedId::Green => &mut self.green,
            LedId::Blue => &mut self.blue,
            LedId::SecondaryGreen => &mut self.secondary_green,
        }
    }

    pub fn get(&self, led: LedId) -> &Led<P> {
        match led {
            LedId::Red => &self.red,
            LedId::Green => &self.green,
            LedId::Blue => &self.blue,
            LedId::SecondaryGreen => &self.secondary_green,
        }
    }
}

impl<P: OutputPin> LedBank for LedSet<P> {
    fn apply(&mut self, led: LedId, action: LedAction) {
        self.get_mut(led).apply(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn toggle(&mut self) {
            self.high = !self.high;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn led_set() -> LedSet<MockPin> {
        LedSet {
            red: Led::new_active_low(MockPin::new()),
            green: Led::new_active_low(MockPin::new()),
            blue: Led::new_active_low(MockPin::new()),
            secondary_green: Led::new_active_high(MockPin::new()),
        }
    }

    #[test]
    fn test_active_high_led() {
        let mut led = Led::new_active_high(MockPin::new());

        // Initially off
        assert!(!led.is_on());
        assert!(!led.pin.is_set_high());

        led.on();
        assert!(led.is_on());
        assert!(led.pin.is_set_high());

        led.off();
        assert!(!led.is_on());
        assert!(!led.pin.is_set_high());
    }

    #[test]
    fn test_active_low_led() {
        let mut led = Led::new_active_low(MockPin::new());

        // Initially off (pin is high for active-low)
        assert!(!led.is_on());
        assert!(led.pin.is_set_high());

        // Turn on (pin goes low for active-low)
        led.on();
        assert!(led.is_on());
        assert!(!led.pin.is_set_high());
    }

    #[test]
    fn test_flip() {
        let mut led = Led::new_active_low(MockPin::new());
        led.flip();
        assert!(led.is_on());
        led.flip();
        assert!(!led.is_on());
    }

    #[test]
    fn test_bank_routes_commands() {
        let mut leds = led_set();

        leds.apply(LedId::Red, LedAction::On);
        assert!(leds.red.is_on());
        assert!(!leds.red.pin.is_set_high());
        assert!(!leds.green.is_on());

        leds.apply(LedId::SecondaryGreen, LedAction::Toggle);
        assert!(leds.secondary_green.is_on());
        assert!(leds.secondary_green.pin.is_set_high());

        leds.apply(LedId::SecondaryGreen, LedAction::Off);
        assert!(!leds.get(LedId::SecondaryGreen).is_on());
    }

    #[test]
    fn test_all_off() {
        let mut leds = led_set();
        for led in LedId::ALL {
            leds.apply(led, LedAction::On);
        }
        leds.all_off();
        assert!(LedId::ALL.iter().all(|&led| !leds.get(led).is_on()));
    }
}
