//! Pin configuration

/// Pin configuration with optional inversion
///
/// `inverted` means the signal is active-low: a lit LED or an engaged
/// button reads as a low pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO port letter ('A'..='H')
    pub port: char,
    /// Pin number within the port (0-15)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new active-high pin config
    pub const fn new(port: char, pin: u8) -> Self {
        Self {
            port,
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(port: char, pin: u8) -> Self {
        Self {
            port,
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Same pin with the internal pull-up enabled
    pub const fn with_pullup(self) -> Self {
        Self {
            pull_up: true,
            ..self
        }
    }

    /// Same pin with the given polarity
    pub const fn with_inverted(self, inverted: bool) -> Self {
        Self { inverted, ..self }
    }

    /// Check whether two configs name the same physical pin
    pub fn same_pin(&self, other: &PinConfig) -> bool {
        self.port == other.port && self.pin == other.pin
    }

    /// Parse a pin string
    ///
    /// Supports formats:
    /// - "PA0" -> port A, pin 0, active-high
    /// - "!PB3" -> port B, pin 3, active-low
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        let (s, inverted) = match s.strip_prefix('!') {
            Some(rest) => (rest, true),
            None => (s, false),
        };

        let rest = s.strip_prefix('P')?;
        let mut chars = rest.chars();
        let port = chars.next()?;
        if !('A'..='H').contains(&port) {
            return None;
        }

        let pin: u8 = chars.as_str().parse().ok()?;
        if pin > 15 {
            return None;
        }

        Some(Self::new(port, pin).with_inverted(inverted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(PinConfig::parse("PA6"), Some(PinConfig::new('A', 6)));
    }

    #[test]
    fn test_parse_inverted() {
        assert_eq!(PinConfig::parse(" !PC13 "), Some(PinConfig::inverted('C', 13)));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(PinConfig::parse("PZ1"), None);
        assert_eq!(PinConfig::parse("PA16"), None);
        assert_eq!(PinConfig::parse("A1"), None);
        assert_eq!(PinConfig::parse("PA"), None);
    }

    #[test]
    fn test_same_pin_ignores_polarity() {
        assert!(PinConfig::new('B', 0).same_pin(&PinConfig::inverted('B', 0).with_pullup()));
        assert!(!PinConfig::new('B', 0).same_pin(&PinConfig::new('A', 0)));
    }
}
