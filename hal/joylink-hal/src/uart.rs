//! UART serial communication abstractions
//!
//! The bridge drives the serial line by polling: every loop tick checks a
//! ready flag and moves at most one byte, so these traits never block.

/// UART receiver
pub trait SerialRx {
    /// Check whether a received byte is waiting to be read
    fn is_readable(&mut self) -> bool;

    /// Read the waiting byte
    ///
    /// Only meaningful after [`SerialRx::is_readable`] returned true.
    fn read_byte(&mut self) -> u8;

    /// Read a byte if one is waiting
    fn try_read_byte(&mut self) -> Option<u8> {
        if self.is_readable() {
            Some(self.read_byte())
        } else {
            None
        }
    }
}

/// UART transmitter
pub trait SerialTx {
    /// Check whether the transmitter can accept another byte
    fn is_writable(&mut self) -> bool;

    /// Hand one byte to the transmitter
    ///
    /// Only meaningful after [`SerialTx::is_writable`] returned true.
    fn write_byte(&mut self, byte: u8);
}

/// Combined UART interface
///
/// For UARTs that provide both TX and RX on a single peripheral.
pub trait Serial: SerialTx + SerialRx {}

// Blanket implementation
impl<T: SerialTx + SerialRx> Serial for T {}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl UartConfig {
    /// 8N1 at the given baud rate
    pub const fn with_baudrate(baudrate: u32) -> Self {
        Self {
            baudrate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::with_baudrate(9600)
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneByte {
        pending: Option<u8>,
    }

    impl SerialRx for OneByte {
        fn is_readable(&mut self) -> bool {
            self.pending.is_some()
        }

        fn read_byte(&mut self) -> u8 {
            self.pending.take().unwrap_or(0)
        }
    }

    #[test]
    fn test_default_is_9600_8n1() {
        let config = UartConfig::default();
        assert_eq!(config.baudrate, 9600);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }

    #[test]
    fn test_try_read_byte() {
        let mut rx = OneByte { pending: Some(b'L') };
        assert_eq!(rx.try_read_byte(), Some(b'L'));
        assert_eq!(rx.try_read_byte(), None);
    }
}
