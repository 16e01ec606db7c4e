//! Polled USART for STM32F4
//!
//! embassy-stm32 configures the peripheral (clocks, pins, baud rate); this
//! module then drives it one byte at a time by checking RXNE/TXE, the same
//! ready flags the bridge loop expects.

use embassy_stm32::mode::Blocking;
use embassy_stm32::pac;
use embassy_stm32::usart::{self, ConfigError, Uart};

use joylink_hal::uart::{DataBits, Parity, StopBits};
use joylink_hal::{SerialRx, SerialTx, UartConfig};

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Framing error
    Framing,
    /// Noise error
    Noise,
    /// Overrun error
    Overrun,
    /// Parity error
    Parity,
    /// Settings the peripheral cannot produce
    Unsupported,
}

impl From<usart::Error> for UartBusError {
    fn from(e: usart::Error) -> Self {
        match e {
            usart::Error::Framing => UartBusError::Framing,
            usart::Error::Noise => UartBusError::Noise,
            usart::Error::Overrun => UartBusError::Overrun,
            usart::Error::Parity => UartBusError::Parity,
            _ => UartBusError::Unsupported,
        }
    }
}

impl From<ConfigError> for UartBusError {
    fn from(_: ConfigError) -> Self {
        UartBusError::Unsupported
    }
}

/// Convert a board UART config into the embassy-stm32 equivalent
pub fn uart_config(config: &UartConfig) -> Result<usart::Config, UartBusError> {
    let mut out = usart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Eight => usart::DataBits::DataBits8,
        DataBits::Nine => usart::DataBits::DataBits9,
        DataBits::Seven => return Err(UartBusError::Unsupported),
    };
    out.parity = match config.parity {
        Parity::None => usart::Parity::ParityNone,
        Parity::Even => usart::Parity::ParityEven,
        Parity::Odd => usart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => usart::StopBits::STOP1,
        StopBits::Two => usart::StopBits::STOP2,
    };
    Ok(out)
}

/// USART driven by status-flag polling
pub struct PolledUart<'d> {
    // Keeps the peripheral, its pins and its clock claimed
    _uart: Uart<'d, Blocking>,
    regs: pac::usart::Usart,
}

impl<'d> PolledUart<'d> {
    /// Wrap a configured blocking UART
    ///
    /// `regs` must be the register block of the same peripheral, e.g.
    /// `pac::USART2` for a UART built from `p.USART2`.
    pub fn new(uart: Uart<'d, Blocking>, regs: pac::usart::Usart) -> Self {
        Self { _uart: uart, regs }
    }

    /// Line error flagged alongside the pending byte, if any
    ///
    /// The flags clear once the byte is read.
    pub fn line_error(&self) -> Option<UartBusError> {
        let sr = self.regs.sr().read();
        if sr.ore() {
            Some(UartBusError::Overrun)
        } else if sr.fe() {
            Some(UartBusError::Framing)
        } else if sr.ne() {
            Some(UartBusError::Noise)
        } else if sr.pe() {
            Some(UartBusError::Parity)
        } else {
            None
        }
    }
}

impl SerialRx for PolledUart<'_> {
    fn is_readable(&mut self) -> bool {
        self.regs.sr().read().rxne()
    }

    fn read_byte(&mut self) -> u8 {
        self.regs.dr().read().dr() as u8
    }
}

impl SerialTx for PolledUart<'_> {
    fn is_writable(&mut self) -> bool {
        self.regs.sr().read().txe()
    }

    fn write_byte(&mut self, byte: u8) {
        self.regs.dr().write(|w| w.set_dr(byte as u16));
    }
}
