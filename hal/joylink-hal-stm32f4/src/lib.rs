//! STM32F4-specific HAL for the Joylink firmware
//!
//! This crate implements the `joylink-hal` traits on top of embassy-stm32
//! for STM32F4 series chips, including:
//!
//! - STM32F411RE (Nucleo-F411RE, the reference board)
//! - STM32F401RE
//!
//! # Features
//!
//! - `stm32f411re` / `stm32f401re` - Select the chip
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! Peripherals are set up with embassy-stm32 in blocking mode. The bridge
//! then polls the USART status flags directly, so no interrupt or DMA
//! channel is claimed.

#![no_std]

pub mod gpio;
pub mod uart;

pub use gpio::{button_input, led_output, ButtonPin, LedPin};
pub use uart::{uart_config, PolledUart, UartBusError};
