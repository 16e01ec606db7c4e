//! Joylink Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the bridge logic is
//! written against. Chip-specific HALs (STM32F4, etc.) implement them so the
//! same event layer runs unchanged on host tests and on the board.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (joylink-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  joylink-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!            ┌─────────────────┐
//!            │  joylink-hal-   │
//!            │    stm32f4      │
//!            └─────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`uart::SerialRx`], [`uart::SerialTx`] - Polled serial communication

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{Compat, InputPin, OutputPin};
pub use uart::{Serial, SerialRx, SerialTx, UartConfig};
