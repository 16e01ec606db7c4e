//! Hardware abstraction traits
//!
//! These traits define the interface between the bridge logic
//! and hardware-specific implementations.

pub mod buttons;
pub mod led;

pub use buttons::ButtonSource;
pub use led::{LedBank, LedDriver};
