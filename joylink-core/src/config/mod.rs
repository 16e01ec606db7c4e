//! Configuration types
//!
//! Board-agnostic description of how the bridge is wired: serial settings,
//! which pin carries each button and LED, and their polarity.

pub mod board;
pub mod pins;

pub use board::*;
pub use pins::*;
