//! Board-agnostic event layer for the button/LED bridge
//!
//! This crate contains all bridge logic that does not depend on
//! specific hardware implementations:
//!
//! - Application traits (LED bank, button source)
//! - Event queue between button scanning and serial transmit
//! - Button transition detection
//! - Scheduler loop state and the per-tick step
//! - Board configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod queue;
pub mod scheduler;
pub mod traits;
pub mod transition;

/// Polarity-normalized button state: bit *i* set means button *i* is engaged
pub type ButtonBitmask = u32;
