//! Scheduler loop
//!
//! A single-threaded, cooperative step that the firmware calls forever.
//! Each tick does three non-blocking check-then-act steps in a fixed order:
//! receive, sample buttons, transmit.

pub mod bridge;

pub use bridge::{Bridge, TickReport};
