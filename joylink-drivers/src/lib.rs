//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in joylink-core, built on the pin traits of joylink-hal:
//!
//! - LEDs with per-pin polarity, and the four-LED command bank
//! - Button panel folding individual inputs into one bitmask

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod led;

pub use button::{ButtonInput, ButtonPanel};
pub use led::{Led, LedSet};
