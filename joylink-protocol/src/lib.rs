//! Joylink Serial Line Protocol
//!
//! This crate defines the text protocol spoken over the UART between the
//! board and a host terminal. There is no framing beyond what is shown
//! here: no checksums and no acknowledgments.
//!
//! # Inbound: LED commands
//!
//! ```text
//! ┌────────┬────────┬────────┐
//! │ 'L'    │ LED    │ ACTION │
//! │ marker │ R G B g│ 1 0 T  │
//! └────────┴────────┴────────┘
//! ```
//!
//! A marker byte seen anywhere restarts the frame, so a lost or injected
//! byte costs at most one command.
//!
//! # Outbound: button events
//!
//! ```text
//! <NAME> <STATUS>\r\n
//! NAME   = MODE | LEFT | RIGHT | DOWN | UP | FIRE | USER | ERR
//! STATUS = PRESSED | RELEASED | ERR
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod events;
pub mod line;

pub use command::{Command, CommandFrame, CommandParser, LedAction, LedId, COMMAND_MARKER};
pub use events::{Button, ButtonEvent, Direction, BUTTON_MASK};
pub use line::{format_event, OutputLine, MAX_LINE_LEN};
