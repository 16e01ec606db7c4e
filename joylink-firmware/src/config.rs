//! Board configuration
//!
//! Starts from the reference wiring and applies the settings validated from
//! board.toml at build time.

use joylink_core::config::BoardConfig;
use joylink_protocol::{Button, LedId};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
}

use generated::{BAUDRATE, BUTTON_ACTIVE_LOW, LED_ACTIVE_LOW, STATUS_INTERVAL_MS};

/// Build the board configuration for this firmware image
pub fn board_config() -> BoardConfig {
    let mut board = BoardConfig::nucleo_f411();
    board.serial.baudrate = BAUDRATE;
    if let Some(interval_ms) = STATUS_INTERVAL_MS {
        board.status_interval_ms = interval_ms;
    }

    for (led, active_low) in LedId::ALL.into_iter().zip(LED_ACTIVE_LOW) {
        board.set_led_inverted(led, active_low);
    }
    for (button, active_low) in Button::ALL.into_iter().zip(BUTTON_ACTIVE_LOW) {
        board.set_button_inverted(button, active_low);
    }

    board
}
