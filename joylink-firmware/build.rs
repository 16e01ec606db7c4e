//! Build script for joylink-firmware
//!
//! - Passes the cortex-m-rt and defmt linker scripts
//! - Validates board.toml at compile time
//! - Generates `board_config.rs` with the validated settings

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// LED keys in `LedId::ALL` order
const LEDS: [&str; 4] = ["red", "green", "blue", "secondary_green"];

/// Button keys in `Button::ALL` order
const BUTTONS: [&str; 7] = ["mode", "left", "right", "up", "down", "fire", "user"];

/// Highest baud rate USART2 reaches from the default clock tree
const MAX_BAUDRATE: i64 = 2_000_000;

/// Settings extracted from board.toml
struct Board {
    baudrate: i64,
    /// None keeps the firmware's built-in default
    status_interval_ms: Option<i64>,
    led_active_low: Vec<bool>,
    button_active_low: Vec<bool>,
}

fn main() {
    setup_linker();
    let board = validate_config();
    generate_config(&board);
}

/// Linker scripts for the runtime and the defmt log table
fn setup_linker() {
    // memory.x comes from embassy-stm32's `memory-x` feature
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml configuration at compile time
fn validate_config() -> Board {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the joylink-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let baudrate = validate_serial(&config, &mut errors);
    let status_interval_ms = validate_status(&config, &mut errors);
    let led_active_low = validate_polarity(&config, "leds", &LEDS, &mut errors);
    let button_active_low = validate_polarity(&config, "buttons", &BUTTONS, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid board configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=board.toml validated successfully");

    Board {
        baudrate,
        status_interval_ms,
        led_active_low,
        button_active_low,
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validate the [serial] section, returning the baud rate
fn validate_serial(config: &toml::Value, errors: &mut Vec<String>) -> i64 {
    let serial = match config.get("serial") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[serial] must be a table".to_string());
            return 0;
        }
        None => {
            errors.push("Missing [serial] section".to_string());
            return 0;
        }
    };

    match serial.get("baudrate") {
        Some(toml::Value::Integer(baud)) if *baud > 0 && *baud <= MAX_BAUDRATE => *baud,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[serial] baudrate must be 1-{}", MAX_BAUDRATE));
            0
        }
        Some(_) => {
            errors.push("[serial] baudrate must be an integer".to_string());
            0
        }
        None => {
            errors.push("[serial] missing 'baudrate'".to_string());
            0
        }
    }
}

/// Validate the optional [status] section, returning the log interval if set
fn validate_status(config: &toml::Value, errors: &mut Vec<String>) -> Option<i64> {
    let status = config.get("status")?;
    let Some(status) = status.as_table() else {
        errors.push("[status] must be a table".to_string());
        return None;
    };

    match status.get("interval_ms")? {
        toml::Value::Integer(ms) if *ms > 0 && *ms <= u32::MAX as i64 => Some(*ms),
        _ => {
            errors.push("[status] interval_ms must be a positive integer".to_string());
            None
        }
    }
}

/// Validate a polarity table such as [leds] or [buttons]
///
/// Every key in `names` must be present with a boolean `active_low`.
/// Returns the polarities in `names` order.
fn validate_polarity(
    config: &toml::Value,
    section: &str,
    names: &[&str],
    errors: &mut Vec<String>,
) -> Vec<bool> {
    let table = match config.get(section) {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push(format!("[{}] must be a table", section));
            return vec![false; names.len()];
        }
        None => {
            errors.push(format!("Missing [{}] section", section));
            return vec![false; names.len()];
        }
    };

    for key in table.keys() {
        if !names.contains(&key.as_str()) {
            errors.push(format!("[{}] unknown entry '{}'", section, key));
        }
    }

    names
        .iter()
        .map(|name| {
            let Some(entry) = table.get(*name) else {
                errors.push(format!("[{}] missing '{}'", section, name));
                return false;
            };
            match entry.get("active_low") {
                Some(toml::Value::Boolean(active_low)) => *active_low,
                Some(_) => {
                    errors.push(format!("[{}] {}.active_low must be true or false", section, name));
                    false
                }
                None => {
                    errors.push(format!("[{}] {} missing 'active_low'", section, name));
                    false
                }
            }
        })
        .collect()
}

/// Write the validated settings as Rust constants
fn generate_config(board: &Board) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    let mut code = String::new();
    let _ = writeln!(code, "// Generated from board.toml by build.rs");
    let _ = writeln!(code);
    let _ = writeln!(code, "/// Host serial baud rate");
    let _ = writeln!(code, "pub const BAUDRATE: u32 = {};", board.baudrate);
    let _ = writeln!(code);
    let _ = writeln!(code, "/// Interval between queue status log lines (ms), if overridden");
    let _ = writeln!(
        code,
        "pub const STATUS_INTERVAL_MS: Option<u32> = {:?};",
        board.status_interval_ms
    );
    let _ = writeln!(code);
    let _ = writeln!(code, "/// LED polarity, in `LedId::ALL` order");
    let _ = writeln!(
        code,
        "pub const LED_ACTIVE_LOW: [bool; {}] = {:?};",
        board.led_active_low.len(),
        board.led_active_low
    );
    let _ = writeln!(code);
    let _ = writeln!(code, "/// Button polarity, in `Button::ALL` order");
    let _ = writeln!(
        code,
        "pub const BUTTON_ACTIVE_LOW: [bool; {}] = {:?};",
        board.button_active_low.len(),
        board.button_active_low
    );

    if let Err(e) = fs::write(out_dir.join("board_config.rs"), code) {
        panic!("Failed to write board_config.rs: {}", e);
    }
}
