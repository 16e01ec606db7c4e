//! GPIO setup for STM32F4
//!
//! Builds LED outputs and button inputs from board pin configuration,
//! wrapped so they implement the `joylink-hal` pin traits.

use embassy_stm32::gpio::{Input, Level, Output, Pin, Pull, Speed};
use embassy_stm32::Peri;

use joylink_core::config::PinConfig;
use joylink_hal::Compat;

/// LED output pin
pub type LedPin<'d> = Compat<Output<'d>>;

/// Button input pin
pub type ButtonPin<'d> = Compat<Input<'d>>;

/// Configure a pin as an LED output, starting dark
pub fn led_output<'d>(pin: Peri<'d, impl Pin>, config: &PinConfig) -> LedPin<'d> {
    let level = if config.inverted {
        Level::High
    } else {
        Level::Low
    };
    Compat::output(Output::new(pin, level, Speed::Low))
}

/// Configure a pin as a button input
pub fn button_input<'d>(pin: Peri<'d, impl Pin>, config: &PinConfig) -> ButtonPin<'d> {
    let pull = if config.pull_up { Pull::Up } else { Pull::None };
    Compat::input(Input::new(pin, pull))
}
