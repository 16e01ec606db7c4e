//! Joylink - Button/LED Serial Bridge Firmware
//!
//! Main firmware binary for STM32F4-based boards. Reports button
//! transitions to the host as text lines over USART2 and drives four
//! LEDs from 3-byte commands received on the same link.
//!
//! Everything runs in one cooperative loop: each pass reads at most one
//! byte, samples the buttons and sends at most one byte, then yields.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_stm32::pac;
use embassy_stm32::usart::Uart;
use embassy_time::{Duration, Instant};
use {defmt_rtt as _, panic_probe as _};

use joylink_core::queue::EVENT_QUEUE_CAPACITY;
use joylink_core::scheduler::Bridge;
use joylink_core::traits::LedBank;
use joylink_drivers::{ButtonInput, ButtonPanel, Led, LedSet};
use joylink_hal_stm32f4::{button_input, led_output, uart_config, PolledUart};
use joylink_protocol::{Button, LedId};

mod config;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Joylink firmware starting...");

    let p = embassy_stm32::init(Default::default());

    let board = config::board_config();
    if let Err(e) = board.validate() {
        defmt::panic!("Invalid board configuration: {:?}", e);
    }
    let led_line = |led: LedId| *unwrap!(board.led(led));
    let button_line = |button: Button| *unwrap!(board.button(button));

    // LEDs: dark before anything else runs
    let red = led_line(LedId::Red);
    let green = led_line(LedId::Green);
    let blue = led_line(LedId::Blue);
    let secondary_green = led_line(LedId::SecondaryGreen);
    let mut leds = LedSet {
        red: Led::new(led_output(p.PA6, &red.pin), red.pin.inverted),
        green: Led::new(led_output(p.PA7, &green.pin), green.pin.inverted),
        blue: Led::new(led_output(p.PB0, &blue.pin), blue.pin.inverted),
        secondary_green: Led::new(
            led_output(p.PA5, &secondary_green.pin),
            secondary_green.pin.inverted,
        ),
    };
    leds.all_off();
    info!("LEDs initialized");

    // Buttons
    let mode = button_line(Button::Mode);
    let left = button_line(Button::Left);
    let right = button_line(Button::Right);
    let up = button_line(Button::Up);
    let down = button_line(Button::Down);
    let fire = button_line(Button::Fire);
    let user = button_line(Button::User);
    let inputs = [
        ButtonInput::from_line(&mode, button_input(p.PA0, &mode.pin)),
        ButtonInput::from_line(&left, button_input(p.PB3, &left.pin)),
        ButtonInput::from_line(&right, button_input(p.PB4, &right.pin)),
        ButtonInput::from_line(&up, button_input(p.PB5, &up.pin)),
        ButtonInput::from_line(&down, button_input(p.PB6, &down.pin)),
        ButtonInput::from_line(&fire, button_input(p.PB10, &fire.pin)),
        ButtonInput::from_line(&user, button_input(p.PC13, &user.pin)),
    ];
    let mut buttons = ButtonPanel::new();
    for input in inputs {
        if buttons.add(input).is_err() {
            defmt::panic!("Button panel full");
        }
    }
    info!("{} buttons initialized", buttons.len());

    // Host link: USART2, RX on PA3, TX on PA2
    let uart_cfg = unwrap!(uart_config(&board.serial));
    let uart = unwrap!(Uart::new_blocking(p.USART2, p.PA3, p.PA2, uart_cfg));
    let mut serial = PolledUart::new(uart, pac::USART2);
    info!("USART2 initialized at {} baud", board.serial.baudrate);

    // Buttons already held now are the starting state, not events
    let mut bridge: Bridge<EVENT_QUEUE_CAPACITY> = Bridge::start(&mut buttons);
    info!("Initial button state: {=u32:#06x}", bridge.previous());

    let status_interval = Duration::from_millis(board.status_interval_ms as u64);
    let mut last_status = Instant::now();

    info!("Entering main loop");

    loop {
        if let Some(e) = serial.line_error() {
            warn!("USART2 line error: {:?}", e);
        }

        let report = bridge.tick(&mut serial, &mut buttons, &mut leds);

        if let Some(command) = report.command {
            debug!("LED {:?} -> {:?}", command.led, command.action);
        } else if let Some(frame) = report.frame {
            debug!("Ignored command frame {:?}", frame);
        }

        if report.transitions > 0 {
            trace!(
                "{} button transition(s), state {=u32:#06x}",
                report.transitions,
                bridge.previous()
            );
        }

        if last_status.elapsed() >= status_interval {
            last_status = Instant::now();
            let queue = bridge.queue();
            info!(
                "Event queue: {}/{} entries, {} overwritten",
                queue.len(),
                queue.capacity(),
                queue.overwritten()
            );
        }

        yield_now().await;
    }
}
