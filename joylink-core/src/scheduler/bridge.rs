//! Loop state and the per-tick step
//!
//! [`Bridge`] owns every piece of mutable state the loop needs: the last
//! button sample, the event queue, the command parser and the line being
//! transmitted. Nothing lives in statics, so a single owner mutates it all.

use joylink_hal::{SerialRx, SerialTx};
use joylink_protocol::{Command, CommandFrame, CommandParser, OutputLine, BUTTON_MASK};

use crate::queue::{EventQueue, EVENT_QUEUE_CAPACITY};
use crate::traits::{ButtonSource, LedBank};
use crate::transition::record_transitions;
use crate::ButtonBitmask;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Frame completed by the received byte, if any
    pub frame: Option<CommandFrame>,
    /// Command executed from that frame
    pub command: Option<Command>,
    /// Button transitions queued
    pub transitions: usize,
    /// Byte handed to the transmitter
    pub sent: Option<u8>,
}

impl TickReport {
    /// True when a completed frame was dropped as unrecognized
    pub fn ignored_frame(&self) -> bool {
        self.frame.is_some() && self.command.is_none()
    }
}

/// Bridge between buttons, LEDs and the serial line
#[derive(Debug, Clone)]
pub struct Bridge<const N: usize = EVENT_QUEUE_CAPACITY> {
    previous: ButtonBitmask,
    mask: ButtonBitmask,
    queue: EventQueue<N>,
    parser: CommandParser,
    line: OutputLine,
}

impl<const N: usize> Bridge<N> {
    /// Create the loop state from the boot-time button sample
    ///
    /// Buttons already held at boot are taken as the starting state and are
    /// not reported.
    pub fn new(initial: ButtonBitmask) -> Self {
        Self::with_mask(initial, BUTTON_MASK)
    }

    /// Like [`Bridge::new`] with a custom set of meaningful bits
    pub fn with_mask(initial: ButtonBitmask, mask: ButtonBitmask) -> Self {
        Self {
            previous: initial & mask,
            mask,
            queue: EventQueue::new(),
            parser: CommandParser::new(),
            line: OutputLine::new(),
        }
    }

    /// Create the loop state by sampling the buttons once
    pub fn start<B: ButtonSource>(buttons: &mut B) -> Self {
        Self::new(buttons.read_bitmask())
    }

    /// Run one loop iteration
    pub fn tick<S, B, L>(&mut self, serial: &mut S, buttons: &mut B, leds: &mut L) -> TickReport
    where
        S: SerialRx + SerialTx,
        B: ButtonSource,
        L: LedBank,
    {
        let (frame, command) = self.receive(serial, leds);
        let transitions = self.scan(buttons);
        let sent = self.transmit(serial);

        TickReport {
            frame,
            command,
            transitions,
            sent,
        }
    }

    /// Step 1: take at most one received byte and run any completed command
    pub fn receive<R, L>(&mut self, rx: &mut R, leds: &mut L) -> (Option<CommandFrame>, Option<Command>)
    where
        R: SerialRx,
        L: LedBank,
    {
        let Some(byte) = rx.try_read_byte() else {
            return (None, None);
        };
        let Some(frame) = self.parser.feed(byte) else {
            return (None, None);
        };

        let command = Command::from_frame(&frame);
        if let Some(command) = command {
            leds.execute(command);
        }
        (Some(frame), command)
    }

    /// Step 2: sample the buttons and queue any transitions
    pub fn scan<B: ButtonSource>(&mut self, buttons: &mut B) -> usize {
        let current = buttons.read_bitmask() & self.mask;
        if current == self.previous {
            return 0;
        }

        let count = record_transitions(self.previous, current, &mut self.queue);
        self.previous = current;
        count
    }

    /// Step 3: hand one byte to the transmitter if it is ready
    ///
    /// Continues the line in flight; once it is drained, the next queued
    /// event is formatted and its first byte sent.
    pub fn transmit<T: SerialTx>(&mut self, tx: &mut T) -> Option<u8> {
        if !tx.is_writable() {
            return None;
        }

        if self.line.is_drained() {
            let Ok((id, code)) = self.queue.pop_pair() else {
                return None;
            };
            self.line.format(id, code);
        }

        let byte = self.line.next_byte()?;
        tx.write_byte(byte);
        Some(byte)
    }

    /// Button state as of the last tick
    pub fn previous(&self) -> ButtonBitmask {
        self.previous
    }

    pub fn queue(&self) -> &EventQueue<N> {
        &self.queue
    }

    /// Line currently being transmitted
    pub fn line(&self) -> &OutputLine {
        &self.line
    }

    /// True when nothing is queued or in flight
    pub fn is_idle(&self) -> bool {
        self.line.is_drained() && !self.queue.has_pair()
    }
}
