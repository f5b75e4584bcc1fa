//! Test doubles for the controller

use heapless::Vec;
use lcd1602_hal::{Clock, DelayUs};
use lcd1602_protocol::Command;

use crate::error::Error;
use crate::traits::{BusCapabilities, BusWidth, Hd44780Bus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    Init,
    Write(Command),
    Read(Command),
    Backlight(bool),
}

/// Bus that records every call except busy-flag polls
pub struct MockBus {
    pub caps: BusCapabilities,
    pub events: Vec<BusEvent, 256>,
    /// Byte returned for busy-flag reads
    pub status: u8,
    /// Byte returned for data reads
    pub data: u8,
    pub busy_polls: u32,
}

impl MockBus {
    pub fn write_only() -> Self {
        Self {
            caps: BusCapabilities {
                width: BusWidth::Four,
                can_read: false,
                can_control_backlight: false,
            },
            events: Vec::new(),
            status: 0,
            data: 0,
            busy_polls: 0,
        }
    }

    pub fn readable() -> Self {
        let mut bus = Self::write_only();
        bus.caps.can_read = true;
        bus
    }

    pub fn with_backlight(mut self) -> Self {
        self.caps.can_control_backlight = true;
        self
    }

    pub fn with_width(mut self, width: BusWidth) -> Self {
        self.caps.width = width;
        self
    }

    fn record(&mut self, event: BusEvent) {
        self.events.push(event).unwrap();
    }
}

impl Hd44780Bus for MockBus {
    fn capabilities(&self) -> BusCapabilities {
        self.caps
    }

    fn init(&mut self) -> Result<(), Error> {
        self.record(BusEvent::Init);
        Ok(())
    }

    fn write(&mut self, command: Command) -> Result<(), Error> {
        if command.is_read() {
            return Err(Error::NotAWriteCommand(command.bits()));
        }
        self.record(BusEvent::Write(command));
        Ok(())
    }

    fn read(&mut self, command: Command) -> Result<u8, Error> {
        if !self.caps.can_read {
            return Err(Error::ReadNotSupported);
        }
        if !command.is_read() {
            return Err(Error::NotAReadCommand(command.bits()));
        }
        if command == Command::READ_BUSY_FLAG_AND_ADDRESS {
            self.busy_polls += 1;
            return Ok(self.status);
        }
        self.record(BusEvent::Read(command));
        Ok(self.data)
    }

    fn set_backlight(&mut self, enabled: bool) -> Result<(), Error> {
        self.record(BusEvent::Backlight(enabled));
        Ok(())
    }
}

/// Timer whose clock advances one millisecond per reading
#[derive(Default)]
pub struct MockTimer {
    pub now: u32,
    pub slept_us: u64,
}

impl DelayUs for MockTimer {
    fn delay_us(&mut self, us: u32) {
        self.slept_us += u64::from(us);
    }
}

impl Clock for MockTimer {
    fn now_ms(&mut self) -> u32 {
        let now = self.now;
        self.now = self.now.wrapping_add(1);
        now
    }
}
