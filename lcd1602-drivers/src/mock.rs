//! Recording pins, delays and I2C bus for transport tests

use core::cell::{Cell, RefCell};

use heapless::Vec;
use lcd1602_hal::{DelayUs, FlexPin, I2cBus, InputPin, OutputPin, PinDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Rs,
    E,
    Rw,
    Bl,
    Db(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Set(Line, bool),
    Direction(Line, PinDirection),
    DelayUs(u32),
    DelayMs(u32),
    I2cWrite(u8, u8),
    I2cRead(u8),
}

pub type Log = Vec<Event, 1024>;

/// Shared recorder for every mock on a test bench
pub struct Bench {
    log: RefCell<Log>,
    /// Byte the fake controller drives onto DB7..DB0
    bus: Cell<u8>,
    /// 4-bit reads: move the low nibble up on every falling E edge
    nibble_mode: Cell<bool>,
}

impl Bench {
    pub fn new() -> Self {
        Self {
            log: RefCell::new(Vec::new()),
            bus: Cell::new(0),
            nibble_mode: Cell::new(false),
        }
    }

    pub fn pin(&self, line: Line) -> MockPin<'_> {
        MockPin { bench: self, line }
    }

    pub fn delay(&self) -> MockDelay<'_> {
        MockDelay { bench: self }
    }

    pub fn events(&self) -> Log {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    /// Drive `byte` onto DB7..DB0
    pub fn present(&self, byte: u8) {
        self.bus.set(byte);
        self.nibble_mode.set(false);
    }

    /// Drive `byte` as two nibbles on DB7..DB4, high nibble first
    pub fn present_nibbles(&self, byte: u8) {
        self.bus.set(byte);
        self.nibble_mode.set(true);
    }

    fn record(&self, event: Event) {
        self.log.borrow_mut().push(event).unwrap();
    }
}

pub struct MockPin<'a> {
    bench: &'a Bench,
    line: Line,
}

impl OutputPin for MockPin<'_> {
    fn set_high(&mut self) {
        self.bench.record(Event::Set(self.line, true));
    }

    fn set_low(&mut self) {
        self.bench.record(Event::Set(self.line, false));
        if self.line == Line::E && self.bench.nibble_mode.get() {
            self.bench.bus.set(self.bench.bus.get() << 4);
        }
    }
}

impl InputPin for MockPin<'_> {
    fn is_high(&mut self) -> bool {
        match self.line {
            Line::Db(bit) => self.bench.bus.get() & (1 << bit) != 0,
            _ => false,
        }
    }
}

impl FlexPin for MockPin<'_> {
    fn set_direction(&mut self, direction: PinDirection) {
        self.bench.record(Event::Direction(self.line, direction));
    }
}

pub struct MockDelay<'a> {
    bench: &'a Bench,
}

impl DelayUs for MockDelay<'_> {
    fn delay_us(&mut self, us: u32) {
        self.bench.record(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.bench.record(Event::DelayMs(ms));
    }
}

/// I2C bus with devices at fixed addresses
///
/// Reads return `response` with the low nibble taken from the last byte
/// written, mimicking the quasi-bidirectional PCF8574 port.
pub struct MockI2c<'a> {
    bench: &'a Bench,
    pub devices: &'static [u8],
    pub response: u8,
    last_written: u8,
    pub fail_writes: bool,
}

impl<'a> MockI2c<'a> {
    pub fn new(bench: &'a Bench, devices: &'static [u8]) -> Self {
        Self {
            bench,
            devices,
            response: 0,
            last_written: 0,
            fail_writes: false,
        }
    }
}

impl I2cBus for MockI2c<'_> {
    type Error = ();

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
        if self.fail_writes || !self.devices.contains(&address) {
            return Err(());
        }
        for byte in data {
            self.bench.record(Event::I2cWrite(address, *byte));
            self.last_written = *byte;
        }
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), ()> {
        if !self.devices.contains(&address) {
            return Err(());
        }
        self.bench.record(Event::I2cRead(address));
        buf.fill((self.response & 0xF0) | (self.last_written & 0x0F));
        Ok(())
    }

    /// Probes are not recorded
    fn probe(&mut self, address: u8) -> bool {
        self.devices.contains(&address)
    }
}
