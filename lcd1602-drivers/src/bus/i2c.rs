//! PCF8574 I2C backpack transport
//!
//! The expander's port is wired to the LCD as:
//! ```text
//! ┌─────┬─────┬─────┬─────┬────┬───┬────┬────┐
//! │ DB7 │ DB6 │ DB5 │ DB4 │ BL │ E │ RW │ RS │
//! │ P7  │ P6  │ P5  │ P4  │ P3 │ P2│ P1 │ P0 │
//! └─────┴─────┴─────┴─────┴────┴───┴────┴────┘
//! ```
//! Every I2C byte written updates all eight lines at once, so the display
//! runs in 4-bit mode and each strobe costs three bus writes.

use lcd1602_core::timing::{ADDRESS_SETUP_US, ENABLE_CYCLE_US, ENABLE_PULSE_WIDTH_US};
use lcd1602_core::{BusCapabilities, BusWidth, Error, Hd44780Bus};
use lcd1602_hal::{AddressSet, DelayUs, I2cBus};
use lcd1602_protocol::Command;

use super::{check_read, check_write, ResetSequence};

const RS: u8 = 0b0000_0001;
const RW: u8 = 0b0000_0010;
const E: u8 = 0b0000_0100;
const BACKLIGHT: u8 = 0b0000_1000;
const DATA: u8 = 0b1111_0000;

/// Pick the LCD address from a bus scan
///
/// With no configured address the LCD must be the only device on the bus.
pub fn select_address(found: AddressSet, configured: Option<u8>) -> Result<u8, Error> {
    let first = found.first().ok_or(Error::NoDeviceFound)?;
    match configured {
        None if found.len() > 1 => Err(Error::AmbiguousDevice(found)),
        None => Ok(first),
        Some(address) if found.contains(address) => Ok(address),
        Some(address) => Err(Error::DeviceNotFound(address)),
    }
}

/// LCD behind a PCF8574 I2C backpack
///
/// Always able to read and to switch the backlight. The device address is
/// resolved by [`init`](Hd44780Bus::init); using the transport before that
/// fails with [`Error::NotInitialized`].
pub struct I2cMux4Bus<I, D> {
    i2c: I,
    delay: D,
    configured: Option<u8>,
    address: Option<u8>,
    backlight: bool,
}

impl<I: I2cBus, D: DelayUs> I2cMux4Bus<I, D> {
    /// Create the transport
    ///
    /// Pass `None` as `address` when the backpack is the only device on the
    /// bus and its address is not known.
    pub fn new(i2c: I, address: Option<u8>, delay: D) -> Self {
        Self {
            i2c,
            delay,
            configured: address,
            address: None,
            backlight: true,
        }
    }

    /// Address found by `init`
    pub fn address(&self) -> Option<u8> {
        self.address
    }

    pub fn i2c(&mut self) -> &mut I {
        &mut self.i2c
    }

    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }

    /// BL, RW and RS bits for `command`
    fn control_bits(&self, command: Command) -> u8 {
        let mut byte = if self.backlight { BACKLIGHT } else { 0 };
        if command.is_read() {
            byte |= RW;
        }
        if command.is_data() {
            byte |= RS;
        }
        byte
    }

    fn send(&mut self, address: u8, byte: u8) -> Result<(), Error> {
        self.i2c.write(address, &[byte]).map_err(|_| Error::I2c)
    }

    fn write_nibble(&mut self, command: Command, nibble: u8) -> Result<(), Error> {
        let address = self.address.ok_or(Error::NotInitialized)?;
        let byte = (nibble << 4) | self.control_bits(command);

        self.send(address, byte)?;
        self.delay.delay_us(ADDRESS_SETUP_US);
        self.send(address, byte | E)?;
        self.delay.delay_us(ENABLE_PULSE_WIDTH_US);
        self.send(address, byte & !E)?;
        self.delay.delay_us(ENABLE_CYCLE_US);
        Ok(())
    }

    fn read_nibble(&mut self, command: Command) -> Result<u8, Error> {
        let address = self.address.ok_or(Error::NotInitialized)?;
        let byte = self.control_bits(command);

        self.send(address, byte)?;
        self.delay.delay_us(ADDRESS_SETUP_US);
        // Writing 1s to the data pins lets the LCD pull them low
        self.send(address, byte | E | DATA)?;
        self.delay.delay_us(ENABLE_PULSE_WIDTH_US);
        let mut port = [0u8; 1];
        self.i2c.read(address, &mut port).map_err(|_| Error::I2c)?;
        self.send(address, byte & !(E | DATA))?;
        self.delay.delay_us(ENABLE_CYCLE_US);

        Ok(port[0] >> 4)
    }
}

impl<I: I2cBus, D: DelayUs> ResetSequence for I2cMux4Bus<I, D> {
    fn latch_function_set(&mut self, command: Command) -> Result<(), Error> {
        self.write_nibble(command, command.high_nibble())
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

impl<I: I2cBus, D: DelayUs> Hd44780Bus for I2cMux4Bus<I, D> {
    fn capabilities(&self) -> BusCapabilities {
        BusCapabilities {
            width: BusWidth::Four,
            can_read: true,
            can_control_backlight: true,
        }
    }

    /// Find the backpack on the bus, then reset the display
    fn init(&mut self) -> Result<(), Error> {
        let found = self.i2c.scan();
        let address = select_address(found, self.configured)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("LCD backpack at {=u8:#x} ({} device(s) on bus)", address, found.len());
        self.address = Some(address);

        self.reset(BusWidth::Four)
    }

    fn write(&mut self, command: Command) -> Result<(), Error> {
        check_write(command)?;
        self.write_nibble(command, command.high_nibble())?;
        self.write_nibble(command, command.low_nibble())
    }

    fn read(&mut self, command: Command) -> Result<u8, Error> {
        check_read(command)?;
        let high = self.read_nibble(command)?;
        let low = self.read_nibble(command)?;
        Ok((high << 4) | low)
    }

    /// The BL bit only reaches the expander with the next byte, so an
    /// all-zero instruction write follows immediately
    fn set_backlight(&mut self, enabled: bool) -> Result<(), Error> {
        self.backlight = enabled;
        self.write(Command::NOOP)
    }
}
