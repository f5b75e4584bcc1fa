//! 8-bit parallel transport

use lcd1602_core::{BusCapabilities, BusWidth, Error, Hd44780Bus};
use lcd1602_hal::{DelayUs, FlexPin, OutputPin, PinDirection};
use lcd1602_protocol::Command;

use super::control::ControlLines;
use super::data_pin::{drive, sample, set_directions, DataPin};
use super::{check_read, check_write, ResetSequence};

/// LCD wired with RS, E and DB7..DB0
pub struct Parallel8Bus<P, O, D> {
    control: ControlLines<O, D>,
    /// DB7 down to DB0
    data: [DataPin<P>; 8],
}

impl<P: FlexPin, O: OutputPin, D: DelayUs> Parallel8Bus<P, O, D> {
    /// Create the transport; all lines are driven low
    ///
    /// `data` lists DB7 first.
    pub fn new(rs: O, e: O, data: [P; 8], rw: Option<O>, bl: Option<O>, delay: D) -> Self {
        Self {
            control: ControlLines::new(rs, e, rw, bl, delay),
            data: data.map(DataPin::new),
        }
    }
}

impl<P: FlexPin, O: OutputPin, D: DelayUs> ResetSequence for Parallel8Bus<P, O, D> {
    fn latch_function_set(&mut self, command: Command) -> Result<(), Error> {
        self.write(command)
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.control.delay.delay_ms(ms);
    }
}

impl<P: FlexPin, O: OutputPin, D: DelayUs> Hd44780Bus for Parallel8Bus<P, O, D> {
    fn capabilities(&self) -> BusCapabilities {
        BusCapabilities {
            width: BusWidth::Eight,
            can_read: self.control.can_read(),
            can_control_backlight: self.control.can_control_backlight(),
        }
    }

    fn init(&mut self) -> Result<(), Error> {
        self.reset(BusWidth::Eight)
    }

    fn write(&mut self, command: Command) -> Result<(), Error> {
        check_write(command)?;
        self.control.select(command);
        drive(&mut self.data, command.data_byte());
        self.control.strobe();
        Ok(())
    }

    fn read(&mut self, command: Command) -> Result<u8, Error> {
        check_read(command)?;
        if !self.control.can_read() {
            return Err(Error::ReadNotSupported);
        }

        set_directions(&mut self.data, PinDirection::Input);
        self.control.select(command);
        self.control.enable_high();
        let value = sample(&mut self.data);
        self.control.enable_low();
        set_directions(&mut self.data, PinDirection::Output);

        Ok(value)
    }

    fn set_backlight(&mut self, enabled: bool) -> Result<(), Error> {
        self.control.set_backlight(enabled)
    }
}
