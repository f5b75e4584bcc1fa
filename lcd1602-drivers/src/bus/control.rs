//! RS, RW, E and BL lines shared by the parallel transports

use lcd1602_core::timing::{ADDRESS_SETUP_US, ENABLE_CYCLE_US, ENABLE_PULSE_WIDTH_US};
use lcd1602_core::Error;
use lcd1602_hal::{DelayUs, OutputPin};
use lcd1602_protocol::Command;

pub(crate) struct ControlLines<O, D> {
    rs: O,
    e: O,
    /// Without RW the display must have it tied to ground
    rw: Option<O>,
    bl: Option<O>,
    pub(crate) delay: D,
}

impl<O: OutputPin, D: DelayUs> ControlLines<O, D> {
    /// Take the lines and drive them all low
    pub(crate) fn new(mut rs: O, mut e: O, mut rw: Option<O>, mut bl: Option<O>, delay: D) -> Self {
        e.set_low();
        rs.set_low();
        if let Some(rw) = rw.as_mut() {
            rw.set_low();
        }
        if let Some(bl) = bl.as_mut() {
            bl.set_low();
        }
        Self {
            rs,
            e,
            rw,
            bl,
            delay,
        }
    }

    pub(crate) fn can_read(&self) -> bool {
        self.rw.is_some()
    }

    pub(crate) fn can_control_backlight(&self) -> bool {
        self.bl.is_some()
    }

    /// Drive RS and RW for `command`
    pub(crate) fn select(&mut self, command: Command) {
        self.rs.set_state(command.is_data());
        if let Some(rw) = self.rw.as_mut() {
            rw.set_state(command.is_read());
        }
    }

    /// Wait tAS, raise E and hold it for PWEH
    pub(crate) fn enable_high(&mut self) {
        self.delay.delay_us(ADDRESS_SETUP_US);
        self.e.set_high();
        self.delay.delay_us(ENABLE_PULSE_WIDTH_US);
    }

    /// Drop E and wait out the rest of the cycle
    pub(crate) fn enable_low(&mut self) {
        self.e.set_low();
        self.delay.delay_us(ENABLE_CYCLE_US);
    }

    /// Latch whatever is on the data lines
    pub(crate) fn strobe(&mut self) {
        self.enable_high();
        self.enable_low();
    }

    pub(crate) fn set_backlight(&mut self, enabled: bool) -> Result<(), Error> {
        let bl = self.bl.as_mut().ok_or(Error::BacklightNotSupported)?;
        bl.set_state(enabled);
        Ok(())
    }
}
