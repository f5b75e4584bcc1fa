//! Transports
//!
//! All transports share the same strobe timing: drive RS/RW and the data
//! lines, wait tAS, hold E high for PWEH, drop E, wait tcycE. Reads sample
//! the data lines while E is still high.

mod control;
mod data_pin;
mod i2c;
mod parallel4;
mod parallel8;

pub use data_pin::DataPin;
pub use i2c::{select_address, I2cMux4Bus};
pub use parallel4::Parallel4Bus;
pub use parallel8::Parallel8Bus;

use lcd1602_core::timing::{INIT_FIRST_SETTLE_MS, INIT_SETTLE_MS, POWER_ON_DELAY_MS};
use lcd1602_core::{BusWidth, Error};
use lcd1602_protocol::{function_set, Command};

/// Software reset by instruction (datasheet figures 23 and 24)
///
/// The controller may power up in either interface width, so it is sent
/// "function set, 8-bit" three times before the real width is selected.
/// Until then only DB7..DB4 are meaningful, so 4-bit transports send a
/// single nibble per instruction.
pub(crate) trait ResetSequence {
    /// Latch one function set instruction (DB7..DB4 only on 4-bit wiring)
    fn latch_function_set(&mut self, command: Command) -> Result<(), Error>;

    fn sleep_ms(&mut self, ms: u32);

    fn reset(&mut self, width: BusWidth) -> Result<(), Error> {
        let eight_bit = Command::FUNCTION_SET.with(function_set::EIGHT_BIT);

        self.sleep_ms(POWER_ON_DELAY_MS);
        self.latch_function_set(eight_bit)?;
        self.sleep_ms(INIT_FIRST_SETTLE_MS);
        self.latch_function_set(eight_bit)?;
        self.sleep_ms(INIT_SETTLE_MS);
        self.latch_function_set(eight_bit)?;
        self.sleep_ms(INIT_SETTLE_MS);

        if width == BusWidth::Four {
            self.latch_function_set(Command::FUNCTION_SET.with(function_set::FOUR_BIT))?;
            self.sleep_ms(INIT_SETTLE_MS);
        }
        Ok(())
    }
}

pub(crate) fn check_write(command: Command) -> Result<(), Error> {
    if command.is_read() {
        return Err(Error::NotAWriteCommand(command.bits()));
    }
    Ok(())
}

pub(crate) fn check_read(command: Command) -> Result<(), Error> {
    if !command.is_read() {
        return Err(Error::NotAReadCommand(command.bits()));
    }
    Ok(())
}
