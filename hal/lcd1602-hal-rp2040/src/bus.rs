//! Transport construction from a [`BusConfig`]

use alloc::boxed::Box;

use embassy_rp::i2c::I2c;
use embassy_rp::Peripherals;
use lcd1602_core::{BusConfig, Error, Hd44780Bus};
use lcd1602_drivers::{I2cMux4Bus, Parallel4Bus, Parallel8Bus};
use lcd1602_hal::I2cConfig;

use crate::i2c::{rp_config, RpI2c};
use crate::pins::PinBank;
use crate::timer::EmbassyTimer;

/// Build the transport described by `config`
///
/// Backpacks are always on I2C0 with SCL on GPIO5 and SDA on GPIO4,
/// clocked at 100 kHz. The returned transport is not initialized yet.
pub fn build_bus(config: &BusConfig, p: Peripherals) -> Result<Box<dyn Hd44780Bus>, Error> {
    config.validate()?;

    match *config {
        BusConfig::I2c { address } => {
            let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, rp_config(I2cConfig::STANDARD));
            Ok(Box::new(I2cMux4Bus::new(
                RpI2c::new(i2c),
                address,
                EmbassyTimer,
            )))
        }
        BusConfig::Parallel4 {
            rs,
            e,
            data,
            rw,
            bl,
        } => {
            let mut pins = PinBank::new(p);
            let data = [
                pins.flex(data[0])?,
                pins.flex(data[1])?,
                pins.flex(data[2])?,
                pins.flex(data[3])?,
            ];
            Ok(Box::new(Parallel4Bus::new(
                pins.output(rs)?,
                pins.output(e)?,
                data,
                rw.map(|pin| pins.output(pin)).transpose()?,
                bl.map(|pin| pins.output(pin)).transpose()?,
                EmbassyTimer,
            )))
        }
        BusConfig::Parallel8 {
            rs,
            e,
            data,
            rw,
            bl,
        } => {
            let mut pins = PinBank::new(p);
            let data = [
                pins.flex(data[0])?,
                pins.flex(data[1])?,
                pins.flex(data[2])?,
                pins.flex(data[3])?,
                pins.flex(data[4])?,
                pins.flex(data[5])?,
                pins.flex(data[6])?,
                pins.flex(data[7])?,
            ];
            Ok(Box::new(Parallel8Bus::new(
                pins.output(rs)?,
                pins.output(e)?,
                data,
                rw.map(|pin| pins.output(pin)).transpose()?,
                bl.map(|pin| pins.output(pin)).transpose()?,
                EmbassyTimer,
            )))
        }
    }
}
