//! Blocking I2C master

use embassy_rp::i2c::{self, Blocking, I2c, Instance};
use lcd1602_hal::{I2cBus, I2cConfig};

/// embassy-rp I2C peripheral in blocking mode
pub struct RpI2c<'d, T: Instance>(I2c<'d, T, Blocking>);

impl<'d, T: Instance> RpI2c<'d, T> {
    pub fn new(i2c: I2c<'d, T, Blocking>) -> Self {
        Self(i2c)
    }

    pub fn into_inner(self) -> I2c<'d, T, Blocking> {
        self.0
    }
}

impl<T: Instance> I2cBus for RpI2c<'_, T> {
    type Error = i2c::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.blocking_write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.0.blocking_read(address, buf)
    }
}

/// embassy-rp configuration for `config`
pub fn rp_config(config: I2cConfig) -> i2c::Config {
    let mut rp = i2c::Config::default();
    rp.frequency = config.frequency;
    rp
}
