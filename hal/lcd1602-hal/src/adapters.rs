//! Adapters from `embedded-hal` 1.0 traits
//!
//! Any HAL that implements the `embedded-hal` traits can drive the LCD
//! through these wrappers. Pin errors are ignored: the LCD lines are plain
//! push-pull GPIOs whose `Error` type is `Infallible` on every HAL we use.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital;
use embedded_hal::i2c::I2c;

use crate::delay::DelayUs;
use crate::gpio::{FlexPin, InputPin, OutputPin, PinDirection};
use crate::i2c::I2cBus;

/// Output-only pin backed by an `embedded-hal` output
pub struct EhOutputPin<P>(pub P);

impl<P: digital::OutputPin> OutputPin for EhOutputPin<P> {
    fn set_high(&mut self) {
        let _ = self.0.set_high();
    }

    fn set_low(&mut self) {
        let _ = self.0.set_low();
    }
}

/// Bidirectional pin backed by an `embedded-hal` I/O pin
///
/// `embedded-hal` has no direction switching, so the direction change is
/// delegated to a caller-supplied function.
pub struct EhFlexPin<P> {
    pin: P,
    switch: fn(&mut P, PinDirection),
}

impl<P> EhFlexPin<P> {
    /// Wrap a pin together with its direction switch
    pub fn new(pin: P, switch: fn(&mut P, PinDirection)) -> Self {
        Self { pin, switch }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: digital::OutputPin> OutputPin for EhFlexPin<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
    }
}

impl<P: digital::InputPin> InputPin for EhFlexPin<P> {
    fn is_high(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }
}

impl<P: digital::OutputPin + digital::InputPin> FlexPin for EhFlexPin<P> {
    fn set_direction(&mut self, direction: PinDirection) {
        (self.switch)(&mut self.pin, direction);
    }
}

/// I2C bus backed by an `embedded-hal` I2C master
pub struct EhI2c<I>(pub I);

impl<I: I2c> I2cBus for EhI2c<I> {
    type Error = I::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.0.read(address, buf)
    }
}

/// Delay backed by an `embedded-hal` delay provider
pub struct EhDelay<D>(pub D);

impl<D: DelayNs> DelayUs for EhDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
