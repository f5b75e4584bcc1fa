//! GPIO pins taken by number
//!
//! Lets the wiring come from a config file instead of being fixed at
//! compile time.

use embassy_rp::gpio::AnyPin;
use embassy_rp::{Peri, Peripherals};
use lcd1602_core::Error;

use crate::gpio::{RpFlexPin, RpOutput};

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// All GPIO pins, each of which can be taken once
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT as usize],
}

impl PinBank {
    /// Take every GPIO out of the peripherals
    pub fn new(p: Peripherals) -> Self {
        Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        }
    }

    /// Take a pin by number
    ///
    /// Fails with [`Error::InvalidPin`] past GPIO29 and with
    /// [`Error::PinConflict`] when the pin was already taken.
    pub fn take(&mut self, pin: u8) -> Result<Peri<'static, AnyPin>, Error> {
        self.pins
            .get_mut(usize::from(pin))
            .ok_or(Error::InvalidPin(pin))?
            .take()
            .ok_or(Error::PinConflict(pin))
    }

    pub fn is_available(&self, pin: u8) -> bool {
        matches!(self.pins.get(usize::from(pin)), Some(Some(_)))
    }

    /// Take a pin as a control output
    pub fn output(&mut self, pin: u8) -> Result<RpOutput, Error> {
        self.take(pin).map(RpOutput::new)
    }

    /// Take a pin as a data line
    pub fn flex(&mut self, pin: u8) -> Result<RpFlexPin, Error> {
        self.take(pin).map(RpFlexPin::new)
    }
}
