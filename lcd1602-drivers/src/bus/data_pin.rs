//! Direction-tracking data line

use lcd1602_hal::{FlexPin, PinDirection};

/// HD44780 data line
///
/// Remembers its direction so switching to the mode it is already in does
/// not touch the hardware.
pub struct DataPin<P> {
    pin: P,
    direction: PinDirection,
}

impl<P: FlexPin> DataPin<P> {
    /// Take a pin and drive it low
    pub fn new(mut pin: P) -> Self {
        pin.set_direction(PinDirection::Output);
        pin.set_low();
        Self {
            pin,
            direction: PinDirection::Output,
        }
    }

    pub fn direction(&self) -> PinDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: PinDirection) {
        if self.direction != direction {
            self.pin.set_direction(direction);
            self.direction = direction;
        }
    }

    pub fn set_state(&mut self, high: bool) {
        self.pin.set_state(high);
    }

    pub fn is_high(&mut self) -> bool {
        self.pin.is_high()
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

/// Drive `value` onto `pins`, most significant bit on the first pin
pub(crate) fn drive<P: FlexPin>(pins: &mut [DataPin<P>], value: u8) {
    let top = pins.len() - 1;
    for (i, pin) in pins.iter_mut().enumerate() {
        pin.set_state(value & (1 << (top - i)) != 0);
    }
}

/// Sample `pins` into a value, first pin is the most significant bit
pub(crate) fn sample<P: FlexPin>(pins: &mut [DataPin<P>]) -> u8 {
    pins.iter_mut()
        .fold(0, |acc, pin| (acc << 1) | u8::from(pin.is_high()))
}

pub(crate) fn set_directions<P: FlexPin>(pins: &mut [DataPin<P>], direction: PinDirection) {
    for pin in pins {
        pin.set_direction(direction);
    }
}
