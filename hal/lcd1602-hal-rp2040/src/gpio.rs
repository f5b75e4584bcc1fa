//! GPIO wrappers

use embassy_rp::gpio::{AnyPin, Flex, Level, Output};
use embassy_rp::Peri;
use lcd1602_hal::{FlexPin, InputPin, OutputPin, PinDirection};

/// Push-pull output for RS, E, RW and BL
pub struct RpOutput(Output<'static>);

impl RpOutput {
    /// Configure `pin` as an output driven low
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        Self(Output::new(pin, Level::Low))
    }
}

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// Bidirectional data line
///
/// Starts as an output driven low. As an input it floats; the LCD drives
/// the line while E is high on a read.
pub struct RpFlexPin(Flex<'static>);

impl RpFlexPin {
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        let mut flex = Flex::new(pin);
        flex.set_low();
        flex.set_as_output();
        Self(flex)
    }
}

impl OutputPin for RpFlexPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

impl InputPin for RpFlexPin {
    fn is_high(&mut self) -> bool {
        self.0.is_high()
    }
}

impl FlexPin for RpFlexPin {
    fn set_direction(&mut self, direction: PinDirection) {
        match direction {
            PinDirection::Output => self.0.set_as_output(),
            PinDirection::Input => self.0.set_as_input(),
        }
    }
}
