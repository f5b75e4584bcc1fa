//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Direction of a bidirectional line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    /// Line is driven by the MCU
    Output,
    /// Line is sampled by the MCU
    Input,
}

/// Pin whose direction can be switched at runtime
///
/// The HD44780 data bus is driven by the MCU for writes and by the
/// controller for reads, so parallel transports need to flip the data
/// lines between output and input mode.
pub trait FlexPin: OutputPin + InputPin {
    /// Switch the pin to the given direction
    fn set_direction(&mut self, direction: PinDirection);
}
