//! RP2040 support for the LCD1602 driver
//!
//! Implements the `lcd1602-hal` traits on top of embassy-rp and builds a
//! transport from a [`BusConfig`](lcd1602_core::BusConfig):
//!
//! - GPIO pins taken by number at runtime
//! - Blocking I2C for PCF8574 backpacks
//! - Busy-wait delays and a millisecond clock from the embassy time driver

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod bus;
pub mod gpio;
pub mod i2c;
pub mod pins;
pub mod timer;

pub use bus::build_bus;
pub use gpio::{RpFlexPin, RpOutput};
pub use i2c::RpI2c;
pub use pins::PinBank;
pub use timer::EmbassyTimer;
