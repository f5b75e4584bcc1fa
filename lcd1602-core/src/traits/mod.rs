//! Hardware abstraction traits
//!
//! The controller talks to the LCD only through [`Hd44780Bus`]; the
//! pin- and I2C-level implementations live in `lcd1602-drivers`.

pub mod bus;

pub use bus::{BusCapabilities, BusWidth, Hd44780Bus};
