//! HD44780 transport implementations
//!
//! This crate provides the [`Hd44780Bus`](lcd1602_core::Hd44780Bus)
//! implementations for the three common ways of wiring an LCD1602:
//!
//! - [`Parallel4Bus`]: RS, E and DB7..DB4 on GPIOs
//! - [`Parallel8Bus`]: RS, E and DB7..DB0 on GPIOs
//! - [`I2cMux4Bus`]: PCF8574 I2C backpack driving the display in 4-bit mode
//!
//! Parallel transports can read (busy flag, RAM) only when an RW line is
//! wired, and control the backlight only when a BL line is wired.

#![no_std]
#![deny(unsafe_code)]

pub mod bus;

pub use bus::{DataPin, I2cMux4Bus, Parallel4Bus, Parallel8Bus};

#[cfg(test)]
pub(crate) mod mock;
