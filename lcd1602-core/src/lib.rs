//! Transport-agnostic HD44780 display controller
//!
//! This crate contains everything that does not depend on how the LCD is
//! wired:
//!
//! - The [`Hd44780Bus`] transport trait
//! - The [`Lcd1602`] controller (initialization, command execution with
//!   busy-flag polling, cursor arithmetic, custom characters, text output)
//! - Timing constants from the HD44780 datasheet
//! - Wiring configuration types
//! - The crate-wide [`Error`] type

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod config;
pub mod display;
pub mod error;
pub mod timing;
pub mod traits;

pub use config::BusConfig;
pub use display::{CharacterMap, CursorType, Lcd1602};
pub use error::{Error, ErrorKind};
pub use traits::{BusCapabilities, BusWidth, Hd44780Bus};

#[cfg(feature = "alloc")]
pub use display::DynLcd1602;

pub use lcd1602_protocol::Command;
