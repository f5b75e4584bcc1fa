//! LCD1602 Hardware Abstraction Layer
//!
//! This crate defines the hardware primitives the HD44780 transports are
//! built on. Chip-specific crates implement them; the driver crates only
//! ever see these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lcd1602-core (controller)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lcd1602-drivers (4-bit, 8-bit, I2C)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lcd1602-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ lcd1602-hal-  │       │ embedded-hal  │
//! │    rp2040     │       │   adapters    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::FlexPin`] - Digital I/O
//! - [`i2c::I2cBus`] - I2C bus operations and device scan
//! - [`delay::DelayUs`], [`delay::Clock`] - Blocking delays and tick counter

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "embedded-hal")]
pub mod adapters;
pub mod delay;
pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use delay::{Clock, DelayUs};
pub use gpio::{FlexPin, InputPin, OutputPin, PinDirection};
pub use i2c::{AddressSet, I2cBus};
