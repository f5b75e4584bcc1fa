//! Wiring configuration
//!
//! Describes how the LCD is connected so that platform crates can build
//! the matching transport at runtime, and so firmware can check a config
//! file at build time.

pub mod bus;

pub use bus::{BusConfig, MAX_CONFIG_PINS};
