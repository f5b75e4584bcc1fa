//! HD44780 timing constants
//!
//! Bus-level timings come from the write/read timing diagrams (datasheet
//! p. 49, 58). Execution times come from table 6, which quotes them for a
//! 270 kHz oscillator. The controller may run as slow as 190 kHz, so they
//! are scaled by 270 / 190 and padded by 1 µs.

/// Address setup time (tAS) before raising E
pub const ADDRESS_SETUP_US: u32 = 1;

/// Minimum E high time (PWEH)
pub const ENABLE_PULSE_WIDTH_US: u32 = 1;

/// Settle time after lowering E (remainder of tcycE)
pub const ENABLE_CYCLE_US: u32 = 1;

/// Wait after power-on before the first instruction (datasheet asks for 40 ms)
pub const POWER_ON_DELAY_MS: u32 = 150;

/// Wait after the first 8-bit function set of the reset sequence
pub const INIT_FIRST_SETTLE_MS: u32 = 5;

/// Wait after each later function set of the reset sequence
pub const INIT_SETTLE_MS: u32 = 1;

/// Clear display / return home: 1.52 ms at 270 kHz
pub const EXEC_TIME_LONG_US: u32 = 2161;

/// Every other instruction: 37 µs at 270 kHz
pub const EXEC_TIME_SHORT_US: u32 = 53;
