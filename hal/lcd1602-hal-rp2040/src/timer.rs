//! Delays and clock backed by the embassy time driver

use embassy_time::{block_for, Duration, Instant};
use lcd1602_hal::{Clock, DelayUs};

/// Busy-waiting delay with a millisecond clock
///
/// Blocks the executor; every wait on the LCD is in the microsecond range
/// apart from the 150 ms power-on delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyTimer;

impl DelayUs for EmbassyTimer {
    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}

impl Clock for EmbassyTimer {
    fn now_ms(&mut self) -> u32 {
        // Wraps after ~49 days; callers use wrapping_sub
        Instant::now().as_millis() as u32
    }
}
