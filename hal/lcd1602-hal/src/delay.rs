//! Blocking delay and tick counter abstractions
//!
//! The HD44780 timing requirements are all lower bounds, so implementations
//! may sleep longer than asked but never shorter.

/// Blocking delay provider
pub trait DelayUs {
    /// Sleep for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Sleep for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

/// Monotonic millisecond tick counter
///
/// The counter is allowed to wrap; callers compute elapsed time with
/// `wrapping_sub`.
pub trait Clock {
    /// Current tick count in milliseconds
    fn now_ms(&mut self) -> u32;
}

impl<T: DelayUs + ?Sized> DelayUs for &mut T {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms);
    }
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now_ms(&mut self) -> u32 {
        (**self).now_ms()
    }
}
