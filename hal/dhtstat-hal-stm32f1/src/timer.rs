//! Microsecond timer for STM32F1
//!
//! Reads the embassy time driver instead of a dedicated hardware timer.
//! With a 1 MHz tick, `Instant::as_ticks` is already in microseconds.

use dhtstat_hal::MicrosecondTimer;
use embassy_time::Instant;

/// Free-running microsecond counter backed by `embassy_time::Instant`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyMicros;

impl MicrosecondTimer for EmbassyMicros {
    fn now_us(&self) -> u32 {
        // Truncation gives the wrapping 32-bit counter the trait expects
        Instant::now().as_micros() as u32
    }
}
