//! DHT11 temperature/humidity sensor
//!
//! Single-wire protocol, host side:
//!
//! ```text
//!  host start          sensor ack          bit (x40)
//!  ──┐    ┌──┐ release ┐      ┌──────┐     ┌───────┐
//!    └────┘  └─────────┘      │      └─────┘       └── ...
//!    20 ms  30 µs       ~80 µs low  ~80 µs high   50 µs low, then
//!                                                 26 µs high = 0
//!                                                 70 µs high = 1
//! ```
//!
//! A bit is classified by sampling the line a fixed delay after its rising
//! edge: still high means 1. Every wait for an edge is bounded, so a
//! missing or unplugged sensor costs at most a few milliseconds.
//!
//! The driver only produces raw frames; checksum validation happens in
//! the core.

use dhtstat_core::config::SensorTiming;
use dhtstat_core::reading::{RawReading, FRAME_BITS, FRAME_LEN};
use dhtstat_core::traits::{FrameSource, SensorError};
use dhtstat_hal::{DataLine, MicrosecondTimer};

/// DHT11 on a bidirectional data line
pub struct Dht11<L, T> {
    line: L,
    timer: T,
    timing: SensorTiming,
}

impl<L: DataLine, T: MicrosecondTimer> Dht11<L, T> {
    /// Create a driver; the line is released so it idles high
    pub fn new(mut line: L, timer: T, timing: SensorTiming) -> Self {
        line.release();
        Self {
            line,
            timer,
            timing,
        }
    }

    /// Give back the line and timer
    pub fn release(self) -> (L, T) {
        (self.line, self.timer)
    }

    /// Poll until the line reads `high`, for at most `budget_us`
    fn wait_for(&self, high: bool, budget_us: u32) -> bool {
        let deadline = self.timer.deadline(budget_us);
        while !self.line.is_level(high) {
            if deadline.expired(&self.timer) {
                return false;
            }
        }
        true
    }

    /// Start signal and acknowledge
    fn handshake(&mut self) -> Result<(), SensorError> {
        let t = self.timing;

        self.line.drive_low();
        self.timer.delay_us(t.start_low_ms.saturating_mul(1000));
        self.line.drive_high();
        self.timer.delay_us(t.start_high_us);
        self.line.release();

        if !self.wait_for(false, t.ack_timeout_us) {
            return Err(SensorError::NoResponse);
        }
        if !self.wait_for(true, t.max_wait_us) || !self.wait_for(false, t.max_wait_us) {
            return Err(SensorError::HandshakeTimeout);
        }
        Ok(())
    }

    /// Read the 40 data bits, most significant bit first
    fn read_bits(&mut self) -> Result<[u8; FRAME_LEN], SensorError> {
        let t = self.timing;
        let mut bytes = [0u8; FRAME_LEN];

        for bit in 0..FRAME_BITS {
            let timeout = SensorError::BitTimeout { bit: bit as u8 };

            // End of the low preamble
            if !self.wait_for(true, t.max_wait_us) {
                return Err(timeout);
            }

            self.timer.delay_us(t.bit_sample_us);
            let one = self.line.is_high();

            let byte = &mut bytes[bit / 8];
            *byte = (*byte << 1) | one as u8;

            if one && !self.wait_for(false, t.max_wait_us) {
                return Err(timeout);
            }
        }

        Ok(bytes)
    }
}

impl<L: DataLine, T: MicrosecondTimer> FrameSource for Dht11<L, T> {
    fn read_frame(&mut self) -> Result<RawReading, SensorError> {
        let result = self.handshake().and_then(|()| self.read_bits());
        self.line.release();
        result.map(RawReading::from_bytes)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::cell::Cell;
    use dhtstat_core::reading::validate_and_derive;
    use std::vec::Vec;

    /// Clock advancing 1 µs on every read
    struct MockTimer<'a> {
        now: &'a Cell<u32>,
    }

    impl MicrosecondTimer for MockTimer<'_> {
        fn now_us(&self) -> u32 {
            let now = self.now.get();
            self.now.set(now.wrapping_add(1));
            now
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Action {
        Low,
        High,
        Release,
    }

    /// Line replaying a sensor waveform after release
    ///
    /// `segments` are `(duration_us, high)` pairs measured from the
    /// moment the host releases the line after its start signal. Past
    /// the end the line idles at `tail`.
    struct MockLine<'a> {
        now: &'a Cell<u32>,
        driven: Option<bool>,
        released_at: Option<u32>,
        segments: Vec<(u32, bool)>,
        tail: bool,
        actions: Vec<Action>,
    }

    impl<'a> MockLine<'a> {
        fn new(now: &'a Cell<u32>, segments: Vec<(u32, bool)>, tail: bool) -> Self {
            Self {
                now,
                driven: None,
                released_at: None,
                segments,
                tail,
                actions: Vec::new(),
            }
        }
    }

    impl DataLine for MockLine<'_> {
        fn drive_low(&mut self) {
            self.driven = Some(false);
            self.released_at = None;
            self.actions.push(Action::Low);
        }

        fn drive_high(&mut self) {
            self.driven = Some(true);
            self.actions.push(Action::High);
        }

        fn release(&mut self) {
            self.driven = None;
            if self.actions.last() == Some(&Action::High) {
                self.released_at = Some(self.now.get());
            }
            self.actions.push(Action::Release);
        }

        fn is_high(&self) -> bool {
            if let Some(level) = self.driven {
                return level;
            }
            let Some(start) = self.released_at else {
                return true;
            };
            let mut offset = self.now.get().wrapping_sub(start);
            for &(duration, high) in &self.segments {
                if offset < duration {
                    return high;
                }
                offset -= duration;
            }
            self.tail
        }
    }

    /// Waveform of a well-behaved sensor sending `bytes`
    fn waveform(bytes: [u8; 5]) -> Vec<(u32, bool)> {
        let mut segments = Vec::from([(20, true), (80, false), (80, true)]);
        for byte in bytes {
            for i in (0..8).rev() {
                let one = (byte >> i) & 1 == 1;
                segments.push((50, false));
                segments.push((if one { 70 } else { 26 }, true));
            }
        }
        segments.push((50, false));
        segments
    }

    fn driver<'a>(clock: &'a Cell<u32>, line: MockLine<'a>) -> Dht11<MockLine<'a>, MockTimer<'a>> {
        Dht11::new(line, MockTimer { now: clock }, SensorTiming::default())
    }

    #[test]
    fn test_reads_valid_frame() {
        let clock = Cell::new(0);
        let line = MockLine::new(&clock, waveform([45, 0, 23, 7, 75]), true);
        let mut dht = driver(&clock, line);

        let raw = dht.read_frame().unwrap();
        assert_eq!(raw.to_bytes(), [45, 0, 23, 7, 75]);
        assert_eq!(validate_and_derive(raw).unwrap().tenths(), 237);
    }

    #[test]
    fn test_start_signal_sequence() {
        let clock = Cell::new(0);
        let line = MockLine::new(&clock, waveform([1, 2, 3, 4, 10]), true);
        let mut dht = driver(&clock, line);

        let start = clock.get();
        dht.read_frame().unwrap();

        let (line, _) = dht.release();
        assert_eq!(
            line.actions,
            [
                Action::Release,
                Action::Low,
                Action::High,
                Action::Release,
                Action::Release
            ]
        );
        // Hold low for the full start period
        assert!(clock.get().wrapping_sub(start) >= 20_000);
    }

    #[test]
    fn test_alternating_bits() {
        let clock = Cell::new(0);
        let bytes = [0b1010_1010, 0b0101_0101, 0xFF, 0x00, 0xFE];
        let line = MockLine::new(&clock, waveform(bytes), true);
        let mut dht = driver(&clock, line);

        assert_eq!(dht.read_frame().unwrap().to_bytes(), bytes);
    }

    #[test]
    fn test_no_response() {
        let clock = Cell::new(0);
        let line = MockLine::new(&clock, Vec::new(), true);
        let mut dht = driver(&clock, line);

        assert_eq!(dht.read_frame(), Err(SensorError::NoResponse));
    }

    #[test]
    fn test_ack_stuck_low() {
        let clock = Cell::new(0);
        let line = MockLine::new(&clock, Vec::from([(20, true)]), false);
        let mut dht = driver(&clock, line);

        assert_eq!(dht.read_frame(), Err(SensorError::HandshakeTimeout));
    }

    #[test]
    fn test_ack_high_never_falls() {
        let clock = Cell::new(0);
        let line = MockLine::new(&clock, Vec::from([(20, true), (80, false)]), true);
        let mut dht = driver(&clock, line);

        assert_eq!(dht.read_frame(), Err(SensorError::HandshakeTimeout));
    }

    #[test]
    fn test_stream_stops_mid_frame() {
        let clock = Cell::new(0);
        let mut segments = waveform([0xFF, 0xFF, 0xFF, 0xFF, 0xFC]);
        // Keep the handshake and the first 10 bits, then hold the line high
        segments.truncate(3 + 2 * 10);
        let line = MockLine::new(&clock, segments, true);
        let mut dht = driver(&clock, line);

        assert_eq!(dht.read_frame(), Err(SensorError::BitTimeout { bit: 9 }));
    }

    #[test]
    fn test_line_released_after_failure() {
        let clock = Cell::new(0);
        let line = MockLine::new(&clock, Vec::new(), true);
        let mut dht = driver(&clock, line);

        let _ = dht.read_frame();
        let (line, _) = dht.release();
        assert_eq!(line.actions.last(), Some(&Action::Release));
        assert_eq!(line.driven, None);
    }
}
