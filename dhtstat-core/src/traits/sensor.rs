//! Single-wire sensor traits

use crate::reading::RawReading;

/// Errors that can occur while reading a sensor frame
///
/// All of these are per-cycle conditions: the caller keeps the last good
/// reading and retries on the next scheduled poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Line still high after the acknowledge window
    NoResponse,
    /// Sensor acknowledged but its response pulse pair overran
    HandshakeTimeout,
    /// A bit edge did not arrive in time
    BitTimeout {
        /// Index of the bit being read (0-39)
        bit: u8,
    },
    /// Frame checksum did not match the payload sum
    ChecksumMismatch {
        /// Checksum byte sent by the sensor
        expected: u8,
        /// Low 8 bits of the payload sum
        actual: u8,
    },
}

impl SensorError {
    /// Check if the error came from line timing rather than frame content
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            SensorError::NoResponse | SensorError::HandshakeTimeout | SensorError::BitTimeout { .. }
        )
    }
}

/// Trait for sensors producing raw 5-byte frames
///
/// One call is one complete handshake-and-read cycle. Implementations
/// never retry internally; pacing is the caller's job.
pub trait FrameSource {
    /// Read one raw frame from the sensor
    ///
    /// Takes `&mut self` because driving the data line requires mutable access.
    fn read_frame(&mut self) -> Result<RawReading, SensorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_classification() {
        assert!(SensorError::NoResponse.is_timeout());
        assert!(SensorError::HandshakeTimeout.is_timeout());
        assert!(SensorError::BitTimeout { bit: 12 }.is_timeout());
        assert!(!SensorError::ChecksumMismatch {
            expected: 1,
            actual: 2
        }
        .is_timeout());
    }
}
