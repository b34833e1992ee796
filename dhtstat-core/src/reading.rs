//! Sensor frame validation and temperature derivation
//!
//! A frame is 40 bits sent most significant bit first:
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────┬──────────┬──────────┐
//! │ HUMIDITY INT │ HUMIDITY DEC │ TEMP INT │ TEMP DEC │ CHECKSUM │
//! │ 1B           │ 1B           │ 1B       │ 1B       │ 1B       │
//! └──────────────┴──────────────┴──────────┴──────────┴──────────┘
//! ```
//!
//! CHECKSUM is the low 8 bits of the sum of the four payload bytes.
//! The decimal bytes are tenths digits, not binary fractions.

use crate::traits::SensorError;

/// Number of bytes in one frame
pub const FRAME_LEN: usize = 5;

/// Number of bits in one frame
pub const FRAME_BITS: usize = FRAME_LEN * 8;

/// One raw frame as received from the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawReading {
    pub humidity_int: u8,
    pub humidity_dec: u8,
    pub temp_int: u8,
    pub temp_dec: u8,
    pub checksum: u8,
}

impl RawReading {
    /// Build a frame from bytes in wire order
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self {
            humidity_int: bytes[0],
            humidity_dec: bytes[1],
            temp_int: bytes[2],
            temp_dec: bytes[3],
            checksum: bytes[4],
        }
    }

    /// Bytes in wire order
    pub const fn to_bytes(&self) -> [u8; FRAME_LEN] {
        [
            self.humidity_int,
            self.humidity_dec,
            self.temp_int,
            self.temp_dec,
            self.checksum,
        ]
    }

    /// Low 8 bits of the payload sum
    pub fn payload_sum(&self) -> u8 {
        self.humidity_int
            .wrapping_add(self.humidity_dec)
            .wrapping_add(self.temp_int)
            .wrapping_add(self.temp_dec)
    }

    /// Check the checksum byte against the payload
    pub fn checksum_ok(&self) -> bool {
        self.payload_sum() == self.checksum
    }

    /// Temperature fields, not validated
    pub const fn temperature(&self) -> Temperature {
        Temperature::from_parts(self.temp_int, self.temp_dec)
    }

    /// Relative humidity in 0.1% units, not validated
    pub const fn humidity_x10(&self) -> u16 {
        self.humidity_int as u16 * 10 + self.humidity_dec as u16
    }
}

impl From<[u8; FRAME_LEN]> for RawReading {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

/// Temperature in degrees Celsius with 0.1°C resolution
///
/// Stored as tenths of a degree: 23.7°C is 237. Every value the sensor
/// can encode (integer byte plus a tenths byte up to 255) is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperature {
    tenths: i16,
}

impl Temperature {
    /// 0.0°C, the value shown before the first good frame
    pub const ZERO: Self = Self { tenths: 0 };

    /// Create from tenths of a degree
    pub const fn from_tenths(tenths: i16) -> Self {
        Self { tenths }
    }

    /// `integer + decimal / 10`
    ///
    /// A decimal byte of 10 or more is a sensor fault; it is passed through
    /// arithmetically (integer 23, decimal 15 gives 24.5°C).
    pub const fn from_parts(integer: u8, decimal: u8) -> Self {
        Self {
            tenths: integer as i16 * 10 + decimal as i16,
        }
    }

    /// Create from a real value, rounding half away from zero to 0.1°C
    pub fn from_celsius(celsius: f32) -> Self {
        let tenths = crate::format::round_half_away_from_zero(celsius * 10.0);
        Self {
            tenths: tenths.clamp(i16::MIN as i32, i16::MAX as i32) as i16,
        }
    }

    /// Value in tenths of a degree
    pub const fn tenths(self) -> i16 {
        self.tenths
    }

    /// Value in degrees Celsius
    pub fn celsius(self) -> f32 {
        self.tenths as f32 / 10.0
    }
}

/// Validate a frame and derive its temperature
///
/// Any checksum mismatch rejects the whole frame; no field of a corrupted
/// frame is ever used.
pub fn validate_and_derive(raw: RawReading) -> Result<Temperature, SensorError> {
    if !raw.checksum_ok() {
        return Err(SensorError::ChecksumMismatch {
            expected: raw.checksum,
            actual: raw.payload_sum(),
        });
    }

    Ok(raw.temperature())
}
