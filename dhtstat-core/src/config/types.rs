//! Configuration type definitions
//!
//! Defaults reproduce the timings the DHT11 and the button panel were
//! tuned with; a config file only needs to name what it changes.

use crate::buttons::Button;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Single-wire handshake and bit timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorTiming {
    /// Start signal low hold (ms)
    pub start_low_ms: u32,
    /// High pulse after the start signal, before releasing the line (µs)
    pub start_high_us: u32,
    /// How long the sensor has to pull the line low after release (µs)
    pub ack_timeout_us: u32,
    /// Delay from the rising edge of a bit to the sample point (µs)
    pub bit_sample_us: u32,
    /// Upper bound on any single edge wait (µs)
    pub max_wait_us: u32,
}

impl Default for SensorTiming {
    fn default() -> Self {
        Self {
            start_low_ms: 20,
            start_high_us: 30,
            ack_timeout_us: 200,
            bit_sample_us: 40,
            max_wait_us: 2000,
        }
    }
}

/// Blocking guard delays after a detected press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonTiming {
    /// Guard after increment or decrement (ms)
    pub step_guard_ms: u32,
    /// Guard after reset (ms)
    pub reset_guard_ms: u32,
}

impl ButtonTiming {
    /// Guard interval for a button
    pub fn guard_ms(&self, button: Button) -> u32 {
        match button {
            Button::Reset => self.reset_guard_ms,
            Button::Increment | Button::Decrement => self.step_guard_ms,
        }
    }
}

impl Default for ButtonTiming {
    fn default() -> Self {
        Self {
            step_guard_ms: 120,
            reset_guard_ms: 240,
        }
    }
}

/// Main loop pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollConfig {
    /// Minimum time between sensor reads (ms)
    pub sensor_period_ms: u32,
    /// Idle delay at the end of every loop pass (ms)
    pub loop_delay_ms: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            sensor_period_ms: 1000,
            loop_delay_ms: 20,
        }
    }
}

/// Screen geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayLayout {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Gap between the target line and the bottom edge (px)
    pub bottom_margin: u16,
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            bottom_margin: 2,
        }
    }
}

/// Complete thermostat configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThermostatConfig {
    pub sensor: SensorTiming,
    pub buttons: ButtonTiming,
    pub poll: PollConfig,
    pub display: DisplayLayout,
}

impl ThermostatConfig {
    /// Create with default values
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ThermostatConfig::new();
        assert_eq!(config.sensor.start_low_ms, 20);
        assert_eq!(config.sensor.ack_timeout_us, 200);
        assert_eq!(config.poll.sensor_period_ms, 1000);
        assert_eq!(config.poll.loop_delay_ms, 20);
        assert_eq!((config.display.width, config.display.height), (128, 64));
    }

    #[test]
    fn test_reset_guard_is_longer() {
        let timing = ButtonTiming::default();
        assert_eq!(timing.guard_ms(Button::Increment), 120);
        assert_eq!(timing.guard_ms(Button::Decrement), 120);
        assert_eq!(timing.guard_ms(Button::Reset), 240);
    }
}
