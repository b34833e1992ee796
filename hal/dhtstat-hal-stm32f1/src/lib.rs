//! STM32F1-specific HAL for the dhtstat firmware
//!
//! Implements the `dhtstat-hal` traits on top of embassy-stm32:
//!
//! - [`gpio::FlexLine`] - sensor data line (push-pull out / pulled-up in)
//! - [`gpio::ButtonInput`] - pulled-up button input
//! - [`timer::EmbassyMicros`] - microsecond counter from the embassy time driver
//!
//! The time driver must tick at 1 MHz (`embassy-time/tick-hz-1_000_000`)
//! for the microsecond timer to have single-microsecond resolution.

#![no_std]

pub mod gpio;
pub mod timer;

pub use gpio::{ButtonInput, FlexLine};
pub use timer::EmbassyMicros;
