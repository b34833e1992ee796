//! dhtstat Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the sensor decoder and the
//! button panel are written against, so the same logic runs on the
//! STM32 target and against mocks on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (dhtstat-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dhtstat-drivers (DHT11, buttons)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dhtstat-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dhtstat-hal-stm32f1                    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::DataLine`] - Bidirectional single-wire data line
//! - [`gpio::InputPin`] - Digital input (buttons)
//! - [`timer::MicrosecondTimer`] - Free-running microsecond counter

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use gpio::{DataLine, InputPin};
pub use timer::{Deadline, MicrosecondTimer};
