//! Board-agnostic core logic for the dhtstat thermometer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Sensor frame validation and temperature derivation
//! - Rounding and one-decimal formatting rules
//! - Setpoint state machine (tracking vs. locked target)
//! - Button edge detection
//! - Tick controller tying sensor, buttons and display together
//! - Configuration type definitions and parser
//! - Collaborator traits (frame source, button source, render sink)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buttons;
pub mod config;
pub mod controller;
pub mod format;
pub mod reading;
pub mod setpoint;
pub mod traits;
