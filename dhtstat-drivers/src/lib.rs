//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in dhtstat-core, built on the pin and timer traits of dhtstat-hal:
//!
//! - Temperature/humidity sensors (DHT11 single-wire)
//! - Button panel (three active-low inputs)

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod sensor;
