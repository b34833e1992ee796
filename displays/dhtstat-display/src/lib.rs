//! Display side of the dhtstat thermometer
//!
//! This crate provides:
//! - `DisplayBackend` trait for pixel displays with two fixed fonts
//! - Font metrics and the 128x64 placement rules
//! - `Screen` buffer holding the two text lines and their positions
//! - `Renderer`, the `RenderSink` the core controller draws through
//!
//! # Architecture
//!
//! ```text
//! Controller ──(live, target)──► Renderer ──► Screen (strings, layout)
//!                                   │
//!                                   ▼
//!                            DisplayBackend (SSD1306, mock, ...)
//! ```
//!
//! The renderer owns string building and placement; backends only know
//! how to put a string at a pixel position in one of two fonts.

#![no_std]

pub mod backend;
pub mod font;
pub mod renderer;
pub mod screen;

// Re-export key types
pub use backend::DisplayBackend;
pub use dhtstat_core::traits::DisplayError;
pub use font::{Font, FontMetrics};
pub use renderer::Renderer;
pub use screen::{Placement, Screen};
