//! Display backend trait
//!
//! Defines the interface for pixel displays.

use dhtstat_core::traits::DisplayError;

use crate::font::{Font, FontMetrics};

/// Display backend trait
///
/// Provides a hardware-agnostic interface for drawing text on a pixel
/// display. Implementations handle the controller, the bus and the
/// actual glyph bitmaps.
pub trait DisplayBackend {
    /// Bring the controller up; safe to call again after a bus fault
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Whether the controller is initialized and the bus healthy
    fn is_ready(&self) -> bool;

    /// Clear the frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at pixel (`x`, `y`)
    fn draw_text(&mut self, x: u16, y: u16, text: &str, font: Font) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// For displays with internal buffers, this sends the buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Glyph cell size of a font
    fn font_metrics(&self, font: Font) -> FontMetrics;

    /// Get pixel dimensions as (width, height)
    fn pixel_dimensions(&self) -> (u16, u16);
}
