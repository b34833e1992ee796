//! Render sink trait for the thermometer screen

use crate::format::OneDecimal;

/// Errors that can occur while rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the display controller failed
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Text did not fit the line buffer
    BufferOverflow,
}

/// Trait for the screen showing the live reading and the target
///
/// The core hands over already-rounded values; string building, font
/// choice and placement belong to the implementation.
pub trait RenderSink {
    /// Draw the live reading and the target value
    fn render(&mut self, live: OneDecimal, target: OneDecimal) -> Result<(), DisplayError>;
}
