//! Button input trait

use crate::buttons::ButtonLevels;

/// Source of raw button levels
///
/// Implementations sample all three inputs at once; edge detection and
/// guard delays happen in the core.
pub trait ButtonSource {
    /// Sample the current electrical level of every button
    fn levels(&mut self) -> ButtonLevels;
}
