//! Font selection and metrics

/// The two fonts the screen uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Live reading
    Large,
    /// Target line
    Small,
}

/// Fixed glyph cell size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontMetrics {
    pub width: u16,
    pub height: u16,
}

impl FontMetrics {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Pixel width of `len` glyphs, saturating
    pub fn text_width(&self, len: usize) -> u16 {
        let len = u16::try_from(len).unwrap_or(u16::MAX);
        self.width.saturating_mul(len)
    }
}
