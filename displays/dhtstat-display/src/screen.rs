//! Screen buffer and layout
//!
//! Two text lines on a pixel canvas:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │                              │
//! │           23.7 C             │  large font, centered both ways
//! │                              │
//! │Target: 22.0 C                │  small font, bottom-left, margin above edge
//! └──────────────────────────────┘
//! ```
//!
//! Positions are computed from string length and glyph size and clamped
//! to the canvas, so text wider than the screen starts at x = 0 rather
//! than at a negative coordinate.

use core::fmt::Write;

use dhtstat_core::config::DisplayLayout;
use dhtstat_core::format::OneDecimal;
use dhtstat_core::traits::DisplayError;
use heapless::String;

use crate::font::FontMetrics;

/// Capacity of the live line, enough for any `i32` integer part
pub const LIVE_LEN: usize = 16;

/// Capacity of the target line
pub const TARGET_LEN: usize = 24;

/// Top-left pixel of a text line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Placement {
    pub x: u16,
    pub y: u16,
}

/// `(outer - inner) / 2`, or 0 if `inner` does not fit
fn centered(outer: u16, inner: u16) -> u16 {
    outer.saturating_sub(inner) / 2
}

/// Center `len` glyphs horizontally and vertically
pub fn place_centered(len: usize, font: FontMetrics, layout: &DisplayLayout) -> Placement {
    Placement {
        x: centered(layout.width, font.text_width(len)),
        y: centered(layout.height, font.height),
    }
}

/// Anchor a line at the left edge, `bottom_margin` above the bottom
pub fn place_bottom_left(font: FontMetrics, layout: &DisplayLayout) -> Placement {
    Placement {
        x: 0,
        y: layout
            .height
            .saturating_sub(font.height)
            .saturating_sub(layout.bottom_margin),
    }
}

/// Live reading as shown, e.g. `23.7 C`
pub fn live_text(value: OneDecimal) -> Result<String<LIVE_LEN>, DisplayError> {
    let mut s = String::new();
    write!(s, "{} C", value).map_err(|_| DisplayError::BufferOverflow)?;
    Ok(s)
}

/// Target line as shown, e.g. `Target: 22.0 C`
pub fn target_text(value: OneDecimal) -> Result<String<TARGET_LEN>, DisplayError> {
    let mut s = String::new();
    write!(s, "Target: {} C", value).map_err(|_| DisplayError::BufferOverflow)?;
    Ok(s)
}

/// Screen buffer for the two-line layout
///
/// Tracks whether anything changed since the last flush so the bus
/// transfer can be skipped.
#[derive(Clone)]
pub struct Screen {
    live: String<LIVE_LEN>,
    live_at: Placement,
    target: String<TARGET_LEN>,
    target_at: Placement,
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            live: String::new(),
            live_at: Placement::default(),
            target: String::new(),
            target_at: Placement::default(),
            dirty: true,
        }
    }

    /// Rebuild both lines and their positions
    ///
    /// Marks the screen dirty only if text or placement changed.
    pub fn update(
        &mut self,
        live: OneDecimal,
        target: OneDecimal,
        large: FontMetrics,
        small: FontMetrics,
        layout: &DisplayLayout,
    ) -> Result<(), DisplayError> {
        let live = live_text(live)?;
        let target = target_text(target)?;
        let live_at = place_centered(live.len(), large, layout);
        let target_at = place_bottom_left(small, layout);

        if live != self.live
            || target != self.target
            || live_at != self.live_at
            || target_at != self.target_at
        {
            self.live = live;
            self.target = target;
            self.live_at = live_at;
            self.target_at = target_at;
            self.dirty = true;
        }
        Ok(())
    }

    /// Live line and where to draw it
    pub fn live(&self) -> (&str, Placement) {
        (self.live.as_str(), self.live_at)
    }

    /// Target line and where to draw it
    pub fn target(&self) -> (&str, Placement) {
        (self.target.as_str(), self.target_at)
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Mark screen as dirty (needs redraw)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LARGE: FontMetrics = FontMetrics::new(16, 26);
    const SMALL: FontMetrics = FontMetrics::new(7, 10);

    fn layout() -> DisplayLayout {
        DisplayLayout::default()
    }

    #[test]
    fn test_strings() {
        let live = live_text(OneDecimal::from_tenths(237)).unwrap();
        assert_eq!(live.as_str(), "23.7 C");

        let target = target_text(OneDecimal::whole(22)).unwrap();
        assert_eq!(target.as_str(), "Target: 22.0 C");

        let cold = live_text(OneDecimal::from_tenths(-4)).unwrap();
        assert_eq!(cold.as_str(), "-0.4 C");
    }

    #[test]
    fn test_worst_case_fits() {
        let extreme = OneDecimal::from_tenths(i32::MIN);
        assert!(live_text(extreme).is_ok());
        assert!(target_text(extreme).is_ok());
    }

    #[test]
    fn test_live_is_centered() {
        // "23.7 C" is 6 glyphs, 96 px wide
        let at = place_centered(6, LARGE, &layout());
        assert_eq!(at, Placement { x: 16, y: 19 });
    }

    #[test]
    fn test_target_anchored_bottom_left() {
        let at = place_bottom_left(SMALL, &layout());
        assert_eq!(at, Placement { x: 0, y: 52 });
    }

    #[test]
    fn test_oversized_text_clamps_to_zero() {
        // 9 glyphs of 16 px exceed the 128 px canvas
        assert_eq!(place_centered(9, LARGE, &layout()).x, 0);

        let tall = FontMetrics::new(8, 70);
        assert_eq!(place_centered(1, tall, &layout()).y, 0);
        assert_eq!(place_bottom_left(tall, &layout()).y, 0);
    }

    #[test]
    fn test_dirty_only_on_change() {
        let mut screen = Screen::new();
        assert!(screen.is_dirty());

        let live = OneDecimal::from_tenths(237);
        screen
            .update(live, live, LARGE, SMALL, &layout())
            .unwrap();
        screen.mark_clean();

        screen
            .update(live, live, LARGE, SMALL, &layout())
            .unwrap();
        assert!(!screen.is_dirty());

        screen
            .update(live, OneDecimal::whole(24), LARGE, SMALL, &layout())
            .unwrap();
        assert!(screen.is_dirty());
        assert_eq!(screen.target().0, "Target: 24.0 C");
        assert_eq!(screen.live(), ("23.7 C", Placement { x: 16, y: 19 }));
    }
}
