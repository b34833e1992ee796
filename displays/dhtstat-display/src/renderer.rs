//! Renderer bridging the core controller to a display backend

use dhtstat_core::config::DisplayLayout;
use dhtstat_core::format::OneDecimal;
use dhtstat_core::traits::{DisplayError, RenderSink};

use crate::backend::DisplayBackend;
use crate::font::Font;
use crate::screen::Screen;

/// Lays out the two lines and pushes them to a backend
pub struct Renderer<B> {
    backend: B,
    screen: Screen,
    layout: DisplayLayout,
}

impl<B: DisplayBackend> Renderer<B> {
    /// Create a renderer; canvas size comes from the backend, the margin
    /// from `layout`
    pub fn new(backend: B, layout: DisplayLayout) -> Self {
        let (width, height) = backend.pixel_dimensions();
        Self {
            backend,
            screen: Screen::new(),
            layout: DisplayLayout {
                width,
                height,
                ..layout
            },
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Force the next render to reach the display
    pub fn invalidate(&mut self) {
        self.screen.mark_dirty();
    }

    fn draw(&mut self) -> Result<(), DisplayError> {
        let (live, live_at) = self.screen.live();
        let (target, target_at) = self.screen.target();

        if !self.backend.is_ready() {
            self.backend.init()?;
        }
        self.backend.clear()?;
        self.backend
            .draw_text(live_at.x, live_at.y, live, Font::Large)?;
        self.backend
            .draw_text(target_at.x, target_at.y, target, Font::Small)?;
        self.backend.flush()
    }
}

impl<B: DisplayBackend> RenderSink for Renderer<B> {
    fn render(&mut self, live: OneDecimal, target: OneDecimal) -> Result<(), DisplayError> {
        let large = self.backend.font_metrics(Font::Large);
        let small = self.backend.font_metrics(Font::Small);
        self.screen
            .update(live, target, large, small, &self.layout)?;

        if !self.screen.is_dirty() {
            return Ok(());
        }

        // Stays dirty on failure so the next render retries
        self.draw()?;
        self.screen.mark_clean();
        Ok(())
    }
}
