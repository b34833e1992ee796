//! SSD1306 OLED display driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via blocking I2C.
//! Drawing goes to a RAM frame buffer through embedded-graphics; only
//! `flush` touches the bus.

use core::convert::Infallible;

use dhtstat_display::{DisplayBackend, DisplayError, Font, FontMetrics};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;

/// SSD1306 I2C address (typically 0x3C or 0x3D)
const SSD1306_ADDR: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const DISPLAY_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Font used for each screen role
fn mono_font(font: Font) -> &'static MonoFont<'static> {
    match font {
        Font::Large => &FONT_10X20,
        Font::Small => &FONT_6X10,
    }
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
    ready: bool,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            buffer: [[0; WIDTH]; PAGES],
            ready: false,
        }
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(SSD1306_ADDR, &[0x00, cmd])
            .map_err(|_| DisplayError::Communication)
    }

    /// Push the frame buffer, page by page
    fn write_pages(&mut self) -> Result<(), DisplayError> {
        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | page as u8)?;
            self.command(cmd::SET_LOW_COLUMN)?;
            self.command(cmd::SET_HIGH_COLUMN)?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = 0x40; // Data mode
            data[1..].copy_from_slice(&self.buffer[page]);
            self.i2c
                .write(SSD1306_ADDR, &data)
                .map_err(|_| DisplayError::Communication)?;
        }
        Ok(())
    }
}

impl<I2C> OriginDimensions for Ssd1306<I2C> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<I2C> DrawTarget for Ssd1306<I2C> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(coord.x), usize::try_from(coord.y)) else {
                continue;
            };
            if x >= WIDTH || y >= HEIGHT {
                continue;
            }

            let cell = &mut self.buffer[y / 8][x];
            let mask = 1 << (y % 8);
            if color.is_on() {
                *cell |= mask;
            } else {
                *cell &= !mask;
            }
        }
        Ok(())
    }
}

impl<I2C: I2c> DisplayBackend for Ssd1306<I2C> {
    /// Run the power-up command sequence
    ///
    /// Also used to recover after a bus fault, so it starts from a known
    /// display-off state.
    fn init(&mut self) -> Result<(), DisplayError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80,
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14, // Internal charge pump on
            cmd::SET_MEMORY_MODE,
            0x02, // Page addressing
            cmd::SET_SEG_REMAP,
            cmd::SET_COM_SCAN_DEC,
            cmd::SET_COM_PINS,
            0x12,
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::DISPLAY_RAM,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        self.ready = false;
        for &c in init_cmds {
            self.command(c)?;
        }

        self.ready = true;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, font: Font) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(mono_font(font), BinaryColor::On);
        let origin = Point::new(i32::from(x), i32::from(y));
        // Frame buffer drawing is infallible; off-screen pixels are dropped
        let _ = Text::with_baseline(text, origin, style, Baseline::Top).draw(self);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.ready {
            return Err(DisplayError::NotInitialized);
        }

        // A bus fault may have reset the panel; re-init before the next frame
        let result = self.write_pages();
        if result.is_err() {
            self.ready = false;
        }
        result
    }

    fn font_metrics(&self, font: Font) -> FontMetrics {
        let size = mono_font(font).character_size;
        FontMetrics::new(size.width as u16, size.height as u16)
    }

    fn pixel_dimensions(&self) -> (u16, u16) {
        (WIDTH as u16, HEIGHT as u16)
    }
}
