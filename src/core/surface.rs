//! The drawing surface widgets render through.
//!
//! Widgets only ever talk to a [`Surface`]: a stateful pen in the style of a
//! small LCD graphics library (current colours, font and alignment) plus a
//! `flip` that pushes the finished frame to the panel. The concrete
//! implementation over `embedded-graphics` lives in [`crate::core::display`].

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle, text::Alignment};

use crate::WidgetError;
use crate::ui::theme::Palette;

/// Fonts available to widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Font {
    /// Menu rows and values.
    #[default]
    Row,
    /// Headings, message and prompt bodies.
    Title,
}

/// A 1bpp bitmap, rows packed MSB first and padded to a whole byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub width: u32,
    pub height: u32,
    pub data: &'static [u8],
}

impl Glyph {
    /// Whether the pixel at `(x, y)` is set.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let stride = self.width.div_ceil(8);
        let byte = self.data.get((y * stride + x / 8) as usize).copied().unwrap_or(0);
        byte & (0x80 >> (x % 8)) != 0
    }
}

/// A stateful drawing surface.
///
/// Text is always positioned by its top edge; `align` selects which
/// horizontal edge (or the centre) of the string sits at `at.x`.
pub trait Surface {
    /// Full panel dimensions.
    fn size(&self) -> Size;

    /// The area widgets may draw into, excluding system chrome.
    fn app_rect(&self) -> Rectangle;

    /// Restore default colours, font and alignment.
    fn reset(&mut self);

    /// The colours that `reset` and highlight rendering draw from.
    fn palette(&self) -> Palette;

    fn set_color(&mut self, color: Rgb888);

    fn set_bg_color(&mut self, color: Rgb888);

    fn set_font(&mut self, font: Font);

    /// Width in pixels of `text` in the current font.
    fn string_width(&self, text: &str) -> u32;

    /// Fill `area` with the background colour.
    fn clear_rect(&mut self, area: Rectangle);

    /// Fill `area` with the foreground colour.
    fn fill_rect(&mut self, area: Rectangle);

    fn draw_string(&mut self, text: &str, at: Point, align: Alignment);

    fn draw_line(&mut self, from: Point, to: Point);

    fn fill_poly(&mut self, points: &[Point]);

    fn draw_poly(&mut self, points: &[Point]);

    /// Draw the set pixels of `glyph` in the foreground colour, each scaled
    /// to a `scale`×`scale` block.
    fn draw_glyph(&mut self, glyph: &Glyph, at: Point, scale: u32);

    /// Push everything drawn so far to the panel.
    fn flip(&mut self) -> Result<(), WidgetError>;
}

/// Rectangle spanning two inclusive corners.
pub fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Rectangle {
    Rectangle::with_corners(Point::new(x1, y1), Point::new(x2, y2))
}
