//! White on black, inverted for the highlight.

use embedded_graphics::pixelcolor::Rgb888;

use super::Palette;

pub const PALETTE: Palette = Palette {
    fg: Rgb888::new(0xFF, 0xFF, 0xFF),
    bg: Rgb888::new(0x00, 0x00, 0x00),
    fg_highlight: Rgb888::new(0x00, 0x00, 0x00),
    bg_highlight: Rgb888::new(0x00, 0xFF, 0xFF),
};
