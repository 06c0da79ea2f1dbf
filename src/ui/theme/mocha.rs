use embedded_graphics::pixelcolor::Rgb888;

use super::Palette;

// --- Catppuccin Mocha Palette ---
const BASE: Rgb888 = Rgb888::new(0x1E, 0x1E, 0x2E);
const SURFACE0: Rgb888 = Rgb888::new(0x31, 0x32, 0x44);
const TEXT: Rgb888 = Rgb888::new(0xCD, 0xD6, 0xF4);
const BLUE: Rgb888 = Rgb888::new(0x89, 0xB4, 0xFA);

pub const PALETTE: Palette = Palette {
    fg: TEXT,
    bg: BASE,
    fg_highlight: SURFACE0,
    bg_highlight: BLUE,
};
