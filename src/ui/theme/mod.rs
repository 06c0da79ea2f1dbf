//! Colour themes.
//!
//! A [`Theme`] is picked in the configuration file and resolves to the four
//! colour [`Palette`] every widget draws with: normal rows use `fg` on `bg`,
//! the cursor row and pressed buttons use the highlight pair.

use embedded_graphics::pixelcolor::Rgb888;
use serde::Deserialize;

pub mod default;

#[cfg(feature = "mocha")]
pub mod mocha;

/// A UI Theme that determines which palette the widgets are drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    #[cfg(feature = "mocha")]
    #[serde(alias = "catppuccin", alias = "rice")]
    Mocha,
}

impl Theme {
    /// The palette this theme draws with.
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Default => default::PALETTE,
            #[cfg(feature = "mocha")]
            Theme::Mocha => mocha::PALETTE,
        }
    }
}

/// Foreground/background colours, plain and highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub fg: Rgb888,
    pub bg: Rgb888,
    pub fg_highlight: Rgb888,
    pub bg_highlight: Rgb888,
}

impl Default for Palette {
    fn default() -> Self {
        default::PALETTE
    }
}
