//! Widget configuration.
//!
//! Everything here has a default, so an empty file (or no file at all) gives
//! the stock look: default theme, widgets above the standard button bar and
//! untranslated labels.
//!
//! ```toml
//! theme = "mocha"
//! app_rect = { x1 = 0, y1 = 24, x2 = 175, y2 = 175 }
//!
//! [menu]
//! font_height = 21
//!
//! [buttons]
//! hit_top = 130
//!
//! [translations]
//! Brightness = "Helligkeit"
//! ```

use embedded_graphics::{prelude::Size, primitives::Rectangle};
use serde::Deserialize;

use crate::core::input::{ButtonGeometry, Zone};
use crate::core::locale::Dictionary;
use crate::core::surface::rect;
use crate::ui::menu::MenuOptions;
use crate::ui::theme::Theme;

/// Top-level configuration structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The global UI theme
    pub theme: Theme,
    /// Area widgets draw into; everything above the button bar when absent.
    pub app_rect: Option<Zone>,
    /// Touch zones of the on-screen buttons.
    pub buttons: ButtonGeometry,
    /// Defaults for menus built from this configuration.
    pub menu: MenuOptions,
    /// Label translations.
    pub translations: Dictionary,
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| {
            log::error!("TOML parse error: {:?}", e);
            ConfigError::Parse
        })
    }

    /// Load configuration from a TOML file on the boot partition.
    #[cfg(feature = "uefi")]
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = read_file_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// The application rectangle on a panel of `size`.
    pub fn app_rect(&self, size: Size) -> Rectangle {
        if let Some(z) = self.app_rect {
            return rect(z.x1, z.y1, z.x2, z.y2);
        }
        let b = &self.buttons;
        let bar_top = b.up.y1.min(b.select.y1).min(b.down.y1);
        rect(0, 0, size.width as i32 - 1, bar_top - 1)
    }
}

#[cfg(feature = "uefi")]
fn read_file_to_string(path: &str) -> Result<alloc::string::String, ConfigError> {
    use alloc::string::String;
    use uefi::CString16;
    use uefi::fs::FileSystem;

    let path_cstr = CString16::try_from(path).map_err(|_| ConfigError::InvalidPath)?;

    let mut fs = FileSystem::new(
        uefi::boot::get_image_file_system(uefi::boot::image_handle())
            .map_err(|_| ConfigError::Fs)?,
    );

    let buf = fs
        .read(path_cstr.as_ref())
        .map_err(|_| ConfigError::NotFound)?;

    String::from_utf8(buf).map_err(|_| ConfigError::Encoding)
}

/// Errors that can occur when loading or parsing the configuration.
#[derive(Debug, PartialEq, Eq, thiserror_no_std::Error)]
pub enum ConfigError {
    #[error("invalid file path")]
    InvalidPath,
    #[error("config file not found")]
    NotFound,
    #[error("filesystem error")]
    Fs,
    #[error("file encoding error")]
    Encoding,
    #[error("TOML parse error")]
    Parse,
}
