//! Crate-wide error types.
//!
//! Widgets themselves never fail: they default, clamp and log. These errors
//! cover the fallible edges around them, pushing a frame to the panel and
//! loading configuration.

use crate::config::ConfigError;

#[derive(Debug, thiserror_no_std::Error)]
/// The primary error type for the crate.
pub enum WidgetError {
    #[error("display error: {0}")]
    Display(&'static str),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Error: {0}")]
    Generic(&'static str),
}
