//! User interface components.
//!
//! The menu, message and prompt widgets, plus the colour themes they draw
//! with.

pub mod menu;
pub mod message;
pub mod prompt;
pub(crate) mod text;
pub mod theme;
