#![cfg_attr(not(test), no_std)]
//! Scrollable menus, messages and yes/no prompts for small touch displays.
//!
//! Widgets draw through a [`core::surface::Surface`] and are driven by a
//! [`core::session::Session`], which owns the one widget currently on screen
//! and routes touches, buttons and timer ticks to it.
//!
//! # Features
//! - `no_std` with `alloc`.
//! - Menus with actions, numeric fields, toggles and inert labels.
//! - On-screen up/select/down buttons with pressed feedback.
//! - TOML configuration for theme, layout and label translations.
//! - A UEFI host binary (with the `uefi` feature) driving widgets from the keyboard.

extern crate alloc;

pub mod config;
pub mod core;
pub mod error;
pub mod ui;

pub use error::WidgetError;
