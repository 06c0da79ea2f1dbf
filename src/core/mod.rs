//! Core plumbing shared by every widget.
//!
//! This module houses the drawing surface abstraction and its
//! `embedded-graphics` implementation, input handling, label translation and
//! the session that owns whichever widget is on screen.

pub mod app;
pub mod display;
pub mod input;
pub mod locale;
pub mod session;
pub mod surface;
