use alloc::string::String;

use crate::core::input::{Button, TouchPoint};
use crate::core::locale::Locale;
use crate::core::surface::Surface;
use crate::ui::menu::MenuSpec;
use crate::ui::prompt::PromptOptions;

/// Collaborators a widget borrows while handling an event.
pub struct AppCtx<'a> {
    pub surface: &'a mut dyn Surface,
    pub locale: &'a dyn Locale,
}

/// Power and mode control of the host device.
pub trait Device {
    /// Make sure the panel is lit.
    fn set_lcd_power(&mut self, on: bool);

    /// Hand input back to the device's idle (clock/launcher) UI.
    fn set_idle_ui(&mut self);
}

/// A change of active widget, requested from inside a callback and applied
/// by the session once the callback has returned.
pub enum Transition {
    /// Replace the active widget with a new menu, or with nothing.
    Menu(Option<MenuSpec>),
    Message {
        text: String,
        title: Option<String>,
    },
    Prompt {
        message: String,
        options: PromptOptions,
    },
    /// A prompt button was chosen.
    Answer(bool),
}

/// An interactive widget bound to the session's input.
pub trait Widget {
    /// Repaint the whole widget.
    fn redraw(&mut self, ctx: &mut AppCtx);

    fn on_touch(&mut self, ctx: &mut AppCtx, point: TouchPoint);

    fn on_button(&mut self, ctx: &mut AppCtx, button: Button);

    /// Advance widget timers by `elapsed_ms`.
    fn on_tick(&mut self, _ctx: &mut AppCtx, _elapsed_ms: u32) {}

    /// The transition requested while handling the last event, if any.
    fn take_transition(&mut self) -> Option<Transition>;
}
