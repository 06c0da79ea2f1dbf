//! The widget session.
//!
//! A [`Session`] owns the drawing surface, the device and the locale, and
//! binds at most one widget to the input stream at a time. Showing a widget
//! tears the previous one down first; showing no menu releases input back to
//! the device's idle UI.

use alloc::boxed::Box;
use alloc::string::String;
use embedded_graphics::{prelude::Point, primitives::Rectangle};

use crate::core::app::{AppCtx, Device, Transition, Widget};
use crate::core::input::{Button, ButtonBar, ButtonGeometry, TouchPoint};
use crate::core::locale::Locale;
use crate::core::surface::Surface;
use crate::ui::menu::{Menu, MenuSpec};
use crate::ui::message::Message;
use crate::ui::prompt::{Prompt, PromptOptions};

/// The widget currently receiving input.
enum Active {
    Idle,
    Menu(Box<Menu>),
    Message(Message),
    Prompt(Prompt),
}

impl Active {
    fn widget(&mut self) -> Option<&mut dyn Widget> {
        match self {
            Active::Idle => None,
            Active::Menu(menu) => Some(menu.as_mut() as &mut dyn Widget),
            Active::Message(message) => Some(message as &mut dyn Widget),
            Active::Prompt(prompt) => Some(prompt as &mut dyn Widget),
        }
    }
}

pub struct Session<S, D, L> {
    surface: S,
    device: D,
    locale: L,
    buttons: ButtonGeometry,
    active: Active,
    answer: Option<bool>,
}

impl<S: Surface, D: Device, L: Locale> Session<S, D, L> {
    pub fn new(surface: S, device: D, locale: L) -> Self {
        Self {
            surface,
            device,
            locale,
            buttons: ButtonGeometry::default(),
            active: Active::Idle,
            answer: None,
        }
    }

    /// Use `buttons` for the on-screen buttons of menus created from now on.
    pub fn with_buttons(mut self, buttons: ButtonGeometry) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn locale(&self) -> &L {
        &self.locale
    }

    /// Whether no widget is bound.
    pub fn is_idle(&self) -> bool {
        matches!(self.active, Active::Idle)
    }

    pub fn menu(&self) -> Option<&Menu> {
        match &self.active {
            Active::Menu(menu) => Some(&**menu),
            _ => None,
        }
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        match &self.active {
            Active::Prompt(prompt) => Some(prompt),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&Message> {
        match &self.active {
            Active::Message(message) => Some(message),
            _ => None,
        }
    }

    /// The button chosen in the last resolved prompt, taken once.
    pub fn take_answer(&mut self) -> Option<bool> {
        self.answer.take()
    }

    /// Run `f` against the active menu, then apply any transition it asked
    /// for.
    pub fn with_menu<R>(&mut self, f: impl FnOnce(&mut Menu, &mut AppCtx) -> R) -> Option<R> {
        let Active::Menu(menu) = &mut self.active else {
            return None;
        };
        let mut ctx = AppCtx {
            surface: &mut self.surface,
            locale: &self.locale,
        };
        let result = f(menu.as_mut(), &mut ctx);
        self.settle();
        Some(result)
    }

    /// Replace the active widget with a menu built from `spec`, or with
    /// nothing.
    pub fn show_menu(&mut self, spec: Option<MenuSpec>) -> Option<&Menu> {
        self.teardown();
        self.device.set_lcd_power(true);

        let Some(spec) = spec else {
            log::debug!("no menu supplied, returning to idle UI");
            self.device.set_idle_ui();
            return None;
        };

        let menu = Menu::new(spec, &self.surface, ButtonBar::new(self.buttons));
        self.bind(Active::Menu(Box::new(menu)));
        self.menu()
    }

    /// Show a message with an optional title. Input is ignored until another
    /// widget is shown.
    pub fn show_message(&mut self, text: &str, title: Option<&str>) {
        self.teardown();
        self.device.set_lcd_power(true);
        self.bind(Active::Message(Message::new(text, title)));
    }

    /// Ask a question. The answer is available from [`Session::take_answer`]
    /// once a button has been chosen. An empty message dismisses without an
    /// answer.
    pub fn show_prompt(&mut self, message: impl Into<String>, options: PromptOptions) {
        let message = message.into();
        self.teardown();
        self.device.set_lcd_power(true);
        self.answer = None;
        if message.is_empty() {
            log::debug!("empty prompt dismissed");
            return;
        }
        self.bind(Active::Prompt(Prompt::new(message, options)));
    }

    /// Release the active widget and clear the screen it drew on.
    pub fn teardown(&mut self) {
        let previous = core::mem::replace(&mut self.active, Active::Idle);
        self.surface.reset();
        let area = match previous {
            Active::Idle => self.surface.app_rect(),
            _ => {
                log::debug!("tearing down active widget");
                Rectangle::new(Point::zero(), self.surface.size())
            }
        };
        self.surface.clear_rect(area);
    }

    /// Deliver a touch to the active widget.
    pub fn touch(&mut self, point: TouchPoint) {
        self.dispatch(|widget, ctx| widget.on_touch(ctx, point));
    }

    /// Deliver a physical button press to the active widget.
    pub fn button(&mut self, button: Button) {
        self.dispatch(|widget, ctx| widget.on_button(ctx, button));
    }

    /// Advance widget timers.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.dispatch(|widget, ctx| widget.on_tick(ctx, elapsed_ms));
    }

    fn dispatch(&mut self, f: impl FnOnce(&mut dyn Widget, &mut AppCtx)) {
        let Some(widget) = self.active.widget() else {
            return;
        };
        let mut ctx = AppCtx {
            surface: &mut self.surface,
            locale: &self.locale,
        };
        f(widget, &mut ctx);
        self.settle();
    }

    fn bind(&mut self, mut active: Active) {
        if let Some(widget) = active.widget() {
            let mut ctx = AppCtx {
                surface: &mut self.surface,
                locale: &self.locale,
            };
            widget.redraw(&mut ctx);
        }
        self.active = active;
    }

    /// Apply transitions requested by the active widget until none is left.
    fn settle(&mut self) {
        while let Some(transition) = self.active.widget().and_then(|w| w.take_transition()) {
            self.apply(transition);
        }
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Menu(spec) => {
                self.show_menu(spec);
            }
            Transition::Message { text, title } => self.show_message(&text, title.as_deref()),
            Transition::Prompt { message, options } => self.show_prompt(message, options),
            Transition::Answer(answer) => {
                log::debug!("prompt answered {}", answer);
                let follow_up = match &mut self.active {
                    Active::Prompt(prompt) => prompt.answered(answer),
                    _ => None,
                };
                self.teardown();
                if let Some(next) = follow_up {
                    self.apply(next);
                }
                // after the follow-up, which may open another prompt
                self.answer = Some(answer);
            }
        }
    }
}
