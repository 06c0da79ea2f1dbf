//! Yes/no prompt.
//!
//! A question with a row of buttons along the bottom edge. Touching a button
//! selects it, touching the selected button again answers. With physical
//! buttons, `Up`/`Down` change the selection and `Select` answers.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use embedded_graphics::{prelude::*, primitives::Rectangle};

use crate::core::app::{AppCtx, Transition, Widget};
use crate::core::input::{Button, TouchPoint};
use crate::core::surface::{Font, Surface, rect};
use crate::ui::text::{self, LINE_HEIGHT};

/// Horizontal space added around each button label.
const BUTTON_PADDING: i32 = 48;
/// Distance from the bottom edge to the centre of the button row.
const BUTTON_ROW_OFFSET: i32 = 20;
/// Touches closer than this to the top of the button row are ignored.
const TOUCH_BAND: i32 = 56;

/// Called with the chosen value; may hand over to another widget.
pub type OnAnswer = Box<dyn FnOnce(bool) -> Option<Transition>>;

pub struct PromptOptions {
    pub title: Option<String>,
    /// Button labels and the value each one answers with, left to right.
    pub buttons: Vec<(String, bool)>,
    /// Index of the initially selected button.
    pub selected: usize,
    on_answer: Option<OnAnswer>,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            title: None,
            buttons: vec![(String::from("Yes"), true), (String::from("No"), false)],
            selected: 0,
            on_answer: None,
        }
    }
}

impl PromptOptions {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn buttons<I, T>(mut self, buttons: I) -> Self
    where
        I: IntoIterator<Item = (T, bool)>,
        T: Into<String>,
    {
        self.buttons = buttons
            .into_iter()
            .map(|(label, value)| (label.into(), value))
            .collect();
        self
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn on_answer(mut self, f: impl FnOnce(bool) -> Option<Transition> + 'static) -> Self {
        self.on_answer = Some(Box::new(f));
        self
    }
}

pub struct Prompt {
    message: String,
    options: PromptOptions,
    transition: Option<Transition>,
}

impl Prompt {
    pub fn new(message: String, mut options: PromptOptions) -> Self {
        if options.buttons.is_empty() {
            options.buttons = PromptOptions::default().buttons;
        }
        if options.selected >= options.buttons.len() {
            options.selected = 0;
        }
        Self {
            message,
            options,
            transition: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn selected(&self) -> usize {
        self.options.selected
    }

    pub fn buttons(&self) -> impl Iterator<Item = &str> {
        self.options.buttons.iter().map(|(label, _)| label.as_str())
    }

    /// Hand the answer to the `on_answer` callback, once.
    pub(crate) fn answered(&mut self, answer: bool) -> Option<Transition> {
        self.options.on_answer.take().and_then(|f| f(answer))
    }

    fn answer(&mut self) {
        let (label, value) = &self.options.buttons[self.options.selected];
        log::debug!("prompt answered with {:?}", label);
        self.transition = Some(Transition::Answer(*value));
    }

    /// Touching `index` selects it, or answers if it already is.
    fn choose(&mut self, ctx: &mut AppCtx, index: usize) {
        if index == self.options.selected {
            self.answer();
        } else {
            self.options.selected = index;
            self.redraw(ctx);
        }
    }

    /// The button under `x`, if any. Bands are laid out for a 176px wide
    /// panel and scaled to `width`: a lone button only reacts near the
    /// centre, a pair leaves a dead gap between the halves, and longer rows
    /// split the width into equal columns.
    fn button_at(&self, width: i32, x: i32) -> Option<usize> {
        let scaled = |v: i32| width * v / 176;
        match self.options.buttons.len() {
            1 => (x > scaled(60) && x < scaled(120)).then_some(0),
            2 if x < scaled(70) => Some(0),
            2 if x > scaled(110) => Some(1),
            2 => None,
            count => {
                if x < 0 || x >= width {
                    return None;
                }
                Some((x as usize * count / width as usize).min(count - 1))
            }
        }
    }

    fn draw_buttons(&self, surface: &mut dyn Surface, width: i32, y: i32) {
        let palette = surface.palette();
        let widths: Vec<i32> = self
            .options
            .buttons
            .iter()
            .map(|(label, _)| surface.string_width(label) as i32)
            .collect();
        let total: i32 = widths.iter().map(|w| BUTTON_PADDING + w).sum();

        let mut x = (width - total) / 2;
        for (index, ((label, _), w)) in self.options.buttons.iter().zip(widths).enumerate() {
            x += (BUTTON_PADDING + w) / 2;
            let half = 2 + w / 2;
            let outline = [
                Point::new(x - half, y - 12),
                Point::new(x + half, y - 12),
                Point::new(x + half + 4, y - 8),
                Point::new(x + half + 4, y + 8),
                Point::new(x + half, y + 12),
                Point::new(x - half, y + 12),
                Point::new(x - half - 4, y + 8),
                Point::new(x - half - 4, y - 8),
            ];
            let selected = index == self.options.selected;

            surface.set_color(if selected { palette.bg_highlight } else { palette.bg });
            surface.fill_poly(&outline);
            surface.set_color(palette.fg);
            surface.draw_poly(&outline);
            surface.set_color(if selected { palette.fg_highlight } else { palette.fg });
            text::draw_centred(surface, label, x, y + 1);
            x += (BUTTON_PADDING + w) / 2;
        }
        surface.set_color(palette.fg);
    }
}

impl Widget for Prompt {
    fn redraw(&mut self, ctx: &mut AppCtx) {
        let surface = &mut *ctx.surface;
        let size = surface.size();
        let w = size.width as i32;
        let h = size.height as i32;

        surface.reset();
        surface.clear_rect(Rectangle::new(Point::zero(), size));
        surface.set_font(Font::Title);

        if let Some(title) = &self.options.title {
            text::draw_centred(surface, title, w / 2, 24);
            let half = (surface.string_width(title) as i32 + 16) / 2;
            surface.fill_rect(rect(w / 2 - half, 34, w / 2 + half, 34));
        }

        let max_lines = ((h - TOUCH_BAND - 34) / LINE_HEIGHT).max(1) as usize;
        let lines = text::wrap(surface, &self.message, w, max_lines);
        let offset = (h - lines.len() as i32 * LINE_HEIGHT) / 2;
        text::draw_lines(surface, &lines, w / 2, offset);

        self.draw_buttons(surface, w, h - BUTTON_ROW_OFFSET);

        if let Err(e) = surface.flip() {
            log::error!("failed to flip prompt: {}", e);
        }
    }

    fn on_touch(&mut self, ctx: &mut AppCtx, point: TouchPoint) {
        let size = ctx.surface.size();
        if point.y < size.height as i32 - TOUCH_BAND {
            return;
        }
        if let Some(index) = self.button_at(size.width as i32, point.x) {
            self.choose(ctx, index);
        }
    }

    fn on_button(&mut self, ctx: &mut AppCtx, button: Button) {
        let last = self.options.buttons.len() - 1;
        let selected = self.options.selected;
        match button {
            Button::Select => self.answer(),
            Button::Up if selected > 0 => {
                self.options.selected -= 1;
                self.redraw(ctx);
            }
            Button::Down if selected < last => {
                self.options.selected += 1;
                self.redraw(ctx);
            }
            Button::Up | Button::Down => {}
        }
    }

    fn take_transition(&mut self) -> Option<Transition> {
        self.transition.take()
    }
}
