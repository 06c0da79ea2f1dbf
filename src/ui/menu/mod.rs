//! Scrollable menu.
//!
//! A [`Menu`] shows a window of its rows around a cursor. `Up`/`Down` move
//! the cursor (wrapping around the ends of the list) and `Select` runs the
//! row: actions are called, toggles flip, and numbers enter an edit mode in
//! which `Up`/`Down` change the value instead of the cursor.
//!
//! Moves repaint only the rows that changed as long as the window stays put;
//! whenever it scrolls the whole menu is drawn again.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use embedded_graphics::{prelude::Point, text::Alignment};

use crate::core::app::{AppCtx, Transition, Widget};
use crate::core::input::{Button, ButtonBar, TouchPoint};
use crate::core::locale::Locale;
use crate::core::surface::{Font, Glyph, Surface, rect};

mod entry;
mod window;

pub use entry::{
    Action, DEFAULT_FONT_HEIGHT, Entry, MenuOptions, MenuSpec, NumberField, Predraw, ToggleField,
};
pub use window::Window;

/// Height of the bands holding the scroll indicators.
const INDICATOR_HEIGHT: i32 = 12;
/// Space taken by the title and its separator.
const TITLE_HEIGHT: i32 = 22;
/// Half the width of a scroll indicator.
const INDICATOR_HALF_WIDTH: i32 = 16;

/// Drawn left of a value while it is being edited.
const EDIT_CARET: Glyph = Glyph {
    width: 12,
    height: 5,
    data: &[0x20, 0x40, 0x60, 0x60, 0xE0, 0x70, 0x60, 0x60, 0x20, 0x40],
};
const EDIT_CARET_SCALE: u32 = 2;

/// Where a menu draws, derived once from the surface's app area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub x: i32,
    pub x2: i32,
    /// Top of the content, below the title if there is one.
    pub y: i32,
    /// Bottom of the row area; the down indicator sits below it.
    pub y2: i32,
}

impl Layout {
    fn new(surface: &dyn Surface, has_title: bool) -> Self {
        let area = surface.app_rect();
        let bottom = area.bottom_right().unwrap_or(area.top_left);
        let mut y = area.top_left.y;
        if has_title {
            y += TITLE_HEIGHT;
        }
        Self {
            x: area.top_left.x,
            x2: bottom.x,
            y,
            y2: bottom.y - INDICATOR_HEIGHT,
        }
    }

    /// Top of the first row, below the up indicator.
    pub fn rows_top(&self) -> i32 {
        self.y + INDICATOR_HEIGHT
    }

    /// Height the window is fitted to. Rows are painted from `rows_top`, so
    /// the last row may reach into the bottom indicator band.
    pub fn rows_height(&self) -> i32 {
        self.y2 - self.y
    }

    fn centre_x(&self) -> i32 {
        (self.x + self.x2) / 2
    }
}

fn noop(_: &mut Menu, _: &mut AppCtx<'_>) {}

/// The menu controller.
pub struct Menu {
    entries: Vec<(String, Entry)>,
    options: MenuOptions,
    layout: Layout,
    buttons: ButtonBar,
    /// Index of the number field in edit mode.
    editing: Option<usize>,
    previous_window_start: Option<usize>,
    transition: Option<Transition>,
}

impl Menu {
    /// Build a menu for `surface`. Nothing is drawn until [`Menu::draw`].
    pub fn new(spec: MenuSpec, surface: &dyn Surface, buttons: ButtonBar) -> Self {
        let MenuSpec {
            entries,
            mut options,
        } = spec;

        if options.font_height == 0 {
            options.font_height = DEFAULT_FONT_HEIGHT;
        }
        if options.selected >= entries.len() {
            options.selected = entries.len().saturating_sub(1);
        }

        let layout = Layout::new(surface, options.title.is_some());
        log::debug!(
            "menu created with {} items, layout {:?}",
            entries.len(),
            layout
        );

        Self {
            entries,
            options,
            layout,
            buttons,
            editing: None,
            previous_window_start: None,
            transition: None,
        }
    }

    /// Index of the cursor row.
    pub fn selected(&self) -> usize {
        self.options.selected
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn title(&self) -> Option<&str> {
        self.options.title.as_deref()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn buttons(&self) -> &ButtonBar {
        &self.buttons
    }

    pub fn entry(&self, label: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, entry)| entry)
    }

    /// Current value of the number field `label`.
    pub fn number(&self, label: &str) -> Option<f64> {
        match self.entry(label)? {
            Entry::Number(field) => Some(field.value),
            _ => None,
        }
    }

    /// Current value of the toggle `label`.
    pub fn toggle(&self, label: &str) -> Option<bool> {
        match self.entry(label)? {
            Entry::Toggle(field) => Some(field.value),
            _ => None,
        }
    }

    /// The window the next draw will show.
    pub fn window(&self) -> Window {
        Window::compute(
            self.layout.rows_height(),
            self.options.font_height,
            self.entries.len(),
            self.options.selected,
        )
    }

    /// Start of the window as last drawn.
    pub fn previous_window_start(&self) -> Option<usize> {
        self.previous_window_start
    }

    /// Ask the session to switch widgets once the current event is handled.
    pub fn navigate(&mut self, transition: Transition) {
        self.transition = Some(transition);
    }

    /// Redraw everything.
    pub fn draw(&mut self, ctx: &mut AppCtx) {
        self.render(ctx, None);
    }

    /// Redraw rows `first..=last` only, unless the window has to scroll.
    pub fn draw_rows(&mut self, ctx: &mut AppCtx, first: usize, last: usize) {
        self.render(ctx, Some((first.min(last), first.max(last))));
    }

    /// Run the cursor row.
    pub fn select(&mut self, ctx: &mut AppCtx) {
        let index = self.options.selected;
        let Some((label, entry)) = self.entries.get_mut(index) else {
            return;
        };
        log::trace!("select {:?}", label);

        match entry {
            Entry::Action(action) => {
                let mut action: Action = core::mem::replace(action, Box::new(noop));
                action(self, ctx);
                if let Some((_, Entry::Action(slot))) = self.entries.get_mut(index) {
                    *slot = action;
                }
            }
            Entry::Number(_) => {
                self.editing = match self.editing {
                    Some(_) => None,
                    None => Some(index),
                };
                self.draw(ctx);
            }
            Entry::Toggle(field) => {
                field.toggle();
                self.draw(ctx);
            }
            Entry::Label => {}
        }
    }

    /// Move the cursor by `direction` rows, or step the edited value.
    pub fn move_by(&mut self, ctx: &mut AppCtx, direction: i32) {
        if let Some(index) = self.editing {
            if let Some((_, Entry::Number(field))) = self.entries.get_mut(index) {
                field.adjust(direction);
                log::trace!("edit row {} -> {}", index, field.value);
            }
            self.draw_rows(ctx, index, index);
            return;
        }

        let len = self.entries.len();
        if len == 0 {
            return;
        }
        let last = self.options.selected;
        let next = (last as i64 + i64::from(direction)).rem_euclid(len as i64) as usize;
        self.options.selected = next;
        log::trace!("move {} -> {}", last, next);
        self.draw_rows(ctx, last, next);
    }

    /// Run a logical button.
    pub fn press(&mut self, ctx: &mut AppCtx, button: Button) {
        match button {
            Button::Up => self.move_by(ctx, -1),
            Button::Select => self.select(ctx),
            Button::Down => self.move_by(ctx, 1),
        }
    }

    fn render(&mut self, ctx: &mut AppCtx, range: Option<(usize, usize)>) {
        let surface = &mut *ctx.surface;
        surface.reset();

        let window = self.window();
        let range = match range {
            Some(range) if self.previous_window_start == Some(window.start) => Some(range),
            _ => None,
        };
        self.previous_window_start = Some(window.start);

        let palette = surface.palette();
        let layout = self.layout;
        let font_height = self.options.font_height as i32;

        surface.set_font(Font::Title);
        if let (None, Some(title)) = (range, &self.options.title) {
            surface.clear_rect(rect(layout.x, layout.y - TITLE_HEIGHT, layout.x2, layout.y - 1));
            surface.draw_string(
                title,
                Point::new(layout.centre_x(), layout.y - TITLE_HEIGHT + 1),
                Alignment::Center,
            );
            surface.draw_line(Point::new(layout.x, layout.y - 2), Point::new(layout.x2, layout.y - 2));
        }

        surface.set_font(Font::Row);
        if let Some(predraw) = self.options.predraw.as_mut() {
            predraw(&mut *surface);
        }

        let cx = layout.centre_x();
        let top = layout.rows_top();
        surface.set_color(if window.has_above() { palette.fg } else { palette.bg });
        surface.fill_poly(&[
            Point::new(cx - INDICATOR_HALF_WIDTH, top - 1),
            Point::new(cx + INDICATOR_HALF_WIDTH, top - 1),
            Point::new(cx, top - INDICATOR_HEIGHT + 1),
        ]);

        let (first, last) = match range {
            Some((min, max)) => (min.max(window.start), max.min(window.end().saturating_sub(1))),
            None => (window.start, window.end().saturating_sub(1)),
        };
        if window.rows > 0 {
            log::trace!("drawing rows {}..={}", first, last);
            for index in first..=last {
                let y = top + (index - window.start) as i32 * font_height;
                self.draw_row(surface, ctx.locale, index, y);
            }
        }

        surface.set_color(if window.has_below(self.entries.len()) {
            palette.fg
        } else {
            palette.bg
        });
        surface.fill_poly(&[
            Point::new(cx - INDICATOR_HALF_WIDTH, layout.y2 + 2),
            Point::new(cx + INDICATOR_HALF_WIDTH, layout.y2 + 2),
            Point::new(cx, layout.y2 + INDICATOR_HEIGHT - 2),
        ]);

        if let Err(e) = surface.flip() {
            log::error!("failed to flip menu: {}", e);
        }
    }

    fn draw_row(
        &self,
        surface: &mut dyn Surface,
        locale: &dyn Locale,
        index: usize,
        y: i32,
    ) {
        let Some((label, entry)) = self.entries.get(index) else {
            return;
        };
        let palette = surface.palette();
        let layout = self.layout;
        let font_height = self.options.font_height as i32;
        let bottom = y + font_height - 1;
        let highlighted = index == self.options.selected && self.editing.is_none();

        surface.set_color(if highlighted { palette.bg_highlight } else { palette.bg });
        surface.fill_rect(rect(layout.x, y, layout.x2, bottom));
        surface.set_color(if highlighted { palette.fg_highlight } else { palette.fg });
        surface.draw_string(&locale.translate(label), Point::new(layout.x + 1, y + 1), Alignment::Left);

        if let Some(value) = entry.formatted() {
            let mut right = layout.x2;
            if self.editing == Some(index) {
                let caret_width = (EDIT_CARET.width * EDIT_CARET_SCALE) as i32;
                right -= caret_width + 1;
                surface.set_color(palette.bg_highlight);
                surface.fill_rect(rect(
                    right - (surface.string_width(&value) as i32 + 4),
                    y,
                    layout.x2,
                    bottom,
                ));
                surface.set_color(palette.fg_highlight);
                let caret_height = (EDIT_CARET.height * EDIT_CARET_SCALE) as i32;
                surface.draw_glyph(
                    &EDIT_CARET,
                    Point::new(right, y + (font_height - caret_height) / 2),
                    EDIT_CARET_SCALE,
                );
            }
            surface.draw_string(&value, Point::new(right - 2, y + 1), Alignment::Right);
        }
        surface.set_color(palette.fg);
    }
}

impl Widget for Menu {
    fn redraw(&mut self, ctx: &mut AppCtx) {
        self.buttons.draw(ctx.surface);
        self.draw(ctx);
    }

    fn on_touch(&mut self, ctx: &mut AppCtx, point: TouchPoint) {
        if let Some(button) = self.buttons.press(ctx.surface, point) {
            self.press(ctx, button);
        }
    }

    fn on_button(&mut self, ctx: &mut AppCtx, button: Button) {
        self.press(ctx, button);
    }

    fn on_tick(&mut self, ctx: &mut AppCtx, elapsed_ms: u32) {
        self.buttons.tick(ctx.surface, elapsed_ms);
    }

    fn take_transition(&mut self) -> Option<Transition> {
        self.transition.take()
    }
}

#[cfg(test)]
mod tests;
