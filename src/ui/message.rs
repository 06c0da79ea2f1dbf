//! Full-screen message.
//!
//! Display only: the message stays up, ignoring input, until the session
//! shows something else.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use embedded_graphics::{prelude::*, primitives::Rectangle};

use crate::core::app::{AppCtx, Transition, Widget};
use crate::core::input::{Button, TouchPoint};
use crate::core::surface::{Font, rect};
use crate::ui::text::{self, LINE_HEIGHT};

/// Height of the title band.
const TITLE_BAND: i32 = 26;

pub struct Message {
    text: String,
    title: Option<String>,
}

impl Message {
    pub fn new(text: &str, title: Option<&str>) -> Self {
        Self {
            text: text.to_string(),
            title: title.map(ToString::to_string),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Widget for Message {
    fn redraw(&mut self, ctx: &mut AppCtx) {
        let surface = &mut *ctx.surface;
        let size = surface.size();
        let w = size.width as i32;
        let h = size.height as i32 - TITLE_BAND;

        surface.reset();
        surface.clear_rect(Rectangle::new(Point::zero(), size));
        surface.set_font(Font::Title);

        if let Some(title) = &self.title {
            text::draw_centred(surface, title, w / 2, 18);
            let half = (surface.string_width(title) as i32 + 12) / 2;
            surface.fill_rect(rect(w / 2 - half, TITLE_BAND, w / 2 + half, TITLE_BAND));
        }

        let max_lines = (h / LINE_HEIGHT).max(1) as usize;
        let lines: Vec<&str> = text::wrap(surface, &self.text, w, max_lines);
        let offset = TITLE_BAND + (h - lines.len() as i32 * LINE_HEIGHT) / 2;
        text::draw_lines(surface, &lines, w / 2, offset);

        if let Err(e) = surface.flip() {
            log::error!("failed to flip message: {}", e);
        }
    }

    fn on_touch(&mut self, _ctx: &mut AppCtx, _point: TouchPoint) {}

    fn on_button(&mut self, _ctx: &mut AppCtx, _button: Button) {}

    fn take_transition(&mut self) -> Option<Transition> {
        None
    }
}
