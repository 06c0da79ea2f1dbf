//! [`Surface`] over any `embedded-graphics` draw target.
//!
//! Drawing goes into the target straight away; `flip` asks the target to
//! push its buffer to the panel.

use alloc::vec::Vec;
use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_9X15, FONT_10X20},
    },
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Line, Polyline, PrimitiveStyle, Rectangle, Triangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use embedded_graphics_core::{draw_target::DrawTarget, geometry::OriginDimensions};

use crate::WidgetError;
use crate::core::surface::{Font, Glyph, Surface};
use crate::ui::theme::Palette;

/// A draw target whose contents only reach the panel on `flush`.
pub trait FrameBuffer: DrawTarget<Color = Rgb888> + OriginDimensions {
    fn flush(&mut self) -> Result<(), WidgetError>;
}

pub struct GraphicsSurface<F> {
    target: F,
    palette: Palette,
    app_rect: Rectangle,
    color: Rgb888,
    bg: Rgb888,
    font: Font,
}

impl<F: FrameBuffer> GraphicsSurface<F> {
    /// Wrap `target`, letting widgets use the whole panel.
    pub fn new(target: F, palette: Palette) -> Self {
        let app_rect = Rectangle::new(Point::zero(), target.size());
        Self {
            target,
            palette,
            app_rect,
            color: palette.fg,
            bg: palette.bg,
            font: Font::default(),
        }
    }

    /// Restrict widgets to `app_rect`, e.g. to keep a status bar clear.
    pub fn with_app_rect(mut self, app_rect: Rectangle) -> Self {
        self.app_rect = app_rect;
        self
    }

    pub fn target(&self) -> &F {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut F {
        &mut self.target
    }

    fn mono_font(&self) -> &'static MonoFont<'static> {
        match self.font {
            Font::Row => &FONT_10X20,
            Font::Title => &FONT_9X15,
        }
    }
}

/// X coordinates where the closed polygon's edges cross row `y`, sorted.
///
/// Edges are half-open in y so shared vertices are only counted once.
fn crossings(points: &[Point], y: i32) -> Vec<i32> {
    let mut xs = Vec::new();
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        let (lo, hi) = if a.y <= b.y { (*a, b) } else { (b, *a) };
        if lo.y == hi.y || y < lo.y || y >= hi.y {
            continue;
        }
        xs.push(lo.x + (y - lo.y) * (hi.x - lo.x) / (hi.y - lo.y));
    }
    xs.sort_unstable();
    xs
}

impl<F: FrameBuffer> Surface for GraphicsSurface<F> {
    fn size(&self) -> Size {
        self.target.size()
    }

    fn app_rect(&self) -> Rectangle {
        self.app_rect
    }

    fn reset(&mut self) {
        self.color = self.palette.fg;
        self.bg = self.palette.bg;
        self.font = Font::default();
    }

    fn palette(&self) -> Palette {
        self.palette
    }

    fn set_color(&mut self, color: Rgb888) {
        self.color = color;
    }

    fn set_bg_color(&mut self, color: Rgb888) {
        self.bg = color;
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn string_width(&self, text: &str) -> u32 {
        let font = self.mono_font();
        let chars = text.chars().count() as u32;
        chars * (font.character_size.width + font.character_spacing)
    }

    fn clear_rect(&mut self, area: Rectangle) {
        self.target.fill_solid(&area, self.bg).ok();
    }

    fn fill_rect(&mut self, area: Rectangle) {
        self.target.fill_solid(&area, self.color).ok();
    }

    fn draw_string(&mut self, text: &str, at: Point, align: Alignment) {
        let style = MonoTextStyle::new(self.mono_font(), self.color);
        let text_style = TextStyleBuilder::new()
            .alignment(align)
            .baseline(Baseline::Top)
            .build();
        Text::with_text_style(text, at, style, text_style)
            .draw(&mut self.target)
            .ok();
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        Line::new(from, to)
            .into_styled(PrimitiveStyle::with_stroke(self.color, 1))
            .draw(&mut self.target)
            .ok();
    }

    fn fill_poly(&mut self, points: &[Point]) {
        match points {
            [a, b, c] => {
                Triangle::new(*a, *b, *c)
                    .into_styled(PrimitiveStyle::with_fill(self.color))
                    .draw(&mut self.target)
                    .ok();
                return;
            }
            [_, _, _, ..] => {}
            _ => {
                self.draw_poly(points);
                return;
            }
        }
        let top = points.iter().map(|p| p.y).min().unwrap_or(0);
        let bottom = points.iter().map(|p| p.y).max().unwrap_or(0);
        for y in top..=bottom {
            for span in crossings(points, y).chunks_exact(2) {
                let area = Rectangle::with_corners(Point::new(span[0], y), Point::new(span[1], y));
                self.target.fill_solid(&area, self.color).ok();
            }
        }
    }

    fn draw_poly(&mut self, points: &[Point]) {
        let Some(first) = points.first() else {
            return;
        };
        let mut closed = Vec::with_capacity(points.len() + 1);
        closed.extend_from_slice(points);
        closed.push(*first);
        Polyline::new(&closed)
            .into_styled(PrimitiveStyle::with_stroke(self.color, 1))
            .draw(&mut self.target)
            .ok();
    }

    fn draw_glyph(&mut self, glyph: &Glyph, at: Point, scale: u32) {
        let scale = scale.max(1);
        for y in 0..glyph.height {
            for x in 0..glyph.width {
                if !glyph.pixel(x, y) {
                    continue;
                }
                let origin = at + Point::new((x * scale) as i32, (y * scale) as i32);
                let block = Rectangle::new(origin, Size::new(scale, scale));
                self.target.fill_solid(&block, self.color).ok();
            }
        }
    }

    fn flip(&mut self) -> Result<(), WidgetError> {
        self.target.flush()
    }
}
