//! Input mapping.
//!
//! Raw touches arrive as [`TouchPoint`]s. Menus turn them into the three
//! logical [`Button`]s through a [`ButtonBar`]: three on-screen zones along
//! the bottom edge for "up", "select" and "down". A pressed zone is drawn
//! depressed and restored again after [`RESTORE_MS`].

use embedded_graphics::prelude::Point;
use serde::Deserialize;

use crate::core::surface::{Surface, rect};

/// How long a pressed zone stays drawn depressed.
pub const RESTORE_MS: u32 = 150;

/// A touch on the panel, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: i32,
    pub y: i32,
}

impl TouchPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Logical inputs, from physical buttons or from the on-screen zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Up,
    Select,
    Down,
}

impl Button {
    const ZONES: [Button; 3] = [Button::Up, Button::Select, Button::Down];
}

/// An on-screen button, inclusive corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Zone {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Zone {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Placement of the three zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ButtonGeometry {
    pub up: Zone,
    pub select: Zone,
    pub down: Zone,
    /// Touches must land below this line to count.
    pub hit_top: i32,
}

impl Default for ButtonGeometry {
    /// Layout for a 176×176 panel.
    fn default() -> Self {
        Self {
            up: Zone::new(8, 150, 44, 175),
            select: Zone::new(69, 150, 105, 175),
            down: Zone::new(130, 150, 166, 175),
            hit_top: 130,
        }
    }
}

impl ButtonGeometry {
    fn zone(&self, index: usize) -> Zone {
        match index {
            0 => self.up,
            1 => self.select,
            _ => self.down,
        }
    }

    /// Index of the zone containing `point`. Zone edges do not count.
    fn hit(&self, point: TouchPoint) -> Option<usize> {
        if point.y <= self.hit_top {
            return None;
        }
        (0..3).find(|&i| {
            let zone = self.zone(i);
            point.x > zone.x1 && point.x < zone.x2
        })
    }
}

/// The on-screen button row of a menu.
#[derive(Clone, Debug, Default)]
pub struct ButtonBar {
    geometry: ButtonGeometry,
    pressed: Option<usize>,
    restore: Option<(usize, u32)>,
}

impl ButtonBar {
    pub fn new(geometry: ButtonGeometry) -> Self {
        Self {
            geometry,
            pressed: None,
            restore: None,
        }
    }

    pub fn geometry(&self) -> &ButtonGeometry {
        &self.geometry
    }

    /// Index of the zone pressed last, cleared by a touch outside every zone.
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Whether a zone is still waiting to be drawn released.
    pub fn restore_pending(&self) -> bool {
        self.restore.is_some()
    }

    /// Draw all three zones released. Does not flip.
    pub fn draw(&self, surface: &mut dyn Surface) {
        for index in 0..3 {
            self.draw_zone(surface, index, false);
        }
    }

    /// Map a touch to a logical button, drawing the hit zone depressed.
    pub fn press(&mut self, surface: &mut dyn Surface, point: TouchPoint) -> Option<Button> {
        let Some(index) = self.geometry.hit(point) else {
            self.pressed = None;
            return None;
        };

        if let Some((previous, _)) = self.restore.take() {
            if previous != index {
                self.draw_zone(surface, previous, false);
            }
        }

        self.pressed = Some(index);
        self.draw_zone(surface, index, true);
        self.flip(surface);
        self.restore = Some((index, RESTORE_MS));
        Some(Button::ZONES[index])
    }

    /// Count down the pending restore and redraw the zone released once due.
    pub fn tick(&mut self, surface: &mut dyn Surface, elapsed_ms: u32) {
        let Some((index, remaining)) = self.restore else {
            return;
        };
        if elapsed_ms < remaining {
            self.restore = Some((index, remaining - elapsed_ms));
            return;
        }
        self.restore = None;
        self.draw_zone(surface, index, false);
        self.flip(surface);
    }

    fn flip(&self, surface: &mut dyn Surface) {
        if let Err(e) = surface.flip() {
            log::error!("failed to flip button bar: {}", e);
        }
    }

    fn draw_zone(&self, surface: &mut dyn Surface, index: usize, pressed: bool) {
        let zone = self.geometry.zone(index);
        let palette = surface.palette();
        let (fill, icon) = if pressed {
            (palette.bg_highlight, palette.fg_highlight)
        } else {
            (palette.fg, palette.bg)
        };

        surface.set_color(fill);
        surface.fill_rect(rect(zone.x1, zone.y1, zone.x2, zone.y2));
        surface.set_color(icon);
        let mid = (zone.x1 + zone.x2) / 2;
        match index {
            0 => surface.fill_poly(&[
                Point::new(zone.x1, zone.y2),
                Point::new(mid, zone.y1),
                Point::new(zone.x2, zone.y2),
            ]),
            1 => surface.fill_poly(&[
                Point::new(zone.x1, zone.y1),
                Point::new(zone.x2, zone.y1),
                Point::new(zone.x1, zone.y2),
                Point::new(zone.x2, zone.y2),
            ]),
            _ => surface.fill_poly(&[
                Point::new(zone.x1, zone.y1),
                Point::new(zone.x2, zone.y1),
                Point::new(mid, zone.y2),
            ]),
        }
        surface.set_color(palette.fg);
    }
}
