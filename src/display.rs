//! [`FrameBuffer`] over the UEFI Graphics Output Protocol.
//!
//! Pixels land in a local buffer and reach the screen in one blit on
//! `flush`.
use alloc::vec;
use alloc::vec::Vec;
use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use uefi::proto::console::gop::{BltOp, BltPixel, BltRegion, GraphicsOutput};

use wristmenu::WidgetError;
use wristmenu::core::display::FrameBuffer;

pub struct GopDisplay<'a> {
    width: usize,
    height: usize,
    buffer: Vec<BltPixel>,
    gop: &'a mut GraphicsOutput,
}

impl<'a> GopDisplay<'a> {
    /// Create a new `GopDisplay` matching the current GOP mode resolution.
    pub fn new(gop: &'a mut GraphicsOutput) -> Self {
        let (width, height) = gop.current_mode_info().resolution();
        Self {
            width,
            height,
            buffer: vec![BltPixel::new(0, 0, 0); width * height],
            gop,
        }
    }
}

impl FrameBuffer for GopDisplay<'_> {
    fn flush(&mut self) -> Result<(), WidgetError> {
        self.gop
            .blt(BltOp::BufferToVideo {
                buffer: &self.buffer,
                src: BltRegion::Full,
                dest: (0, 0),
                dims: (self.width, self.height),
            })
            .map_err(|e| {
                log::warn!("GOP blit failed: {:?}", e);
                WidgetError::Display("GOP blit failed")
            })
    }
}

impl DrawTarget for GopDisplay<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels.into_iter() {
            let (x, y) = match (coord.x, coord.y) {
                (x, y) if x >= 0 && y >= 0 => (x as usize, y as usize),
                _ => continue,
            };

            if x < self.width && y < self.height {
                let pixel = &mut self.buffer[y * self.width + x];
                pixel.red = color.r();
                pixel.green = color.g();
                pixel.blue = color.b();
            }
        }
        Ok(())
    }
}

impl OriginDimensions for GopDisplay<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}
