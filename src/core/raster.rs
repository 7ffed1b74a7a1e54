//! In-memory grayscale canvas
//!
//! Used by the headless CLI and by tests that compare frames pixel by pixel.

use image::{GrayImage, Luma};
use std::path::Path;
use tracing::info;

use super::error::Result;
use super::light::Shade;
use super::render::Canvas;

pub struct Raster {
    image: GrayImage,
    origin: (f32, f32),
    color: Shade,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: GrayImage::new(width, height),
            origin: (0.0, 0.0),
            color: Shade::BLACK,
        }
    }

    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Shade> {
        (x < self.image.width() && y < self.image.height())
            .then(|| Shade(self.image.get_pixel(x, y).0[0]))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    /// Write as PNG (format picked from the extension)
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image.save(path)?;
        info!(path = %path.display(), width = self.image.width(), height = self.image.height(), "Raster saved");
        Ok(())
    }
}

impl Canvas for Raster {
    fn size(&self) -> (f32, f32) {
        (self.image.width() as f32, self.image.height() as f32)
    }

    fn clear(&mut self, shade: Shade) {
        for pixel in self.image.pixels_mut() {
            *pixel = Luma([shade.0]);
        }
        self.origin = (0.0, 0.0);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin.0 += dx;
        self.origin.1 += dy;
    }

    fn set_color(&mut self, shade: Shade) {
        self.color = shade;
    }

    /// Covers every pixel whose centre lies within the disc
    fn fill_circle(&mut self, x: f32, y: f32, diameter: f32) {
        let cx = self.origin.0 + x;
        let cy = self.origin.1 + y;
        let r = diameter / 2.0;
        let (w, h) = (self.image.width() as i64, self.image.height() as i64);

        let x0 = ((cx - r).floor() as i64).max(0);
        let x1 = ((cx + r).ceil() as i64).min(w - 1);
        let y0 = ((cy - r).floor() as i64).max(0);
        let y1 = ((cy + r).ceil() as i64).min(h - 1);

        let value = Luma([self.color.0]);
        for py in y0..=y1 {
            let dy = py as f32 + 0.5 - cy;
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                if dx * dx + dy * dy <= r * r {
                    self.image.put_pixel(px as u32, py as u32, value);
                }
            }
        }
    }
}
