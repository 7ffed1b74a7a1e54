//! Per-frame renderer (painter's algorithm over the cached depth order)
//!
//! Draws through the `Canvas` trait so the same frame can land in an egui
//! painter or in an in-memory raster.

use tracing::trace;

use super::light::Shade;
use super::scene::Scene;

/// 2D drawing surface supplied by the host
pub trait Canvas {
    /// Drawable area (width, height) in canvas units
    fn size(&self) -> (f32, f32);

    /// Fill the whole surface and reset the origin to the top-left corner
    fn clear(&mut self, shade: Shade);

    /// Shift the origin used by subsequent draws
    fn translate(&mut self, dx: f32, dy: f32);

    fn set_color(&mut self, shade: Shade);

    /// Filled disc with the current colour, centred at (x, y) relative to the origin
    fn fill_circle(&mut self, x: f32, y: f32, diameter: f32);
}

/// Counters for one rendered frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    pub culled: usize,
}

/// Draw one frame of `scene` onto `canvas`.
///
/// Pure function of (scene, canvas): calling it twice on an unchanged scene
/// produces the same output.
pub fn render<C: Canvas + ?Sized>(canvas: &mut C, scene: &Scene) -> FrameStats {
    let config = scene.config();
    canvas.clear(Shade(config.background));

    let (width, height) = canvas.size();
    canvas.translate(width / 2.0, height / 2.0);

    let light = scene.light();
    let diameter = scene.disc_diameter();
    let mut stats = FrameStats::default();

    for point in scene.points() {
        if !point.is_visible() {
            stats.culled += 1;
            continue;
        }
        canvas.set_color(light.shade(&point.normal));
        canvas.fill_circle(point.screen.x, point.screen.y, diameter);
        stats.drawn += 1;
    }

    trace!(drawn = stats.drawn, culled = stats.culled, "Frame rendered");
    stats
}
