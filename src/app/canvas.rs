//! `Canvas` backed by an egui painter

use eframe::egui;

use crate::core::{Canvas, Shade};

/// Draws into a fixed rect of an egui painter; coordinates are relative to
/// `rect.min` plus any translation.
pub struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    origin: egui::Vec2,
    color: egui::Color32,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self {
            painter,
            rect,
            origin: egui::Vec2::ZERO,
            color: egui::Color32::BLACK,
        }
    }
}

fn to_color(shade: Shade) -> egui::Color32 {
    let [r, g, b] = shade.rgb();
    egui::Color32::from_rgb(r, g, b)
}

impl Canvas for PainterCanvas<'_> {
    fn size(&self) -> (f32, f32) {
        (self.rect.width(), self.rect.height())
    }

    fn clear(&mut self, shade: Shade) {
        self.painter.rect_filled(self.rect, 0.0, to_color(shade));
        self.origin = egui::Vec2::ZERO;
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin += egui::vec2(dx, dy);
    }

    fn set_color(&mut self, shade: Shade) {
        self.color = to_color(shade);
    }

    fn fill_circle(&mut self, x: f32, y: f32, diameter: f32) {
        let center = self.rect.min + self.origin + egui::vec2(x, y);
        self.painter.circle_filled(center, diameter / 2.0, self.color);
    }
}
