//! Header strip with frame rate and scene stats

use std::collections::VecDeque;

use eframe::egui;
use crate::theme::colors;
use super::SphereApp;

impl SphereApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        let now = ui.input(|i| i.time);
        self.fps_counter.tick(now);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Sphere").color(colors::TEXT_PRIMARY));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("phase {:.1}", self.scene.phase()))
                        .color(colors::TEXT_MUTED),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));

                ui.label(
                    egui::RichText::new(format!(
                        "{} drawn / {} culled",
                        self.last_stats.drawn, self.last_stats.culled
                    ))
                    .color(colors::TEXT_MUTED),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));

                ui.label(
                    egui::RichText::new(format!("{:.0} fps", self.fps_counter.fps()))
                        .color(colors::TEXT_SECONDARY),
                );
            });
        });
    }
}

const FPS_WINDOW: usize = 60;

/// Rolling frame-rate over the last 60 frames.
/// Timestamps come from egui's input clock, so it works the same on wasm.
pub struct FpsCounter {
    frames: VecDeque<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: VecDeque::with_capacity(FPS_WINDOW + 1),
        }
    }

    /// Record a frame at `now` seconds
    pub fn tick(&mut self, now: f64) {
        self.frames.push_back(now);
        if self.frames.len() > FPS_WINDOW {
            self.frames.pop_front();
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.front(), self.frames.back()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
