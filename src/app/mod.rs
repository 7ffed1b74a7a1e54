//! Sphere viewer app
//!
//! eframe app shared by the native window and the browser canvas. The scene is
//! built once; every frame paints it through `PainterCanvas` and asks egui for
//! the next repaint after the configured frame interval.

mod canvas;
mod header;

use eframe::egui;
use std::time::Duration;
use tracing::{debug, info};

use crate::core::{render, FrameStats, RenderConfig, Result, Scene};
use crate::theme::{colors, paper_visuals};

pub use canvas::PainterCanvas;
pub use header::FpsCounter;

/// Window / canvas title
pub const TITLE: &str = "Sphere";

pub struct SphereApp {
    pub(crate) scene: Scene,
    pub(crate) fps_counter: FpsCounter,
    /// Counters from the most recent frame (for header display)
    pub(crate) last_stats: FrameStats,
    frame_interval: Duration,
    frames_rendered: u64,
}

impl SphereApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: RenderConfig) -> Result<Self> {
        cc.egui_ctx.set_visuals(paper_visuals());
        Ok(Self::with_scene(Scene::new(config)?))
    }

    /// App around an already built scene
    pub fn with_scene(scene: Scene) -> Self {
        let frame_interval = Duration::from_millis(scene.config().frame_interval_ms);
        info!(
            points = scene.len(),
            interval_ms = scene.config().frame_interval_ms,
            "Sphere viewer ready"
        );
        Self {
            scene,
            fps_counter: FpsCounter::new(),
            last_stats: FrameStats::default(),
            frame_interval,
            frames_rendered: 0,
        }
    }

    fn render_sphere(&mut self, ui: &mut egui::Ui) {
        // Whole panel; the renderer centres the sphere in it
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());

        let mut canvas = PainterCanvas::new(&painter, response.rect);
        self.last_stats = render(&mut canvas, &self.scene);

        self.frames_rendered += 1;
        if self.frames_rendered % 600 == 0 {
            debug!(
                frames = self.frames_rendered,
                fps = format!("{:.1}", self.fps_counter.fps()),
                drawn = self.last_stats.drawn,
                "viewer stats"
            );
        }
    }
}

impl eframe::App for SphereApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fixed-interval redraw (the scene is static, the timer is the only driver)
        ctx.request_repaint_after(self.frame_interval);

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(colors::BG_HEADER).inner_margin(6.0))
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PAGE))
            .show(ctx, |ui| {
                self.render_sphere(ui);
            });
    }
}
