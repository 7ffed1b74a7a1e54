//! Native window for the sphere viewer
//!
//! Run with: cargo run --features native --bin sphere-view

use sphere_vis::app::{SphereApp, TITLE};
use sphere_vis::core::RenderConfig;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sphere_vis=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = RenderConfig::from_env()?;
    let size = config.canvas_size as f32;
    info!(points = config.point_count, size, "Opening viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            // Header strip sits above the square canvas
            .with_inner_size([size, size + 32.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(SphereApp::new(cc, config)?))),
    )?;
    Ok(())
}
