//! Headless CLI: drives the sphere renderer on its frame timer into an
//! in-memory raster and writes the last frame as PNG
//!
//! Run with: cargo run --features cli --bin sphere-cli
//!
//! Env: SPHERE_CONFIG (JSON config), SPHERE_FRAMES (default 60, at least 1),
//! SPHERE_OUT (default sphere.png), RUST_LOG

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use sphere_vis::core::config::{parse_frame_budget, FRAMES_ENV};
    use sphere_vis::core::{render, FrameStats, Raster, RenderConfig, Scene};
    use std::time::{Duration, Instant};
    use tracing::{error, info};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sphere_vis=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = RenderConfig::from_env()?;
    let frames = parse_frame_budget(std::env::var(FRAMES_ENV).ok().as_deref())?;
    let out = std::env::var("SPHERE_OUT").unwrap_or_else(|_| "sphere.png".to_string());

    info!(points = config.point_count, frames, out = %out, "Building scene");
    let scene = Scene::new(config)?;

    let mut raster = Raster::square(scene.config().canvas_size);
    let mut reference: Option<Vec<u8>> = None;
    let mut stats = FrameStats::default();
    let mut mismatched = 0u64;

    let start_time = Instant::now();
    let mut frame_time = Duration::ZERO;
    let mut frames_last_interval = 0u64;
    let mut ticker =
        tokio::time::interval(Duration::from_millis(scene.config().frame_interval_ms));
    let mut stats_interval = tokio::time::interval(Duration::from_secs(5));
    stats_interval.tick().await;

    let mut rendered = 0u64;
    while rendered < frames {
        tokio::select! {
            _ = ticker.tick() => {
                let began = Instant::now();
                stats = render(&mut raster, &scene);
                frame_time += began.elapsed();
                rendered += 1;
                frames_last_interval += 1;

                if reference.is_none() {
                    reference = Some(raster.as_bytes().to_vec());
                } else if reference.as_deref() != Some(raster.as_bytes()) {
                    mismatched += 1;
                    error!(frame = rendered, "Frame differs from the first frame");
                }
            }
            _ = stats_interval.tick() => {
                info!(
                    frames = rendered,
                    drawn = stats.drawn,
                    culled = stats.culled,
                    "/sec" = format!("{:.1}", frames_last_interval as f64 / 5.0),
                    "stats"
                );
                frames_last_interval = 0;
            }
        }
    }

    info!(
        frames = rendered,
        drawn = stats.drawn,
        culled = stats.culled,
        mismatched,
        avg_frame_ms = format!("{:.2}", frame_time.as_secs_f64() * 1000.0 / rendered.max(1) as f64),
        wall_s = format!("{:.2}", start_time.elapsed().as_secs_f64()),
        "Done"
    );

    raster.save(&out)?;
    if mismatched > 0 {
        return Err(format!("{} of {} frames differed from the first", mismatched, rendered).into());
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
