//! Immutable, depth-ordered point set shared by every frame
//!
//! The sphere never rotates, so projection and the depth sort happen once at
//! build time and each frame only walks the cached order.

use std::f64::consts::PI;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
use tracing::info;

use super::config::RenderConfig;
use super::error::{Result, SphereError};
use super::light::LightDirection;
use super::point::{depth_key, sort_by_depth, ScenePoint};
use super::sampler::{generate, random_phase};

/// Smallest disc drawn, in canvas units
pub const MIN_DISC_DIAMETER: f32 = 2.0;

/// Disc size from surface area per point: `max(2, 4πr² / count)`
pub fn disc_diameter(drawn_sphere_radius: f64, point_count: usize) -> f32 {
    if point_count == 0 {
        return MIN_DISC_DIAMETER;
    }
    let area_per_point = 4.0 * PI * drawn_sphere_radius * drawn_sphere_radius / point_count as f64;
    (area_per_point as f32).max(MIN_DISC_DIAMETER)
}

pub struct Scene {
    config: RenderConfig,
    light: LightDirection,
    /// Sorted by depth, farthest first
    points: Vec<ScenePoint>,
    phase: f64,
    disc_diameter: f32,
    visible_count: usize,
}

impl Scene {
    /// Build with a fresh random phase
    pub fn new(config: RenderConfig) -> Result<Self> {
        let phase = random_phase(config.point_count);
        Self::build(config, phase)
    }

    /// Sample, project and depth-sort once
    pub fn build(config: RenderConfig, phase: f64) -> Result<Self> {
        config.validate()?;
        let light = LightDirection::from_config(&config)
            .ok_or_else(|| SphereError::InvalidConfig("light position must be a non-zero vector".into()))?;

        // `Instant::now` panics on wasm32-unknown-unknown
        #[cfg(not(target_arch = "wasm32"))]
        let started = Instant::now();

        let mut points: Vec<ScenePoint> = generate(config.point_count, phase)
            .into_iter()
            .map(|p| ScenePoint::new(p, config.scale))
            .collect();
        sort_by_depth(&mut points, depth_key);

        let visible_count = points.iter().filter(|p| p.is_visible()).count();
        let disc_diameter = disc_diameter(config.drawn_sphere_radius, config.point_count);

        #[cfg(not(target_arch = "wasm32"))]
        info!(
            points = points.len(),
            visible = visible_count,
            phase,
            disc_diameter,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Scene built"
        );
        #[cfg(target_arch = "wasm32")]
        info!(points = points.len(), visible = visible_count, phase, disc_diameter, "Scene built");

        Ok(Self {
            config,
            light,
            points,
            phase,
            disc_diameter,
            visible_count,
        })
    }

    pub fn points(&self) -> &[ScenePoint] {
        &self.points
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn light(&self) -> &LightDirection {
        &self.light
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn disc_diameter(&self) -> f32 {
        self.disc_diameter
    }

    /// Points with z > 0
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
