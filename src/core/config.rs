//! Render configuration
//!
//! Every value has a compile-time default. A JSON document may override any
//! subset of the fields (missing fields keep their default).

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::error::{Result, SphereError};
use super::scene::disc_diameter;

/// Number of samples placed on the sphere
pub const POINT_COUNT: usize = 400_000;
/// Unit sphere -> canvas units
pub const SCALE: f64 = 200.0;
/// Light position (sits on a sphere of radius `LIGHT_SPHERE_RADIUS`)
pub const LIGHT_X: f64 = -2.236_067_977_499_79; // -sqrt(5)
pub const LIGHT_Y: f64 = 2.0;
pub const LIGHT_Z: f64 = 4.0;
pub const LIGHT_SPHERE_RADIUS: f64 = 5.0;
/// Radius used to size the drawn discs (surface area / point count)
pub const DRAWN_SPHERE_RADIUS: f64 = 1.0;
/// Square canvas edge in canvas units
pub const CANVAS_SIZE: u32 = 640;
/// Largest accepted canvas edge (a 16384² gray raster is 256 MiB)
pub const MAX_CANVAS_SIZE: u32 = 16_384;
/// Redraw period (~59 Hz)
pub const FRAME_INTERVAL_MS: u64 = 17;
/// Background gray (white)
pub const BACKGROUND: u8 = 255;

/// Env var naming a JSON config file
pub const CONFIG_ENV: &str = "SPHERE_CONFIG";
/// Env var with the headless frame count
pub const FRAMES_ENV: &str = "SPHERE_FRAMES";
pub const DEFAULT_FRAMES: u64 = 60;

/// Headless frame count: `DEFAULT_FRAMES` when unset, otherwise a positive integer
pub fn parse_frame_budget(raw: Option<&str>) -> Result<u64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_FRAMES);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(SphereError::InvalidConfig(format!(
            "{} must be at least 1",
            FRAMES_ENV
        ))),
        Ok(frames) => Ok(frames),
        Err(e) => Err(SphereError::InvalidConfig(format!(
            "{} must be a positive integer, got {:?}: {}",
            FRAMES_ENV, raw, e
        ))),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub point_count: usize,
    pub scale: f64,
    pub light_x: f64,
    pub light_y: f64,
    pub light_z: f64,
    /// Radius of the sphere the light sits on. Informational only: the light
    /// vector is normalized by its own length, and a mismatch is logged.
    pub light_radius: f64,
    pub drawn_sphere_radius: f64,
    pub canvas_size: u32,
    pub frame_interval_ms: u64,
    pub background: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            point_count: POINT_COUNT,
            scale: SCALE,
            light_x: LIGHT_X,
            light_y: LIGHT_Y,
            light_z: LIGHT_Z,
            light_radius: LIGHT_SPHERE_RADIUS,
            drawn_sphere_radius: DRAWN_SPHERE_RADIUS,
            canvas_size: CANVAS_SIZE,
            frame_interval_ms: FRAME_INTERVAL_MS,
            background: BACKGROUND,
        }
    }
}

impl RenderConfig {
    /// Parse a (partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = json.len(), "Loaded config file");
        Self::from_json(&json)
    }

    /// Config from the file named by `SPHERE_CONFIG`, or the defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Self::load(path),
            _ => {
                debug!("No {} set, using default config", CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.point_count == 0 {
            return Err(SphereError::InvalidConfig("point_count must be positive".into()));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(SphereError::InvalidConfig(format!(
                "scale must be finite and positive, got {}",
                self.scale
            )));
        }
        if !(self.drawn_sphere_radius.is_finite() && self.drawn_sphere_radius > 0.0) {
            return Err(SphereError::InvalidConfig(format!(
                "drawn_sphere_radius must be finite and positive, got {}",
                self.drawn_sphere_radius
            )));
        }
        // r² / count can still overflow for huge radii
        if !disc_diameter(self.drawn_sphere_radius, self.point_count).is_finite() {
            return Err(SphereError::InvalidConfig(format!(
                "drawn_sphere_radius {} gives a non-finite disc size",
                self.drawn_sphere_radius
            )));
        }
        if self.canvas_size == 0 || self.canvas_size > MAX_CANVAS_SIZE {
            return Err(SphereError::InvalidConfig(format!(
                "canvas_size must be in 1..={}, got {}",
                MAX_CANVAS_SIZE, self.canvas_size
            )));
        }
        if self.frame_interval_ms == 0 {
            return Err(SphereError::InvalidConfig(
                "frame_interval_ms must be positive".into(),
            ));
        }
        let len_sq = self.light_x * self.light_x + self.light_y * self.light_y + self.light_z * self.light_z;
        if !(len_sq > 0.0) || !len_sq.is_finite() {
            return Err(SphereError::InvalidConfig("light position must be a non-zero vector".into()));
        }
        if !(self.light_radius.is_finite() && self.light_radius > 0.0) {
            return Err(SphereError::InvalidConfig("light_radius must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.point_count, 400_000);
        assert_eq!(config.canvas_size, 640);
        assert!((LIGHT_X + 5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = RenderConfig::from_json(r#"{"point_count": 1000, "scale": 150.0}"#).unwrap();
        assert_eq!(config.point_count, 1000);
        assert_eq!(config.scale, 150.0);
        assert_eq!(config.canvas_size, CANVAS_SIZE);
        assert_eq!(config.light_z, LIGHT_Z);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("sphere-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"canvas_size": 320, "background": 0}"#).unwrap();
        let config = RenderConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.canvas_size, 320);
        assert_eq!(config.background, 0);
        assert_eq!(config.point_count, POINT_COUNT);

        assert!(matches!(
            RenderConfig::load(std::env::temp_dir().join("sphere-config-missing.json")),
            Err(SphereError::Io(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            RenderConfig::from_json(r#"{"point_count": 0}"#),
            Err(SphereError::InvalidConfig(_))
        ));
        assert!(matches!(
            RenderConfig::from_json(r#"{"light_x": 0.0, "light_y": 0.0, "light_z": 0.0}"#),
            Err(SphereError::InvalidConfig(_))
        ));
        assert!(matches!(
            RenderConfig::from_json("{not json"),
            Err(SphereError::Config(_))
        ));
    }

    #[test]
    fn test_non_finite_sizes_rejected() {
        // r² overflows to inf even though the literal itself is finite
        assert!(matches!(
            RenderConfig::from_json(r#"{"drawn_sphere_radius": 1e200}"#),
            Err(SphereError::InvalidConfig(_))
        ));
        assert!(matches!(
            RenderConfig::from_json(r#"{"drawn_sphere_radius": 0.0}"#),
            Err(SphereError::InvalidConfig(_))
        ));
        // Large but representable area as f64, inf once narrowed to f32
        assert!(matches!(
            RenderConfig::from_json(r#"{"point_count": 1, "drawn_sphere_radius": 1e30}"#),
            Err(SphereError::InvalidConfig(_))
        ));

        for config in [
            RenderConfig { scale: f64::INFINITY, ..RenderConfig::default() },
            RenderConfig { scale: f64::NAN, ..RenderConfig::default() },
            RenderConfig { drawn_sphere_radius: f64::INFINITY, ..RenderConfig::default() },
            RenderConfig { drawn_sphere_radius: f64::NAN, ..RenderConfig::default() },
            RenderConfig { light_radius: f64::INFINITY, ..RenderConfig::default() },
        ] {
            assert!(matches!(config.validate(), Err(SphereError::InvalidConfig(_))), "{:?}", config);
        }
    }

    #[test]
    fn test_frame_budget() {
        assert_eq!(parse_frame_budget(None).unwrap(), DEFAULT_FRAMES);
        assert_eq!(parse_frame_budget(Some("1")).unwrap(), 1);
        assert_eq!(parse_frame_budget(Some(" 120 ")).unwrap(), 120);
        // Zero frames would save a raster that was never drawn
        assert!(matches!(
            parse_frame_budget(Some("0")),
            Err(SphereError::InvalidConfig(_))
        ));
        assert!(matches!(
            parse_frame_budget(Some("-3")),
            Err(SphereError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_canvas_size_bounded() {
        assert!(RenderConfig::from_json(r#"{"canvas_size": 16384}"#).is_ok());
        assert!(matches!(
            RenderConfig::from_json(r#"{"canvas_size": 16385}"#),
            Err(SphereError::InvalidConfig(_))
        ));
        assert!(matches!(
            RenderConfig::from_json(r#"{"canvas_size": 0}"#),
            Err(SphereError::InvalidConfig(_))
        ));
    }
}
