//! Light direction and arc-length shading
//!
//! The gray level of a surface point is the great-circle angle between its
//! normal and the light vector, mapped linearly onto 0..=255 (0 = normal along the light vector,
//! 255 = normal opposite to it). This is an angular falloff, not a cosine
//! (Lambertian) term.

use std::f64::consts::PI;
use tracing::debug;

use super::config::RenderConfig;
use super::point::Point3D;

/// Grayscale colour (R = G = B)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shade(pub u8);

impl Shade {
    pub const BLACK: Shade = Shade(0);
    pub const WHITE: Shade = Shade(255);

    pub fn rgb(self) -> [u8; 3] {
        [self.0; 3]
    }
}

/// Unit vector used for shading; the negated, normalized light position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightDirection {
    pub i: f64,
    pub j: f64,
    pub k: f64,
}

impl LightDirection {
    /// Negate and normalize a light position. Returns None for a zero or
    /// non-finite vector.
    pub fn from_position(x: f64, y: f64, z: f64) -> Option<Self> {
        let len = (x * x + y * y + z * z).sqrt();
        if !(len > 0.0) || !len.is_finite() {
            return None;
        }
        Some(Self {
            i: -x / len,
            j: -y / len,
            k: -z / len,
        })
    }

    pub fn from_config(config: &RenderConfig) -> Option<Self> {
        let len = Point3D::new(config.light_x, config.light_y, config.light_z)
            .length_squared()
            .sqrt();
        if (len - config.light_radius).abs() > 1e-6 * config.light_radius {
            debug!(
                length = len,
                radius = config.light_radius,
                "Light position is off its sphere, normalizing by its own length"
            );
        }
        Self::from_position(config.light_x, config.light_y, config.light_z)
    }

    pub fn as_point(&self) -> Point3D {
        Point3D::new(self.i, self.j, self.k)
    }

    /// Great-circle angle (radians, `[0, π]`) between a unit normal and the light
    #[inline]
    pub fn arc(&self, normal: &Point3D) -> f64 {
        let cos = normal.dot(&self.as_point()).clamp(-1.0, 1.0);
        cos.acos()
    }

    #[inline]
    pub fn shade(&self, normal: &Point3D) -> Shade {
        shade_for_arc(self.arc(normal))
    }
}

/// `round(clamp(arc / π, 0, 1) * 255)`
#[inline]
pub fn shade_for_arc(arc: f64) -> Shade {
    let intensity = (arc / PI).clamp(0.0, 1.0);
    Shade((intensity * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{LIGHT_X, LIGHT_Y, LIGHT_Z};

    fn default_light() -> LightDirection {
        LightDirection::from_position(LIGHT_X, LIGHT_Y, LIGHT_Z).unwrap()
    }

    #[test]
    fn test_default_light_components() {
        let light = default_light();
        assert!((light.i - 0.4472).abs() < 1e-4);
        assert!((light.j + 0.4).abs() < 1e-12);
        assert!((light.k + 0.8).abs() < 1e-12);
        assert!((light.as_point().length_squared() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_facing_viewer() {
        let light = default_light();
        let normal = Point3D::new(0.0, 0.0, 1.0);
        let arc = light.arc(&normal);
        assert!((arc - 2.498).abs() < 1e-3);
        assert!((arc / PI - 0.795).abs() < 1e-3);
        assert_eq!(light.shade(&normal), Shade(203));
    }

    #[test]
    fn test_shade_monotonic_in_angle() {
        assert_eq!(shade_for_arc(0.0), Shade::BLACK);
        assert_eq!(shade_for_arc(PI), Shade::WHITE);
        let mut prev = 0u8;
        for step in 0..=1000 {
            let Shade(v) = shade_for_arc(PI * step as f64 / 1000.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_dot_clamped_before_acos() {
        let light = LightDirection { i: 0.0, j: 0.0, k: 1.0 };
        // Slightly longer than unit: dot product > 1 without the clamp
        let normal = Point3D::new(0.0, 0.0, 1.0 + 1e-12);
        let arc = light.arc(&normal);
        assert!(!arc.is_nan());
        assert_eq!(light.shade(&normal), Shade::BLACK);

        let away = Point3D::new(0.0, 0.0, -1.0 - 1e-12);
        assert_eq!(light.shade(&away), Shade::WHITE);
    }

    #[test]
    fn test_light_radius_does_not_change_direction() {
        let on_sphere = RenderConfig::default();
        let off_sphere = RenderConfig {
            light_radius: 12.0,
            ..RenderConfig::default()
        };
        let a = LightDirection::from_config(&on_sphere).unwrap();
        let b = LightDirection::from_config(&off_sphere).unwrap();
        assert_eq!(a, b);
        assert!((b.as_point().length_squared() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_light_rejected() {
        assert!(LightDirection::from_position(0.0, 0.0, 0.0).is_none());
        assert!(LightDirection::from_position(f64::NAN, 1.0, 0.0).is_none());
    }
}
