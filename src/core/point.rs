//! Point types for the sphere model and its screen projection
//!
//! - Point3D: sample on the unit sphere (model space, doubles as the surface normal)
//! - ScreenPoint: projected position relative to the canvas centre
//! - ScenePoint: both representations cached together

/// Point on (or, once scaled, a scaled copy of) the unit sphere
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Copy with every coordinate multiplied by `factor`
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    #[inline]
    pub fn dot(&self, other: &Point3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Facing the viewer (positive view-axis coordinate)
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.z > 0.0
    }
}

/// Projected position in canvas units, origin at the canvas centre
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    /// Orthographic projection: drop z after scaling
    pub fn project(point: &Point3D, scale: f64) -> Self {
        let scaled = point.scaled(scale);
        Self {
            x: scaled.x as f32,
            y: scaled.y as f32,
        }
    }
}

/// A sample with its unit normal, projected position and depth
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePoint {
    pub normal: Point3D,
    pub screen: ScreenPoint,
    /// Scaled z, the painter's-algorithm key
    pub depth: f64,
}

impl ScenePoint {
    pub fn new(normal: Point3D, scale: f64) -> Self {
        Self {
            normal,
            screen: ScreenPoint::project(&normal, scale),
            depth: normal.z * scale,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.depth > 0.0
    }
}

/// Depth key for the painter's algorithm
#[inline]
pub fn depth_key(point: &ScenePoint) -> f64 {
    point.depth
}

/// Stable ascending sort by a float key (farthest first)
pub fn sort_by_depth<T, F>(points: &mut [T], key: F)
where
    F: Fn(&T) -> f64,
{
    points.sort_by(|a, b| key(a).total_cmp(&key(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_keeps_direction() {
        let p = Point3D::new(0.6, 0.0, 0.8);
        let s = p.scaled(200.0);
        assert!((s.length_squared() - 200.0 * 200.0).abs() < 1e-6);
        assert!((s.x / 200.0 - p.x).abs() < 1e-12);
    }

    #[test]
    fn test_visibility_by_z_sign() {
        assert!(Point3D::new(0.0, 0.0, 0.1).is_visible());
        assert!(!Point3D::new(0.0, 0.0, 0.0).is_visible());
        assert!(!Point3D::new(0.0, 0.0, -0.5).is_visible());
        assert!(!ScenePoint::new(Point3D::new(1.0, 0.0, 0.0), 200.0).is_visible());
    }

    #[test]
    fn test_sort_by_depth_ascending() {
        let mut points: Vec<ScenePoint> = [0.5, -0.9, 0.0, 0.9, -0.1]
            .iter()
            .map(|&z| ScenePoint::new(Point3D::new(0.0, 0.0, z), 10.0))
            .collect();
        sort_by_depth(&mut points, depth_key);
        for pair in points.windows(2) {
            assert!(pair[0].depth <= pair[1].depth);
        }
        assert_eq!(points[0].normal.z, -0.9);
    }

    #[test]
    fn test_projection_drops_z() {
        let sp = ScenePoint::new(Point3D::new(0.5, -0.5, 0.7), 100.0);
        assert_eq!(sp.screen, ScreenPoint { x: 50.0, y: -50.0 });
        assert!((sp.depth - 70.0).abs() < 1e-9);
    }
}
