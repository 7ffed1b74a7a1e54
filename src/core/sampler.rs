//! Golden-angle (Fibonacci) spiral sampling of the unit sphere

use std::f64::consts::PI;
use tracing::{debug, warn};

use super::point::Point3D;

/// Golden angle in radians: π(3 − √5)
pub fn golden_angle() -> f64 {
    PI * (3.0 - 5f64.sqrt())
}

/// Place `count` points approximately evenly on the unit sphere.
///
/// Latitude bands are evenly spaced in y (ascending with the index); the
/// azimuth advances by the golden angle, rotated by `phase` (in index units,
/// `[0, count)`) so the pattern differs from run to run.
pub fn generate(count: usize, phase: f64) -> Vec<Point3D> {
    if count == 0 {
        return Vec::new();
    }

    let n = count as f64;
    let offset = 2.0 / n;
    let increment = golden_angle();

    (0..count)
        .map(|i| {
            let i = i as f64;
            let y = (i * offset - 1.0) + offset / 2.0;
            let r = (1.0 - y * y).max(0.0).sqrt();
            let phi = ((i + phase) % n) * increment;
            Point3D::new(phi.cos() * r, y, phi.sin() * r)
        })
        .collect()
}

/// Random rotational offset in `[0, count)`, drawn once per run.
/// Falls back to 0 if the OS RNG is unavailable.
pub fn random_phase(count: usize) -> f64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => {
            // 53 random bits -> uniform [0, 1)
            let unit = (u64::from_le_bytes(bytes) >> 11) as f64 / (1u64 << 53) as f64;
            let phase = unit * count as f64;
            debug!(phase, count, "Drew spiral phase");
            phase
        }
        Err(e) => {
            warn!(error = %e, "OS RNG unavailable, using zero phase");
            0.0
        }
    }
}
