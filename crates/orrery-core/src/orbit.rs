//! Closed-form circular orbit motion and guide curve tessellation

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Parameters of a circular, vertically tilted orbit around the origin.
///
/// The path stays on the circle of `radius` in the XZ plane while the Y
/// component oscillates with the same phase, bounded by `tilt`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalPath {
    /// Orbit circle radius
    pub radius: f32,
    /// Phase advance per second of simulation time
    pub angular_speed: f32,
    /// Peak vertical excursion
    pub tilt: f32,
}

impl OrbitalPath {
    pub fn new(radius: f32, angular_speed: f32, tilt: f32) -> Self {
        Self {
            radius,
            angular_speed,
            tilt,
        }
    }

    /// Position at simulation time `t` seconds.
    ///
    /// At `t = 0` this is `(radius, 0, 0)`; x and z trace the orbit circle
    /// and y oscillates in `[-tilt, tilt]`.
    pub fn position_at(&self, t: f32) -> Vec3 {
        let phase = self.angular_speed * t;
        Vec3::new(
            self.radius * phase.cos(),
            self.tilt * phase.sin(),
            self.radius * phase.sin(),
        )
    }
}

/// Tessellate the circle of `radius` in the XZ plane as a closed polyline.
///
/// Returns `segments + 1` vertices; the last vertex repeats the first so
/// the strip closes. Used for the decorative guide rings.
pub fn guide_points(radius: f32, segments: u32) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
        points.push(Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin()));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_position_at_epoch() {
        let path = OrbitalPath::new(9.5, 0.7, 0.2);
        let p = path.position_at(0.0);
        assert!((p.x - 9.5).abs() < EPS);
        assert!(p.y.abs() < EPS);
        assert!(p.z.abs() < EPS);
    }

    #[test]
    fn test_motion_stays_on_circle() {
        let path = OrbitalPath::new(11.0, 0.35, 0.25);
        for i in 0..200 {
            let t = i as f32 * 0.173;
            let p = path.position_at(t);
            let r2 = p.x * p.x + p.z * p.z;
            assert!(
                (r2 - 121.0).abs() < 1e-2,
                "left the orbit circle at t={t}: r^2={r2}"
            );
        }
    }

    #[test]
    fn test_vertical_excursion_bounded() {
        let path = OrbitalPath::new(8.0, 0.9, 0.3);
        for i in 0..500 {
            let t = i as f32 * 0.041;
            let y = path.position_at(t).y;
            assert!((-0.3..=0.3).contains(&y), "tilt bound violated at t={t}: y={y}");
        }
    }

    #[test]
    fn test_tilt_does_not_affect_circle() {
        let flat = OrbitalPath::new(10.0, 0.5, 0.0);
        let tilted = OrbitalPath::new(10.0, 0.5, 0.3);
        for i in 0..50 {
            let t = i as f32 * 0.7;
            let a = flat.position_at(t);
            let b = tilted.position_at(t);
            assert!((a.x - b.x).abs() < EPS);
            assert!((a.z - b.z).abs() < EPS);
        }
    }

    #[test]
    fn test_guide_points_closed_circle() {
        let points = guide_points(12.5, 64);
        assert_eq!(points.len(), 65);
        assert!((points[0] - points[64]).length() < EPS);
        for p in &points {
            assert!(p.y.abs() < EPS);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - 12.5).abs() < 1e-3);
        }
    }
}
