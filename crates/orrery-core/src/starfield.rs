//! Background star field placement

use glam::Vec3;
use rand::Rng;

/// Sample `count` star positions uniformly inside the cube of side `spread`
/// centered at the origin (each coordinate in `[-spread / 2, spread / 2]`).
pub fn sample_positions(rng: &mut impl Rng, count: usize, spread: f32) -> Vec<Vec3> {
    let half = spread / 2.0;
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
            )
        })
        .collect()
}
