//! Procedural scene layout generation

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{ConfigError, SceneConfig};
use crate::orbit::OrbitalPath;
use crate::starfield;

/// One near-object marker: its own sphere size plus its orbit.
///
/// The paired guide ring shares `path.radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerBlueprint {
    pub body_radius: f32,
    pub path: OrbitalPath,
}

/// The full procedural placement for one scene, generated once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneBlueprint {
    pub markers: Vec<MarkerBlueprint>,
    pub stars: Vec<Vec3>,
}

impl SceneBlueprint {
    /// Generate a layout from a validated configuration and an RNG.
    pub fn generate(config: &SceneConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        config.validate()?;

        let markers = (0..config.markers.count)
            .map(|i| {
                // Alternating sizes: even indices draw from the smaller
                // range, odd from the larger.
                let size_range = if i % 2 == 0 {
                    config.markers.radius_small
                } else {
                    config.markers.radius_large
                };
                MarkerBlueprint {
                    body_radius: sample(rng, size_range),
                    path: OrbitalPath::new(
                        sample(rng, config.markers.distance),
                        sample(rng, config.markers.speed),
                        sample(rng, [0.0, config.markers.max_tilt]),
                    ),
                }
            })
            .collect();

        let stars = starfield::sample_positions(rng, config.stars.count, config.stars.spread);

        debug!(
            markers = config.markers.count,
            stars = config.stars.count,
            "Generated scene layout"
        );

        Ok(Self { markers, stars })
    }

    /// Generate a layout from the configuration alone, seeding the RNG from
    /// `config.seed` when present and from OS entropy otherwise.
    pub fn from_config(config: &SceneConfig) -> Result<Self, ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate(config, &mut rng)
    }
}

fn sample(rng: &mut impl Rng, range: [f32; 2]) -> f32 {
    if range[0] >= range[1] {
        range[0]
    } else {
        rng.gen_range(range[0]..range[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> SceneBlueprint {
        let mut config = SceneConfig::default();
        config.seed = Some(seed);
        SceneBlueprint::from_config(&config).unwrap()
    }

    #[test]
    fn test_marker_and_star_counts() {
        let blueprint = seeded(1);
        assert_eq!(blueprint.markers.len(), 20);
        assert_eq!(blueprint.stars.len(), 500);
    }

    #[test]
    fn test_marker_parameters_within_ranges() {
        let blueprint = seeded(2);
        for (i, marker) in blueprint.markers.iter().enumerate() {
            if i % 2 == 0 {
                assert!((0.1..0.25).contains(&marker.body_radius), "marker {i}");
            } else {
                assert!((0.15..0.40).contains(&marker.body_radius), "marker {i}");
            }
            assert!((8.0..13.0).contains(&marker.path.radius), "marker {i}");
            assert!((0.2..1.0).contains(&marker.path.angular_speed), "marker {i}");
            assert!((0.0..0.3).contains(&marker.path.tilt), "marker {i}");
        }
    }

    #[test]
    fn test_star_positions_within_spread() {
        let blueprint = seeded(3);
        for star in &blueprint.stars {
            for c in star.to_array() {
                assert!((-50.0..=50.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        assert_eq!(seeded(99), seeded(99));
    }

    #[test]
    fn test_different_seed_different_layout() {
        assert_ne!(seeded(99), seeded(100));
    }

    #[test]
    fn test_generation_validates_config() {
        let mut config = SceneConfig::default();
        config.markers.speed = [1.0, 0.2];
        assert!(SceneBlueprint::from_config(&config).is_err());
    }

    #[test]
    fn test_degenerate_range_collapses_to_bound() {
        let mut config = SceneConfig::default();
        config.seed = Some(5);
        config.markers.distance = [10.0, 10.0];
        let blueprint = SceneBlueprint::from_config(&config).unwrap();
        assert!(blueprint.markers.iter().all(|m| m.path.radius == 10.0));
    }
}
