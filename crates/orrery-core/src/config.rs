//! Scene configuration types and validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors surfaced by [`SceneConfig::validate`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} range: lower bound {lo} exceeds upper bound {hi}")]
    InvertedRange { name: &'static str, lo: f32, hi: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}

/// Main scene configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Seed for procedural placement; random when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub bodies: BodyConfig,
    #[serde(default)]
    pub markers: MarkerConfig,
    #[serde(default)]
    pub stars: StarConfig,
    #[serde(default)]
    pub textures: TextureConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: None,
            bodies: BodyConfig::default(),
            markers: MarkerConfig::default(),
            stars: StarConfig::default(),
            textures: TextureConfig::default(),
        }
    }
}

/// The two celestial bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyConfig {
    /// Primary body sphere radius
    #[serde(default = "default_primary_radius")]
    pub primary_radius: f32,
    /// Secondary body sphere radius
    #[serde(default = "default_secondary_radius")]
    pub secondary_radius: f32,
    /// Secondary body offset from the primary, in world units
    #[serde(default = "default_secondary_offset")]
    pub secondary_offset: [f32; 3],
    /// Spin increment in radians per frame callback (not per second)
    #[serde(default = "default_spin_step")]
    pub spin_step: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            primary_radius: default_primary_radius(),
            secondary_radius: default_secondary_radius(),
            secondary_offset: default_secondary_offset(),
            spin_step: default_spin_step(),
        }
    }
}

fn default_primary_radius() -> f32 {
    1.0
}

fn default_secondary_radius() -> f32 {
    0.5
}

fn default_secondary_offset() -> [f32; 3] {
    [4.5, 0.0, 0.0]
}

fn default_spin_step() -> f32 {
    0.01
}

/// Near-object markers and their guide rings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    #[serde(default = "default_marker_count")]
    pub count: usize,
    /// Body radius range for even-indexed (smaller) markers
    #[serde(default = "default_radius_small")]
    pub radius_small: [f32; 2],
    /// Body radius range for odd-indexed (larger) markers
    #[serde(default = "default_radius_large")]
    pub radius_large: [f32; 2],
    /// Orbital radius range
    #[serde(default = "default_distance")]
    pub distance: [f32; 2],
    /// Angular speed range in radians per second
    #[serde(default = "default_speed")]
    pub speed: [f32; 2],
    /// Peak vertical excursion; each marker gets a tilt in [0, max_tilt)
    #[serde(default = "default_max_tilt")]
    pub max_tilt: f32,
    /// Segment count of the guide rings
    #[serde(default = "default_guide_segments")]
    pub guide_segments: u32,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            count: default_marker_count(),
            radius_small: default_radius_small(),
            radius_large: default_radius_large(),
            distance: default_distance(),
            speed: default_speed(),
            max_tilt: default_max_tilt(),
            guide_segments: default_guide_segments(),
        }
    }
}

fn default_marker_count() -> usize {
    20
}

fn default_radius_small() -> [f32; 2] {
    [0.1, 0.25]
}

fn default_radius_large() -> [f32; 2] {
    [0.15, 0.40]
}

fn default_distance() -> [f32; 2] {
    [8.0, 13.0]
}

fn default_speed() -> [f32; 2] {
    [0.2, 1.0]
}

fn default_max_tilt() -> f32 {
    0.3
}

fn default_guide_segments() -> u32 {
    64
}

/// Background star field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarConfig {
    #[serde(default = "default_star_count")]
    pub count: usize,
    /// Star sphere radius
    #[serde(default = "default_star_radius")]
    pub radius: f32,
    /// Side length of the placement cube, centered at the origin
    #[serde(default = "default_star_spread")]
    pub spread: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            count: default_star_count(),
            radius: default_star_radius(),
            spread: default_star_spread(),
        }
    }
}

fn default_star_count() -> usize {
    500
}

fn default_star_radius() -> f32 {
    0.05
}

fn default_star_spread() -> f32 {
    100.0
}

/// Surface texture paths, relative to the assets directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureConfig {
    #[serde(default = "default_primary_texture")]
    pub primary: String,
    #[serde(default = "default_secondary_texture")]
    pub secondary: String,
    #[serde(default = "default_marker_texture")]
    pub marker: String,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            primary: default_primary_texture(),
            secondary: default_secondary_texture(),
            marker: default_marker_texture(),
        }
    }
}

fn default_primary_texture() -> String {
    "textures/primary.png".to_string()
}

fn default_secondary_texture() -> String {
    "textures/secondary.png".to_string()
}

fn default_marker_texture() -> String {
    "textures/marker.png".to_string()
}

impl SceneConfig {
    /// Check structural soundness of the configured ranges and radii.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("bodies.primary_radius", self.bodies.primary_radius)?;
        check_positive("bodies.secondary_radius", self.bodies.secondary_radius)?;
        check_range("markers.radius_small", self.markers.radius_small)?;
        check_range("markers.radius_large", self.markers.radius_large)?;
        check_range("markers.distance", self.markers.distance)?;
        check_range("markers.speed", self.markers.speed)?;
        if self.markers.max_tilt < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "markers.max_tilt",
                value: self.markers.max_tilt,
            });
        }
        check_positive("stars.radius", self.stars.radius)?;
        check_positive("stars.spread", self.stars.spread)?;
        Ok(())
    }
}

fn check_range(name: &'static str, range: [f32; 2]) -> Result<(), ConfigError> {
    if range[0] > range[1] {
        return Err(ConfigError::InvertedRange {
            name,
            lo: range[0],
            hi: range[1],
        });
    }
    if range[0] < 0.0 {
        return Err(ConfigError::NonPositive {
            name,
            value: range[0],
        });
    }
    Ok(())
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SceneConfig::default();
        config.validate().unwrap();
        assert_eq!(config.markers.count, 20);
        assert_eq!(config.stars.count, 500);
        assert_eq!(config.bodies.secondary_offset, [4.5, 0.0, 0.0]);
        assert_eq!(config.bodies.spin_step, 0.01);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let mut config = SceneConfig::default();
        config.markers.distance = [13.0, 8.0];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { name: "markers.distance", .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_spread() {
        let mut config = SceneConfig::default();
        config.stars.spread = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { name: "stars.spread", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_tilt() {
        let mut config = SceneConfig::default();
        config.markers.max_tilt = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_document_deserializes_to_defaults() {
        let config: SceneConfig = toml::from_str("").unwrap();
        assert_eq!(config.markers.count, 20);
        assert_eq!(config.stars.spread, 100.0);
        assert_eq!(config.textures.primary, "textures/primary.png");
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config: SceneConfig = toml::from_str(
            "seed = 9\n\n[markers]\ncount = 5\n",
        )
        .unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.markers.count, 5);
        assert_eq!(config.markers.distance, [8.0, 13.0]);
        assert_eq!(config.stars.count, 500);
    }
}
