//! Configuration loading

use anyhow::Result;
use orrery_core::SceneConfig;
use std::path::Path;
use tracing::info;

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<SceneConfig> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: SceneConfig = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Ok(SceneConfig::default())
    }
}

/// Save default configuration to file
pub fn save_default_config(path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SceneConfig::default())?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.markers.count, 20);
        assert_eq!(config.stars.count, 500);
    }

    #[test]
    fn test_saved_defaults_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("orrery.toml");
        save_default_config(&path).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.bodies.secondary_offset, [4.5, 0.0, 0.0]);
        assert_eq!(config.bodies.spin_step, 0.01);
        assert_eq!(config.markers.distance, [8.0, 13.0]);
    }

    #[test]
    fn test_overrides_apply() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("orrery.toml");
        std::fs::write(&path, "[stars]\ncount = 50\nspread = 20.0\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.stars.count, 50);
        assert_eq!(config.stars.spread, 20.0);
        assert_eq!(config.markers.count, 20);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("orrery.toml");
        std::fs::write(&path, "stars = \"many\"").unwrap();
        assert!(load_config(&path).is_err());
    }
}
