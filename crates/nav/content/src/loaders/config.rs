//! Planner configuration loader.

use std::path::Path;

use nav_core::NavConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`NavConfig`] from TOML files.
///
/// Every key is optional; omitted keys keep their [`NavConfig::default`] value.
///
/// ```toml
/// default_radius = 0.75
/// max_explored_nodes = 20000
/// smoothing = false
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<NavConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    /// Parse config data already held in memory.
    pub fn parse(content: &str) -> LoadResult<NavConfig> {
        let config: NavConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !config.default_radius.is_finite() || config.default_radius < 0.0 {
            anyhow::bail!(
                "default_radius must be finite and non-negative, got {}",
                config.default_radius
            );
        }
        if !config.min_grid_size.is_finite() || config.min_grid_size <= 0.0 {
            anyhow::bail!(
                "min_grid_size must be finite and positive, got {}",
                config.min_grid_size
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigLoader::parse("max_explored_nodes = 42\n").unwrap();
        assert_eq!(config.max_explored_nodes, 42);
        assert_eq!(config.default_radius, NavConfig::DEFAULT_RADIUS);
        assert!(config.smoothing);
    }

    #[test]
    fn empty_document_is_the_default_config() {
        assert_eq!(ConfigLoader::parse("").unwrap(), NavConfig::default());
    }

    #[test]
    fn rejects_degenerate_grid() {
        assert!(ConfigLoader::parse("min_grid_size = 0.0").is_err());
        assert!(ConfigLoader::parse("default_radius = -1.0").is_err());
        assert!(ConfigLoader::parse("smoothing = \"yes\"").is_err());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nav.toml");
        std::fs::write(&path, "default_radius = 2.0\nsmoothing = false\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.default_radius, 2.0);
        assert!(!config.smoothing);

        let missing = ConfigLoader::load(&dir.path().join("absent.toml"));
        assert!(missing.is_err());
    }
}
