//! Navigator configuration loader.

use std::path::Path;

use scanner_core::NavigatorConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`NavigatorConfig`] from TOML files.
///
/// Every key is optional; missing keys keep their defaults.
///
/// ```toml
/// announce_distance_on_item = true
///
/// [metrics]
/// buildings = "manhattan"
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<NavigatorConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<NavigatorConfig> {
        let config: NavigatorConfig = toml::from_str(content)?;
        Ok(config)
    }
}
