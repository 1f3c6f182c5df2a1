//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{ConfigStore, StackLocations};
use crate::domain::config::{AppConfig, CONFIG_FILENAME};

/// Overrides the configuration file location.
pub const CONFIG_ENV: &str = "STACKCTL_CONFIG";

/// Production implementation of `ConfigStore` that uses a YAML file on disk.
pub struct YamlConfigStore<L> {
    locations: L,
}

impl<L: StackLocations> YamlConfigStore<L> {
    #[must_use]
    pub fn new(locations: L) -> Self {
        Self { locations }
    }
}

impl<L: StackLocations> ConfigStore for YamlConfigStore<L> {
    fn load(&self) -> Result<AppConfig> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    fn path(&self) -> Result<PathBuf> {
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(val));
        }
        Ok(self.locations.root_dir()?.join(CONFIG_FILENAME))
    }
}
