//! Infrastructure implementation of the `StackLocations` port.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::StackLocations;

/// Overrides the installation root.
pub const DATA_HOME_ENV: &str = "STACKCTL_DATA_HOME";

const ROOT_DIR_NAME: &str = ".stackctl";

/// Resolves the installation root from `STACKCTL_DATA_HOME` or the home
/// directory, on every call.
#[derive(Debug, Clone, Default)]
pub struct LocationManager {
    root: Option<PathBuf>,
}

impl LocationManager {
    /// Location manager using the environment and home directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Location manager with a fixed root (used in tests).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self { root: Some(root) }
    }
}

impl StackLocations for LocationManager {
    fn root_dir(&self) -> Result<PathBuf> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }
        match std::env::var(DATA_HOME_ENV) {
            Ok(val) if !val.is_empty() => return Ok(PathBuf::from(val)),
            _ => {}
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(ROOT_DIR_NAME))
    }
}
