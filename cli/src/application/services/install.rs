//! Installation of the stack resources under the installation root.
//!
//! Resources are rewritten whenever the version marker does not match the
//! running build. The user's `config.yml` is created once and never
//! overwritten.

use anyhow::{Context, Result};

use crate::application::ports::{LocalFs, StackAssets, StackLocations};
use crate::domain::config::CONFIG_FILENAME;
use crate::domain::version::VERSION_FILENAME;
use crate::domain::{AppConfig, BuildInfo, InstallError};

/// What `ensure_installed` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The marker matched; nothing was written.
    UpToDate,
    /// Resources and marker were (re)written.
    Installed,
}

/// Whether the resources under the installation root match `build`.
///
/// A missing marker file means "not installed", never an error.
///
/// # Errors
///
/// Returns an error if the marker exists but cannot be read.
pub fn is_latest_version_installed(
    locations: &impl StackLocations,
    fs: &impl LocalFs,
    build: &BuildInfo,
) -> Result<bool> {
    let root = locations.root_dir().context(InstallError::LocateRoot)?;
    let stored = fs
        .read_to_string(&root.join(VERSION_FILENAME))
        .context(InstallError::ReadVersion)?;
    Ok(build.is_installed(stored.as_deref()))
}

/// Install the stack resources unless the current build already did.
///
/// # Errors
///
/// Returns an error if the installation root cannot be resolved or any
/// resource cannot be written.
pub fn ensure_installed(
    locations: &impl StackLocations,
    fs: &impl LocalFs,
    assets: &impl StackAssets,
    build: &BuildInfo,
) -> Result<InstallOutcome> {
    if is_latest_version_installed(locations, fs, build)? {
        tracing::debug!("stack resources are up to date");
        return Ok(InstallOutcome::UpToDate);
    }

    let root = locations.root_dir().context(InstallError::LocateRoot)?;
    let stack_dir = locations.stack_dir().context(InstallError::LocateRoot)?;
    tracing::info!(path = %stack_dir.display(), "installing stack resources");

    write_resources(fs, assets, &stack_dir).context(InstallError::WriteResources)?;

    let config_path = root.join(CONFIG_FILENAME);
    if !fs.exists(&config_path) {
        let content =
            serde_yaml::to_string(&AppConfig::default()).context("cannot serialize config")?;
        fs.write(&config_path, content.as_bytes())
            .context(InstallError::WriteResources)?;
    }

    fs.write(&root.join(VERSION_FILENAME), build.marker().as_bytes())
        .context(InstallError::WriteVersion)?;
    Ok(InstallOutcome::Installed)
}

fn write_resources(
    fs: &impl LocalFs,
    assets: &impl StackAssets,
    stack_dir: &std::path::Path,
) -> Result<()> {
    fs.create_dir_all(stack_dir)?;
    for (relative, content) in assets.files() {
        let path = stack_dir.join(&relative);
        if let Some(parent) = path.parent() {
            fs.create_dir_all(parent)?;
        }
        fs.write(&path, content)?;
    }
    Ok(())
}
