//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::domain::{AppConfig, LifecycleOptions};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// No timeout is applied: a stack started in the foreground runs until the
/// user stops it.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program with extra environment and capture its output.
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        env: &BTreeMap<String, String>,
    ) -> Result<Output>;
    /// Run a program with extra environment and inherited stdio, returning
    /// only its exit status.
    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        env: &BTreeMap<String, String>,
    ) -> Result<ExitStatus>;
}

// ── Compose Ports ─────────────────────────────────────────────────────────────

/// One compose project: a definition file plus the lifecycle verbs.
#[allow(async_fn_in_trait)]
pub trait ComposeEngine {
    /// Build images for the selected units.
    async fn build(&self, opts: &LifecycleOptions) -> Result<()>;
    /// Pull images for the selected units.
    async fn pull(&self, opts: &LifecycleOptions) -> Result<()>;
    /// Start the selected units.
    async fn up(&self, opts: &LifecycleOptions) -> Result<()>;
    /// Stop and remove every unit of the project. Unit selection is ignored.
    async fn down(&self, opts: &LifecycleOptions) -> Result<()>;
    /// Raw log output of the selected units.
    async fn logs(&self, opts: &LifecycleOptions) -> Result<Vec<u8>>;
}

/// Opens compose projects.
pub trait ComposeProjects {
    type Project: ComposeEngine;

    /// Bind a project name to a definition file.
    ///
    /// # Errors
    ///
    /// Returns an error if the definition file does not exist.
    fn open(&self, project_name: &str, definition: &Path) -> Result<Self::Project>;
}

// ── Location and Config Ports ─────────────────────────────────────────────────

/// Resolves where installed resources live on disk.
pub trait StackLocations {
    /// Installation root (`~/.stackctl`).
    fn root_dir(&self) -> Result<PathBuf>;
    /// Directory holding the compose definition and its resources.
    fn stack_dir(&self) -> Result<PathBuf> {
        Ok(self.root_dir()?.join("stack"))
    }
}

/// Loads persisted application configuration.
pub trait ConfigStore {
    /// Load the configuration, defaults when no file exists.
    fn load(&self) -> Result<AppConfig>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Raw filesystem operations used by the installer.
pub trait LocalFs {
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;
    /// Read a whole file, `None` when it does not exist.
    fn read_to_string(&self, path: &Path) -> Result<Option<String>>;
}

/// Embedded resources installed into the stack directory.
pub trait StackAssets {
    /// `(relative path, content)` of every resource.
    fn files(&self) -> Vec<(PathBuf, &'static [u8])>;
}

// ── Package Ports ─────────────────────────────────────────────────────────────

/// Finds the package the command runs in.
pub trait PackageLocator {
    /// Root of the enclosing package, `None` when there is none.
    fn find_package_root(&self) -> Result<Option<PathBuf>>;
}

/// Checks generated README files against their templates.
pub trait ReadmeChecker {
    /// Names of the README templates of the package.
    fn list_templates(&self, package_root: &Path) -> Result<Vec<String>>;
    /// Whether the rendered `filename` reflects its template.
    fn is_up_to_date(&self, package_root: &Path, filename: &str) -> Result<bool>;
}

/// Structural and semantic validation of a package tree.
#[allow(async_fn_in_trait)]
pub trait PackageValidator {
    async fn validate(&self, package_root: &Path) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
}
