//! Application context — unified state passed to every command handler.
//!
//! `AppContext` owns the production adapters; command handlers borrow it and
//! build the application services they need from it.

use anyhow::Result;

use crate::application::services::install::{self, InstallOutcome};
use crate::application::services::stack::StackOrchestrator;
use crate::domain::{BuildInfo, StackSettings};
use crate::infra::assets::EmbeddedAssets;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::compose::DockerCompose;
use crate::infra::config::YamlConfigStore;
use crate::infra::fs::LocalFs;
use crate::infra::locations::LocationManager;
use crate::output::OutputContext;

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Stack orchestrator wired to the production adapters.
pub type ProductionStack =
    StackOrchestrator<LocationManager, DockerCompose<TokioCommandRunner>, YamlConfigStore<LocationManager>>;

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Process runner shared by compose and the validator.
    pub runner: TokioCommandRunner,
    /// Installation root resolution.
    pub locations: LocationManager,
    /// Local filesystem.
    pub fs: LocalFs,
    /// Identity of this build.
    pub build: BuildInfo,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &OutputFlags) -> Self {
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            runner: TokioCommandRunner,
            locations: LocationManager::new(),
            fs: LocalFs,
            build: BuildInfo::current(),
        }
    }

    /// Configuration store rooted at the installation directory.
    #[must_use]
    pub fn config_store(&self) -> YamlConfigStore<LocationManager> {
        YamlConfigStore::new(self.locations.clone())
    }

    /// Stack orchestrator using `docker compose`.
    #[must_use]
    pub fn stack(&self) -> ProductionStack {
        StackOrchestrator::new(
            StackSettings::default(),
            self.locations.clone(),
            DockerCompose::new(self.runner),
            self.config_store(),
        )
    }

    /// Install the stack resources if this build has not done so yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the resources cannot be written.
    pub fn ensure_installed(&self) -> Result<InstallOutcome> {
        install::ensure_installed(&self.locations, &self.fs, &EmbeddedAssets, &self.build)
    }
}
