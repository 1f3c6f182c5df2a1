//! Stack lifecycle operations: build, pull, up, down, logs, dump.
//!
//! Each operation resolves the stack directory, opens the compose project,
//! expands the requested services and hands the result to the engine.
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::application::ports::{ComposeEngine, ComposeProjects, ConfigStore, StackLocations};
use crate::domain::stack::DETACH_FLAG;
use crate::domain::{LifecycleOptions, StackError, StackOptions, StackSettings};

/// Runs stack lifecycle operations against one compose project.
pub struct StackOrchestrator<L, P, C> {
    settings: StackSettings,
    locations: L,
    projects: P,
    config: C,
}

impl<L, P, C> StackOrchestrator<L, P, C>
where
    L: StackLocations,
    P: ComposeProjects,
    C: ConfigStore,
{
    #[must_use]
    pub fn new(settings: StackSettings, locations: L, projects: P, config: C) -> Self {
        Self {
            settings,
            locations,
            projects,
            config,
        }
    }

    /// Build images of the requested services.
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be opened or the build fails.
    pub async fn build(&self, options: &StackOptions) -> Result<()> {
        let project = self.project()?;
        let opts = LifecycleOptions {
            services: self.units(&options.services),
            ..LifecycleOptions::default()
        };
        tracing::debug!(services = ?opts.services, "building stack");
        project
            .build(&opts)
            .await
            .context(StackError::Engine { operation: "build" })
    }

    /// Pull images of the requested services for the requested stack version.
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be opened, the image
    /// references cannot be resolved, or the pull fails.
    pub async fn pull(&self, options: &StackOptions) -> Result<()> {
        let project = self.project()?;
        let opts = LifecycleOptions {
            env: self.image_env(&options.stack_version)?,
            services: self.units(&options.services),
            ..LifecycleOptions::default()
        };
        tracing::debug!(services = ?opts.services, version = %options.stack_version, "pulling stack images");
        project
            .pull(&opts)
            .await
            .context(StackError::Engine { operation: "pull" })
    }

    /// Start the requested services, detached when `daemon_mode` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be opened, the image
    /// references cannot be resolved, or the engine exits unsuccessfully.
    pub async fn up(&self, options: &StackOptions) -> Result<()> {
        let project = self.project()?;
        let mut extra_args = Vec::new();
        if options.daemon_mode {
            extra_args.push(DETACH_FLAG.to_string());
        }
        let opts = LifecycleOptions {
            env: self.image_env(&options.stack_version)?,
            extra_args,
            services: self.units(&options.services),
        };
        tracing::debug!(
            services = ?opts.services,
            version = %options.stack_version,
            daemon = options.daemon_mode,
            "starting stack"
        );
        project
            .up(&opts)
            .await
            .context(StackError::Engine { operation: "up" })
    }

    /// Stop and remove every unit of the stack.
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be opened or the teardown fails.
    pub async fn down(&self) -> Result<()> {
        let project = self.project()?;
        tracing::debug!("tearing down stack");
        project
            .down(&LifecycleOptions::default())
            .await
            .context(StackError::Engine { operation: "down" })
    }

    /// Raw logs of a single service. Readiness sidecars are not included.
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be opened or the engine fails.
    pub async fn logs(&self, service: &str) -> Result<Vec<u8>> {
        let project = self.project()?;
        let opts = LifecycleOptions {
            services: vec![service.to_string()],
            ..LifecycleOptions::default()
        };
        project
            .logs(&opts)
            .await
            .context(StackError::Engine { operation: "logs" })
    }

    /// Logs of every known stack service, in settings order.
    ///
    /// # Errors
    ///
    /// Stops at the first service whose logs cannot be read.
    pub async fn dump(&self) -> Result<Vec<(String, Vec<u8>)>> {
        let mut dumps = Vec::with_capacity(self.settings.dump_services.len());
        for service in &self.settings.dump_services {
            let out = self
                .logs(service)
                .await
                .with_context(|| format!("dumping logs of {service} failed"))?;
            dumps.push((service.clone(), out));
        }
        Ok(dumps)
    }

    fn project(&self) -> Result<P::Project> {
        let stack_dir = self.locations.stack_dir().context(StackError::LocateStack)?;
        let definition = stack_dir.join(&self.settings.definition_file);
        self.projects
            .open(&self.settings.project_name, &definition)
            .context(StackError::CreateProject { path: definition })
    }

    fn units(&self, requested: &[String]) -> Vec<String> {
        self.settings.selector.expand(requested).into_units()
    }

    fn image_env(&self, stack_version: &str) -> Result<BTreeMap<String, String>> {
        let config = self.config.load().context(StackError::ReadConfig)?;
        let refs = config
            .stack_image_refs(stack_version)
            .context(StackError::ReadConfig)?;
        Ok(refs.as_env())
    }
}
