//! `docker compose` implementation of the compose ports.
//!
//! Every verb runs `docker compose -f <definition> -p <project> <verb>`,
//! followed by the extra arguments and the selected units.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, ComposeEngine, ComposeProjects};
use crate::domain::LifecycleOptions;

const DOCKER: &str = "docker";

/// Opens `ComposeProject`s that share one command runner.
#[derive(Debug, Clone, Default)]
pub struct DockerCompose<R> {
    runner: R,
}

impl<R> DockerCompose<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner + Clone> ComposeProjects for DockerCompose<R> {
    type Project = ComposeProject<R>;

    fn open(&self, project_name: &str, definition: &Path) -> Result<Self::Project> {
        ComposeProject::new(project_name, definition, self.runner.clone())
    }
}

/// A compose project bound to its definition file.
#[derive(Debug)]
pub struct ComposeProject<R> {
    name: String,
    definition: PathBuf,
    runner: R,
}

impl<R: CommandRunner> ComposeProject<R> {
    /// # Errors
    ///
    /// Returns an error if `definition` is not an existing file.
    pub fn new(name: &str, definition: &Path, runner: R) -> Result<Self> {
        anyhow::ensure!(
            definition.is_file(),
            "compose definition {} does not exist",
            definition.display()
        );
        Ok(Self {
            name: name.to_string(),
            definition: definition.to_path_buf(),
            runner,
        })
    }

    /// Full `docker` argument list for `verb`.
    #[must_use]
    pub fn args(&self, verb: &str, opts: &LifecycleOptions) -> Vec<String> {
        let mut args = vec![
            "compose".to_string(),
            "-f".to_string(),
            self.definition.display().to_string(),
            "-p".to_string(),
            self.name.clone(),
            verb.to_string(),
        ];
        args.extend(opts.extra_args.iter().cloned());
        args.extend(opts.services.iter().cloned());
        args
    }

    async fn run_attached(&self, verb: &str, opts: &LifecycleOptions) -> Result<()> {
        let args = self.args(verb, opts);
        let argv: Vec<&str> = args.iter().map(String::as_str).collect();
        let status = self
            .runner
            .run_status(DOCKER, &argv, &opts.env)
            .await
            .with_context(|| format!("running docker compose {verb}"))?;
        anyhow::ensure!(
            status.success(),
            "docker compose {verb} exited with {status}"
        );
        Ok(())
    }
}

impl<R: CommandRunner> ComposeEngine for ComposeProject<R> {
    async fn build(&self, opts: &LifecycleOptions) -> Result<()> {
        self.run_attached("build", opts).await
    }

    async fn pull(&self, opts: &LifecycleOptions) -> Result<()> {
        self.run_attached("pull", opts).await
    }

    async fn up(&self, opts: &LifecycleOptions) -> Result<()> {
        self.run_attached("up", opts).await
    }

    async fn down(&self, opts: &LifecycleOptions) -> Result<()> {
        let teardown = LifecycleOptions {
            env: opts.env.clone(),
            extra_args: opts.extra_args.clone(),
            services: Vec::new(),
        };
        self.run_attached("down", &teardown).await
    }

    async fn logs(&self, opts: &LifecycleOptions) -> Result<Vec<u8>> {
        let args = self.args("logs", opts);
        let argv: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = self
            .runner
            .run(DOCKER, &argv, &opts.env)
            .await
            .context("running docker compose logs")?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "docker compose logs exited with {}: {}",
                output.status,
                stderr.trim()
            );
        }
        Ok(output.stdout)
    }
}
