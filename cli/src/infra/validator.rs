//! External package-spec validator.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, ConfigStore, PackageValidator};

/// Runs the configured validator command with the package root appended.
pub struct ExternalValidator<R> {
    command: Vec<String>,
    runner: R,
}

impl<R: CommandRunner> ExternalValidator<R> {
    #[must_use]
    pub fn new(command: Vec<String>, runner: R) -> Self {
        Self { command, runner }
    }
}

impl<R: CommandRunner> PackageValidator for ExternalValidator<R> {
    async fn validate(&self, package_root: &Path) -> Result<()> {
        let (program, fixed) = self
            .command
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("no package validator configured"))?;
        let root = package_root.display().to_string();
        let mut args: Vec<&str> = fixed.iter().map(String::as_str).collect();
        args.push(&root);

        let output = self
            .runner
            .run(program, &args, &BTreeMap::new())
            .await
            .with_context(|| format!("running package validator {program}"))?;
        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let message = match stderr.trim() {
            "" => stdout.trim(),
            message => message,
        };
        if message.is_empty() {
            anyhow::bail!("{program} exited with {}", output.status);
        }
        anyhow::bail!("{message}")
    }
}

/// Reads the validator command from the configuration when validation runs.
pub struct ConfiguredValidator<C, R> {
    config: C,
    runner: R,
}

impl<C: ConfigStore, R: CommandRunner + Clone> ConfiguredValidator<C, R> {
    #[must_use]
    pub fn new(config: C, runner: R) -> Self {
        Self { config, runner }
    }
}

impl<C: ConfigStore, R: CommandRunner + Clone> PackageValidator for ConfiguredValidator<C, R> {
    async fn validate(&self, package_root: &Path) -> Result<()> {
        let config = self
            .config
            .load()
            .context("can't read application configuration")?;
        ExternalValidator::new(config.lint.validator, self.runner.clone())
            .validate(package_root)
            .await
    }
}
