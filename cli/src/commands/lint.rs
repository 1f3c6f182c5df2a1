//! `stackctl lint` — validate the package in the working directory.

use anyhow::Result;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::services::lint::lint_package;
use crate::infra::package::{PackageRootFinder, ReadmeFiles};
use crate::infra::validator::ConfiguredValidator;
use crate::output::TerminalReporter;

/// Long help for the lint command.
pub const LINT_LONG_ABOUT: &str = "Use this command to validate the contents of a package using the package specification.

The command ensures that the package is aligned with the package spec and the README file is up-to-date with its template (if present).

Context:
  package";

/// Run `stackctl lint`.
///
/// # Errors
///
/// Returns an error if the package fails to lint or the configuration
/// naming the validator cannot be read.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let validator = ConfiguredValidator::new(app.config_store(), app.runner);
    let reporter = TerminalReporter::new(&app.output);

    lint_package(
        &PackageRootFinder::from_cwd(),
        &ReadmeFiles,
        &validator,
        &reporter,
    )
    .await?;
    Ok(ExitCode::SUCCESS)
}
