//! Package lint flow: locate, check README freshness, validate.
//!
//! Every step short-circuits; the external validator only runs once all
//! generated README files are known to be current.

use anyhow::{Context, Result};

use crate::application::ports::{PackageLocator, PackageValidator, ProgressReporter, ReadmeChecker};
use crate::domain::LintError;
use crate::domain::package::templates_dir;

/// Lint the package enclosing the working directory.
///
/// # Errors
///
/// Returns an error if no package root is found, a README is stale or
/// cannot be checked, or the validator rejects the package.
pub async fn lint_package(
    locator: &impl PackageLocator,
    docs: &impl ReadmeChecker,
    validator: &impl PackageValidator,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    reporter.step("Lint the package");

    // A failed lookup counts as "not found"; the cause stays in the chain.
    let package_root = match locator.find_package_root() {
        Ok(Some(root)) => root,
        Ok(None) => return Err(LintError::RootNotFound.into()),
        Err(err) => return Err(err.context(LintError::RootNotFound)),
    };
    tracing::debug!(root = %package_root.display(), "found package root");

    let templates = docs
        .list_templates(&package_root)
        .with_context(|| LintError::ListDocs(templates_dir(&package_root)))?;

    for filename in templates {
        let up_to_date = docs
            .is_up_to_date(&package_root, &filename)
            .with_context(|| LintError::CheckReadme(filename.clone()))?;
        if !up_to_date {
            return Err(LintError::ReadmeOutdated(filename).into());
        }
    }

    validator
        .validate(&package_root)
        .await
        .context(LintError::Validation)?;

    reporter.success("Done");
    Ok(())
}
