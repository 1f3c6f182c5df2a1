//! Filesystem implementations of the package ports.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::{PackageLocator, ReadmeChecker};
use crate::domain::package::{DOCS_DIR, MANIFEST_FILE, is_package_manifest, templates_dir};

/// Finds the package root by walking up from a start directory.
#[derive(Debug, Clone)]
pub struct PackageRootFinder {
    start: Option<PathBuf>,
}

impl PackageRootFinder {
    /// Finder starting at the current working directory.
    #[must_use]
    pub fn from_cwd() -> Self {
        Self { start: None }
    }

    /// Finder starting at `start` (used in tests).
    #[must_use]
    pub fn from_dir(start: PathBuf) -> Self {
        Self { start: Some(start) }
    }
}

impl PackageLocator for PackageRootFinder {
    fn find_package_root(&self) -> Result<Option<PathBuf>> {
        let start = match &self.start {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("reading working directory")?,
        };
        for dir in start.ancestors() {
            let manifest = dir.join(MANIFEST_FILE);
            if !manifest.is_file() {
                continue;
            }
            let content = std::fs::read_to_string(&manifest)
                .with_context(|| format!("reading {}", manifest.display()))?;
            if is_package_manifest(&content) {
                return Ok(Some(dir.to_path_buf()));
            }
        }
        Ok(None)
    }
}

/// Compares each rendered README in `docs/` with its template in
/// `_dev/build/docs/`: a rendered file that is missing or older than its
/// template is stale.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadmeFiles;

impl ReadmeChecker for ReadmeFiles {
    fn list_templates(&self, package_root: &Path) -> Result<Vec<String>> {
        let dir = templates_dir(package_root);
        let mut names = Vec::new();
        for entry in
            std::fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))?
        {
            let entry = entry.with_context(|| format!("reading {}", dir.display()))?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn is_up_to_date(&self, package_root: &Path, filename: &str) -> Result<bool> {
        let template = templates_dir(package_root).join(filename);
        let rendered = package_root.join(DOCS_DIR).join(filename);
        if !rendered.exists() {
            return Ok(false);
        }
        let template_mtime = modified(&template)?;
        let rendered_mtime = modified(&rendered)?;
        Ok(rendered_mtime >= template_mtime)
    }
}

fn modified(path: &Path) -> Result<std::time::SystemTime> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .with_context(|| format!("reading modification time of {}", path.display()))
}
