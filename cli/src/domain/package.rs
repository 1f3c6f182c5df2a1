//! Package layout and manifest recognition.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Manifest file at the root of every package.
pub const MANIFEST_FILE: &str = "manifest.yml";

/// Directory (relative to the package root) holding README templates.
pub const DOCS_TEMPLATE_DIR: &[&str] = &["_dev", "build", "docs"];

/// Directory (relative to the package root) holding rendered docs.
pub const DOCS_DIR: &str = "docs";

/// Package types a manifest may declare.
pub const PACKAGE_TYPES: &[&str] = &["integration", "input"];

/// README templates directory of the package at `root`.
#[must_use]
pub fn templates_dir(root: &Path) -> PathBuf {
    DOCS_TEMPLATE_DIR.iter().fold(root.to_path_buf(), |dir, part| dir.join(part))
}

#[derive(Debug, Deserialize)]
struct ManifestHeader {
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Whether `content` is the manifest of a package, as opposed to some other
/// `manifest.yml` (a data stream manifest has no package type).
#[must_use]
pub fn is_package_manifest(content: &str) -> bool {
    serde_yaml::from_str::<ManifestHeader>(content)
        .ok()
        .and_then(|m| m.kind)
        .is_some_and(|kind| PACKAGE_TYPES.contains(&kind.as_str()))
}
