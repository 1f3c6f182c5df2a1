//! Installed-version marker.
//!
//! The marker is the single line `<commit-hash>-<build-time>` written next to
//! the installed stack resources. Anything else, including no file at all,
//! means the resources predate the running binary.

/// Marker file name inside the installation root.
pub const VERSION_FILENAME: &str = "version";

const UNDEFINED: &str = "undefined";

/// Identity of the running build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub commit_hash: String,
    pub build_time: String,
}

impl BuildInfo {
    #[must_use]
    pub fn new(commit_hash: impl Into<String>, build_time: impl Into<String>) -> Self {
        Self {
            commit_hash: commit_hash.into(),
            build_time: build_time.into(),
        }
    }

    /// Build identity baked in at compile time.
    #[must_use]
    pub fn current() -> Self {
        Self::new(
            option_env!("STACKCTL_COMMIT_HASH").unwrap_or(UNDEFINED),
            option_env!("STACKCTL_BUILD_TIME").unwrap_or(UNDEFINED),
        )
    }

    /// Content of the version marker for this build.
    #[must_use]
    pub fn marker(&self) -> String {
        format!("{}-{}", self.commit_hash, self.build_time)
    }

    /// Whether `stored` (the marker file content, if any) matches this build.
    #[must_use]
    pub fn is_installed(&self, stored: Option<&str>) -> bool {
        stored.is_some_and(|content| content == self.marker())
    }
}
