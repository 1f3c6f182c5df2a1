//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! Variants are attached to failures with `anyhow::Context`, so the
//! underlying cause stays in the chain and callers can `downcast_ref` to
//! find which stage failed.

use std::path::PathBuf;

use thiserror::Error;

// ── Stack errors ──────────────────────────────────────────────────────────────

/// Failures of a stack lifecycle operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StackError {
    #[error("locating stack directory failed")]
    LocateStack,

    #[error("could not create docker compose project from {}", .path.display())]
    CreateProject { path: PathBuf },

    #[error("can't read application configuration")]
    ReadConfig,

    #[error("running docker compose {operation} failed")]
    Engine { operation: &'static str },
}

// ── Lint errors ───────────────────────────────────────────────────────────────

/// Failures of the package lint flow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LintError {
    #[error("package root not found")]
    RootNotFound,

    #[error("failed to return a list of directory entries from {}", .0.display())]
    ListDocs(PathBuf),

    #[error("can't check if {0} file is up-to-date")]
    CheckReadme(String),

    #[error("{0} file is outdated. Rebuild the package to regenerate it")]
    ReadmeOutdated(String),

    #[error("linting package failed")]
    Validation,
}

// ── Install errors ────────────────────────────────────────────────────────────

/// Failures while installing stack resources.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstallError {
    #[error("locating installation directory failed")]
    LocateRoot,

    #[error("reading version file failed")]
    ReadVersion,

    #[error("writing stack resources failed")]
    WriteResources,

    #[error("writing version file failed")]
    WriteVersion,
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("stack version must not be empty")]
    EmptyStackVersion,
}
