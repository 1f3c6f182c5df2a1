//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod package;
pub mod selection;
pub mod stack;
pub mod version;

pub use config::{AppConfig, ImageRefs};
pub use error::{ConfigError, InstallError, LintError, StackError};
pub use selection::{ServiceSelection, ServiceSelector};
pub use stack::{LifecycleOptions, StackOptions, StackSettings};
pub use version::BuildInfo;
