//! Stack lifecycle types: user requests, engine options, fixed names.

use std::collections::BTreeMap;

use crate::domain::selection::ServiceSelector;

// ── Constants ────────────────────────────────────────────────────────────────

/// Compose project name used for every stack invocation.
pub const PROJECT_NAME: &str = "elastic-package-stack";

/// Compose definition file inside the stack directory.
pub const DEFINITION_FILE: &str = "snapshot.yml";

/// Stack version used when none is requested.
pub const DEFAULT_STACK_VERSION: &str = "8.0.0-SNAPSHOT";

/// Flag passed to `up` in daemon mode.
pub const DETACH_FLAG: &str = "-d";

/// Services whose logs `stack dump` collects.
pub const DUMP_SERVICES: &[&str] = &[
    "elasticsearch",
    "kibana",
    "package-registry",
    "elastic-agent",
];

// ── Requests ─────────────────────────────────────────────────────────────────

/// What the user asked a stack command to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOptions {
    /// Requested services; empty means every service.
    pub services: Vec<String>,
    /// Stack version whose images are used.
    pub stack_version: String,
    /// Start detached from the terminal.
    pub daemon_mode: bool,
}

impl Default for StackOptions {
    fn default() -> Self {
        Self {
            services: Vec::new(),
            stack_version: DEFAULT_STACK_VERSION.to_string(),
            daemon_mode: false,
        }
    }
}

/// Options for one compose engine invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleOptions {
    /// Extra environment for the engine process.
    pub env: BTreeMap<String, String>,
    /// Arguments placed after the compose verb.
    pub extra_args: Vec<String>,
    /// Units to operate on; empty means every unit.
    pub services: Vec<String>,
}

// ── Settings ─────────────────────────────────────────────────────────────────

/// Fixed names the stack orchestrator works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSettings {
    pub project_name: String,
    pub definition_file: String,
    pub selector: ServiceSelector,
    pub dump_services: Vec<String>,
}

impl Default for StackSettings {
    fn default() -> Self {
        Self {
            project_name: PROJECT_NAME.to_string(),
            definition_file: DEFINITION_FILE.to_string(),
            selector: ServiceSelector::default(),
            dump_services: DUMP_SERVICES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}
