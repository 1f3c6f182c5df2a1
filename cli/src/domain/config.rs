//! Domain types for the persisted application configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Configuration file name inside the installation root.
pub const CONFIG_FILENAME: &str = "config.yml";

pub const ELASTIC_AGENT_IMAGE_NAME: &str = "docker.elastic.co/beats/elastic-agent";
pub const ELASTICSEARCH_IMAGE_NAME: &str = "docker.elastic.co/elasticsearch/elasticsearch";
pub const KIBANA_IMAGE_NAME: &str = "docker.elastic.co/kibana/kibana";

pub const ELASTIC_AGENT_IMAGE_REF_ENV: &str = "ELASTIC_AGENT_IMAGE_REF";
pub const ELASTICSEARCH_IMAGE_REF_ENV: &str = "ELASTICSEARCH_IMAGE_REF";
pub const KIBANA_IMAGE_REF_ENV: &str = "KIBANA_IMAGE_REF";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.stackctl/config.yml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Stack settings.
    pub stack: StackConfig,
    /// Lint settings.
    pub lint: LintConfig,
}

/// Stack configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StackConfig {
    /// Per stack version image overrides.
    pub image_ref_overrides: HashMap<String, ImageRefOverrides>,
}

/// Image references that replace the defaults for one stack version.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ImageRefOverrides {
    #[serde(rename = "elastic-agent", skip_serializing_if = "Option::is_none")]
    pub elastic_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticsearch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kibana: Option<String>,
}

/// Lint configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LintConfig {
    /// External package-spec validator; the package root is appended.
    #[serde(default = "default_validator")]
    pub validator: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            validator: default_validator(),
        }
    }
}

fn default_validator() -> Vec<String> {
    vec!["package-spec".to_string(), "validate".to_string()]
}

// ── Image references ─────────────────────────────────────────────────────────

/// Resolved images for a stack version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRefs {
    pub elastic_agent: String,
    pub elasticsearch: String,
    pub kibana: String,
}

impl ImageRefs {
    /// Environment the compose file reads the image references from.
    #[must_use]
    pub fn as_env(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (
                ELASTIC_AGENT_IMAGE_REF_ENV.to_string(),
                self.elastic_agent.clone(),
            ),
            (
                ELASTICSEARCH_IMAGE_REF_ENV.to_string(),
                self.elasticsearch.clone(),
            ),
            (KIBANA_IMAGE_REF_ENV.to_string(), self.kibana.clone()),
        ])
    }
}

impl AppConfig {
    /// Image references for `version`: configured overrides, falling back
    /// to the official images tagged with the version.
    ///
    /// # Errors
    ///
    /// Returns an error if `version` is blank.
    pub fn stack_image_refs(&self, version: &str) -> Result<ImageRefs> {
        let version = version.trim();
        if version.is_empty() {
            return Err(ConfigError::EmptyStackVersion.into());
        }
        let overrides = self
            .stack
            .image_ref_overrides
            .get(version)
            .cloned()
            .unwrap_or_default();
        Ok(ImageRefs {
            elastic_agent: or_default(overrides.elastic_agent, ELASTIC_AGENT_IMAGE_NAME, version),
            elasticsearch: or_default(overrides.elasticsearch, ELASTICSEARCH_IMAGE_NAME, version),
            kibana: or_default(overrides.kibana, KIBANA_IMAGE_NAME, version),
        })
    }
}

fn or_default(value: Option<String>, image: &str, version: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => format!("{image}:{version}"),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
