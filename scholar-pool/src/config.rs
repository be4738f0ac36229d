//! Configuration for registry assembly and export.

use serde::{Deserialize, Serialize};

/// Configuration for building and exporting a program registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Integrity check configuration
    #[serde(default)]
    pub integrity: IntegrityConfig,
    /// Export configuration
    #[serde(default)]
    pub export: ExportConfig,
}

impl RegistryConfig {
    /// Config that rejects any integrity finding.
    pub fn strict() -> Self {
        Self {
            integrity: IntegrityConfig {
                policy: IntegrityPolicy::Enforce,
            },
            ..Default::default()
        }
    }

    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// What to do with integrity findings at build time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityPolicy {
    /// Log findings and keep going
    #[default]
    Report,
    /// Fail the build on any finding
    Enforce,
}

/// Integrity check configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrityConfig {
    #[serde(default)]
    pub policy: IntegrityPolicy,
}

/// Structured encoding used for export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

/// Export configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub format: ExportFormat,
    /// Pretty-print JSON output (YAML is always block style)
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            pretty: default_pretty(),
        }
    }
}
