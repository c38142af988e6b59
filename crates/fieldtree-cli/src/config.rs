//! Viewer configuration file.
//!
//! ```toml
//! guides = "rounded"
//! expand_all = true
//! width = 100
//!
//! [labels]
//! error = "ERR"
//! warning = "WARN"
//! empty = "nothing here"
//! ```
//!
//! Every key is optional. Command-line flags override file values, which
//! override built-in defaults.

use std::fs;
use std::path::Path;

use fieldtree::{ExpandPolicy, ReservedLabels, TreeGuides};
use serde::Deserialize;

use crate::error::{CliError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub guides: Option<String>,
    pub expand_all: bool,
    pub width: Option<usize>,
    pub labels: LabelConfig,
}

/// Overrides for reserved-key labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    pub error: Option<String>,
    pub warning: Option<String>,
    pub empty: Option<String>,
}

impl ViewerConfig {
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Labels with configured overrides applied.
    #[must_use]
    pub fn reserved_labels(&self) -> ReservedLabels {
        let mut labels = ReservedLabels::default();
        if let Some(error) = &self.labels.error {
            labels.error.clone_from(error);
        }
        if let Some(warning) = &self.labels.warning {
            labels.warning.clone_from(warning);
        }
        if let Some(empty) = &self.labels.empty {
            labels.empty.clone_from(empty);
        }
        labels
    }
}

/// Effective settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub guides: TreeGuides,
    pub policy: ExpandPolicy,
    pub width: Option<usize>,
    pub labels: ReservedLabels,
}

impl ResolvedOptions {
    pub fn resolve(
        config: &ViewerConfig,
        guides: Option<&str>,
        expand_all: bool,
        width: Option<usize>,
    ) -> Result<Self> {
        let guides = match guides.or(config.guides.as_deref()) {
            Some(name) => TreeGuides::from_name(name)
                .ok_or_else(|| CliError::invalid(format!("unknown guide style: {name}")))?,
            None => TreeGuides::default(),
        };
        let policy = if expand_all || config.expand_all {
            ExpandPolicy::ExpandAll
        } else {
            ExpandPolicy::Auto
        };
        let width = width.or(config.width);
        if width == Some(0) {
            return Err(CliError::invalid("width must be greater than zero"));
        }
        Ok(Self {
            guides,
            policy,
            width,
            labels: config.reserved_labels(),
        })
    }
}
