// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Tunables frozen into a [`PolicyEngine`](crate::engine::PolicyEngine) at build time.
///
/// Options never change which policies or processors an engine runs. They only
/// name the engine and choose how output-policy failures are handled.
///
/// # Example
/// ```yaml
/// name: canadian_french_translation
/// output_failure_policy: run_all
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EngineOptions {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub output_failure_policy: OutputFailurePolicy,
}

impl EngineOptions {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// How the finalizer reacts when an output policy fails.
///
/// # Variants
/// * `RunAll` - Run every output policy, then surface the first failure
/// * `StopOnFirst` - Surface the first failure and skip the remaining output policies
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFailurePolicy {
    #[default]
    RunAll,
    StopOnFirst,
}

/// Load engine options from a YAML file
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<EngineOptions, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    EngineOptions::from_yaml_str(&content)
}
