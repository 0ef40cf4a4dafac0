// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 pipekit contributors

//! Safe accessor configuration
//!
//! Can be embedded in a host application's YAML or TOML settings.

use serde::{Deserialize, Serialize};

use crate::errors::PipekitResult;

/// Behavior of a [`SafeAccessor`](super::SafeAccessor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Treat a panicking accessor as absent instead of unwinding
    #[serde(default = "default_true")]
    pub catch_panics: bool,

    /// Level used when a failure is swallowed
    #[serde(default)]
    pub log_level: SwallowLevel,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            catch_panics: true,
            log_level: SwallowLevel::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl AccessConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> PipekitResult<Self> {
        serde_yaml::from_str(yaml).map_err(Into::into)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(source: &str) -> PipekitResult<Self> {
        toml::from_str(source).map_err(Into::into)
    }

    /// Serialize configuration to YAML
    pub fn to_yaml(&self) -> PipekitResult<String> {
        serde_yaml::to_string(self).map_err(Into::into)
    }
}

/// Log level for swallowed accessor failures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwallowLevel {
    /// Only visible with trace logging enabled
    Trace,
    /// Default
    #[default]
    Debug,
    /// Surface every swallowed failure
    Warn,
}
