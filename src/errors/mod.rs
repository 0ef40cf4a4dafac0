// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 pipekit contributors

//! Error types
//!
//! Composition never wraps the errors raised by its steps, so this enum only
//! covers the failures pipekit itself produces.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for pipekit operations
pub type PipekitResult<T> = Result<T, PipekitError>;

/// Main error type for pipekit
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum PipekitError {
    // ─────────────────────────────────────────────────────────────────────────
    // Access Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Value is not present")]
    #[diagnostic(code(pipekit::value_not_present))]
    ValueNotPresent,

    // ─────────────────────────────────────────────────────────────────────────
    // Collection Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Chunk size must be greater than zero, got {size}")]
    #[diagnostic(
        code(pipekit::invalid_chunk_size),
        help("Pass a chunk size of at least 1")
    )]
    InvalidChunkSize { size: usize },

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("YAML parsing error: {message}")]
    #[diagnostic(code(pipekit::yaml_error))]
    Yaml { message: String },

    #[error("TOML parsing error: {message}")]
    #[diagnostic(code(pipekit::toml_error))]
    Toml { message: String },
}

impl From<serde_yaml::Error> for PipekitError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml { message: e.to_string() }
    }
}

impl From<toml::de::Error> for PipekitError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml { message: e.to_string() }
    }
}

impl PipekitError {
    /// Whether this error signals a missing value rather than bad input
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::ValueNotPresent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_not_present_message_is_fixed() {
        assert_eq!(PipekitError::ValueNotPresent.to_string(), "Value is not present");
        assert!(PipekitError::ValueNotPresent.is_absent());
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = PipekitError::InvalidChunkSize { size: 0 };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("pipekit::invalid_chunk_size"));
        assert!(err.help().is_some());
        assert!(!err.is_absent());
    }

    #[test]
    fn test_from_yaml_error() {
        let parse: Result<serde_yaml::Value, _> = serde_yaml::from_str("key: [unclosed");
        let err: PipekitError = parse.unwrap_err().into();
        assert!(matches!(err, PipekitError::Yaml { .. }));
    }
}
