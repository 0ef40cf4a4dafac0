// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 pipekit contributors

//! Safe accessors
//!
//! Run a zero-argument accessor and treat any failure as an absent value.
//! Useful for reaching into data whose shape is not under the caller's
//! control.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;
use tracing::{debug, trace, warn};

use super::{is_defined, AccessConfig, Presence, SwallowLevel};
use crate::errors::{PipekitError, PipekitResult};

/// What an accessor may return.
///
/// Returned values are checked with [`Presence`], so `Some(null)`,
/// `Ok(None)` and a bare JSON `null` all mean the accessor ran and found
/// nothing. `Err` carries a description of the failure that will be
/// swallowed.
pub trait Attempt {
    /// The present value
    type Value;

    /// Resolve the accessor's return into present, absent or failed
    fn into_present(self) -> Result<Option<Self::Value>, String>;
}

impl<T: Presence> Attempt for Option<T> {
    type Value = T;

    fn into_present(self) -> Result<Option<T>, String> {
        Ok(self.filter(|value| is_defined(value)))
    }
}

impl<T: Presence, E: fmt::Debug> Attempt for Result<T, E> {
    type Value = T;

    fn into_present(self) -> Result<Option<T>, String> {
        match self {
            Ok(value) => Ok(is_defined(&value).then_some(value)),
            Err(e) => Err(format!("{:?}", e)),
        }
    }
}

impl Attempt for Value {
    type Value = Value;

    fn into_present(self) -> Result<Option<Value>, String> {
        Ok(is_defined(&self).then_some(self))
    }
}

/// Runs accessors under an [`AccessConfig`]
#[derive(Debug, Clone, Default)]
pub struct SafeAccessor {
    config: AccessConfig,
}

impl SafeAccessor {
    /// Create an accessor runner with the given configuration
    pub fn new(config: AccessConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// Run `accessor`, discarding any failure.
    ///
    /// Errors and (unless disabled in the config) panics raised by the
    /// accessor become `None`.
    pub fn get<A, F>(&self, accessor: F) -> Option<A::Value>
    where
        A: Attempt,
        F: FnOnce() -> A,
    {
        let attempted = if self.config.catch_panics {
            match panic::catch_unwind(AssertUnwindSafe(accessor)) {
                Ok(returned) => returned.into_present(),
                Err(payload) => Err(panic_message(payload.as_ref())),
            }
        } else {
            accessor().into_present()
        };

        attempted.unwrap_or_else(|reason| {
            self.report(&reason);
            None
        })
    }

    /// Run `accessor`, failing with [`PipekitError::ValueNotPresent`] when
    /// nothing comes back
    pub fn get_or_err<A, F>(&self, accessor: F) -> PipekitResult<A::Value>
    where
        A: Attempt,
        F: FnOnce() -> A,
    {
        self.get(accessor).ok_or(PipekitError::ValueNotPresent)
    }

    /// Run `accessor`, substituting `default` when nothing comes back
    pub fn get_or_else<A, F>(&self, accessor: F, default: A::Value) -> A::Value
    where
        A: Attempt,
        F: FnOnce() -> A,
    {
        self.get(accessor).unwrap_or(default)
    }

    /// Run `accessor`, computing a default when nothing comes back
    pub fn get_or_else_with<A, F, D>(&self, accessor: F, default: D) -> A::Value
    where
        A: Attempt,
        F: FnOnce() -> A,
        D: FnOnce() -> A::Value,
    {
        self.get(accessor).unwrap_or_else(default)
    }

    fn report(&self, reason: &str) {
        match self.config.log_level {
            SwallowLevel::Trace => trace!(%reason, "accessor failed, value treated as absent"),
            SwallowLevel::Debug => debug!(%reason, "accessor failed, value treated as absent"),
            SwallowLevel::Warn => warn!(%reason, "accessor failed, value treated as absent"),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {}", message)
    } else {
        "panicked".to_string()
    }
}

/// Run `accessor`; any error or panic becomes `None`
pub fn get_safely<A, F>(accessor: F) -> Option<A::Value>
where
    A: Attempt,
    F: FnOnce() -> A,
{
    SafeAccessor::default().get(accessor)
}

/// Run `accessor`; fail with [`PipekitError::ValueNotPresent`] if it yields nothing
pub fn get_or_err<A, F>(accessor: F) -> PipekitResult<A::Value>
where
    A: Attempt,
    F: FnOnce() -> A,
{
    SafeAccessor::default().get_or_err(accessor)
}

/// Run `accessor`; return `default` if it yields nothing
pub fn get_or_else<A, F>(accessor: F, default: A::Value) -> A::Value
where
    A: Attempt,
    F: FnOnce() -> A,
{
    SafeAccessor::default().get_or_else(accessor, default)
}

/// Run `accessor`; compute a default if it yields nothing
pub fn get_or_else_with<A, F, D>(accessor: F, default: D) -> A::Value
where
    A: Attempt,
    F: FnOnce() -> A,
    D: FnOnce() -> A::Value,
{
    SafeAccessor::default().get_or_else_with(accessor, default)
}
