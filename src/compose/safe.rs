// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 pipekit contributors

//! Safe composer
//!
//! Same as [`pipe`](super::pipe) but an absent input skips every step.

use tracing::trace;

use super::{pipe, Detach, Pipe};
use crate::access::{is_defined, Presence};

/// A composition over an input that may be absent
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a pipe does nothing until `finish` is called"]
pub struct SafePipe<T> {
    inner: Option<Pipe<T>>,
}

/// Start a composition from an input that may be absent.
///
/// When `input` is absent (`None`, or a value that is itself absent such as
/// JSON `null`) no step passed to the returned [`SafePipe`] is ever invoked
/// and [`finish`](SafePipe::finish) yields `None`.
pub fn pipe_safely<T>(input: Option<&T>) -> SafePipe<T::Owned>
where
    T: Detach + Presence + ?Sized,
{
    if !is_defined(&input) {
        trace!("absent pipe input, steps will be skipped");
        return SafePipe { inner: None };
    }

    SafePipe {
        inner: input.map(pipe),
    }
}

impl<T> SafePipe<T> {
    /// Apply the next step if a value is present
    pub fn then<U, F>(self, step: F) -> SafePipe<U>
    where
        F: FnOnce(T) -> U,
    {
        SafePipe {
            inner: self.inner.map(|piped| piped.then(step)),
        }
    }

    /// Apply a fallible step if a value is present, returning its error unchanged
    pub fn try_then<U, E, F>(self, step: F) -> Result<SafePipe<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        let inner = match self.inner {
            Some(piped) => Some(piped.try_then(step)?),
            None => None,
        };
        Ok(SafePipe { inner })
    }

    /// Whether the input was absent
    pub fn is_absent(&self) -> bool {
        self.inner.is_none()
    }

    /// End the composition
    pub fn finish(self) -> Option<T> {
        self.inner.map(Pipe::finish)
    }
}

impl<T> From<Pipe<T>> for SafePipe<T> {
    fn from(piped: Pipe<T>) -> Self {
        Self { inner: Some(piped) }
    }
}
