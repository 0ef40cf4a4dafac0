// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 pipekit contributors

//! Absent-safe access
//!
//! A defined-check predicate plus accessors that turn failures into
//! absent values.

mod accessor;
mod config;
mod presence;

pub use accessor::{get_or_else, get_or_else_with, get_or_err, get_safely, Attempt, SafeAccessor};
pub use config::{AccessConfig, SwallowLevel};
pub use presence::{is_defined, Presence};
