// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 pipekit contributors

//! # pipekit - Composition and Absent-Safe Access Helpers
//!
//! Small, stateless helpers for threading a value through a list of steps
//! and for reading data whose shape cannot be trusted.
//!
//! ## Features
//!
//! - **Composition** - `pipe` applies steps in order, copying sequences and
//!   mappings on entry so the caller's value is never mutated
//! - **Safe composition** - `pipe_safely` skips every step when the input is absent
//! - **Safe access** - `get_safely`, `get_or_err` and `get_or_else` turn a
//!   failing accessor into an absent value
//! - **Chunking** - split a sequence into fixed-size groups
//!
//! ## Quick Start
//!
//! ```
//! use pipekit::{get_or_else, pipe};
//! use serde_json::json;
//!
//! let ports = vec![8080, 8443];
//! let shifted = pipe(&ports)
//!     .then(|mut ports| {
//!         ports.iter_mut().for_each(|p| *p += 1);
//!         ports
//!     })
//!     .finish();
//! assert_eq!(shifted, vec![8081, 8444]);
//! assert_eq!(ports, vec![8080, 8443]);
//!
//! let doc = json!({"retries": 3});
//! assert_eq!(get_or_else(|| doc["timeout"].as_u64(), 30), 30);
//! ```

pub mod access;
pub mod collections;
pub mod compose;
pub mod errors;

// Re-export commonly used types
pub use access::{
    get_or_else, get_or_else_with, get_or_err, get_safely, is_defined, AccessConfig,
    SafeAccessor,
};
pub use collections::chunk;
pub use compose::{pipe, pipe_all, pipe_safely, try_pipe_all, Detach, Opaque, Pipe, SafePipe};
pub use errors::{PipekitError, PipekitResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
