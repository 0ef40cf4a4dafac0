// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 pipekit contributors

//! Function composition
//!
//! Runs an input through an ordered list of unary steps. The input is copied
//! on entry when it is a sequence or mapping, so steps are free to mutate
//! what they receive without touching the caller's value.

mod detach;
mod macros;
mod pipe;
mod safe;

pub use detach::{Detach, InputKind, Opaque};
pub use pipe::{pipe, pipe_all, try_pipe_all, Pipe};
pub use safe::{pipe_safely, SafePipe};
