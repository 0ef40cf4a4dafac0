// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 pipekit contributors

//! Collection helpers

mod chunk;

pub use chunk::{chunk, chunk_owned};
