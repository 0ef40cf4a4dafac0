// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 pipekit contributors

//! Variadic composition macros

/// Compose an input with any number of steps.
///
/// `pipe!(x, f, g)` evaluates to `g(f(x'))` where `x'` is the detached copy
/// of `x`. With no steps it evaluates to the copy itself.
///
/// ```
/// use pipekit::pipe;
///
/// let original = vec![1, 2, 3];
/// let doubled = pipe!(original, |items: Vec<i32>| {
///     items.into_iter().map(|n| n * 2).collect::<Vec<_>>()
/// });
///
/// assert_eq!(doubled, vec![2, 4, 6]);
/// assert_eq!(original, vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($input:expr $(, $step:expr)* $(,)?) => {
        $crate::compose::pipe(&$input)
            $(.then($step))*
            .finish()
    };
}

/// Compose an input with fallible steps.
///
/// Every step returns `Result<_, E>` with the same `E`. The first error is
/// the result of the whole expression; later steps are not run.
///
/// ```
/// use pipekit::try_pipe;
///
/// let parsed: Result<i64, std::num::ParseIntError> =
///     try_pipe!("21", |s: String| s.parse::<i64>(), |n: i64| Ok(n * 2));
/// assert_eq!(parsed, Ok(42));
/// ```
#[macro_export]
macro_rules! try_pipe {
    ($input:expr $(, $step:expr)* $(,)?) => {
        ::core::result::Result::Ok($crate::compose::pipe(&$input))
            $(.and_then(|piped| piped.try_then($step)))*
            .map($crate::compose::Pipe::finish)
    };
}

/// Compose an input that may be absent.
///
/// The input is an `Option<&T>`. When it is `None` no step runs and the
/// expression evaluates to `None`.
///
/// ```
/// use pipekit::pipe_safely;
///
/// let missing: Option<&Vec<i32>> = None;
/// assert_eq!(pipe_safely!(missing, |v: Vec<i32>| v.len()), None);
///
/// let present = vec![1, 2];
/// assert_eq!(pipe_safely!(Some(&present), |v: Vec<i32>| v.len()), Some(2));
/// ```
#[macro_export]
macro_rules! pipe_safely {
    ($input:expr $(, $step:expr)* $(,)?) => {
        $crate::compose::pipe_safely($input)
            $(.then($step))*
            .finish()
    };
}
