// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 pipekit contributors

//! Composer
//!
//! Applies unary steps in order, starting from a detached copy of the input.

use tracing::trace;

use super::Detach;

/// A composition in progress.
///
/// Created by [`pipe`]. Each [`then`](Pipe::then) consumes the current value
/// and replaces it with the step's output, so the value's type may change
/// from one step to the next.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a pipe does nothing until `finish` is called"]
pub struct Pipe<T> {
    value: T,
    steps: usize,
}

/// Start a composition from `input`.
///
/// Sequences and mappings are copied here, once, before any step runs;
/// opaque values are passed through.
pub fn pipe<T: Detach + ?Sized>(input: &T) -> Pipe<T::Owned> {
    let kind = input.kind();
    trace!(%kind, copied = kind.is_copied(), "starting pipe");

    Pipe {
        value: input.detach(),
        steps: 0,
    }
}

impl<T> Pipe<T> {
    /// Apply the next step
    pub fn then<U, F>(self, step: F) -> Pipe<U>
    where
        F: FnOnce(T) -> U,
    {
        Pipe {
            value: step(self.value),
            steps: self.steps + 1,
        }
    }

    /// Apply a fallible step, returning its error unchanged
    pub fn try_then<U, E, F>(self, step: F) -> Result<Pipe<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        let steps = self.steps + 1;
        match step(self.value) {
            Ok(value) => Ok(Pipe { value, steps }),
            Err(e) => {
                trace!(step = steps, "pipe step failed");
                Err(e)
            }
        }
    }

    /// Number of steps applied so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Borrow the current value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// End the composition and return the final value
    pub fn finish(self) -> T {
        trace!(steps = self.steps, "pipe finished");
        self.value
    }
}

/// Apply a runtime-length sequence of same-typed steps to `input`
pub fn pipe_all<T, I, F>(input: &T, steps: I) -> T::Owned
where
    T: Detach + ?Sized,
    I: IntoIterator<Item = F>,
    F: FnOnce(T::Owned) -> T::Owned,
{
    steps
        .into_iter()
        .fold(pipe(input), |piped, step| piped.then(step))
        .finish()
}

/// Apply a runtime-length sequence of fallible steps to `input`.
///
/// Stops at the first failing step and returns its error as-is; the
/// remaining steps are never called.
pub fn try_pipe_all<T, I, F, E>(input: &T, steps: I) -> Result<T::Owned, E>
where
    T: Detach + ?Sized,
    I: IntoIterator<Item = F>,
    F: FnOnce(T::Owned) -> Result<T::Owned, E>,
{
    let mut piped = pipe(input);
    for step in steps {
        piped = piped.try_then(step)?;
    }
    Ok(piped.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Opaque;
    use std::collections::BTreeMap;

    fn double_all(items: Vec<i32>) -> Vec<i32> {
        items.into_iter().map(|n| n * 2).collect()
    }

    #[test]
    fn test_zero_steps_copies_sequence() {
        let original = vec![1, 2, 3];
        let result = pipe(&original).finish();

        assert_eq!(result, original);
        assert_ne!(result.as_ptr(), original.as_ptr());
    }

    #[test]
    fn test_zero_steps_copies_mapping() {
        let mut original = BTreeMap::new();
        original.insert("host", "localhost");
        original.insert("port", "5432");

        let mut result = pipe(&original).finish();
        assert_eq!(result, original);

        result.insert("port", "6543");
        assert_eq!(original.get("port"), Some(&"5432"));
    }

    #[test]
    fn test_zero_steps_scalar_is_identity() {
        assert_eq!(pipe(&7u64).finish(), 7);
        assert_eq!(pipe("name").finish(), "name");
    }

    #[test]
    fn test_opaque_reaches_step_as_same_instance() {
        let handle = Opaque::new(vec![1, 2]);
        let seen = pipe(&handle).then(|h| h.ptr_eq(&handle)).finish();
        assert!(seen);
    }

    #[test]
    fn test_steps_run_in_order() {
        let result = pipe(&vec![1, 2, 3])
            .then(double_all)
            .then(|items| items.iter().sum::<i32>())
            .then(|total| format!("total={}", total))
            .finish();

        assert_eq!(result, "total=12");
    }

    #[test]
    fn test_step_mutation_does_not_reach_caller() {
        let original = vec![1, 2, 3];
        let result = pipe(&original)
            .then(|mut items| {
                items.push(4);
                items[0] = 100;
                items
            })
            .finish();

        assert_eq!(result, vec![100, 2, 3, 4]);
        assert_eq!(original, vec![1, 2, 3]);
    }

    #[test]
    fn test_step_counter() {
        let piped = pipe(&1i32).then(|n| n + 1).then(|n| n * 3);
        assert_eq!(piped.steps(), 2);
        assert_eq!(*piped.value(), 6);
    }

    #[test]
    fn test_try_then_returns_step_error_verbatim() {
        #[derive(Debug, PartialEq)]
        struct StepError(&'static str);

        let result = pipe(&"12")
            .try_then(|s| s.parse::<i32>().map_err(|_| StepError("parse")))
            .and_then(|p| p.try_then(|_| Err::<i32, _>(StepError("second"))));

        assert_eq!(result.unwrap_err(), StepError("second"));
    }

    #[test]
    fn test_pipe_all_applies_every_step() {
        let steps: Vec<Box<dyn FnOnce(i32) -> i32>> =
            vec![Box::new(|n| n + 1), Box::new(|n| n * 10), Box::new(|n| n - 5)];
        assert_eq!(pipe_all(&1i32, steps), 15);
    }

    #[test]
    fn test_pipe_all_without_steps() {
        let steps: Vec<fn(Vec<i32>) -> Vec<i32>> = Vec::new();
        assert_eq!(pipe_all(&vec![9], steps), vec![9]);
    }

    #[test]
    fn test_try_pipe_all_stops_at_first_failure() {
        let mut calls = 0;
        let result = {
            let steps: Vec<Box<dyn FnOnce(i32) -> Result<i32, String> + '_>> = vec![
                Box::new(|n| Ok(n + 1)),
                Box::new(|_| Err("boom".to_string())),
                Box::new(|n| {
                    calls += 1;
                    Ok(n)
                }),
            ];
            try_pipe_all(&1i32, steps)
        };

        assert_eq!(result, Err("boom".to_string()));
        assert_eq!(calls, 0);
    }

    #[test]
    #[should_panic(expected = "step exploded")]
    fn test_panicking_step_propagates() {
        let _ = pipe(&1i32).then(|_| -> i32 { panic!("step exploded") }).finish();
    }
}
