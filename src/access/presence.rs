// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 pipekit contributors

//! Defined-check predicate
//!
//! Absence nests: `Some(null)` and `Some(None)` are as absent as `None`.
//! Plain values (numbers, strings, collections) are always present; JSON
//! `null` is the only absent non-optional value. Implement [`Presence`] for
//! your own types to use them with the safe accessors and `pipe_safely`.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::compose::Opaque;

/// A value that can be absent
pub trait Presence {
    /// Whether a value is present
    fn is_present(&self) -> bool;
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_present())
    }
}

/// JSON `null` counts as absent
impl Presence for Value {
    fn is_present(&self) -> bool {
        !self.is_null()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence + ?Sized> Presence for Box<T> {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence + ?Sized> Presence for Arc<T> {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence + ?Sized> Presence for Rc<T> {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

macro_rules! impl_always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Presence for $ty {
                fn is_present(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_always_present!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    str, String, serde_json::Map<String, Value>,
);

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        true
    }
}

impl<T> Presence for [T] {
    fn is_present(&self) -> bool {
        true
    }
}

impl<T, const N: usize> Presence for [T; N] {
    fn is_present(&self) -> bool {
        true
    }
}

impl<T> Presence for VecDeque<T> {
    fn is_present(&self) -> bool {
        true
    }
}

impl<K, V, S> Presence for HashMap<K, V, S> {
    fn is_present(&self) -> bool {
        true
    }
}

impl<K, V> Presence for BTreeMap<K, V> {
    fn is_present(&self) -> bool {
        true
    }
}

impl<K, V, S> Presence for IndexMap<K, V, S> {
    fn is_present(&self) -> bool {
        true
    }
}

impl<T: ?Sized> Presence for Opaque<T> {
    fn is_present(&self) -> bool {
        true
    }
}

/// Whether `value` is present (neither `None` nor JSON `null`, at any depth
/// of `Option` nesting)
pub fn is_defined<V: Presence + ?Sized>(value: &V) -> bool {
    value.is_present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option() {
        assert!(is_defined(&Some(0)));
        assert!(is_defined(&Some(false)));
        assert!(!is_defined(&None::<String>));
    }

    #[test]
    fn test_json() {
        assert!(is_defined(&json!(0)));
        assert!(is_defined(&json!("")));
        assert!(is_defined(&json!([])));
        assert!(!is_defined(&json!(null)));
    }

    #[test]
    fn test_nested_absence() {
        assert!(!is_defined(&Some(json!(null))));
        assert!(!is_defined(&Some(None::<i32>)));
        assert!(!is_defined(&Some(&Value::Null)));
        assert!(is_defined(&Some(Some(json!({"a": 1})))));
    }

    #[test]
    fn test_through_references() {
        let value = json!({"a": null});
        assert!(!is_defined(&&value["a"]));
        assert!(is_defined(&Box::new(Some(1))));
        assert!(!is_defined(&Arc::new(Value::Null)));
    }

    #[test]
    fn test_plain_values_are_present() {
        assert!(is_defined(&Vec::<u8>::new()));
        assert!(is_defined(""));
        assert!(is_defined(&HashMap::<String, i32>::new()));
        assert!(is_defined(&Opaque::new(3)));
    }
}
