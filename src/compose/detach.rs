// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 pipekit contributors

//! Copy guard for pipeline inputs
//!
//! Before the first step runs, the input is classified into one of three
//! kinds. Sequences and mappings are handed to the steps as a new container
//! so the caller's value is never touched; opaque values pass through as
//! they are.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::Deref;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

/// Shape of a pipeline input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Ordered sequence, copied into a new container
    Sequence,
    /// Key-value mapping, copied into a new container
    Mapping,
    /// Scalar or instance of a non-plain type, passed through
    Opaque,
}

impl InputKind {
    /// Whether inputs of this kind get a fresh container before the first step
    pub fn is_copied(self) -> bool {
        !matches!(self, Self::Opaque)
    }

    /// Lowercase name used in log output
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Opaque => "opaque",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that can enter a pipeline.
///
/// `detach` produces the owned value the first step receives. For sequences
/// and mappings this is a new container whose elements are cloned with their
/// own `Clone`: a `Vec<Vec<T>>` or nested JSON is cloned all the way down,
/// while `Arc`/`Rc` elements keep sharing their data.
pub trait Detach {
    /// Value handed to the first step
    type Owned;

    /// Classify this input
    fn kind(&self) -> InputKind;

    /// Produce the value the first step consumes
    fn detach(&self) -> Self::Owned;
}

impl<T: Detach + ?Sized> Detach for &T {
    type Owned = T::Owned;

    fn kind(&self) -> InputKind {
        (**self).kind()
    }

    fn detach(&self) -> Self::Owned {
        (**self).detach()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sequences
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Clone> Detach for Vec<T> {
    type Owned = Vec<T>;

    fn kind(&self) -> InputKind {
        InputKind::Sequence
    }

    fn detach(&self) -> Self::Owned {
        self.clone()
    }
}

impl<T: Clone> Detach for [T] {
    type Owned = Vec<T>;

    fn kind(&self) -> InputKind {
        InputKind::Sequence
    }

    fn detach(&self) -> Self::Owned {
        self.to_vec()
    }
}

impl<T: Clone, const N: usize> Detach for [T; N] {
    type Owned = [T; N];

    fn kind(&self) -> InputKind {
        InputKind::Sequence
    }

    fn detach(&self) -> Self::Owned {
        self.clone()
    }
}

impl<T: Clone> Detach for VecDeque<T> {
    type Owned = VecDeque<T>;

    fn kind(&self) -> InputKind {
        InputKind::Sequence
    }

    fn detach(&self) -> Self::Owned {
        self.clone()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mappings
// ─────────────────────────────────────────────────────────────────────────────

impl<K, V, S> Detach for HashMap<K, V, S>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Owned = HashMap<K, V, S>;

    fn kind(&self) -> InputKind {
        InputKind::Mapping
    }

    fn detach(&self) -> Self::Owned {
        self.clone()
    }
}

impl<K: Clone + Ord, V: Clone> Detach for BTreeMap<K, V> {
    type Owned = BTreeMap<K, V>;

    fn kind(&self) -> InputKind {
        InputKind::Mapping
    }

    fn detach(&self) -> Self::Owned {
        self.clone()
    }
}

impl<K, V, S> Detach for IndexMap<K, V, S>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Owned = IndexMap<K, V, S>;

    fn kind(&self) -> InputKind {
        InputKind::Mapping
    }

    fn detach(&self) -> Self::Owned {
        self.clone()
    }
}

impl Detach for serde_json::Map<String, Value> {
    type Owned = serde_json::Map<String, Value>;

    fn kind(&self) -> InputKind {
        InputKind::Mapping
    }

    fn detach(&self) -> Self::Owned {
        self.clone()
    }
}

/// JSON documents are classified by their runtime variant
impl Detach for Value {
    type Owned = Value;

    fn kind(&self) -> InputKind {
        match self {
            Value::Array(_) => InputKind::Sequence,
            Value::Object(_) => InputKind::Mapping,
            _ => InputKind::Opaque,
        }
    }

    fn detach(&self) -> Self::Owned {
        self.clone()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Opaque values
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_opaque_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Detach for $ty {
                type Owned = $ty;

                fn kind(&self) -> InputKind {
                    InputKind::Opaque
                }

                fn detach(&self) -> Self::Owned {
                    *self
                }
            }
        )*
    };
}

impl_opaque_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
);

impl Detach for String {
    type Owned = String;

    fn kind(&self) -> InputKind {
        InputKind::Opaque
    }

    fn detach(&self) -> Self::Owned {
        self.clone()
    }
}

impl Detach for str {
    type Owned = String;

    fn kind(&self) -> InputKind {
        InputKind::Opaque
    }

    fn detach(&self) -> Self::Owned {
        self.to_owned()
    }
}

/// Shared handle to an instance that must not be copied on entry.
///
/// Wrap values of non-plain types (service handles, closures, types with
/// identity) in `Opaque` to have them reach the first step as the very same
/// instance the caller holds.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Opaque<T: ?Sized>(Arc<T>);

impl<T> Opaque<T> {
    /// Wrap a value
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl<T: ?Sized> Opaque<T> {
    /// Wrap an existing shared instance
    pub fn from_arc(inner: Arc<T>) -> Self {
        Self(inner)
    }

    /// Borrow the shared instance
    pub fn as_arc(&self) -> &Arc<T> {
        &self.0
    }

    /// Unwrap into the shared instance
    pub fn into_arc(self) -> Arc<T> {
        self.0
    }

    /// Whether both handles point at the same instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Opaque<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Opaque<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> From<Arc<T>> for Opaque<T> {
    fn from(inner: Arc<T>) -> Self {
        Self(inner)
    }
}

impl<T: ?Sized> Detach for Opaque<T> {
    type Owned = Opaque<T>;

    fn kind(&self) -> InputKind {
        InputKind::Opaque
    }

    fn detach(&self) -> Self::Owned {
        self.clone()
    }
}
