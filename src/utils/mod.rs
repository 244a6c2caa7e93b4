/*!
# Utilities

Provides the helper types shared by the algorithms:
- [`IdIndex`](self::index::IdIndex): a bidirectional mapping between node identifiers and dense
  indices `0..n`, so that scratch state can live in plain vectors,
- [`Weight`](self::weight::Weight): the numeric bound placed on values returned by weight and
  capacity extractors,
- [`GeometricSkips`](self::geometric::GeometricSkips): geometric jumps over Bernoulli trials,
  used by the random generators,
- hash-based [`IdMap`]/[`IdSet`] aliases and the [`FromCapacity`] helper to allocate them.

Apart from [`Weight`], you probably do not need to interact with this module directly.
*/

use std::{
    collections::{HashMap, HashSet},
    hash::RandomState,
};

use fxhash::{FxBuildHasher, FxHashMap, FxHashSet};

pub mod geometric;
pub mod index;
pub mod weight;

pub use index::IdIndex;
pub use weight::Weight;

/// Map keyed by node identifiers
pub type IdMap<Id, V> = FxHashMap<Id, V>;

/// Set of node identifiers
pub type IdSet<Id> = FxHashSet<Id>;

/// Helper trait for datastructure that can be initialized with capacity.
pub trait FromCapacity: Sized {
    /// Create a new instance with room for `capacity` elements
    fn from_capacity(capacity: usize) -> Self;
}

impl<T> FromCapacity for Vec<T> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
}

impl<T> FromCapacity for HashSet<T, RandomState> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher::default())
    }
}

impl<K, V> FromCapacity for HashMap<K, V, RandomState> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
}

impl<K, V> FromCapacity for FxHashMap<K, V> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher::default())
    }
}
