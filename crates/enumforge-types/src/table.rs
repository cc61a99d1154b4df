//! Immutable name/value tables.
//!
//! The table is the part of a descriptor exposed to formatting, documentation,
//! and namespace-binding layers outside the core. It keeps declaration order
//! and answers lookups in both directions.

use std::hash::Hash;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

/// Ordered `(name, value)` pairs with unique names and unique values.
#[derive(Debug, Clone)]
pub struct MemberTable<V> {
    entries: IndexMap<String, V, FxBuildHasher>,
    by_value: FxHashMap<V, usize>,
}

impl<V> MemberTable<V>
where
    V: Copy + Eq + Hash,
{
    /// Callers guarantee names and values are already unique.
    pub(crate) fn from_pairs(pairs: Vec<(String, V)>) -> Self {
        let mut entries = IndexMap::with_capacity_and_hasher(pairs.len(), FxBuildHasher);
        let mut by_value = FxHashMap::default();
        for (name, value) in pairs {
            let (index, _) = entries.insert_full(name, value);
            by_value.entry(value).or_insert(index);
        }
        Self { entries, by_value }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value declared for `name`.
    pub fn get(&self, name: &str) -> Option<V> {
        self.entries.get(name).copied()
    }

    /// Name of the member declared with `value`.
    pub fn name_of(&self, value: V) -> Option<&str> {
        let index = *self.by_value.get(&value)?;
        self.entries.get_index(index).map(|(name, _)| name.as_str())
    }

    pub fn get_index(&self, index: usize) -> Option<(&str, V)> {
        self.entries
            .get_index(index)
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, V)> + ExactSizeIterator + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = V> + '_ {
        self.entries.values().copied()
    }
}
