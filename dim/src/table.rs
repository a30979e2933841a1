/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::borrow::Borrow;

use serde::{Deserialize, Deserializer, Serialize};

/// An ordered key/value table backed by a sorted vector. Lookups are
/// binary searches; inserting a key that is already present replaces
/// its value.
#[derive(Serialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct SortedTable<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: Ord, V> SortedTable<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    fn position<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.binary_search_by(|(k, _)| k.borrow().cmp(key))
    }

    /// Insert or replace. Returns the previous value for the key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Ok(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            Err(i) => {
                self.entries.insert(i, (key, value));
                None
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position(key).ok().map(|i| &self.entries[i].1)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.position(key) {
            Ok(i) => Some(&mut self.entries[i].1),
            Err(_) => None,
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position(key).is_ok()
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.position(key) {
            Ok(i) => Some(self.entries.remove(i).1),
            Err(_) => None,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Restore the ordering after unsorted appends. The sort is stable,
    /// so of several entries with equal keys the last one is kept.
    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
        let entries = std::mem::take(&mut self.entries);
        for (k, v) in entries {
            match self.entries.last_mut() {
                Some(last) if last.0 == k => last.1 = v,
                _ => self.entries.push((k, v)),
            }
        }
    }
}

impl<K: Ord, V> Default for SortedTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bulk loading appends everything and sorts once.
impl<K: Ord, V> FromIterator<(K, V)> for SortedTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self {
            entries: iter.into_iter().collect(),
        };
        table.normalize();
        table
    }
}

impl<K: Ord, V> Extend<(K, V)> for SortedTable<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
        self.normalize();
    }
}

/// Deserialized entries are re-sorted; they may come from anywhere.
impl<'de, K, V> Deserialize<'de> for SortedTable<K, V>
where
    K: Ord + Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        Vec::<(K, V)>::deserialize(deserializer)
            .map(|entries| entries.into_iter().collect())
    }
}

impl<K, V> IntoIterator for SortedTable<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
