use std::borrow::Borrow;
use std::hash::Hash;

use log::warn;
use rustc_hash::FxHashMap;

use crate::count::PackedCount;
use crate::ledger::merge::{merge_into, MergeStats};
use crate::ranking::{self, RankedEntry};

/// Mapping from key to packed count.
///
/// Owned by the caller; nothing here is persisted. Iteration yields copies
/// of the counts, so entries handed out by the ranking functions never alias
/// ledger storage.
#[derive(Debug, Clone)]
pub struct Ledger<K> {
    counts: FxHashMap<K, PackedCount>,
}

impl<K> PartialEq for Ledger<K>
where
    K: Hash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<K> Eq for Ledger<K> where K: Hash + Eq {}

impl<K> Default for Ledger<K> {
    fn default() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }
}

impl<K> Ledger<K>
where
    K: Hash + Eq,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<PackedCount>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(key)
    }

    /// Overwrites the count for `key`, returning the previous one.
    pub fn insert(&mut self, key: K, count: PackedCount) -> Option<PackedCount> {
        self.counts.insert(key, count)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<PackedCount>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.remove(key)
    }

    /// Adds `count` to the value stored for `key`, inserting it if absent,
    /// and returns the new value.
    ///
    /// This is raw packed addition: a search count pushed past 16 bits
    /// carries into the exact count. The carry is logged, not prevented.
    pub fn add(&mut self, key: K, count: PackedCount) -> PackedCount {
        let slot = self.counts.entry(key).or_default();
        if slot.carries_into(count) {
            warn!("adding {count} to {slot} carries across the sub-count boundary");
        }
        *slot = slot.wrapping_add(count);
        *slot
    }

    pub fn add_search(&mut self, key: K) -> PackedCount {
        self.add(key, PackedCount::ONE_SEARCH)
    }

    pub fn add_exact(&mut self, key: K) -> PackedCount {
        self.add(key, PackedCount::ONE_EXACT)
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, PackedCount) -> bool,
    {
        self.counts.retain(|key, count| keep(key, *count));
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, PackedCount)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut PackedCount> {
        self.counts.get_mut(key)
    }

    /// Largest raw packed value, or zero for an empty ledger.
    pub fn maximum(&self) -> PackedCount {
        ranking::maximum(self)
    }
}

impl<K> Ledger<K>
where
    K: Hash + Eq + Clone,
{
    /// Folds `source` into this ledger. See [`merge_into`].
    pub fn merge_from(&mut self, source: &Ledger<K>) -> MergeStats {
        merge_into(self, source)
    }

    pub fn descending(&self) -> Vec<RankedEntry<K>> {
        ranking::descending(self)
    }

    pub fn descending_and_above(&self, lower_limit: PackedCount) -> Vec<RankedEntry<K>> {
        ranking::descending_and_above(self, lower_limit)
    }
}

/// Accumulates: repeated keys are added together, not overwritten.
impl<K> FromIterator<(K, PackedCount)> for Ledger<K>
where
    K: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, PackedCount)>>(iter: I) -> Self {
        let mut ledger = Ledger::new();
        ledger.extend(iter);
        ledger
    }
}

impl<K> Extend<(K, PackedCount)> for Ledger<K>
where
    K: Hash + Eq,
{
    fn extend<I: IntoIterator<Item = (K, PackedCount)>>(&mut self, iter: I) {
        for (key, count) in iter {
            self.add(key, count);
        }
    }
}
