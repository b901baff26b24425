use std::hash::Hash;

use crate::count::PackedCount;
use crate::ledger::Ledger;

pub mod config;
pub mod entry;

pub use config::{RankConfig, RankingRule};
pub use entry::RankedEntry;

/// Produces ordered views over a ledger without touching it.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: RankConfig,
}

impl Ranker {
    pub fn new(config: RankConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Largest raw packed value in the ledger, zero if it is empty.
    pub fn maximum<K>(&self, ledger: &Ledger<K>) -> PackedCount
    where
        K: Hash + Eq,
    {
        let mut result = PackedCount::ZERO;
        for (_, count) in ledger.iter() {
            if count > result {
                result = count;
            }
        }
        result
    }

    /// Every entry, best ranked first.
    pub fn descending<K>(&self, ledger: &Ledger<K>) -> Vec<RankedEntry<K>>
    where
        K: Hash + Eq + Clone,
    {
        let entries = ledger
            .iter()
            .map(|(key, count)| RankedEntry::new(key.clone(), count))
            .collect();
        self.sorted(entries)
    }

    /// Entries whose raw packed value is at least `lower_limit`, best ranked
    /// first. The limit is compared against the whole packed word, so a
    /// caller filtering on one sub-count must pack the limit first.
    pub fn descending_and_above<K>(
        &self,
        ledger: &Ledger<K>,
        lower_limit: PackedCount,
    ) -> Vec<RankedEntry<K>>
    where
        K: Hash + Eq + Clone,
    {
        let entries = ledger
            .iter()
            .filter(|(_, count)| *count >= lower_limit)
            .map(|(key, count)| RankedEntry::new(key.clone(), count))
            .collect();
        self.sorted(entries)
    }

    fn sorted<K>(&self, mut entries: Vec<RankedEntry<K>>) -> Vec<RankedEntry<K>> {
        let rule = self.config.rule;
        // Stable: equal counts keep ledger iteration order.
        entries.sort_by(|a, b| rule.compare(a.count(), b.count()));

        debug_assert!(entries
            .windows(2)
            .all(|w| rule.compare(w[0].count(), w[1].count()).is_le()));

        entries
    }
}

pub fn maximum<K>(ledger: &Ledger<K>) -> PackedCount
where
    K: Hash + Eq,
{
    Ranker::default().maximum(ledger)
}

pub fn descending<K>(ledger: &Ledger<K>) -> Vec<RankedEntry<K>>
where
    K: Hash + Eq + Clone,
{
    Ranker::default().descending(ledger)
}

pub fn descending_and_above<K>(ledger: &Ledger<K>, lower_limit: PackedCount) -> Vec<RankedEntry<K>>
where
    K: Hash + Eq + Clone,
{
    Ranker::default().descending_and_above(ledger, lower_limit)
}
