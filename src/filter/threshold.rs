use std::hash::Hash;

use log::debug;

use crate::ledger::Ledger;

/// Gate for an ingestion loop: keeps counts at or above `minimum` while
/// tracking the largest count and the total seen since the last reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdFilter {
    minimum: u32,
    max: u32,
    sum: u64,
}

impl ThresholdFilter {
    pub fn new(minimum: u32) -> Self {
        Self {
            minimum,
            max: 0,
            sum: 0,
        }
    }

    /// Records `count` and reports whether it meets the minimum. The key does
    /// not take part in the decision.
    pub fn execute<K: ?Sized>(&mut self, _key: &K, count: u32) -> bool {
        self.max = self.max.max(count);
        self.sum += u64::from(count);
        count >= self.minimum
    }

    /// Clears the statistics. The minimum is kept.
    pub fn reset(&mut self) {
        self.max = 0;
        self.sum = 0;
    }

    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn sum(&self) -> u64 {
        self.sum
    }

    /// Runs every ledger entry through [`execute`](Self::execute) on its raw
    /// packed value and drops the ones that fail. Returns how many were
    /// dropped.
    pub fn retain<K>(&mut self, ledger: &mut Ledger<K>) -> usize
    where
        K: Hash + Eq,
    {
        let before = ledger.len();
        ledger.retain(|key, count| self.execute(key, count.raw()));
        let removed = before - ledger.len();

        debug!(
            "threshold {} pruned {removed} of {before} entries (max {}, sum {})",
            self.minimum, self.max, self.sum
        );

        removed
    }
}
