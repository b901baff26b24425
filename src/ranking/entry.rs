use serde::{Deserialize, Serialize};

use crate::count::PackedCount;

/// Owned snapshot of one ledger entry, taken at ranking time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry<K> {
    key: K,
    count: PackedCount,
}

impl<K> RankedEntry<K> {
    pub fn new(key: K, count: PackedCount) -> Self {
        Self { key, count }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn count(&self) -> PackedCount {
        self.count
    }

    pub fn search_count(&self) -> u32 {
        self.count.search_count()
    }

    pub fn exact_count(&self) -> u32 {
        self.count.exact_count()
    }

    pub fn combined_count(&self) -> u32 {
        self.count.combined_count()
    }

    pub fn into_parts(self) -> (K, PackedCount) {
        (self.key, self.count)
    }
}
