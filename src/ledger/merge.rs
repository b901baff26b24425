use std::hash::Hash;

use log::{debug, warn};

use crate::ledger::Ledger;

/// Outcome of a [`merge_into`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Source entries visited.
    pub merged: usize,
    /// Keys that were new to the target.
    pub inserted: usize,
    /// Additions whose search field carried into the exact field.
    pub carried: usize,
}

/// Adds every count in `source` to the matching key in `target`, inserting
/// keys the target does not have yet.
///
/// The addition is raw packed addition, wrapping on the 32-bit word. Carries
/// between sub-counts are kept in the stored value and reported through
/// `log::warn!` and [`MergeStats::carried`].
pub fn merge_into<K>(target: &mut Ledger<K>, source: &Ledger<K>) -> MergeStats
where
    K: Hash + Eq + Clone,
{
    let mut stats = MergeStats::default();

    for (key, count) in source.iter() {
        stats.merged += 1;
        match target.get_mut(key) {
            Some(slot) => {
                if slot.carries_into(count) {
                    warn!("merging {count} into {slot} carries across the sub-count boundary");
                    stats.carried += 1;
                }
                *slot = slot.wrapping_add(count);
            }
            None => {
                target.insert(key.clone(), count);
                stats.inserted += 1;
            }
        }
    }

    debug!(
        "merged {} entries ({} new, {} carried), target now holds {}",
        stats.merged,
        stats.inserted,
        stats.carried,
        target.len()
    );

    stats
}
