//! Packed dual-count frequency ledger.
//!
//! `count-ledger` accumulates counts keyed by arbitrary identifiers, merges
//! ledgers, prunes rare keys and ranks what is left. Every count is a
//! [`PackedCount`]: an *exact* count in the high 16 bits and a *search* count
//! in the low 16 bits of one `u32`. Rankings order by exact count, then
//! search count, both descending, and are deterministic for a given ledger.
//!
//! Packed arithmetic is not sub-count aware. A search count that grows past
//! `0xFFFF` carries into the exact count; the ledger keeps the naive sum and
//! logs a warning through the `log` facade.
//!
//! File parsing and presentation are left to the caller, which owns the
//! [`Ledger`] and feeds it observations.

pub mod count;
pub mod filter;
pub mod ledger;
pub mod ranking;
pub mod report;

pub use count::{combined_count, exact_count, search_count, PackError, PackedCount};
pub use filter::ThresholdFilter;
pub use ledger::{merge_into, Ledger, MergeStats};
pub use ranking::{
    descending, descending_and_above, maximum, RankConfig, RankedEntry, Ranker, RankingRule,
};
pub use report::{RankingReport, ReportError};
