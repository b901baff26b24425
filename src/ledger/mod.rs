pub mod ledger;
pub mod merge;

pub use ledger::Ledger;
pub use merge::{merge_into, MergeStats};
