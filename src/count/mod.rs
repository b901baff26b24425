pub mod packed;

pub use packed::{
    combined_count, exact_count, search_count, PackError, PackedCount, SUB_COUNT_BITS,
    SUB_COUNT_MAX,
};
