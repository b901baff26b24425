use count_ledger::count::{SUB_COUNT_BITS, SUB_COUNT_MAX};
use count_ledger::{combined_count, exact_count, search_count, PackError, PackedCount};
use proptest::prelude::*;

#[test]
fn sub_counts_decode_from_their_halves() {
    let count = PackedCount::pack(7, 42);

    assert_eq!(count.raw(), (7 << 16) | 42);
    assert_eq!(count.exact_count(), 7);
    assert_eq!(count.search_count(), 42);
    assert_eq!(count.combined_count(), 49);
}

#[test]
fn unit_constants_touch_one_field_each() {
    assert_eq!(PackedCount::ONE_SEARCH.search_count(), 1);
    assert_eq!(PackedCount::ONE_SEARCH.exact_count(), 0);
    assert_eq!(PackedCount::ONE_EXACT.search_count(), 0);
    assert_eq!(PackedCount::ONE_EXACT.exact_count(), 1);
    assert_eq!(PackedCount::ZERO.raw(), 0);
}

#[test]
fn pack_drops_bits_outside_each_field() {
    // search overflow is masked away instead of spilling into exact
    let count = PackedCount::pack(1, 0x1_0003);
    assert_eq!(count.exact_count(), 1);
    assert_eq!(count.search_count(), 3);

    // exact bits above 16 fall off the word
    let count = PackedCount::pack(0x1_0002, 0);
    assert_eq!(count.exact_count(), 2);
}

#[test]
fn try_pack_rejects_oversized_sub_counts() {
    assert_eq!(
        PackedCount::try_pack(0, SUB_COUNT_MAX + 1),
        Err(PackError::SearchOverflow(SUB_COUNT_MAX + 1))
    );
    assert_eq!(
        PackedCount::try_pack(SUB_COUNT_MAX + 1, 0),
        Err(PackError::ExactOverflow(SUB_COUNT_MAX + 1))
    );

    let max = PackedCount::try_pack(SUB_COUNT_MAX, SUB_COUNT_MAX).unwrap();
    assert_eq!(max.raw(), u32::MAX);
}

#[test]
fn naive_addition_carries_search_into_exact() {
    let a = PackedCount::pack(0, SUB_COUNT_MAX);

    assert!(a.carries_into(PackedCount::ONE_SEARCH));

    let sum = a.wrapping_add(PackedCount::ONE_SEARCH);
    assert_eq!(sum.exact_count(), 1);
    assert_eq!(sum.search_count(), 0);
}

#[test]
fn addition_within_bounds_does_not_carry() {
    let a = PackedCount::pack(3, 10);
    let b = PackedCount::pack(4, 20);

    assert!(!a.carries_into(b));
    assert_eq!(a.wrapping_add(b), PackedCount::pack(7, 30));
}

#[test]
fn word_wrap_counts_as_carry() {
    let a = PackedCount::pack(SUB_COUNT_MAX, 0);
    assert!(a.carries_into(PackedCount::ONE_EXACT));
    assert_eq!(a.wrapping_add(PackedCount::ONE_EXACT), PackedCount::ZERO);
}

#[test]
fn display_names_both_fields() {
    assert_eq!(PackedCount::pack(2, 5).to_string(), "exact=2 search=5");
}

#[test]
fn serializes_as_bare_integer() {
    let json = serde_json::to_string(&PackedCount::pack(1, 1)).unwrap();
    assert_eq!(json, "65537");

    let back: PackedCount = serde_json::from_str("131077").unwrap();
    assert_eq!(back, PackedCount::pack(2, 5));
}

proptest! {
    #[test]
    fn accessors_match_bit_layout(v in any::<u32>()) {
        prop_assert_eq!(search_count(v), v & 0xFFFF);
        prop_assert_eq!(exact_count(v), v >> SUB_COUNT_BITS);
        prop_assert_eq!(combined_count(v), search_count(v) + exact_count(v));

        let count = PackedCount::from_raw(v);
        prop_assert_eq!(count.search_count(), search_count(v));
        prop_assert_eq!(count.exact_count(), exact_count(v));
        prop_assert_eq!(count.combined_count(), combined_count(v));
    }

    #[test]
    fn in_range_pack_is_lossless(exact in 0u32..=0xFFFF, search in 0u32..=0xFFFF) {
        let count = PackedCount::try_pack(exact, search).unwrap();
        prop_assert_eq!(count.exact_count(), exact);
        prop_assert_eq!(count.search_count(), search);
    }
}
