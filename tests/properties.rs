//! Property tests for range decomposition.
//!
//! Checks that every decomposition is an exact, disjoint, aligned, ascending
//! cover of its range, for random IPv4 and IPv6 ranges.

use ipspan::{decompose, decompose_range, normalize_cidrs, Address, AddressRange, CidrBlock, Family};
use proptest::prelude::*;

fn range_of(family: Family, a: u128, b: u128) -> AddressRange {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    AddressRange::new(
        Address::new(family, lo).unwrap(),
        Address::new(family, hi).unwrap(),
    )
    .unwrap()
}

/// Assert that `blocks` tile `range` exactly, in order, with aligned blocks.
fn assert_exact_cover(range: &AddressRange, blocks: &[CidrBlock]) {
    assert!(!blocks.is_empty());
    assert_eq!(blocks[0].base(), range.start());
    assert_eq!(blocks[blocks.len() - 1].last(), range.end());

    for block in blocks {
        assert_eq!(block.family(), range.start().family());
        assert_eq!(block.base().value() & block.host_mask(), 0, "{block} misaligned");
    }
    for pair in blocks.windows(2) {
        // Adjacent with no gap and no overlap
        assert_eq!(pair[0].last().checked_add(1).unwrap(), pair[1].base());
    }
}

/// No two neighbours may merge into one larger aligned block.
fn assert_no_mergeable_neighbours(blocks: &[CidrBlock]) {
    for pair in blocks.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.prefix_len() == b.prefix_len() && a.prefix_len() > 0 {
            let merged = CidrBlock::new(a.base(), a.prefix_len() - 1);
            assert!(merged.is_err(), "{a} and {b} should have been one block");
        }
    }
}

fn v4_value() -> impl Strategy<Value = u128> {
    any::<u32>().prop_map(u128::from)
}

/// Values biased towards the interesting edges of the IPv6 space.
fn v6_value() -> impl Strategy<Value = u128> {
    prop_oneof![
        any::<u128>(),
        Just(0u128),
        Just(u128::MAX),
        (0u32..128).prop_map(|shift| 1u128 << shift),
        (0u32..128).prop_map(|shift| (1u128 << shift) - 1),
    ]
}

proptest! {
    #[test]
    fn test_v4_exact_cover(a in v4_value(), b in v4_value()) {
        let range = range_of(Family::V4, a, b);
        let blocks = decompose(&range);
        assert_exact_cover(&range, &blocks);
        assert_no_mergeable_neighbours(&blocks);
        prop_assert!(blocks.len() <= 62);
    }

    #[test]
    fn test_v6_exact_cover(a in v6_value(), b in v6_value()) {
        let range = range_of(Family::V6, a, b);
        let blocks = decompose(&range);
        assert_exact_cover(&range, &blocks);
        assert_no_mergeable_neighbours(&blocks);
        prop_assert!(blocks.len() <= 254);
    }

    #[test]
    fn test_deterministic(a in v4_value(), b in v4_value()) {
        let range = range_of(Family::V4, a, b);
        let start = range.start().to_text();
        let end = range.end().to_text();
        prop_assert_eq!(decompose_range(&start, &end).unwrap(), decompose_range(&start, &end).unwrap());
    }

    #[test]
    fn test_normalize_is_idempotent(a in v6_value(), b in v6_value()) {
        let range = range_of(Family::V6, a, b);
        let cidrs: Vec<String> = decompose(&range).iter().map(ToString::to_string).collect();
        let doubled: Vec<&String> = cidrs.iter().chain(cidrs.iter()).collect();
        prop_assert_eq!(normalize_cidrs(doubled).unwrap(), cidrs);
    }
}

#[test]
fn test_concrete_cases() {
    assert_eq!(
        decompose_range("10.0.0.0", "10.0.0.7").unwrap(),
        vec!["10.0.0.0/29"]
    );
    assert_eq!(
        decompose_range("10.0.0.4", "10.0.0.11").unwrap(),
        vec!["10.0.0.4/30", "10.0.0.8/30"]
    );
    assert_eq!(
        decompose_range("203.0.113.5", "203.0.113.5").unwrap(),
        vec!["203.0.113.5/32"]
    );
    assert_eq!(
        decompose_range("0.0.0.0", "255.255.255.255").unwrap(),
        vec!["0.0.0.0/0"]
    );
    assert!(matches!(
        decompose_range("10.0.0.0", "9.0.0.0"),
        Err(ipspan::DecomposeError::InvalidRange { .. })
    ));
    assert!(matches!(
        decompose_range("10.0.0.0", "::1"),
        Err(ipspan::DecomposeError::FamilyMismatch { .. })
    ));
}
