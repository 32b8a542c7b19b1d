//! Property-based tests for conflict detection and slug sanitizing using proptest.
//!
//! These tests verify invariants that should hold for *any* schedule or input
//! string, not just the specific examples in the other test files.

use proptest::prelude::*;
use unconf_engine::{detect_conflicts, find_overlaps, sanitize_slug, TimeBlock};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn fmt(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// A well-formed block with end after start, ending no later than 23:59.
fn arb_block() -> impl Strategy<Value = TimeBlock> {
    (0u32..1200, 1u32..240).prop_map(|(start, len)| TimeBlock::new(fmt(start), fmt(start + len)))
}

/// Blocks that are sometimes malformed.
fn arb_maybe_block() -> impl Strategy<Value = TimeBlock> {
    prop_oneof![
        4 => arb_block(),
        1 => Just(TimeBlock::new("", "10:00")),
        1 => Just(TimeBlock::new("25:00", "26:00")),
    ]
}

fn arb_schedule() -> impl Strategy<Value = Vec<TimeBlock>> {
    prop::collection::vec(arb_maybe_block(), 0..=12)
}

// ---------------------------------------------------------------------------
// Conflict detection
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn output_is_index_aligned(blocks in arb_schedule()) {
        prop_assert_eq!(detect_conflicts(&blocks).len(), blocks.len());
    }

    #[test]
    fn detection_is_idempotent(blocks in arb_schedule()) {
        prop_assert_eq!(detect_conflicts(&blocks), detect_conflicts(&blocks));
    }

    #[test]
    fn flagged_exactly_when_in_some_overlap(blocks in arb_schedule()) {
        let statuses = detect_conflicts(&blocks);
        let overlaps = find_overlaps(&blocks);
        for (i, status) in statuses.iter().enumerate() {
            let involved = overlaps.iter().any(|o| o.first == i || o.second == i);
            prop_assert_eq!(status.has_conflict, involved, "block {}", i);
            prop_assert_eq!(status.message.is_some(), involved);
        }
    }

    #[test]
    fn message_names_a_real_counterpart(blocks in arb_schedule()) {
        let statuses = detect_conflicts(&blocks);
        let overlaps = find_overlaps(&blocks);
        for (i, status) in statuses.iter().enumerate() {
            if let Some(message) = &status.message {
                let n: usize = message
                    .strip_prefix("Overlaps with Block ")
                    .and_then(|n| n.parse().ok())
                    .expect("message format");
                let j = n - 1;
                prop_assert!(
                    overlaps.iter().any(|o| (o.first, o.second) == (i.min(j), i.max(j))),
                    "block {} names block {} which it does not overlap", i, j
                );
            }
        }
    }

    #[test]
    fn back_to_back_blocks_never_conflict(
        start in 0u32..600,
        lens in prop::collection::vec(1u32..=60, 1..=12),
    ) {
        let mut cursor = start;
        let blocks: Vec<TimeBlock> = lens
            .iter()
            .map(|len| {
                let block = TimeBlock::new(fmt(cursor), fmt(cursor + len));
                cursor += len;
                block
            })
            .collect();
        prop_assert!(detect_conflicts(&blocks).iter().all(|s| !s.has_conflict));
    }

    #[test]
    fn overlap_minutes_are_positive(blocks in arb_schedule()) {
        for overlap in find_overlaps(&blocks) {
            prop_assert!(overlap.overlap_minutes > 0);
            prop_assert!(overlap.first < overlap.second);
        }
    }
}

// ---------------------------------------------------------------------------
// Slug sanitizing
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn sanitized_output_is_slug_shaped(input in ".{0,120}") {
        let out = sanitize_slug(&input);
        prop_assert!(out.len() <= 50);
        prop_assert!(out
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-'));
        prop_assert!(!out.contains("--"));
        prop_assert!(!out.starts_with('-'));
    }
}
