//! Detect overlapping time blocks within a single schedule.
//!
//! Performs a pairwise comparison over every unordered pair of blocks. Adjacent
//! blocks (where one ends exactly when another starts) are NOT conflicts.
//! Blocks whose times are missing or malformed are skipped; form validation is
//! expected to have rejected them before a schedule is submitted.

use serde::{Deserialize, Serialize};

use crate::block::TimeBlock;

/// Per-block conflict annotation, index-aligned with the input list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictStatus {
    pub has_conflict: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A detected overlap between two blocks, by 0-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlap {
    pub first: usize,
    pub second: usize,
    pub overlap_minutes: i64,
}

/// Annotate every block that overlaps another block in the list.
///
/// Two blocks overlap when `a.start < b.end && a.end > b.start`. Each flagged
/// block's message names the first counterpart found in scan order
/// (`i` ascending, then `j` ascending), as a 1-based "Overlaps with Block N".
/// Later pairs never replace an earlier message, so a block overlapping several
/// others can name a different counterpart than the legacy wizard UI, which
/// showed the last pair it found. Use [`find_overlaps`] for the full list of
/// overlapping pairs.
pub fn detect_conflicts(blocks: &[TimeBlock]) -> Vec<ConflictStatus> {
    let mut statuses = vec![ConflictStatus::default(); blocks.len()];

    for (i, j, _) in overlapping_pairs(blocks) {
        mark(&mut statuses[i], j);
        mark(&mut statuses[j], i);
    }

    statuses
}

/// True if any annotation reports a conflict.
pub fn has_any_conflict(statuses: &[ConflictStatus]) -> bool {
    statuses.iter().any(|s| s.has_conflict)
}

/// Find all overlapping pairs `(i, j)` with `i < j`, in scan order.
///
/// The overlap duration is `min(a.end, b.end) - max(a.start, b.start)`.
pub fn find_overlaps(blocks: &[TimeBlock]) -> Vec<Overlap> {
    overlapping_pairs(blocks)
        .into_iter()
        .map(|(first, second, overlap_minutes)| Overlap {
            first,
            second,
            overlap_minutes,
        })
        .collect()
}

fn mark(status: &mut ConflictStatus, counterpart: usize) {
    if !status.has_conflict {
        status.has_conflict = true;
        status.message = Some(format!("Overlaps with Block {}", counterpart + 1));
    }
}

fn overlapping_pairs(blocks: &[TimeBlock]) -> Vec<(usize, usize, i64)> {
    let parsed: Vec<_> = blocks.iter().map(TimeBlock::parsed).collect();
    let mut pairs = Vec::new();

    for (i, a) in parsed.iter().enumerate() {
        let Some((start_a, end_a)) = *a else { continue };
        for (j, b) in parsed.iter().enumerate().skip(i + 1) {
            let Some((start_b, end_b)) = *b else { continue };
            // Excludes the adjacent case where end_a == start_b.
            if start_a < end_b && end_a > start_b {
                let overlap = end_a.min(end_b) - start_a.max(start_b);
                pairs.push((i, j, overlap.num_minutes()));
            }
        }
    }

    pairs
}
