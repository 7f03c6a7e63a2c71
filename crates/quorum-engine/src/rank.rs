//! Slot ranking by the fixed multi-key comparator.

use crate::aggregate::SlotSummary;

/// Number of suggestions returned when a request leaves `topN` unspecified.
pub const DEFAULT_TOP_N: usize = 10;

/// Order summaries by ascending risk score, then descending participation
/// rate, and keep the first `top_n`.
///
/// No further tie-break is defined: the sort is stable, so ties beyond the
/// two keys retain input (slot-chronological) order. If fewer than `top_n`
/// summaries exist, all are returned.
pub fn rank(mut summaries: Vec<SlotSummary>, top_n: usize) -> Vec<SlotSummary> {
    summaries.sort_by(|a, b| {
        a.risk_score
            .cmp(&b.risk_score)
            .then_with(|| b.participation_rate.total_cmp(&a.participation_rate))
    });
    summaries.truncate(top_n);
    summaries
}
