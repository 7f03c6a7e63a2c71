//! Per-participant slot classification.
//!
//! Maps a participant's busy intervals onto one of exactly three statuses
//! for a slot. Only statuses leave this stage -- raw interval content never
//! reaches the aggregator, the ranker, or a response.

use serde::{Deserialize, Serialize};

use crate::overlap::overlaps;
use crate::slots::TimeSlot;
use crate::store::BusyInterval;

/// A participant's status for one slot.
///
/// Precedence: `Fixed` dominates `Adjustable` dominates `Available` -- a
/// single non-adjustable conflict classifies the whole slot as `Fixed` no
/// matter how many adjustable conflicts also overlap it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    /// No conflicting interval.
    Available,
    /// At least one conflict, all of them flagged adjustable.
    Adjustable,
    /// At least one conflict that cannot be moved.
    Fixed,
}

/// Classify one participant's status for `slot` against their busy
/// intervals.
pub fn classify(slot: &TimeSlot, intervals: &[BusyInterval]) -> AvailabilityStatus {
    let mut any_conflict = false;

    for interval in intervals.iter().filter(|iv| overlaps(slot, iv)) {
        if !interval.adjustable {
            return AvailabilityStatus::Fixed;
        }
        any_conflict = true;
    }

    if any_conflict {
        AvailabilityStatus::Adjustable
    } else {
        AvailabilityStatus::Available
    }
}
