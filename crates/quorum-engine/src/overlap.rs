//! Conflict detection between a candidate slot and a busy interval.
//!
//! Abutting ranges are NOT conflicts: an interval ending exactly at slot
//! start, or starting exactly at slot end, leaves the slot untouched. Any
//! instant of true temporal intersection conflicts.

use crate::slots::TimeSlot;
use crate::store::BusyInterval;

/// Decide whether `slot` and `interval` conflict.
///
/// Three-way check: the slot's start falls within the interval, the slot's
/// end falls within the interval, or the interval is fully contained in the
/// slot. An interval with no explicit end is a zero-duration instant at
/// `start` and conflicts only with slots whose `[start, end)` contains it.
pub fn overlaps(slot: &TimeSlot, interval: &BusyInterval) -> bool {
    let iv_start = interval.start;
    let Some(iv_end) = interval.end else {
        return slot.start <= iv_start && iv_start < slot.end;
    };

    // Slot start inside the interval.
    (slot.start >= iv_start && slot.start < iv_end)
        // Slot end inside the interval.
        || (slot.end > iv_start && slot.end <= iv_end)
        // Interval fully contained in the slot.
        || (slot.start <= iv_start && slot.end >= iv_end)
}
