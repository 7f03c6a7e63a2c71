//! Group-level aggregation of per-participant statuses for a slot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classify::AvailabilityStatus;
use crate::error::{QuorumError, Result};
use crate::slots::TimeSlot;
use crate::store::ParticipantId;

// An adjustable conflict is a minor disruption; a fixed conflict is a major
// one, three times as costly.
const ADJUSTABLE_WEIGHT: u32 = 1;
const FIXED_WEIGHT: u32 = 3;

/// Tally of each status across a slot's participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub available: usize,
    pub adjustable: usize,
    pub fixed: usize,
}

/// Group-level summary of one slot. Derived, ephemeral, produced once per
/// request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSummary {
    pub slot: TimeSlot,
    /// `adjustable * 1 + fixed * 3`; available contributes nothing.
    pub risk_score: u32,
    /// Fraction of participants at least potentially available
    /// (available or adjustable).
    pub participation_rate: f64,
    pub counts: StatusCounts,
    /// Verbatim input statuses, retained for downstream display.
    #[serde(rename = "perParticipantStatus")]
    pub per_participant: BTreeMap<ParticipantId, AvailabilityStatus>,
}

/// Combine per-participant statuses for `slot` into a [`SlotSummary`].
///
/// Pure function of its inputs: identical status maps produce identical
/// summaries.
///
/// # Errors
/// `QuorumError::NoParticipants` if the status map is empty -- the
/// participation rate would be a division by zero, and an empty group must
/// surface as a failure rather than a NaN.
pub fn aggregate(
    slot: TimeSlot,
    statuses: &BTreeMap<ParticipantId, AvailabilityStatus>,
) -> Result<SlotSummary> {
    if statuses.is_empty() {
        return Err(QuorumError::NoParticipants);
    }

    let mut counts = StatusCounts::default();
    for status in statuses.values() {
        match status {
            AvailabilityStatus::Available => counts.available += 1,
            AvailabilityStatus::Adjustable => counts.adjustable += 1,
            AvailabilityStatus::Fixed => counts.fixed += 1,
        }
    }

    let risk_score =
        counts.adjustable as u32 * ADJUSTABLE_WEIGHT + counts.fixed as u32 * FIXED_WEIGHT;
    let participation_rate =
        (counts.available + counts.adjustable) as f64 / statuses.len() as f64;

    Ok(SlotSummary {
        slot,
        risk_score,
        participation_rate,
        counts,
        per_participant: statuses.clone(),
    })
}
