//! The availability and suggestion pipelines behind the fixed JSON contract.
//!
//! Two-stage evaluation: each participant's intervals are fetched from the
//! Schedule Store exactly once per request, then every slot is classified
//! against the cached set. One failed lookup aborts the whole request -- a
//! silently excluded participant would inflate the participation rate.
//!
//! Request and response types carry the exact camelCase field names of the
//! surrounding JSON layer (`startDate`, `participantIDs`, ...); that layer
//! itself is out of scope, but its contract is fixed here.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate, SlotSummary};
use crate::classify::{classify, AvailabilityStatus};
use crate::error::{QuorumError, Result};
use crate::rank::{rank, DEFAULT_TOP_N};
use crate::slots::{generate_slots_in, BoundaryZone, TimeSlot, DEFAULT_DURATION_MINUTES};
use crate::store::{BusyInterval, ParticipantDirectory, ParticipantId, ScheduleStore};

/// Input of the availability query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(rename = "participantIDs")]
    pub participant_ids: Vec<ParticipantId>,
}

/// One participant's slot-key → status map. Only statuses appear here; the
/// underlying interval content stays behind the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantAvailability {
    #[serde(rename = "participantID")]
    pub participant_id: ParticipantId,
    pub availability: BTreeMap<String, AvailabilityStatus>,
}

/// Output of the availability query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub participants: Vec<ParticipantAvailability>,
}

/// Input of the suggestion query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(rename = "participantIDs")]
    pub participant_ids: Vec<ParticipantId>,
    /// Slot length in minutes; defaults to 60.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    /// Maximum number of suggestions; defaults to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_n: Option<usize>,
}

/// Output of the suggestion query: the ranked top-N summaries plus the full
/// slot grid they were drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<SlotSummary>,
    pub slots: Vec<TimeSlot>,
}

/// Fetch every participant's intervals once, up front.
///
/// The classifier then runs against these cached sets for every slot instead
/// of re-querying the store per (participant, slot) pair.
fn fetch_intervals(
    store: &impl ScheduleStore,
    participant_ids: &[ParticipantId],
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Result<Vec<(ParticipantId, Vec<BusyInterval>)>> {
    if participant_ids.is_empty() {
        return Err(QuorumError::NoParticipants);
    }

    participant_ids
        .iter()
        .map(|id| {
            let intervals = store.intervals_in_range(id, range_start, range_end)?;
            Ok((id.clone(), intervals))
        })
        .collect()
}

/// Run the availability query with UTC day boundaries.
pub fn compute_availability(
    store: &impl ScheduleStore,
    request: &AvailabilityRequest,
) -> Result<AvailabilityResponse> {
    compute_availability_in(BoundaryZone::Utc, store, request)
}

/// Run the availability query with day boundaries computed in `zone`.
///
/// Classifies every participant against every slot of the range and returns
/// the per-participant status maps keyed by slot key.
pub fn compute_availability_in(
    zone: BoundaryZone,
    store: &impl ScheduleStore,
    request: &AvailabilityRequest,
) -> Result<AvailabilityResponse> {
    let slots = generate_slots_in(
        zone,
        request.start_date,
        request.end_date,
        DEFAULT_DURATION_MINUTES,
    )?;
    let cached = fetch_intervals(
        store,
        &request.participant_ids,
        request.start_date,
        request.end_date,
    )?;

    let participants = cached
        .iter()
        .map(|(id, intervals)| {
            let availability = slots
                .iter()
                .map(|slot| (slot.key.clone(), classify(slot, intervals)))
                .collect();
            ParticipantAvailability {
                participant_id: id.clone(),
                availability,
            }
        })
        .collect();

    Ok(AvailabilityResponse {
        start_date: request.start_date,
        end_date: request.end_date,
        participants,
    })
}

/// Run the suggestion query with UTC day boundaries.
pub fn suggest(
    store: &impl ScheduleStore,
    request: &SuggestionRequest,
) -> Result<SuggestionResponse> {
    suggest_in(BoundaryZone::Utc, store, request)
}

/// Run the suggestion query with day boundaries computed in `zone`.
///
/// Aggregates a [`SlotSummary`] per slot and ranks them by ascending risk
/// score, then descending participation rate.
pub fn suggest_in(
    zone: BoundaryZone,
    store: &impl ScheduleStore,
    request: &SuggestionRequest,
) -> Result<SuggestionResponse> {
    let duration = request.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES);
    let top_n = request.top_n.unwrap_or(DEFAULT_TOP_N);

    let slots = generate_slots_in(zone, request.start_date, request.end_date, duration)?;
    let cached = fetch_intervals(
        store,
        &request.participant_ids,
        request.start_date,
        request.end_date,
    )?;

    let summaries = slots
        .iter()
        .map(|slot| {
            let statuses: BTreeMap<ParticipantId, AvailabilityStatus> = cached
                .iter()
                .map(|(id, intervals)| (id.clone(), classify(slot, intervals)))
                .collect();
            aggregate(slot.clone(), &statuses)
        })
        .collect::<Result<Vec<SlotSummary>>>()?;

    Ok(SuggestionResponse {
        suggestions: rank(summaries, top_n),
        slots,
    })
}

/// Availability query for a whole group, resolved through the directory.
pub fn availability_for_group(
    store: &impl ScheduleStore,
    directory: &impl ParticipantDirectory,
    group_id: &str,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<AvailabilityResponse> {
    let participant_ids = directory.participants(group_id)?;
    compute_availability(
        store,
        &AvailabilityRequest {
            start_date,
            end_date,
            participant_ids,
        },
    )
}

/// Suggestion query for a whole group, resolved through the directory.
pub fn suggest_for_group(
    store: &impl ScheduleStore,
    directory: &impl ParticipantDirectory,
    group_id: &str,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    duration_minutes: Option<i64>,
    top_n: Option<usize>,
) -> Result<SuggestionResponse> {
    let participant_ids = directory.participants(group_id)?;
    suggest(
        store,
        &SuggestionRequest {
            start_date,
            end_date,
            participant_ids,
            duration_minutes,
            top_n,
        },
    )
}
