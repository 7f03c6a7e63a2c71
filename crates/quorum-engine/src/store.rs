//! Collaborator seams: the Schedule Store and Participant Directory.
//!
//! Both are consumed as pure read interfaces -- nothing about their
//! persistence, transport, or schema is in scope here. The in-memory
//! implementations back the CLI, the WASM bindings, and tests.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{QuorumError, Result};

/// Opaque identifier for a group member (display name or handle). Supplied
/// by the Participant Directory and never interpreted by the engine.
pub type ParticipantId = String;

/// A time range during which a participant is already committed.
///
/// Owned by the Schedule Store; read-only to the engine. An absent `end`
/// means a zero-duration point at `start`. Invariant: `start <= end` when
/// both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    /// Whether the commitment can be moved or cancelled if needed.
    pub adjustable: bool,
}

/// Read interface over a participant's busy intervals.
pub trait ScheduleStore {
    /// All intervals for `participant` whose `[start, end]` intersects the
    /// inclusive range.
    ///
    /// # Errors
    /// `QuorumError::DataSource` if the store is unreachable or returns
    /// malformed data. Callers must not treat that as "no conflicts".
    fn intervals_in_range(
        &self,
        participant: &str,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> Result<Vec<BusyInterval>>;
}

/// Read interface over group membership.
pub trait ParticipantDirectory {
    /// Distinct participant ids belonging to `group_id`.
    ///
    /// # Errors
    /// `QuorumError::UnknownGroup` if the group does not exist.
    fn participants(&self, group_id: &str) -> Result<Vec<ParticipantId>>;
}

/// In-memory [`ScheduleStore`] keyed by participant id.
#[derive(Debug, Clone, Default)]
pub struct MemoryScheduleStore {
    intervals: BTreeMap<ParticipantId, Vec<BusyInterval>>,
}

impl MemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add busy intervals for a participant, appending to any existing set.
    pub fn insert(&mut self, participant: impl Into<ParticipantId>, intervals: Vec<BusyInterval>) {
        self.intervals
            .entry(participant.into())
            .or_default()
            .extend(intervals);
    }
}

impl ScheduleStore for MemoryScheduleStore {
    fn intervals_in_range(
        &self,
        participant: &str,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> Result<Vec<BusyInterval>> {
        let all = self
            .intervals
            .get(participant)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        Ok(all
            .iter()
            .filter(|iv| {
                let end = iv.end.unwrap_or(iv.start);
                iv.start <= range_end && end >= range_start
            })
            .cloned()
            .collect())
    }
}

/// In-memory [`ParticipantDirectory`] keyed by group id.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    groups: BTreeMap<String, Vec<ParticipantId>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group's members. Duplicate ids are kept once, in first-seen
    /// order.
    pub fn insert_group(&mut self, group_id: impl Into<String>, members: Vec<ParticipantId>) {
        let mut distinct: Vec<ParticipantId> = Vec::with_capacity(members.len());
        for member in members {
            if !distinct.contains(&member) {
                distinct.push(member);
            }
        }
        self.groups.insert(group_id.into(), distinct);
    }
}

impl ParticipantDirectory for MemoryDirectory {
    fn participants(&self, group_id: &str) -> Result<Vec<ParticipantId>> {
        self.groups
            .get(group_id)
            .cloned()
            .ok_or_else(|| QuorumError::UnknownGroup(group_id.to_string()))
    }
}
