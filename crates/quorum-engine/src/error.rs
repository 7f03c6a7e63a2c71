//! Error types for quorum-engine operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuorumError {
    /// The candidate range is inverted (start after end).
    #[error("Invalid range: {start} is after {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// The slot duration is not a positive number of minutes.
    #[error("Invalid slot duration: {0} minutes")]
    InvalidDuration(i64),

    /// A pipeline entry point was invoked with an empty participant set.
    #[error("No participants in group")]
    NoParticipants,

    /// The Schedule Store was unreachable or returned malformed data.
    #[error("Schedule store error: {0}")]
    DataSource(String),

    /// The Participant Directory has no such group.
    #[error("Unknown group: {0}")]
    UnknownGroup(String),
}

/// Convenience alias used throughout quorum-engine.
pub type Result<T> = std::result::Result<T, QuorumError>;
