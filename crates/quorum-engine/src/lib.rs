//! # quorum-engine
//!
//! Availability matching and optimal meeting-slot suggestion for groups.
//!
//! Given each participant's private busy intervals and a candidate date
//! range, the engine partitions the range into fixed-duration slots,
//! classifies every participant per slot (`available` / `adjustable` /
//! `fixed`), aggregates group-level summaries, and ranks slots so that the
//! suggested meeting times minimize schedule disruption while maximizing
//! participation. Raw interval content never leaves the classifier --
//! downstream stages and responses see statuses only.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use quorum_engine::{suggest, BusyInterval, MemoryScheduleStore, SuggestionRequest};
//!
//! let mut store = MemoryScheduleStore::new();
//! store.insert("mina", vec![BusyInterval {
//!     start: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
//!     end: Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()),
//!     adjustable: false,
//! }]);
//!
//! let request = SuggestionRequest {
//!     start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
//!     end_date: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
//!     participant_ids: vec!["mina".to_string()],
//!     duration_minutes: None,
//!     top_n: Some(1),
//! };
//!
//! let response = suggest(&store, &request).unwrap();
//! // 09:00-10:00 carries a fixed conflict; the first conflict-free slot wins.
//! assert_eq!(response.suggestions[0].slot.key, "2024-01-01_0");
//! assert_eq!(response.suggestions[0].risk_score, 0);
//! ```
//!
//! ## Modules
//!
//! - [`slots`] — date range → ordered grid of fixed-duration slots
//! - [`overlap`] — slot × busy-interval conflict predicate
//! - [`classify`] — participant × slot → three-way availability status
//! - [`aggregate`] — per-slot group summary (counts, risk score, participation)
//! - [`rank`] — stable multi-key ordering of slot summaries
//! - [`store`] — Schedule Store / Participant Directory seams + in-memory impls
//! - [`pipeline`] — the availability and suggestion queries end to end
//! - [`error`] — Error types

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod overlap;
pub mod pipeline;
pub mod rank;
pub mod slots;
pub mod store;

pub use aggregate::{aggregate, SlotSummary, StatusCounts};
pub use classify::{classify, AvailabilityStatus};
pub use error::{QuorumError, Result};
pub use overlap::overlaps;
pub use pipeline::{
    availability_for_group, compute_availability, compute_availability_in, suggest,
    suggest_for_group, suggest_in, AvailabilityRequest, AvailabilityResponse,
    ParticipantAvailability, SuggestionRequest, SuggestionResponse,
};
pub use rank::{rank, DEFAULT_TOP_N};
pub use slots::{
    generate_slots, generate_slots_in, BoundaryZone, TimeSlot, DEFAULT_DURATION_MINUTES,
};
pub use store::{
    BusyInterval, MemoryDirectory, MemoryScheduleStore, ParticipantDirectory, ParticipantId,
    ScheduleStore,
};
