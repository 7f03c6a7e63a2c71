//! Slot grid generation -- partitions a candidate date range into
//! fixed-duration, non-overlapping time slots.
//!
//! Every calendar day in the range contributes consecutive slots starting at
//! day-start. Slots never cross the local day boundary, and a trailing
//! partial slot at the range boundary is dropped rather than truncated: a
//! slot is included only if `slot.end <= range_end`.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{QuorumError, Result};

/// Slot duration used when a request leaves `durationMinutes` unspecified.
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A fixed-duration candidate meeting window.
///
/// Generated fresh per request; never persisted. `key` is a stable
/// `"<day-iso>_<index>"` identifier (the index resets each day), so the same
/// slot can be correlated across repeated computations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub key: String,
}

/// Zone in which calendar-day boundaries are computed.
///
/// The engine itself is timezone-naive apart from this one decision point:
/// where "day start" falls. `Utc` is the default; any IANA zone can be used
/// instead so that slot indices line up with a group's local calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryZone {
    #[default]
    Utc,
    Zone(Tz),
}

impl BoundaryZone {
    /// Calendar date of `instant` in this zone.
    fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            BoundaryZone::Utc => instant.date_naive(),
            BoundaryZone::Zone(tz) => instant.with_timezone(tz).date_naive(),
        }
    }

    /// UTC instant of local midnight on `date`.
    ///
    /// An ambiguous local midnight (DST fall-back) resolves to the earliest
    /// valid instant; a nonexistent one (spring-forward over midnight)
    /// resolves to the first valid hour after it.
    fn day_start(&self, date: NaiveDate) -> DateTime<Utc> {
        let midnight = date.and_time(NaiveTime::MIN);
        match self {
            BoundaryZone::Utc => midnight.and_utc(),
            BoundaryZone::Zone(tz) => {
                let mut local = midnight;
                loop {
                    match tz.from_local_datetime(&local) {
                        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                            return dt.with_timezone(&Utc);
                        }
                        LocalResult::None => local += Duration::hours(1),
                    }
                }
            }
        }
    }
}

/// Generate the slot grid for `[range_start, range_end]` with UTC day
/// boundaries.
///
/// # Errors
/// Returns `QuorumError::InvalidRange` if `range_start > range_end` and
/// `QuorumError::InvalidDuration` if `duration_minutes < 1`.
pub fn generate_slots(
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
    duration_minutes: i64,
) -> Result<Vec<TimeSlot>> {
    generate_slots_in(BoundaryZone::Utc, range_start, range_end, duration_minutes)
}

/// Generate the slot grid with day boundaries computed in `zone`.
///
/// For each calendar day from `range_start` (truncated to day-start) through
/// `range_end`'s day inclusive, emits up to `floor(1440 / duration_minutes)`
/// consecutive slots from day-start, keeping only those that end by the next
/// local midnight and by `range_end`'s exact instant. Output is chronological
/// and non-overlapping; the per-day slot index feeds the key.
pub fn generate_slots_in(
    zone: BoundaryZone,
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
    duration_minutes: i64,
) -> Result<Vec<TimeSlot>> {
    if range_start > range_end {
        return Err(QuorumError::InvalidRange {
            start: range_start,
            end: range_end,
        });
    }
    if duration_minutes < 1 {
        return Err(QuorumError::InvalidDuration(duration_minutes));
    }

    let slots_per_day = MINUTES_PER_DAY / duration_minutes;

    let mut slots = Vec::new();
    let mut day = zone.date_of(range_start);
    let last_day = zone.date_of(range_end);

    while day <= last_day {
        let day_start = zone.day_start(day);
        let next_day = day.succ_opt();
        // Local days are not always 24 hours (DST): a day's slots must also
        // stop at the next local midnight, or a spring-forward day would
        // spill into the next day's grid.
        let day_end = next_day.map(|d| zone.day_start(d));
        let day_key = day.format("%Y-%m-%d");

        for index in 0..slots_per_day {
            let start = day_start + Duration::minutes(index * duration_minutes);
            let end = start + Duration::minutes(duration_minutes);
            // Slot ends are monotonic within a day, so the first slot past
            // either boundary ends the day.
            if end > range_end {
                break;
            }
            if day_end.is_some_and(|boundary| end > boundary) {
                break;
            }
            slots.push(TimeSlot {
                start,
                end,
                key: format!("{}_{}", day_key, index),
            });
        }

        day = match next_day {
            Some(next) => next,
            None => break,
        };
    }

    Ok(slots)
}
