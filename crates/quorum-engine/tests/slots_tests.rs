//! Tests for slot grid generation.

use chrono::{TimeZone, Utc};
use quorum_engine::error::QuorumError;
use quorum_engine::slots::{generate_slots, generate_slots_in, BoundaryZone};

#[test]
fn full_day_produces_24_hourly_slots() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    let slots = generate_slots(start, end, 60).unwrap();

    assert_eq!(slots.len(), 24);
    assert_eq!(slots[0].key, "2024-01-01_0");
    assert_eq!(slots[23].key, "2024-01-01_23");
    assert_eq!(slots[0].start, start);
    assert_eq!(slots[23].end, end);
}

#[test]
fn slots_are_contiguous_and_non_overlapping() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    let slots = generate_slots(start, end, 60).unwrap();

    for window in slots.windows(2) {
        assert_eq!(
            window[0].end, window[1].start,
            "slots within a day must be contiguous"
        );
    }
    for slot in &slots {
        assert_eq!((slot.end - slot.start).num_minutes(), 60);
    }
}

#[test]
fn trailing_partial_slot_is_dropped() {
    // Range ends at 10:30 — the 10:00-11:00 slot would cross the boundary
    // and must be excluded, not truncated.
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap();

    let slots = generate_slots(start, end, 60).unwrap();

    assert_eq!(slots.len(), 10);
    assert_eq!(slots.last().unwrap().key, "2024-01-01_9");
    assert_eq!(
        slots.last().unwrap().end,
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    );
}

#[test]
fn first_day_is_truncated_to_day_start() {
    // A mid-day range start still yields the full day's grid from midnight.
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    let slots = generate_slots(start, end, 60).unwrap();

    assert_eq!(slots.len(), 24);
    assert_eq!(slots[0].key, "2024-01-01_0");
    assert_eq!(
        slots[0].start,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn ninety_minute_slots_fill_the_day_exactly() {
    // floor(1440 / 90) = 16 slots, the last one ending exactly at midnight.
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    let slots = generate_slots(start, end, 90).unwrap();

    assert_eq!(slots.len(), 16);
    assert_eq!(slots[15].key, "2024-01-01_15");
    assert_eq!(slots[15].end, end);
}

#[test]
fn seven_hour_slots_leave_a_gap_before_midnight() {
    // floor(1440 / 420) = 3 slots per day; 21:00-04:00 would cross midnight
    // and is never emitted.
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    let slots = generate_slots(start, end, 420).unwrap();

    assert_eq!(slots.len(), 3);
    assert_eq!(
        slots[2].end,
        Utc.with_ymd_and_hms(2024, 1, 1, 21, 0, 0).unwrap()
    );
}

#[test]
fn duration_longer_than_a_day_yields_no_slots() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();

    let slots = generate_slots(start, end, 1441).unwrap();

    assert!(slots.is_empty());
}

#[test]
fn multi_day_range_resets_index_per_day() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();

    let slots = generate_slots(start, end, 60).unwrap();

    assert_eq!(slots.len(), 48);
    assert_eq!(slots[23].key, "2024-01-01_23");
    assert_eq!(slots[24].key, "2024-01-02_0");
    // Contiguous across the midnight boundary too (UTC days are 24h).
    assert_eq!(slots[23].end, slots[24].start);
}

#[test]
fn inverted_range_is_rejected() {
    let start = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let err = generate_slots(start, end, 60).unwrap_err();

    assert!(matches!(err, QuorumError::InvalidRange { .. }));
}

#[test]
fn non_positive_duration_is_rejected() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    assert!(matches!(
        generate_slots(start, end, 0).unwrap_err(),
        QuorumError::InvalidDuration(0)
    ));
    assert!(matches!(
        generate_slots(start, end, -30).unwrap_err(),
        QuorumError::InvalidDuration(-30)
    ));
}

#[test]
fn zone_boundaries_shift_day_start_and_keys() {
    // Asia/Seoul is UTC+9 with no DST: local midnight on 2024-03-10 is
    // 2024-03-09T15:00:00Z.
    let zone = BoundaryZone::Zone(chrono_tz::Asia::Seoul);
    let start = Utc.with_ymd_and_hms(2024, 3, 9, 15, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 10, 15, 0, 0).unwrap();

    let slots = generate_slots_in(zone, start, end, 60).unwrap();

    assert_eq!(slots.len(), 24);
    assert_eq!(slots[0].key, "2024-03-10_0");
    assert_eq!(slots[0].start, start);
    assert_eq!(slots[23].end, end);
}

#[test]
fn spring_forward_day_stops_at_the_next_local_midnight() {
    // America/New_York 2024-03-10 is a 23-hour local day (02:00 jumps to
    // 03:00). Local midnight is 05:00Z; the next local midnight is
    // 2024-03-11T04:00:00Z, one hour earlier than a fixed 24h grid expects.
    let zone = BoundaryZone::Zone(chrono_tz::America::New_York);
    let start = Utc.with_ymd_and_hms(2024, 3, 10, 5, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 12, 4, 0, 0).unwrap();

    let slots = generate_slots_in(zone, start, end, 60).unwrap();

    let short_day: Vec<_> = slots
        .iter()
        .filter(|s| s.key.starts_with("2024-03-10_"))
        .collect();
    assert_eq!(short_day.len(), 23);
    assert_eq!(short_day.last().unwrap().key, "2024-03-10_22");
    assert_eq!(
        short_day.last().unwrap().end,
        Utc.with_ymd_and_hms(2024, 3, 11, 4, 0, 0).unwrap()
    );

    // The next day's grid picks up exactly where the short day ended.
    let next_day: Vec<_> = slots
        .iter()
        .filter(|s| s.key.starts_with("2024-03-11_"))
        .collect();
    assert_eq!(next_day.len(), 24);
    assert_eq!(
        next_day[0].start,
        Utc.with_ymd_and_hms(2024, 3, 11, 4, 0, 0).unwrap()
    );

    for window in slots.windows(2) {
        assert!(
            window[0].end <= window[1].start,
            "slots {} and {} overlap",
            window[0].key,
            window[1].key
        );
    }
}

#[test]
fn fall_back_day_keeps_the_fixed_grid_and_leaves_a_gap() {
    // America/New_York 2024-11-03 is a 25-hour local day. The grid still
    // emits floor(1440/60) = 24 slots; the extra local hour shows up as a
    // gap before the next day's first slot.
    let zone = BoundaryZone::Zone(chrono_tz::America::New_York);
    let start = Utc.with_ymd_and_hms(2024, 11, 3, 4, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 11, 5, 5, 0, 0).unwrap();

    let slots = generate_slots_in(zone, start, end, 60).unwrap();

    let long_day: Vec<_> = slots
        .iter()
        .filter(|s| s.key.starts_with("2024-11-03_"))
        .collect();
    assert_eq!(long_day.len(), 24);
    assert_eq!(
        long_day.last().unwrap().end,
        Utc.with_ymd_and_hms(2024, 11, 4, 4, 0, 0).unwrap()
    );

    let next_first = slots.iter().find(|s| s.key == "2024-11-04_0").unwrap();
    assert_eq!(
        next_first.start,
        Utc.with_ymd_and_hms(2024, 11, 4, 5, 0, 0).unwrap()
    );

    for window in slots.windows(2) {
        assert!(window[0].end <= window[1].start);
    }
}

#[test]
fn utc_zone_matches_default() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    let default_slots = generate_slots(start, end, 60).unwrap();
    let utc_slots = generate_slots_in(BoundaryZone::Utc, start, end, 60).unwrap();

    assert_eq!(default_slots, utc_slots);
}
