//! Tests for the slot × busy-interval conflict predicate, including the
//! boundary laws: abutting ranges never conflict, any true intersection does.

use chrono::{TimeZone, Utc};
use quorum_engine::overlap::overlaps;
use quorum_engine::slots::TimeSlot;
use quorum_engine::store::BusyInterval;

fn slot(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimeSlot {
    TimeSlot {
        start: Utc.with_ymd_and_hms(2024, 1, 1, start_h, start_m, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 1, 1, end_h, end_m, 0).unwrap(),
        key: format!("2024-01-01_{}", start_h),
    }
}

fn interval(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> BusyInterval {
    BusyInterval {
        start: Utc.with_ymd_and_hms(2024, 1, 1, start_h, start_m, 0).unwrap(),
        end: Some(Utc.with_ymd_and_hms(2024, 1, 1, end_h, end_m, 0).unwrap()),
        adjustable: true,
    }
}

fn instant(h: u32, m: u32) -> BusyInterval {
    BusyInterval {
        start: Utc.with_ymd_and_hms(2024, 1, 1, h, m, 0).unwrap(),
        end: None,
        adjustable: true,
    }
}

#[test]
fn interval_ending_at_slot_start_does_not_conflict() {
    // [10:00, 11:00) abuts [11:00, 12:00).
    assert!(!overlaps(&slot(11, 0, 12, 0), &interval(10, 0, 11, 0)));
}

#[test]
fn interval_starting_at_slot_end_does_not_conflict() {
    // [10:00, 11:00) abuts [09:00, 10:00).
    assert!(!overlaps(&slot(9, 0, 10, 0), &interval(10, 0, 11, 0)));
}

#[test]
fn partial_intersection_conflicts() {
    assert!(overlaps(&slot(10, 30, 11, 30), &interval(10, 0, 11, 0)));
}

#[test]
fn interval_contained_in_slot_conflicts() {
    assert!(overlaps(&slot(10, 0, 11, 0), &interval(10, 15, 10, 45)));
}

#[test]
fn slot_contained_in_interval_conflicts() {
    assert!(overlaps(&slot(10, 0, 11, 0), &interval(9, 0, 13, 0)));
}

#[test]
fn identical_ranges_conflict() {
    assert!(overlaps(&slot(10, 0, 11, 0), &interval(10, 0, 11, 0)));
}

#[test]
fn disjoint_ranges_do_not_conflict() {
    assert!(!overlaps(&slot(10, 0, 11, 0), &interval(14, 0, 15, 0)));
    assert!(!overlaps(&slot(10, 0, 11, 0), &interval(7, 0, 8, 0)));
}

#[test]
fn instant_inside_slot_conflicts() {
    assert!(overlaps(&slot(10, 0, 11, 0), &instant(10, 30)));
}

#[test]
fn instant_at_slot_start_conflicts() {
    // The slot is [start, end): its start instant belongs to it.
    assert!(overlaps(&slot(10, 0, 11, 0), &instant(10, 0)));
}

#[test]
fn instant_at_slot_end_does_not_conflict() {
    // 11:00 belongs to the next slot, not to [10:00, 11:00).
    assert!(!overlaps(&slot(10, 0, 11, 0), &instant(11, 0)));
}
