//! WASM bindings for quorum-engine.
//!
//! Exposes slot generation, the availability query, and the suggestion query
//! to JavaScript via `wasm-bindgen`. All complex types are passed as JSON
//! strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p quorum-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/quorum-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/quorum_engine_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use quorum_engine::{
    compute_availability, generate_slots, suggest, AvailabilityRequest, BusyInterval,
    MemoryScheduleStore, SuggestionRequest,
};

// ---------------------------------------------------------------------------
// Serde-friendly input shapes for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Roster format passed from JavaScript: each participant's id and busy
/// intervals, with ISO 8601 datetime strings.
#[derive(Deserialize)]
struct RosterInput {
    participants: Vec<RosterEntryInput>,
}

#[derive(Deserialize)]
struct RosterEntryInput {
    id: String,
    #[serde(default)]
    busy: Vec<IntervalInput>,
}

#[derive(Deserialize)]
struct IntervalInput {
    start: String,
    end: Option<String>,
    adjustable: bool,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2024-01-01T09:00:00Z")
/// and naive local time (e.g., "2024-01-01T09:00:00"), which is interpreted
/// as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

/// Convert a roster JSON string into an in-memory schedule store plus the
/// participant ids in input order.
fn parse_roster_json(json: &str) -> Result<(MemoryScheduleStore, Vec<String>), JsValue> {
    let roster: RosterInput = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid roster JSON: {}", e)))?;

    let mut store = MemoryScheduleStore::new();
    let mut participant_ids = Vec::with_capacity(roster.participants.len());
    for entry in roster.participants {
        let intervals = entry
            .busy
            .into_iter()
            .map(|iv| {
                Ok(BusyInterval {
                    start: parse_datetime(&iv.start)?,
                    end: iv.end.as_deref().map(parse_datetime).transpose()?,
                    adjustable: iv.adjustable,
                })
            })
            .collect::<Result<Vec<BusyInterval>, JsValue>>()?;
        participant_ids.push(entry.id.clone());
        store.insert(entry.id, intervals);
    }
    Ok((store, participant_ids))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate the slot grid for a date range.
///
/// Returns a JSON string containing an array of `{start, end, key}` objects
/// with RFC 3339 datetime strings.
#[wasm_bindgen(js_name = "generateSlots")]
pub fn generate_slots_json(
    range_start: &str,
    range_end: &str,
    duration_minutes: i32,
) -> Result<String, JsValue> {
    let start = parse_datetime(range_start)?;
    let end = parse_datetime(range_end)?;

    let slots = generate_slots(start, end, i64::from(duration_minutes))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&slots)
}

/// Run the availability query against a roster.
///
/// `roster_json` must be a JSON object of shape
/// `{"participants": [{"id", "busy": [{"start", "end"?, "adjustable"}]}]}`.
/// Returns the availability response as a JSON string: per participant, a
/// map of slot key to `"available" | "adjustable" | "fixed"`.
#[wasm_bindgen(js_name = "computeAvailability")]
pub fn compute_availability_json(
    roster_json: &str,
    range_start: &str,
    range_end: &str,
) -> Result<String, JsValue> {
    let (store, participant_ids) = parse_roster_json(roster_json)?;
    let request = AvailabilityRequest {
        start_date: parse_datetime(range_start)?,
        end_date: parse_datetime(range_end)?,
        participant_ids,
    };

    let response =
        compute_availability(&store, &request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&response)
}

/// Run the suggestion query against a roster.
///
/// Returns the suggestion response as a JSON string: the ranked top-N slot
/// summaries plus the full slot grid. `duration_minutes` defaults to 60 and
/// `top_n` to 10 when omitted.
#[wasm_bindgen(js_name = "suggestSlots")]
pub fn suggest_slots_json(
    roster_json: &str,
    range_start: &str,
    range_end: &str,
    duration_minutes: Option<i32>,
    top_n: Option<u32>,
) -> Result<String, JsValue> {
    let (store, participant_ids) = parse_roster_json(roster_json)?;
    let request = SuggestionRequest {
        start_date: parse_datetime(range_start)?,
        end_date: parse_datetime(range_end)?,
        participant_ids,
        duration_minutes: duration_minutes.map(i64::from),
        top_n: top_n.map(|n| n as usize),
    };

    let response = suggest(&store, &request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&response)
}
