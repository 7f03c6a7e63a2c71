//! `quorum` CLI — run availability and suggestion queries against a JSON
//! roster file from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Per-participant availability over a date range (roster via stdin)
//! cat roster.json | quorum availability --from 2024-01-01 --to 2024-01-01
//!
//! # Ranked meeting suggestions, 30-minute slots, top 5
//! quorum suggest -i roster.json --from 2024-01-01 --to 2024-01-03 \
//!   --duration 30 --top 5
//!
//! # Day boundaries in a local zone instead of UTC
//! quorum suggest -i roster.json --from 2024-01-01 --to 2024-01-01 \
//!   --zone Asia/Seoul
//!
//! # Just the slot grid, no roster needed
//! quorum slots --from 2024-01-01 --to 2024-01-01 --duration 90
//! ```
//!
//! The roster file shape is
//! `{"participants": [{"id": "...", "busy": [{"start", "end"?, "adjustable"}]}]}`.
//! Timestamps are RFC 3339 or naive ISO 8601 (interpreted as UTC). A
//! date-only `--from` means midnight; a date-only `--to` covers that whole
//! day.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::{self, Read};

use quorum_engine::{
    compute_availability_in, generate_slots_in, suggest_in, AvailabilityRequest, BoundaryZone,
    BusyInterval, MemoryScheduleStore, SuggestionRequest,
};

#[derive(Parser)]
#[command(
    name = "quorum",
    version,
    about = "Group availability matching and meeting-slot suggestion"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-participant availability map over the date range
    Availability {
        /// Roster JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Range start (RFC 3339, naive datetime, or date)
        #[arg(long)]
        from: String,
        /// Range end, inclusive when date-only
        #[arg(long)]
        to: String,
        /// IANA zone for day boundaries (defaults to UTC)
        #[arg(long)]
        zone: Option<String>,
    },
    /// Ranked meeting-slot suggestions over the date range
    Suggest {
        /// Roster JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Range start (RFC 3339, naive datetime, or date)
        #[arg(long)]
        from: String,
        /// Range end, inclusive when date-only
        #[arg(long)]
        to: String,
        /// Slot length in minutes
        #[arg(long)]
        duration: Option<i64>,
        /// Maximum number of suggestions
        #[arg(long)]
        top: Option<usize>,
        /// IANA zone for day boundaries (defaults to UTC)
        #[arg(long)]
        zone: Option<String>,
    },
    /// Print the slot grid for a range without any roster
    Slots {
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Range start (RFC 3339, naive datetime, or date)
        #[arg(long)]
        from: String,
        /// Range end, inclusive when date-only
        #[arg(long)]
        to: String,
        /// Slot length in minutes
        #[arg(long, default_value_t = 60)]
        duration: i64,
        /// IANA zone for day boundaries (defaults to UTC)
        #[arg(long)]
        zone: Option<String>,
    },
}

/// Roster file shape: each participant's id plus their busy intervals.
#[derive(Deserialize)]
struct Roster {
    participants: Vec<RosterEntry>,
}

#[derive(Deserialize)]
struct RosterEntry {
    id: String,
    #[serde(default)]
    busy: Vec<BusyInterval>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Availability {
            input,
            output,
            from,
            to,
            zone,
        } => {
            let (store, participant_ids) = load_roster(input.as_deref())?;
            let request = AvailabilityRequest {
                start_date: parse_range_start(&from)?,
                end_date: parse_range_end(&to)?,
                participant_ids,
            };
            let response = compute_availability_in(parse_zone(zone.as_deref())?, &store, &request)
                .context("Availability query failed")?;
            write_output(output.as_deref(), &serde_json::to_string_pretty(&response)?)?;
        }
        Commands::Suggest {
            input,
            output,
            from,
            to,
            duration,
            top,
            zone,
        } => {
            let (store, participant_ids) = load_roster(input.as_deref())?;
            let request = SuggestionRequest {
                start_date: parse_range_start(&from)?,
                end_date: parse_range_end(&to)?,
                participant_ids,
                duration_minutes: duration,
                top_n: top,
            };
            let response = suggest_in(parse_zone(zone.as_deref())?, &store, &request)
                .context("Suggestion query failed")?;
            write_output(output.as_deref(), &serde_json::to_string_pretty(&response)?)?;
        }
        Commands::Slots {
            output,
            from,
            to,
            duration,
            zone,
        } => {
            let slots = generate_slots_in(
                parse_zone(zone.as_deref())?,
                parse_range_start(&from)?,
                parse_range_end(&to)?,
                duration,
            )
            .context("Slot generation failed")?;
            write_output(output.as_deref(), &serde_json::to_string_pretty(&slots)?)?;
        }
    }

    Ok(())
}

/// Read and index the roster: an in-memory schedule store plus the
/// participant ids in file order.
fn load_roster(path: Option<&str>) -> Result<(MemoryScheduleStore, Vec<String>)> {
    let raw = read_input(path)?;
    let roster: Roster = serde_json::from_str(&raw).context("Failed to parse roster JSON")?;

    let mut store = MemoryScheduleStore::new();
    let mut participant_ids = Vec::with_capacity(roster.participants.len());
    for entry in roster.participants {
        participant_ids.push(entry.id.clone());
        store.insert(entry.id, entry.busy);
    }
    Ok((store, participant_ids))
}

/// Parse a timestamp argument. Date-only input means midnight.
fn parse_range_start(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    parse_datetime(s)
}

/// Parse the range-end argument. Date-only input covers the whole day, i.e.
/// the range ends at the following midnight.
fn parse_range_end(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let next = date
            .succ_opt()
            .with_context(|| format!("Date out of range: {}", s))?;
        return Ok(next.and_time(NaiveTime::MIN).and_utc());
    }
    parse_datetime(s)
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset) and naive local time
/// (e.g., "2024-01-01T14:00:00"), which is interpreted as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .with_context(|| format!("Invalid datetime: {}", s))
}

fn parse_zone(zone: Option<&str>) -> Result<BoundaryZone> {
    match zone {
        None => Ok(BoundaryZone::Utc),
        Some(name) => match name.parse::<chrono_tz::Tz>() {
            Ok(tz) => Ok(BoundaryZone::Zone(tz)),
            Err(_) => bail!("Unknown IANA zone: {}", name),
        },
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
