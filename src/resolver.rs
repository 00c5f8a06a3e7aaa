//! Route pair resolution
//!
//! Turns raw "ORIGIN-DESTINATION" lines into structured results against a
//! built [`Directory`]. Failures local to one line or one side of a pair
//! are ordinary result values, never errors, so batch processing can never
//! lose or abort sibling lines.

use crate::directory::{Directory, DirectoryEntry, EntryKind};
use serde::Serialize;

pub const INVALID_PAIR_MESSAGE: &str = "Invalid input format. Use 'ORIGIN-DESTINATION'.";

/// Result for one input line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RouteResult {
    /// The line did not split into exactly two non-empty codes.
    Invalid { route: String, error: String },
    /// Both sides were looked up (each may still be a not-found view).
    Resolved {
        route: String,
        departure: LookupView,
        arrival: LookupView,
    },
}

/// Outcome of looking up one side of a pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LookupView {
    Airport(AirportView),
    Metro(MetroView),
    NotFound(NotFoundView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportView {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl AirportView {
    fn from_entry(entry: &DirectoryEntry) -> Self {
        AirportView {
            code: entry.code.clone(),
            name: entry.display_name.clone(),
            city: entry.area.clone(),
            country: entry.region.clone(),
            kind: EntryKind::Airport,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetroView {
    pub code: String,
    pub city: String,
    pub country: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Constituent airports, in directory order. May be empty.
    pub airports: Vec<AirportView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFoundView {
    pub error: String,
    pub code: String,
}

/// Resolves a single raw pair like `" jfk - lax "`.
///
/// The line is trimmed and upper-cased, then split on `-` with each part
/// trimmed again. Anything other than exactly two non-empty parts yields
/// the format error without touching the directory.
pub fn resolve(pair: &str, directory: &Directory) -> RouteResult {
    let normalized = pair.trim().to_uppercase();
    let parts: Vec<&str> = normalized.split('-').map(str::trim).collect();

    match parts.as_slice() {
        [origin, destination] if !origin.is_empty() && !destination.is_empty() => {
            RouteResult::Resolved {
                route: format!("{origin}-{destination}"),
                departure: lookup_code(origin, directory),
                arrival: lookup_code(destination, directory),
            }
        }
        _ => RouteResult::Invalid {
            route: normalized,
            error: INVALID_PAIR_MESSAGE.to_string(),
        },
    }
}

/// Looks up one already-normalized code.
///
/// Metro codes expand to every airport whose metro grouping matches.
pub fn lookup_code(code: &str, directory: &Directory) -> LookupView {
    let Some(entry) = directory.get(code) else {
        return LookupView::NotFound(NotFoundView {
            error: format!("Code '{code}' not found."),
            code: code.to_string(),
        });
    };

    match entry.kind {
        EntryKind::Airport => LookupView::Airport(AirportView::from_entry(entry)),
        EntryKind::Metro => LookupView::Metro(MetroView {
            code: entry.code.clone(),
            city: entry.area.clone(),
            country: entry.region.clone(),
            kind: EntryKind::Metro,
            airports: directory
                .airports_in_metro(code)
                .map(AirportView::from_entry)
                .collect(),
        }),
    }
}

/// Resolves a whole text blob, one pair per line, in input order.
///
/// Every line produces exactly one entry; empty input is treated as one
/// (invalid) empty line.
pub fn resolve_batch(input: &str, directory: &Directory) -> Vec<RouteResult> {
    input
        .trim()
        .split('\n')
        .map(|line| resolve(line, directory))
        .collect()
}
