//! In-memory code directory
//!
//! One entry per unique code, airport or metro. Built once at startup from
//! the tabular source data and read-only afterward; request handlers share
//! it behind an `Arc` without locking.

use serde::Serialize;
use std::collections::HashMap;

/// Whether a directory entry names a single airport or a metro grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    Airport,
    Metro,
}

/// Metadata held for one code.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryEntry {
    pub code: String,
    pub kind: EntryKind,
    pub region: String,
    pub metro_code: String,
    pub area: String,
    pub display_name: String,
}

/// One raw row of source data, field order as found in the file:
/// region, metro code, metro area, airport code, airport name.
#[derive(Debug, Clone)]
pub struct SourceRow {
    pub region: String,
    pub metro_code: String,
    pub area: String,
    pub airport_code: String,
    pub airport_name: String,
}

impl SourceRow {
    /// A row is usable only when all five fields carry actual content.
    fn is_complete(&self) -> bool {
        !self.region.trim().is_empty()
            && !self.metro_code.trim().is_empty()
            && !self.area.trim().is_empty()
            && !self.airport_code.trim().is_empty()
            && !self.airport_name.trim().is_empty()
    }
}

/// Code → entry map preserving insertion order.
///
/// Iteration order drives metro expansion, so entries are stored in a `Vec`
/// with a side index; an overwrite keeps the slot's original position.
#[derive(Debug, Default)]
pub struct Directory {
    entries: Vec<DirectoryEntry>,
    index: HashMap<String, usize>,
}

impl Directory {
    /// Builds the directory from an ordered sequence of source rows.
    ///
    /// Incomplete rows are dropped without error. Codes are trimmed and
    /// upper-cased before keying. A direct airport insert overwrites
    /// whatever holds its code (last row wins); a synthesized metro entry
    /// is only created when its code is still free (first writer wins).
    pub fn build(rows: impl IntoIterator<Item = SourceRow>) -> Directory {
        let mut directory = Directory::default();

        for row in rows {
            if !row.is_complete() {
                continue;
            }
            let airport_code = row.airport_code.trim().to_uppercase();
            let metro_code = row.metro_code.trim().to_uppercase();

            directory.insert(DirectoryEntry {
                code: airport_code,
                kind: EntryKind::Airport,
                region: row.region.clone(),
                metro_code: metro_code.clone(),
                area: row.area.clone(),
                display_name: row.airport_name,
            });

            if !directory.index.contains_key(&metro_code) {
                directory.insert(DirectoryEntry {
                    code: metro_code.clone(),
                    kind: EntryKind::Metro,
                    region: row.region,
                    metro_code,
                    area: row.area.clone(),
                    display_name: row.area,
                });
            }
        }

        directory
    }

    fn insert(&mut self, entry: DirectoryEntry) {
        match self.index.get(&entry.code) {
            Some(&slot) => self.entries[slot] = entry,
            None => {
                self.index.insert(entry.code.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&DirectoryEntry> {
        self.index.get(code).map(|&slot| &self.entries[slot])
    }

    /// Airport entries belonging to the given metro code, in insertion order.
    pub fn airports_in_metro<'a>(
        &'a self,
        metro_code: &'a str,
    ) -> impl Iterator<Item = &'a DirectoryEntry> {
        self.entries
            .iter()
            .filter(move |e| e.kind == EntryKind::Airport && e.metro_code == metro_code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(region: &str, metro: &str, area: &str, code: &str, name: &str) -> SourceRow {
        SourceRow {
            region: region.to_string(),
            metro_code: metro.to_string(),
            area: area.to_string(),
            airport_code: code.to_string(),
            airport_name: name.to_string(),
        }
    }

    #[test]
    fn test_builds_airport_and_metro_entries() {
        let dir = Directory::build([
            row("USA", "NYC", "New York", "JFK", "John F. Kennedy Intl"),
            row("USA", "NYC", "New York", "LGA", "LaGuardia"),
        ]);

        assert_eq!(dir.len(), 3);

        let jfk = dir.get("JFK").unwrap();
        assert_eq!(jfk.kind, EntryKind::Airport);
        assert_eq!(jfk.display_name, "John F. Kennedy Intl");
        assert_eq!(jfk.metro_code, "NYC");

        let nyc = dir.get("NYC").unwrap();
        assert_eq!(nyc.kind, EntryKind::Metro);
        assert_eq!(nyc.display_name, "New York");
    }

    #[test]
    fn test_codes_trimmed_and_uppercased() {
        let dir = Directory::build([row("USA", " nyc ", "New York", " jfk ", "JFK Intl")]);
        assert!(dir.get("JFK").is_some());
        assert!(dir.get("NYC").is_some());
        assert!(dir.get(" jfk ").is_none());
    }

    #[test]
    fn test_incomplete_rows_skipped() {
        let dir = Directory::build([
            row("USA", "NYC", "New York", "JFK", ""),
            row("USA", "NYC", "New York", "", "Nameless"),
            row("", "NYC", "New York", "LGA", "LaGuardia"),
            row("USA", "NYC", "New York", "EWR", "   "),
        ]);
        // None of the rows were usable, so not even the metro was synthesized.
        assert!(dir.is_empty());
        assert!(dir.get("NYC").is_none());
    }

    #[test]
    fn test_last_airport_row_wins() {
        let dir = Directory::build([
            row("USA", "NYC", "New York", "JFK", "Old Name"),
            row("USA", "NYC", "New York", "JFK", "New Name"),
        ]);
        assert_eq!(dir.get("JFK").unwrap().display_name, "New Name");
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn test_metro_synthesized_only_once() {
        let dir = Directory::build([
            row("USA", "NYC", "New York", "JFK", "JFK Intl"),
            row("USA", "NYC", "New York City", "LGA", "LaGuardia"),
        ]);
        // The first row's area names the metro; the second never replaces it.
        assert_eq!(dir.get("NYC").unwrap().display_name, "New York");
    }

    #[test]
    fn test_airport_overwrites_colliding_metro_code() {
        let dir = Directory::build([
            row("USA", "NYC", "New York", "JFK", "JFK Intl"),
            row("France", "PAR", "Paris", "NYC", "Oddly Coded Field"),
        ]);
        let nyc = dir.get("NYC").unwrap();
        assert_eq!(nyc.kind, EntryKind::Airport);
        assert_eq!(nyc.display_name, "Oddly Coded Field");
    }

    #[test]
    fn test_airport_code_equal_to_own_metro_code() {
        let dir = Directory::build([row(
            "USA",
            "LAX",
            "Los Angeles",
            "LAX",
            "Los Angeles Intl",
        )]);
        // The airport claims the slot first; no metro entry is synthesized.
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("LAX").unwrap().kind, EntryKind::Airport);
    }

    #[test]
    fn test_airports_in_metro_order() {
        let dir = Directory::build([
            row("USA", "NYC", "New York", "JFK", "JFK Intl"),
            row("USA", "WAS", "Washington", "IAD", "Dulles"),
            row("USA", "NYC", "New York", "LGA", "LaGuardia"),
            row("USA", "NYC", "New York", "EWR", "Newark Liberty"),
        ]);
        let codes: Vec<&str> = dir.airports_in_metro("NYC").map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["JFK", "LGA", "EWR"]);
    }
}
