//! CSV ingestion
//!
//! Reads the airport source table and builds the directory. Ingestion is
//! best-effort: records that cannot be read or that lack the five required
//! fields are dropped and counted, never surfaced as errors.

use crate::directory::{Directory, SourceRow};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;
use tracing::{info, warn};

/// Expected column order: region, metro code, metro area, airport code,
/// airport name. Extra columns are ignored.
const REQUIRED_FIELDS: usize = 5;

fn to_source_row(record: &StringRecord) -> Option<SourceRow> {
    if record.len() < REQUIRED_FIELDS {
        return None;
    }
    Some(SourceRow {
        region: record[0].to_string(),
        metro_code: record[1].to_string(),
        area: record[2].to_string(),
        airport_code: record[3].to_string(),
        airport_name: record[4].to_string(),
    })
}

/// Loads the directory from a CSV file with a header row.
pub fn load_directory(path: &Path) -> Result<Directory> {
    info!("Reading airport data from {:?}", path);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    let mut skipped = 0;
    for record in reader.records() {
        match record {
            Ok(record) => match to_source_row(&record) {
                Some(row) => rows.push(row),
                None => skipped += 1,
            },
            Err(e) => {
                if skipped < 5 {
                    warn!("Unreadable record: {}", e);
                }
                skipped += 1;
            }
        }
    }

    let total = rows.len();
    let directory = Directory::build(rows);
    info!(
        "Loaded {} rows ({} skipped), directory holds {} codes",
        total,
        skipped,
        directory.len()
    );

    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_records_dropped() {
        let mut record = StringRecord::new();
        record.push_field("USA");
        record.push_field("NYC");
        record.push_field("New York");
        assert!(to_source_row(&record).is_none());

        record.push_field("JFK");
        record.push_field("John F. Kennedy Intl");
        let row = to_source_row(&record).unwrap();
        assert_eq!(row.airport_code, "JFK");
        assert_eq!(row.airport_name, "John F. Kennedy Intl");
    }

    #[test]
    fn test_extra_columns_ignored() {
        let record = StringRecord::from(vec![
            "USA",
            "NYC",
            "New York",
            "JFK",
            "John F. Kennedy Intl",
            "extra",
        ]);
        let row = to_source_row(&record).unwrap();
        assert_eq!(row.region, "USA");
        assert_eq!(row.airport_name, "John F. Kennedy Intl");
    }
}
