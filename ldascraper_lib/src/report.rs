//! CSV report emission: one file per (year, period), rows grouped by
//! filing type in collection order.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use lda_api::FilingPeriod;

use crate::collect::FilingGroup;
use crate::error::ScrapeError;

const HEADER: [&str; 8] = [
    "UUID",
    "RegistrantName",
    "ClientName",
    "FilingType",
    "AmountReported",
    "DatePosted",
    "FilingYear",
    "AmountType",
];

/// Report location for one (year, period), e.g. `reports/2023-q1.csv`.
pub fn report_path(out_dir: &Path, year: i32, period: FilingPeriod) -> PathBuf {
    out_dir.join(format!("{}-{}.csv", year, period.code().to_lowercase()))
}

/// Serializes the grouped rows to `writer`.
///
/// The header row is always written, even for an empty collection.
pub fn write_groups<W: Write>(writer: W, groups: &[FilingGroup]) -> Result<(), ScrapeError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADER)?;
    for group in groups {
        for filing in &group.filings {
            wtr.serialize(filing)?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the report file, creating parent directories as needed.
pub fn write_report(path: &Path, groups: &[FilingGroup]) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_groups(file, groups)
}
