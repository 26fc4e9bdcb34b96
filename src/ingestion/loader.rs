use crate::catalog::store::{RecordStore, StoreError};
use crate::catalog::types::{Disposition, NewRecord};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Failures surfaced by the catalog ingestion pipeline.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("catalog download failed: {0}")]
    Download(#[from] reqwest::Error),
    #[error("catalog is not readable as CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Counts produced by a single import run.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

/// One row of a KOI-format CSV export.
///
/// Catalog exports are messy: columns come and go between releases and cells
/// hold `nan`, `null`, or nothing at all. Every field is read as an optional
/// string and converted afterwards, so a sparse file still loads.
#[derive(Debug, Deserialize)]
struct KoiCsvRow {
    #[serde(default)]
    kepoi_name: Option<String>,
    #[serde(default)]
    ra: Option<String>,
    #[serde(default)]
    dec: Option<String>,
    #[serde(default)]
    koi_disposition: Option<String>,
    #[serde(default)]
    koi_period: Option<String>,
    #[serde(default)]
    koi_prad: Option<String>,
    #[serde(default)]
    koi_teq: Option<String>,
    #[serde(default)]
    koi_duration: Option<String>,
    #[serde(default)]
    koi_depth: Option<String>,
    #[serde(default)]
    koi_insol: Option<String>,
    #[serde(default)]
    koi_steff: Option<String>,
    #[serde(default)]
    koi_srad: Option<String>,
    #[serde(default)]
    koi_slogg: Option<String>,
    #[serde(default)]
    koi_kepmag: Option<String>,
    #[serde(default)]
    source: Option<String>,
}

impl KoiCsvRow {
    /// Maps a raw row onto a new record.
    ///
    /// Rows without a positive planetary radius carry no usable signal and
    /// are dropped. An unrecognized disposition keeps the row but leaves the
    /// field unset.
    fn into_record(self) -> Option<NewRecord> {
        let radius = parse_float(&self.koi_prad).filter(|r| *r > 0.0)?;

        Some(NewRecord {
            name: parse_text(&self.kepoi_name),
            ra: parse_float(&self.ra),
            dec: parse_float(&self.dec),
            disposition: self.koi_disposition.as_deref().and_then(Disposition::parse),
            orbital_period: parse_float(&self.koi_period),
            radius: Some(radius),
            equilibrium_temp: parse_float(&self.koi_teq),
            transit_duration: parse_float(&self.koi_duration),
            transit_depth: parse_float(&self.koi_depth),
            insolation: parse_float(&self.koi_insol),
            star_temp: parse_float(&self.koi_steff),
            star_radius: parse_float(&self.koi_srad),
            star_logg: parse_float(&self.koi_slogg),
            star_kepmag: parse_float(&self.koi_kepmag),
            source: parse_text(&self.source),
        })
    }
}

/// Converts a raw CSV cell to a float, treating the catalog's sentinel
/// values (`nan`, `null`, blank) as absent.
fn parse_float(cell: &Option<String>) -> Option<f64> {
    let text = cell.as_deref()?.trim();
    if text.is_empty() || text.eq_ignore_ascii_case("nan") || text.eq_ignore_ascii_case("null") {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_text(cell: &Option<String>) -> Option<String> {
    cell.as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Loads a KOI-format CSV file into the store.
pub fn load_catalog_csv(path: &Path, store: &dyn RecordStore) -> Result<ImportReport, IngestError> {
    let reader = csv::Reader::from_path(path)?;
    read_rows(reader, store)
}

/// Loads KOI-format CSV text from any reader. Used for remote payloads.
pub fn load_catalog_from_reader<R: Read>(
    input: R,
    store: &dyn RecordStore,
) -> Result<ImportReport, IngestError> {
    read_rows(csv::Reader::from_reader(input), store)
}

fn read_rows<R: Read>(
    mut reader: csv::Reader<R>,
    store: &dyn RecordStore,
) -> Result<ImportReport, IngestError> {
    let mut report = ImportReport::default();

    for row in reader.deserialize::<KoiCsvRow>() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!("Skipping unreadable catalog row: {}", err);
                report.skipped += 1;
                continue;
            }
        };

        match row.into_record() {
            Some(record) => {
                store.insert(record)?;
                report.imported += 1;
            }
            None => report.skipped += 1,
        }
    }

    tracing::info!(
        "Catalog import finished: {} imported, {} skipped",
        report.imported,
        report.skipped
    );
    Ok(report)
}
