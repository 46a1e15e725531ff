//! # vesreg-import — Bulk Registry Import
//!
//! Ingests the authority's CSV ledger exports into the vessel store.
//!
//! ## Policy
//!
//! - **Additive-only.** Rows insert through `insert_if_absent`; an existing
//!   record is never overwritten. Re-running an import is idempotent.
//! - **Lenient dates.** Ledger exports carry timestamps, `NaT`, `None`, and
//!   blanks in the date columns. Anything that does not normalize to a
//!   calendar date degrades to missing rather than aborting the file.
//! - **Partial success.** One bad row never blocks the rest. Rows whose
//!   registration code cannot be normalized have no usable key and are
//!   rejected; everything else is counted and kept.
//!
//! The per-file outcome is an [`ImportReport`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use vesreg_core::{parse_date_lenient, OwnerId, RegistryCode};
use vesreg_registry::{VesselRecord, VesselStore};

// ─── Errors ──────────────────────────────────────────────────────────────

/// File-level import failures. Row-level problems never surface here —
/// they are tallied in the [`ImportReport`] instead.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("cannot read import file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),
}

// ─── Report ──────────────────────────────────────────────────────────────

/// Outcome of one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Rows inserted as new records.
    pub inserted: usize,
    /// Rows whose registration code was already registered (left untouched).
    pub skipped_existing: usize,
    /// Raw code values that could not be normalized; these rows were not
    /// stored.
    pub rejected_codes: Vec<String>,
    /// Rows stored without an issuance date (blank or unparseable).
    pub blank_dates: usize,
}

impl ImportReport {
    /// Total number of data rows seen.
    pub fn total_rows(&self) -> usize {
        self.inserted + self.skipped_existing + self.rejected_codes.len()
    }
}

impl std::fmt::Display for ImportReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} inserted, {} already registered, {} rejected, {} without issuance date",
            self.inserted,
            self.skipped_existing,
            self.rejected_codes.len(),
            self.blank_dates,
        )
    }
}

// ─── Rows ────────────────────────────────────────────────────────────────

/// One CSV data row, as exported from the authority's ledger.
///
/// Every field is optional at this stage; validation happens per field so
/// that a single bad cell degrades that cell, not the file.
#[derive(Debug, Deserialize)]
struct ImportRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    registry_code: Option<String>,
    #[serde(default)]
    owner_name: Option<String>,
    #[serde(default)]
    owner_id: Option<String>,
    #[serde(default)]
    issued_on: Option<String>,
    #[serde(default)]
    endorsed_on: Option<String>,
    #[serde(default)]
    expires_on: Option<String>,
}

// ─── Import ──────────────────────────────────────────────────────────────

/// Import CSV data from any reader into the store.
///
/// # Errors
///
/// Returns [`ImportError`] only for file-level failures (I/O, undecodable
/// CSV). Row-level problems are tallied in the report.
pub fn import_reader<R: Read>(reader: R, store: &VesselStore) -> Result<ImportReport, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut report = ImportReport::default();

    for row in csv_reader.deserialize::<ImportRow>() {
        let row = row?;
        ingest_row(row, store, &mut report);
    }

    tracing::info!(
        inserted = report.inserted,
        skipped = report.skipped_existing,
        rejected = report.rejected_codes.len(),
        blank_dates = report.blank_dates,
        "import complete"
    );
    Ok(report)
}

/// Import a CSV file from disk.
pub fn import_path(path: &Path, store: &VesselStore) -> Result<ImportReport, ImportError> {
    let file = File::open(path)?;
    import_reader(file, store)
}

fn ingest_row(row: ImportRow, store: &VesselStore, report: &mut ImportReport) {
    let raw_code = row.registry_code.as_deref().unwrap_or("").trim().to_string();
    let code = match RegistryCode::parse(&raw_code) {
        Ok(code) => code,
        Err(_) => {
            // A row without a usable key cannot be stored.
            tracing::warn!(code = %raw_code, "rejecting row: unusable registration code");
            report.rejected_codes.push(raw_code);
            return;
        }
    };

    // Ledger exports occasionally omit the owner document; such a row
    // cannot serve the owner-search contract and is rejected with its code.
    let owner_id = match OwnerId::new(row.owner_id.unwrap_or_default()) {
        Ok(owner_id) => owner_id,
        Err(_) => {
            tracing::warn!(code = %code, "rejecting row: missing owner document");
            report.rejected_codes.push(code.as_str().to_string());
            return;
        }
    };

    let issued_on = row.issued_on.as_deref().and_then(parse_date_lenient);
    let endorsed_on = row.endorsed_on.as_deref().and_then(parse_date_lenient);
    let expires_on = row.expires_on.as_deref().and_then(parse_date_lenient);
    if issued_on.is_none() {
        report.blank_dates += 1;
    }

    let record = VesselRecord::new(
        row.name.unwrap_or_default().trim(),
        code,
        row.owner_name.unwrap_or_default().trim(),
        owner_id,
        issued_on,
        endorsed_on,
        expires_on,
    );

    if store.insert_if_absent(record) {
        report.inserted += 1;
    } else {
        report.skipped_existing += 1;
    }
}
