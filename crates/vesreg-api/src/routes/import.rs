//! # Bulk Import API
//!
//! Accepts a CSV ledger export as the request body and runs it through the
//! additive-only importer. The response is the per-file import report.

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use vesreg_import::{import_reader, ImportError, ImportReport};
use vesreg_registry::db;

use crate::error::AppError;
use crate::state::AppState;

/// Build the import router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/import", post(import_csv))
}

/// API representation of an import report.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImportReportResponse {
    /// Rows inserted as new records.
    pub inserted: usize,
    /// Rows whose registration code was already registered.
    pub skipped_existing: usize,
    /// Raw code values that could not be normalized (rows not stored).
    pub rejected_codes: Vec<String>,
    /// Rows stored without an issuance date.
    pub blank_dates: usize,
}

impl From<ImportReport> for ImportReportResponse {
    fn from(report: ImportReport) -> Self {
        Self {
            inserted: report.inserted,
            skipped_existing: report.skipped_existing,
            rejected_codes: report.rejected_codes,
            blank_dates: report.blank_dates,
        }
    }
}

/// POST /v1/import — Run a bulk CSV import.
///
/// Row-level problems are tallied in the report; only an undecodable file
/// fails the request.
#[utoipa::path(
    post,
    path = "/v1/import",
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Import report", body = ImportReportResponse),
        (status = 400, description = "Undecodable CSV input", body = crate::error::ErrorBody),
    ),
    tag = "import"
)]
pub async fn import_csv(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ImportReportResponse>, AppError> {
    let report = import_reader(body.as_ref(), &state.vessels).map_err(|err| match err {
        ImportError::Csv(_) => AppError::BadRequest(err.to_string()),
        ImportError::Io(_) => AppError::Internal(err.to_string()),
    })?;

    // Write-through: persist anything the store now holds that the
    // database does not. insert_if_absent makes this idempotent.
    if let Some(pool) = &state.db_pool {
        for record in state.vessels.list() {
            db::insert_if_absent(pool, &record).await?;
        }
    }

    Ok(Json(report.into()))
}
