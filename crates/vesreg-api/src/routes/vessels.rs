//! # Vessel Registry API
//!
//! Registry CRUD and search for the authority clerk, plus the public
//! license-status lookup.
//!
//! The status endpoint is the system's reason to exist: it evaluates the
//! stored dates through the engine on every request. The status is never
//! persisted, so it can never go stale.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use vesreg_core::{parse_date, OwnerId, RegistryCode, VesselCategory};
use vesreg_registry::{db, VesselRecord};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Build the authenticated vessels router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/vessels", get(list_vessels).post(create_vessel))
        .route("/v1/vessels/:code", get(get_vessel).put(update_vessel))
}

/// Build the public (unauthenticated) status router.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/v1/vessels/:code/status", get(vessel_status))
}

// ── DTOs ─────────────────────────────────────────────────────────────────

/// Request body for manual registration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateVesselRequest {
    /// Vessel name.
    pub name: String,
    /// Registration code (three hyphen-separated segments).
    pub registry_code: String,
    /// Owner's full name.
    pub owner_name: String,
    /// Owner's identity document number.
    pub owner_id: String,
    /// License issuance date.
    pub issued_on: Option<NaiveDate>,
    /// Last endorsement date, if any.
    pub endorsed_on: Option<NaiveDate>,
    /// Explicit expiration date, if any.
    pub expires_on: Option<NaiveDate>,
}

impl Validate for CreateVesselRequest {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("vessel name must not be empty".into());
        }
        if self.owner_name.trim().is_empty() {
            return Err("owner name must not be empty".into());
        }
        Ok(())
    }
}

/// Request body for updating a record. Omitted fields are left unchanged;
/// the registration code itself is immutable.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateVesselRequest {
    pub name: Option<String>,
    pub owner_name: Option<String>,
    pub owner_id: Option<String>,
    pub issued_on: Option<NaiveDate>,
    pub endorsed_on: Option<NaiveDate>,
    pub expires_on: Option<NaiveDate>,
}

impl Validate for UpdateVesselRequest {
    fn validate(&self) -> Result<(), String> {
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err("vessel name must not be empty".into());
        }
        if matches!(&self.owner_name, Some(owner) if owner.trim().is_empty()) {
            return Err("owner name must not be empty".into());
        }
        Ok(())
    }
}

/// API representation of a vessel record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VesselResponse {
    pub id: Uuid,
    pub name: String,
    pub registry_code: String,
    pub category: String,
    pub owner_name: String,
    pub owner_id: String,
    pub document: String,
    pub issued_on: Option<NaiveDate>,
    pub endorsed_on: Option<NaiveDate>,
    pub expires_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<VesselRecord> for VesselResponse {
    fn from(record: VesselRecord) -> Self {
        Self {
            id: *record.id.as_uuid(),
            name: record.name,
            registry_code: record.registry_code.to_string(),
            category: record.category.as_str().to_string(),
            owner_name: record.owner_name,
            owner_id: record.owner_id.to_string(),
            document: record.document,
            issued_on: record.issued_on,
            endorsed_on: record.endorsed_on,
            expires_on: record.expires_on,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// The public lookup response: the record plus its freshly derived status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VesselStatusResponse {
    pub vessel: VesselResponse,
    /// The date the evaluation ran against.
    pub as_of: NaiveDate,
    /// "VALID" or "EXPIRED".
    pub status: String,
    /// The advisory text for the license holder.
    pub note: String,
}

/// Query parameters for the dashboard listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Substring match on registration code or owner ID.
    pub search: Option<String>,
    /// Category label filter (e.g. "FISHING").
    pub category: Option<String>,
}

/// Query parameters for the status lookup.
#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    /// Evaluation date, `YYYY-MM-DD`. Defaults to the current UTC date.
    pub as_of: Option<String>,
}

// ── Handlers ─────────────────────────────────────────────────────────────

fn already_registered(code: &RegistryCode) -> AppError {
    AppError::Conflict(format!("registration code {code} already exists"))
}

/// POST /v1/vessels — Register a vessel manually.
///
/// The category is derived server-side from the registration code; clients
/// never supply it.
#[utoipa::path(
    post,
    path = "/v1/vessels",
    request_body = CreateVesselRequest,
    responses(
        (status = 201, description = "Vessel registered", body = VesselResponse),
        (status = 409, description = "Registration code already exists", body = crate::error::ErrorBody),
        (status = 422, description = "Validation failed", body = crate::error::ErrorBody),
    ),
    tag = "vessels"
)]
pub async fn create_vessel(
    State(state): State<AppState>,
    body: Result<Json<CreateVesselRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<VesselResponse>), AppError> {
    let req = extract_validated_json(body)?;

    let code = RegistryCode::parse(&req.registry_code)?;
    let owner_id = OwnerId::new(req.owner_id)?;

    let record = VesselRecord::new(
        req.name.trim(),
        code,
        req.owner_name.trim(),
        owner_id,
        req.issued_on,
        req.endorsed_on,
        req.expires_on,
    );

    if state.vessels.contains(&record.registry_code) {
        return Err(already_registered(&record.registry_code));
    }

    // Durability first: a record the database refused is never served.
    if let Some(pool) = &state.db_pool {
        if !db::insert_if_absent(pool, &record).await? {
            return Err(already_registered(&record.registry_code));
        }
    }

    if !state.vessels.insert_if_absent(record.clone()) {
        return Err(already_registered(&record.registry_code));
    }

    tracing::info!(code = %record.registry_code, "vessel registered");
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// GET /v1/vessels — Dashboard listing with optional search and category
/// filter.
#[utoipa::path(
    get,
    path = "/v1/vessels",
    params(
        ("search" = Option<String>, Query, description = "Substring match on registration code or owner ID"),
        ("category" = Option<String>, Query, description = "Category label filter"),
    ),
    responses(
        (status = 200, description = "Matching vessels", body = [VesselResponse]),
        (status = 422, description = "Unknown category label", body = crate::error::ErrorBody),
    ),
    tag = "vessels"
)]
pub async fn list_vessels(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<VesselResponse>>, AppError> {
    let category = match query.category.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => Some(
            VesselCategory::from_label(label)
                .ok_or_else(|| AppError::Validation(format!("unknown category: {label}")))?,
        ),
        _ => None,
    };

    let records = state.vessels.filter(query.search.as_deref(), category);
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// GET /v1/vessels/:code — Fetch one record.
#[utoipa::path(
    get,
    path = "/v1/vessels/{code}",
    params(("code" = String, Path, description = "Registration code")),
    responses(
        (status = 200, description = "The vessel record", body = VesselResponse),
        (status = 404, description = "Unknown registration code", body = crate::error::ErrorBody),
        (status = 422, description = "Malformed registration code", body = crate::error::ErrorBody),
    ),
    tag = "vessels"
)]
pub async fn get_vessel(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<VesselResponse>, AppError> {
    let code = RegistryCode::parse(&code)?;
    let record = state
        .vessels
        .get(&code)
        .ok_or_else(|| AppError::NotFound(format!("vessel {code}")))?;
    Ok(Json(record.into()))
}

/// PUT /v1/vessels/:code — Update a record's name, owner, or dates.
///
/// The registration code is immutable; re-registration under a new code is
/// a new record.
#[utoipa::path(
    put,
    path = "/v1/vessels/{code}",
    params(("code" = String, Path, description = "Registration code")),
    request_body = UpdateVesselRequest,
    responses(
        (status = 200, description = "Updated record", body = VesselResponse),
        (status = 404, description = "Unknown registration code", body = crate::error::ErrorBody),
        (status = 422, description = "Validation failed", body = crate::error::ErrorBody),
    ),
    tag = "vessels"
)]
pub async fn update_vessel(
    State(state): State<AppState>,
    Path(code): Path<String>,
    body: Result<Json<UpdateVesselRequest>, JsonRejection>,
) -> Result<Json<VesselResponse>, AppError> {
    let req = extract_validated_json(body)?;

    let code = RegistryCode::parse(&code)?;
    let owner_id = match req.owner_id {
        Some(raw) => Some(OwnerId::new(raw)?),
        None => None,
    };

    let mut updated = state
        .vessels
        .get(&code)
        .ok_or_else(|| AppError::NotFound(format!("vessel {code}")))?;

    if let Some(name) = req.name {
        updated.name = name.trim().to_string();
    }
    if let Some(owner_name) = req.owner_name {
        updated.owner_name = owner_name.trim().to_string();
    }
    if let Some(owner_id) = owner_id {
        updated.owner_id = owner_id;
    }
    if let Some(issued_on) = req.issued_on {
        updated.issued_on = Some(issued_on);
    }
    if let Some(endorsed_on) = req.endorsed_on {
        updated.endorsed_on = Some(endorsed_on);
    }
    if let Some(expires_on) = req.expires_on {
        updated.expires_on = Some(expires_on);
    }
    updated.updated_at = Utc::now();

    // Durability first: the store only ever reflects persisted state.
    if let Some(pool) = &state.db_pool {
        db::update(pool, &updated).await?;
    }
    state.vessels.insert(updated.clone());

    tracing::info!(code = %code, "vessel updated");
    Ok(Json(updated.into()))
}

/// GET /v1/vessels/:code/status — The public license-status lookup.
///
/// Evaluates the stored dates as of `as_of` (default: current UTC date)
/// and returns the record with the derived status and advisory note.
#[utoipa::path(
    get,
    path = "/v1/vessels/{code}/status",
    params(
        ("code" = String, Path, description = "Registration code"),
        ("as_of" = Option<String>, Query, description = "Evaluation date, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, description = "Derived license status", body = VesselStatusResponse),
        (status = 404, description = "Unknown registration code", body = crate::error::ErrorBody),
        (status = 422, description = "Malformed code or date, or the record has no issuance date", body = crate::error::ErrorBody),
    ),
    tag = "vessels"
)]
pub async fn vessel_status(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<VesselStatusResponse>, AppError> {
    let code = RegistryCode::parse(&code)?;
    let as_of = match query.as_of.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => Utc::now().date_naive(),
    };

    let record = state
        .vessels
        .get(&code)
        .ok_or_else(|| AppError::NotFound(format!("vessel {code}")))?;

    let report = record.license_status(as_of)?;

    Ok(Json(VesselStatusResponse {
        vessel: record.into(),
        as_of,
        status: report.status.as_str().to_string(),
        note: report.note().to_string(),
    }))
}
