//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "VESREG API — Vessel Registry",
        version = "0.3.2",
        description = "Maritime vessel registration and navigation-license status. Public license-status lookup plus authenticated registry management and bulk import.",
        license(name = "BUSL-1.1")
    ),
    paths(
        crate::routes::vessels::create_vessel,
        crate::routes::vessels::list_vessels,
        crate::routes::vessels::get_vessel,
        crate::routes::vessels::update_vessel,
        crate::routes::vessels::vessel_status,
        crate::routes::import::import_csv,
    ),
    components(schemas(
        crate::routes::vessels::CreateVesselRequest,
        crate::routes::vessels::UpdateVesselRequest,
        crate::routes::vessels::VesselResponse,
        crate::routes::vessels::VesselStatusResponse,
        crate::routes::import::ImportReportResponse,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "vessels", description = "Vessel registry and license status"),
        (name = "import", description = "Bulk CSV import"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
