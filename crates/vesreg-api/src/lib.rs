//! # vesreg-api — Axum API for the Vessel Registry
//!
//! HTTP surface over the vessel registry and the license status engine.
//!
//! ## API Surface
//!
//! | Route                          | Auth   | Purpose                         |
//! |--------------------------------|--------|---------------------------------|
//! | `GET /health/*`                | none   | Liveness/readiness probes       |
//! | `GET /v1/vessels/:code/status` | none   | Public license-status lookup    |
//! | `POST /v1/vessels`             | bearer | Manual registration             |
//! | `GET /v1/vessels`              | bearer | Dashboard listing (search/filter) |
//! | `GET /v1/vessels/:code`        | bearer | Fetch one record                |
//! | `PUT /v1/vessels/:code`        | bearer | Update name/owner/dates         |
//! | `POST /v1/import`              | bearer | Bulk CSV import                 |
//! | `GET /openapi.json`            | bearer | OpenAPI spec                    |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → AuthMiddleware → Handler
//! ```

pub mod auth;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::AuthConfig;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes and the public status lookup are mounted outside the auth
/// middleware so they remain accessible without credentials.
pub fn app(state: AppState) -> Router {
    let auth_config = AuthConfig {
        token: state.config.auth_token.clone(),
    };

    // Authenticated clerk routes.
    let api = Router::new()
        .merge(routes::vessels::router())
        .merge(routes::import::router())
        .merge(openapi::router())
        .layer(from_fn(auth::auth_middleware))
        .layer(axum::Extension(auth_config))
        .with_state(state.clone());

    // Public routes: health probes and the license-status lookup.
    let public = Router::new()
        .merge(routes::vessels::public_router())
        .with_state(state)
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new()
        .merge(public)
        .merge(api)
        .layer(TraceLayer::new_for_http())
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
