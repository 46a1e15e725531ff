//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor.
//!
//! The in-memory [`VesselStore`] is the read path. When a database pool is
//! present, it is the write-through durability layer: the store is hydrated
//! from it on startup and every mutation is persisted back.

use sqlx::sqlite::SqlitePool;

use vesreg_registry::{db, StoreError, VesselStore};

use crate::auth::SecretToken;

/// Application configuration, built from the environment in `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listen port.
    pub port: u16,
    /// Clerk bearer token. `None` disables auth (development mode).
    pub auth_token: Option<SecretToken>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            auth_token: None,
        }
    }
}

/// Shared application state. Cheap to clone — the store is `Arc`-backed.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory vessel store (read path).
    pub vessels: VesselStore,
    /// Optional durability layer.
    pub db_pool: Option<SqlitePool>,
    /// Static configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Build state with no database (in-memory only).
    pub fn new(config: AppConfig) -> Self {
        Self {
            vessels: VesselStore::new(),
            db_pool: None,
            config,
        }
    }

    /// Build state with an optional database pool.
    pub fn with_pool(config: AppConfig, db_pool: Option<SqlitePool>) -> Self {
        Self {
            vessels: VesselStore::new(),
            db_pool,
            config,
        }
    }

    /// Hydrate the in-memory store from the database, if connected.
    ///
    /// Records already in the store win — hydration never overwrites.
    pub async fn hydrate_from_db(&self) -> Result<(), StoreError> {
        let Some(pool) = &self.db_pool else {
            return Ok(());
        };

        let records = db::load_all(pool).await?;
        let mut loaded = 0usize;
        for record in records {
            if self.vessels.insert_if_absent(record) {
                loaded += 1;
            }
        }
        tracing::info!(loaded, "hydrated vessel store from database");
        Ok(())
    }
}
