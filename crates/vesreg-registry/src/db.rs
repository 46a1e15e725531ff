//! # SQLite Persistence
//!
//! Durable storage for vessel records. All functions take a `&SqlitePool`
//! and operate on the `vessels` table with runtime-checked queries.
//!
//! Persistence is optional: when `DATABASE_URL` is unset the registry runs
//! in in-memory-only mode. When present, the in-memory store is hydrated
//! from the table on startup and writes go through to it.
//!
//! Decoding is strict — a stored code or category that no longer parses is
//! surfaced as [`StoreError::Corrupt`], never silently replaced with a
//! default that would corrupt the record on the next write.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use uuid::Uuid;

use vesreg_core::{OwnerId, RegistryCode, VesselCategory, VesselId};

use crate::record::VesselRecord;

/// Environment variable holding the SQLite connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Persistence failures.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database rejected a query or connection.
    #[error("registry database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row no longer satisfies the domain invariants.
    #[error("corrupt registry row: {0}")]
    Corrupt(String),
}

/// Initialize the connection pool from the environment.
///
/// Returns `Ok(None)` when `DATABASE_URL` is unset — the registry then
/// operates in in-memory-only mode. When set, the pool is created and the
/// schema is ensured.
pub async fn init_pool() -> Result<Option<SqlitePool>, StoreError> {
    let url = match std::env::var(DATABASE_URL_VAR) {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            tracing::warn!(
                "{DATABASE_URL_VAR} not set — registry running in-memory only; \
                 records will not survive restart"
            );
            return Ok(None);
        }
    };

    let pool = SqlitePoolOptions::new().connect(&url).await?;
    ensure_schema(&pool).await?;
    tracing::info!("registry database connected");
    Ok(Some(pool))
}

/// Create the `vessels` table if it does not exist.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS vessels (
            id            TEXT PRIMARY KEY,
            name          TEXT NOT NULL,
            registry_code TEXT NOT NULL UNIQUE,
            category      TEXT NOT NULL,
            owner_name    TEXT NOT NULL,
            owner_id      TEXT NOT NULL,
            document      TEXT NOT NULL,
            issued_on     TEXT,
            endorsed_on   TEXT,
            expires_on    TEXT,
            created_at    TEXT NOT NULL,
            updated_at    TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Insert a new vessel record.
///
/// Fails with a database error if the registration code already exists
/// (unique constraint) — callers decide whether that is a conflict or a
/// skip.
pub async fn insert(pool: &SqlitePool, record: &VesselRecord) -> Result<(), StoreError> {
    sqlx::query(
        "INSERT INTO vessels
            (id, name, registry_code, category, owner_name, owner_id, document,
             issued_on, endorsed_on, expires_on, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
    )
    .bind(*record.id.as_uuid())
    .bind(&record.name)
    .bind(record.registry_code.as_str())
    .bind(record.category.as_str())
    .bind(&record.owner_name)
    .bind(record.owner_id.as_str())
    .bind(&record.document)
    .bind(record.issued_on)
    .bind(record.endorsed_on)
    .bind(record.expires_on)
    .bind(record.created_at)
    .bind(record.updated_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Insert only if the registration code is not already present.
///
/// Returns `true` if a row was inserted. This mirrors the in-memory
/// store's additive-only import reconciliation.
pub async fn insert_if_absent(
    pool: &SqlitePool,
    record: &VesselRecord,
) -> Result<bool, StoreError> {
    let result = sqlx::query(
        "INSERT OR IGNORE INTO vessels
            (id, name, registry_code, category, owner_name, owner_id, document,
             issued_on, endorsed_on, expires_on, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
    )
    .bind(*record.id.as_uuid())
    .bind(&record.name)
    .bind(record.registry_code.as_str())
    .bind(record.category.as_str())
    .bind(&record.owner_name)
    .bind(record.owner_id.as_str())
    .bind(&record.document)
    .bind(record.issued_on)
    .bind(record.endorsed_on)
    .bind(record.expires_on)
    .bind(record.created_at)
    .bind(record.updated_at)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Update the mutable fields of a record, keyed by registration code.
///
/// The code itself is immutable — re-registration under a new code is a
/// new record. Returns `true` if a row was updated.
pub async fn update(pool: &SqlitePool, record: &VesselRecord) -> Result<bool, StoreError> {
    let result = sqlx::query(
        "UPDATE vessels
         SET name = ?1, owner_name = ?2, owner_id = ?3,
             issued_on = ?4, endorsed_on = ?5, expires_on = ?6, updated_at = ?7
         WHERE registry_code = ?8",
    )
    .bind(&record.name)
    .bind(&record.owner_name)
    .bind(record.owner_id.as_str())
    .bind(record.issued_on)
    .bind(record.endorsed_on)
    .bind(record.expires_on)
    .bind(record.updated_at)
    .bind(record.registry_code.as_str())
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Load every record — used to hydrate the in-memory store on startup.
pub async fn load_all(pool: &SqlitePool) -> Result<Vec<VesselRecord>, StoreError> {
    let rows = sqlx::query(
        "SELECT id, name, registry_code, category, owner_name, owner_id, document,
                issued_on, endorsed_on, expires_on, created_at, updated_at
         FROM vessels ORDER BY registry_code",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_record).collect()
}

/// Fetch one record by registration code.
pub async fn get_by_code(
    pool: &SqlitePool,
    code: &RegistryCode,
) -> Result<Option<VesselRecord>, StoreError> {
    let row = sqlx::query(
        "SELECT id, name, registry_code, category, owner_name, owner_id, document,
                issued_on, endorsed_on, expires_on, created_at, updated_at
         FROM vessels WHERE registry_code = ?1",
    )
    .bind(code.as_str())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_record).transpose()
}

/// Map a database row to a [`VesselRecord`], validating the stored
/// newtypes. A row that fails validation is [`StoreError::Corrupt`].
fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> Result<VesselRecord, StoreError> {
    let raw_code: String = row.try_get("registry_code")?;
    let registry_code =
        RegistryCode::parse(&raw_code).map_err(|e| StoreError::Corrupt(e.to_string()))?;

    let raw_category: String = row.try_get("category")?;
    let category = VesselCategory::from_label(&raw_category).ok_or_else(|| {
        StoreError::Corrupt(format!("unknown stored category: {raw_category:?}"))
    })?;

    let raw_owner: String = row.try_get("owner_id")?;
    let owner_id = OwnerId::new(raw_owner).map_err(|e| StoreError::Corrupt(e.to_string()))?;

    let id: Uuid = row.try_get("id")?;
    let issued_on: Option<NaiveDate> = row.try_get("issued_on")?;
    let endorsed_on: Option<NaiveDate> = row.try_get("endorsed_on")?;
    let expires_on: Option<NaiveDate> = row.try_get("expires_on")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

    Ok(VesselRecord {
        id: VesselId::from_uuid(id),
        name: row.try_get("name")?,
        registry_code,
        category,
        owner_name: row.try_get("owner_name")?,
        owner_id,
        document: row.try_get("document")?,
        issued_on,
        endorsed_on,
        expires_on,
        created_at,
        updated_at,
    })
}
