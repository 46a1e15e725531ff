//! # vesreg-cli — CLI Tool for the Vessel Registry
//!
//! Provides the `vesreg` command-line interface for the registry authority:
//!
//! - `vesreg import` — Bulk CSV import into the registry database.
//! - `vesreg check` — Evaluate a license by registration code, or directly
//!   from explicit dates.
//! - `vesreg list` — Search and filter registered vessels.
//!
//! All database-backed commands take `--database <url>` or fall back to
//! the `DATABASE_URL` environment variable.

pub mod check;
pub mod import;
pub mod list;

use anyhow::{bail, Context, Result};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use vesreg_registry::{db, VesselStore};

/// Open the registry database from `--database` or `DATABASE_URL`.
pub async fn connect(database: Option<&str>) -> Result<SqlitePool> {
    let url = match database {
        Some(url) => url.to_string(),
        None => match std::env::var(db::DATABASE_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => bail!(
                "no database configured: pass --database <url> or set {}",
                db::DATABASE_URL_VAR
            ),
        },
    };

    let pool = SqlitePoolOptions::new()
        .connect(&url)
        .await
        .with_context(|| format!("cannot open registry database at {url}"))?;
    db::ensure_schema(&pool)
        .await
        .context("cannot initialize registry schema")?;
    Ok(pool)
}

/// Load the full registry into an in-memory store.
pub async fn load_store(pool: &SqlitePool) -> Result<VesselStore> {
    let store = VesselStore::new();
    for record in db::load_all(pool).await.context("cannot load registry")? {
        store.insert_if_absent(record);
    }
    Ok(store)
}
