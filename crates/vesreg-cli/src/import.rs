//! # Import Subcommand
//!
//! Runs the additive-only CSV importer against the registry database and
//! prints the per-file report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use vesreg_import::import_path;
use vesreg_registry::db;

/// Arguments for `vesreg import`.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the CSV ledger export.
    pub file: PathBuf,

    /// Registry database URL (falls back to DATABASE_URL).
    #[arg(long)]
    pub database: Option<String>,
}

pub async fn run_import(args: &ImportArgs) -> Result<u8> {
    let pool = crate::connect(args.database.as_deref()).await?;

    // Hydrate first so records already in the database count as existing,
    // not as fresh inserts.
    let store = crate::load_store(&pool).await?;

    let report = import_path(&args.file, &store)
        .with_context(|| format!("import failed for {}", args.file.display()))?;

    for record in store.list() {
        db::insert_if_absent(&pool, &record)
            .await
            .with_context(|| format!("cannot persist {}", record.registry_code))?;
    }

    println!("OK: {report}");
    for code in &report.rejected_codes {
        println!("  rejected: {code}");
    }

    Ok(0)
}
