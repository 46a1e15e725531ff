//! # List Subcommand
//!
//! Dashboard listing over the registry database: optional search text and
//! category filter, ordered by registration code.

use anyhow::{anyhow, Result};
use clap::Args;

use vesreg_core::VesselCategory;

/// Arguments for `vesreg list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Substring match on registration code or owner ID.
    #[arg(long)]
    pub search: Option<String>,

    /// Category label filter (e.g. FISHING, CARGO).
    #[arg(long)]
    pub category: Option<String>,

    /// Registry database URL (falls back to DATABASE_URL).
    #[arg(long)]
    pub database: Option<String>,
}

pub async fn run_list(args: &ListArgs) -> Result<u8> {
    let category = args
        .category
        .as_deref()
        .map(|label| {
            VesselCategory::from_label(label).ok_or_else(|| anyhow!("unknown category: {label}"))
        })
        .transpose()?;

    let pool = crate::connect(args.database.as_deref()).await?;
    let store = crate::load_store(&pool).await?;

    let records = store.filter(args.search.as_deref(), category);
    if records.is_empty() {
        println!("No matching vessels.");
        return Ok(0);
    }

    for record in &records {
        println!(
            "{}  {:<12}  {}  (owner: {} [{}])",
            record.registry_code,
            record.category.as_str(),
            record.name,
            record.owner_name,
            record.owner_id,
        );
    }
    println!("{} vessel(s)", records.len());

    Ok(0)
}
