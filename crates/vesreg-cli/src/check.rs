//! # Check Subcommand
//!
//! Evaluates a navigation license, either for a registered vessel looked
//! up by registration code, or directly from explicit dates without
//! touching the database.

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Args;

use vesreg_core::{endorsement_deadline, evaluate, parse_date, RegistryCode};

/// Arguments for `vesreg check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Registration code to look up. Omit when evaluating explicit dates.
    pub code: Option<String>,

    /// Evaluation date, YYYY-MM-DD (default: current UTC date).
    #[arg(long)]
    pub as_of: Option<String>,

    /// Evaluate directly from this issuance date instead of a lookup.
    #[arg(long)]
    pub issued_on: Option<String>,

    /// Endorsement date for direct evaluation.
    #[arg(long, requires = "issued_on")]
    pub endorsed_on: Option<String>,

    /// Expiration date for direct evaluation.
    #[arg(long, requires = "issued_on")]
    pub expires_on: Option<String>,

    /// Registry database URL (falls back to DATABASE_URL).
    #[arg(long)]
    pub database: Option<String>,
}

pub async fn run_check(args: &CheckArgs) -> Result<u8> {
    let as_of = match args.as_of.as_deref() {
        Some(raw) => parse_date(raw).context("invalid --as-of date")?,
        None => Utc::now().date_naive(),
    };

    if let Some(raw) = args.issued_on.as_deref() {
        let issued_on = parse_date(raw).context("invalid --issued-on date")?;
        let endorsed_on = parse_flag_date(args.endorsed_on.as_deref(), "--endorsed-on")?;
        let expires_on = parse_flag_date(args.expires_on.as_deref(), "--expires-on")?;

        let report = evaluate(Some(issued_on), endorsed_on, expires_on, as_of)?;
        print_report(as_of, issued_on, report.status.as_str(), report.note());
        return Ok(0);
    }

    let Some(raw_code) = args.code.as_deref() else {
        bail!("pass a registration code, or --issued-on for direct evaluation");
    };
    let code = RegistryCode::parse(raw_code)?;

    let pool = crate::connect(args.database.as_deref()).await?;
    let Some(record) = vesreg_registry::db::get_by_code(&pool, &code).await? else {
        bail!("vessel {code} is not registered");
    };

    let report = record.license_status(as_of)?;
    let issued_on = record
        .issued_on
        .context("record has no issuance date after evaluation")?;

    println!("Vessel: {} ({})", record.name, record.registry_code);
    println!("  Category: {}", record.category);
    println!("  Owner: {} [{}]", record.owner_name, record.owner_id);
    print_report(as_of, issued_on, report.status.as_str(), report.note());

    Ok(0)
}

fn parse_flag_date(raw: Option<&str>, flag: &str) -> Result<Option<NaiveDate>> {
    raw.map(|s| parse_date(s).with_context(|| format!("invalid {flag} date")))
        .transpose()
}

fn print_report(as_of: NaiveDate, issued_on: NaiveDate, status: &str, note: &str) {
    println!("  As of: {as_of}");
    println!("  Endorsement deadline: {}", endorsement_deadline(issued_on));
    println!("  Status: {status}");
    println!("  Note: {note}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CheckArgs {
        CheckArgs {
            code: None,
            as_of: None,
            issued_on: None,
            endorsed_on: None,
            expires_on: None,
            database: None,
        }
    }

    #[test]
    fn parse_flag_date_accepts_iso_and_passes_none_through() {
        assert_eq!(
            parse_flag_date(Some("2023-06-01"), "--endorsed-on").unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 1)
        );
        assert_eq!(parse_flag_date(None, "--endorsed-on").unwrap(), None);
    }

    #[test]
    fn parse_flag_date_names_the_offending_flag() {
        let err = parse_flag_date(Some("junk"), "--expires-on").unwrap_err();
        assert!(format!("{err:#}").contains("--expires-on"));
    }

    #[tokio::test]
    async fn direct_evaluation_needs_no_database() {
        let mut direct = args();
        direct.as_of = Some("2023-06-01".to_string());
        direct.issued_on = Some("2023-01-01".to_string());
        assert_eq!(run_check(&direct).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn check_without_code_or_dates_fails() {
        let err = run_check(&args()).await.unwrap_err();
        assert!(err.to_string().contains("registration code"));
    }
}
