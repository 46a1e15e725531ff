//! # Navigation License Status Engine
//!
//! Determines whether a vessel's navigation license is current, lapsed, or
//! due for its mandatory annual endorsement (refrendo). This is the one
//! piece of real decision logic in the registry.
//!
//! ## Policy
//!
//! A license is issued for one year, with a 90-day grace period for the
//! annual endorsement. Two independent dates fall out of that:
//!
//! - **Endorsement deadline** — always `issued_on + 455 days`, regardless
//!   of whether an explicit expiration was recorded.
//! - **Effective expiry** — the recorded expiration date, or the same
//!   455-day fallback when none was recorded. The two coincide only when
//!   no explicit expiration exists; they must not be conflated.
//!
//! Expiration is a hard cutoff: once `today` is past the effective expiry,
//! the license reports as expired even if a timely endorsement is on file.
//!
//! All comparisons are strict `>` — a license is *not yet* past due on the
//! deadline day itself.
//!
//! ## Purity
//!
//! [`evaluate`] is a pure function of its four inputs. `today` is injected,
//! never read from the system clock, so results are deterministic and the
//! engine is safe to call concurrently and repeatedly. It performs no I/O
//! and never logs — surfacing and recording outcomes is the caller's
//! concern.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Policy Constants ────────────────────────────────────────────────

/// Contractual validity of a navigation license, in days.
pub const LICENSE_VALIDITY_DAYS: i64 = 365;

/// Grace period for recording the annual endorsement, in days.
pub const ENDORSEMENT_GRACE_DAYS: i64 = 90;

/// The latest date an endorsement counts as on time: issuance + 455 days.
///
/// Fixed policy (one year plus the 90-day grace period) — not configurable
/// per record.
pub fn endorsement_deadline(issued_on: NaiveDate) -> NaiveDate {
    issued_on + Duration::days(LICENSE_VALIDITY_DAYS + ENDORSEMENT_GRACE_DAYS)
}

// ─── Status & Advisory ───────────────────────────────────────────────

/// Whether the license is currently valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LicenseStatus {
    /// The license is within its validity window.
    Valid,
    /// The license has lapsed and must be renewed.
    Expired,
}

impl LicenseStatus {
    /// Return the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::Expired => "EXPIRED",
        }
    }
}

impl std::fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The advisory note accompanying a status, telling the holder what action
/// (if any) the authority expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    /// The license has lapsed; only renewal restores it.
    RenewalRequired,
    /// No endorsement is on file yet and the window is still open.
    EndorsementDue,
    /// An endorsement was recorded on or before the deadline.
    EndorsementOnTime,
    /// An endorsement was recorded, but after the deadline.
    EndorsementLate,
}

impl Advisory {
    /// The fixed advisory text shown to the license holder.
    pub fn message(&self) -> &'static str {
        match self {
            Self::RenewalRequired => "must renew the navigation license",
            Self::EndorsementDue => "annual endorsement review is due before the authority",
            Self::EndorsementOnTime => "endorsement within the allowed period",
            Self::EndorsementLate => "endorsement outside the allowed period",
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// The engine's output: a status and its advisory note.
///
/// Derived on every evaluation and never persisted — the registry stores
/// only the three underlying dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Valid or expired.
    pub status: LicenseStatus,
    /// What the authority expects the holder to do next.
    pub advisory: Advisory,
}

impl StatusReport {
    /// The advisory text for this report.
    pub fn note(&self) -> &'static str {
        self.advisory.message()
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// The single failure mode of evaluation.
///
/// Callers must surface this as "cannot evaluate license" — never silently
/// default to valid or expired.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// The issuance date is missing; nothing can be computed without it.
    #[error("cannot evaluate license: issuance date is missing")]
    MissingIssuance,
}

// ─── Evaluation ──────────────────────────────────────────────────────

/// Evaluate a license's status as of `today`.
///
/// The branch order encodes the policy:
///
/// 1. No issuance date → [`EvaluationError::MissingIssuance`].
/// 2. No endorsement on file: past the endorsement deadline means expired,
///    otherwise the annual endorsement is due.
/// 3. Endorsement on file: past the effective expiry means expired — the
///    expiration cutoff dominates endorsement timeliness. Otherwise the
///    license is valid and the note records whether the endorsement was
///    inside or outside the allowed period.
///
/// # Errors
///
/// Returns [`EvaluationError::MissingIssuance`] when `issued_on` is `None`.
pub fn evaluate(
    issued_on: Option<NaiveDate>,
    endorsed_on: Option<NaiveDate>,
    expires_on: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<StatusReport, EvaluationError> {
    let issued_on = issued_on.ok_or(EvaluationError::MissingIssuance)?;

    let deadline = endorsement_deadline(issued_on);
    let effective_expiry = expires_on.unwrap_or(deadline);

    let report = match endorsed_on {
        None => {
            if today > deadline {
                StatusReport {
                    status: LicenseStatus::Expired,
                    advisory: Advisory::RenewalRequired,
                }
            } else {
                StatusReport {
                    status: LicenseStatus::Valid,
                    advisory: Advisory::EndorsementDue,
                }
            }
        }
        Some(endorsed_on) => {
            if today > effective_expiry {
                StatusReport {
                    status: LicenseStatus::Expired,
                    advisory: Advisory::RenewalRequired,
                }
            } else if endorsed_on <= deadline {
                StatusReport {
                    status: LicenseStatus::Valid,
                    advisory: Advisory::EndorsementOnTime,
                }
            } else {
                StatusReport {
                    status: LicenseStatus::Valid,
                    advisory: Advisory::EndorsementLate,
                }
            }
        }
    };

    Ok(report)
}

// ─── Tests ───────────────────────────────────────────────────────────
