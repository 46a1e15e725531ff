//! # Vessel Record
//!
//! The unit the registry stores: one registered vessel, its owner, and the
//! three license dates the status engine evaluates. The derived status is
//! *not* a field — it is recomputed on every lookup so a stale verdict can
//! never be served.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use vesreg_core::{
    evaluate, EvaluationError, OwnerId, RegistryCode, StatusReport, VesselCategory, VesselId,
};

/// The document label stamped on every record.
///
/// The registry manages exactly one document kind; the column exists so
/// that exports remain compatible with the authority's ledger format.
pub const DOCUMENT_LABEL: &str = "Navigation license";

/// A registered vessel and its navigation license dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselRecord {
    /// Unique record identifier.
    pub id: VesselId,
    /// Vessel name.
    pub name: String,
    /// Registration code — the registry's lookup key.
    pub registry_code: RegistryCode,
    /// Category derived from the code's middle segment.
    pub category: VesselCategory,
    /// Owner's full name.
    pub owner_name: String,
    /// Owner's identity document number.
    pub owner_id: OwnerId,
    /// Document kind label.
    pub document: String,
    /// When the license was issued. Absent means the record cannot be
    /// evaluated until corrected.
    pub issued_on: Option<NaiveDate>,
    /// When the annual endorsement was last recorded, if ever.
    pub endorsed_on: Option<NaiveDate>,
    /// Explicit expiration date. Absent means the engine's 455-day
    /// fallback applies.
    pub expires_on: Option<NaiveDate>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl VesselRecord {
    /// Create a new record. The category is always derived from the code
    /// through the shared classifier — callers never supply it.
    pub fn new(
        name: impl Into<String>,
        registry_code: RegistryCode,
        owner_name: impl Into<String>,
        owner_id: OwnerId,
        issued_on: Option<NaiveDate>,
        endorsed_on: Option<NaiveDate>,
        expires_on: Option<NaiveDate>,
    ) -> Self {
        let now = Utc::now();
        let category = VesselCategory::classify(&registry_code);
        Self {
            id: VesselId::new(),
            name: name.into(),
            registry_code,
            category,
            owner_name: owner_name.into(),
            owner_id,
            document: DOCUMENT_LABEL.to_string(),
            issued_on,
            endorsed_on,
            expires_on,
            created_at: now,
            updated_at: now,
        }
    }

    /// Evaluate this record's license status as of `today`.
    ///
    /// Pure pass-through to the engine — the record supplies its three
    /// dates and nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::MissingIssuance`] when no issuance date
    /// is on file.
    pub fn license_status(&self, today: NaiveDate) -> Result<StatusReport, EvaluationError> {
        evaluate(self.issued_on, self.endorsed_on, self.expires_on, today)
    }

    /// Whether `text` matches this record's registration code or owner ID
    /// (case-insensitive substring — the dashboard search contract).
    pub fn matches_search(&self, text: &str) -> bool {
        let needle = text.to_ascii_uppercase();
        self.registry_code.as_str().contains(&needle)
            || self
                .owner_id
                .as_str()
                .to_ascii_uppercase()
                .contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vesreg_core::{Advisory, LicenseStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_record() -> VesselRecord {
        VesselRecord::new(
            "Estrella del Mar",
            RegistryCode::parse("AB-PE-1234").unwrap(),
            "Maria Gonzalez",
            OwnerId::new("V-12345678").unwrap(),
            Some(date(2023, 1, 1)),
            None,
            None,
        )
    }

    #[test]
    fn new_derives_category_from_the_code() {
        let record = sample_record();
        assert_eq!(record.category, VesselCategory::Fishing);
        assert_eq!(record.document, DOCUMENT_LABEL);
    }

    #[test]
    fn new_classifies_unmapped_codes_as_unknown() {
        let record = VesselRecord::new(
            "Mystery",
            RegistryCode::parse("AB-ZZ-1").unwrap(),
            "Owner",
            OwnerId::new("123").unwrap(),
            None,
            None,
            None,
        );
        assert_eq!(record.category, VesselCategory::Unknown);
    }

    #[test]
    fn license_status_delegates_to_the_engine() {
        let record = sample_record();
        let report = record.license_status(date(2023, 6, 1)).unwrap();
        assert_eq!(report.status, LicenseStatus::Valid);
        assert_eq!(report.advisory, Advisory::EndorsementDue);
    }

    #[test]
    fn license_status_without_issuance_is_an_error() {
        let mut record = sample_record();
        record.issued_on = None;
        assert!(record.license_status(date(2023, 6, 1)).is_err());
    }

    #[test]
    fn search_matches_code_fragment_case_insensitively() {
        let record = sample_record();
        assert!(record.matches_search("ab-pe"));
        assert!(record.matches_search("PE-1234"));
        assert!(!record.matches_search("XY-ZZ"));
    }

    #[test]
    fn search_matches_owner_id_fragment() {
        let record = sample_record();
        assert!(record.matches_search("v-1234"));
        assert!(record.matches_search("12345678"));
        assert!(!record.matches_search("99999999"));
    }

    #[test]
    fn record_serializes_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: VesselRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
