//! # In-Memory Vessel Store
//!
//! Thread-safe, cloneable store keyed by registration code.
//!
//! All operations are synchronous (the RwLock is `parking_lot`, not
//! `tokio::sync`) because the lock is never held across `.await` points.
//! `parking_lot::RwLock` is non-poisonable — a panicking writer does not
//! permanently corrupt the store.
//!
//! The store enforces the import reconciliation policy at the API level:
//! [`VesselStore::insert_if_absent`] never overwrites an existing record,
//! making bulk import idempotent and additive-only.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use vesreg_core::{RegistryCode, VesselCategory};

use crate::record::VesselRecord;

/// Thread-safe in-memory vessel store keyed by registration code.
#[derive(Debug, Default)]
pub struct VesselStore {
    data: Arc<RwLock<HashMap<RegistryCode, VesselRecord>>>,
}

impl Clone for VesselStore {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl VesselStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a record under its registration code, returning the previous
    /// record if the code was already registered.
    pub fn insert(&self, record: VesselRecord) -> Option<VesselRecord> {
        self.data
            .write()
            .insert(record.registry_code.clone(), record)
    }

    /// Insert only if the registration code is not already present.
    ///
    /// Returns `true` if the record was inserted. This is the bulk-import
    /// reconciliation primitive: an existing record is never overwritten.
    pub fn insert_if_absent(&self, record: VesselRecord) -> bool {
        let mut guard = self.data.write();
        if guard.contains_key(&record.registry_code) {
            return false;
        }
        guard.insert(record.registry_code.clone(), record);
        true
    }

    /// Retrieve a record by registration code.
    pub fn get(&self, code: &RegistryCode) -> Option<VesselRecord> {
        self.data.read().get(code).cloned()
    }

    /// Update a record in place. Returns the updated record, or `None` if
    /// the code is not registered.
    pub fn update(
        &self,
        code: &RegistryCode,
        f: impl FnOnce(&mut VesselRecord),
    ) -> Option<VesselRecord> {
        let mut guard = self.data.write();
        if let Some(entry) = guard.get_mut(code) {
            f(entry);
            Some(entry.clone())
        } else {
            None
        }
    }

    /// Remove a record by registration code.
    pub fn remove(&self, code: &RegistryCode) -> Option<VesselRecord> {
        self.data.write().remove(code)
    }

    /// List all records, ordered by registration code.
    pub fn list(&self) -> Vec<VesselRecord> {
        let mut records: Vec<VesselRecord> = self.data.read().values().cloned().collect();
        records.sort_by(|a, b| a.registry_code.as_str().cmp(b.registry_code.as_str()));
        records
    }

    /// The dashboard query: optional search text (substring match on code
    /// or owner ID) and optional category filter, combined with AND.
    /// Ordered by registration code.
    pub fn filter(
        &self,
        search: Option<&str>,
        category: Option<VesselCategory>,
    ) -> Vec<VesselRecord> {
        let mut records: Vec<VesselRecord> = self
            .data
            .read()
            .values()
            .filter(|record| match search {
                Some(text) if !text.trim().is_empty() => record.matches_search(text.trim()),
                _ => true,
            })
            .filter(|record| match category {
                Some(category) => record.category == category,
                None => true,
            })
            .cloned()
            .collect();
        records.sort_by(|a, b| a.registry_code.as_str().cmp(b.registry_code.as_str()));
        records
    }

    /// Search by registration-code or owner-ID fragment.
    pub fn search(&self, text: &str) -> Vec<VesselRecord> {
        self.filter(Some(text), None)
    }

    /// List all records in a category.
    pub fn by_category(&self, category: VesselCategory) -> Vec<VesselRecord> {
        self.filter(None, Some(category))
    }

    /// Check if a registration code is present.
    pub fn contains(&self, code: &RegistryCode) -> bool {
        self.data.read().contains_key(code)
    }

    /// Return the number of records.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vesreg_core::OwnerId;

    fn record(code: &str, owner_id: &str) -> VesselRecord {
        VesselRecord::new(
            "Test Vessel",
            RegistryCode::parse(code).unwrap(),
            "Test Owner",
            OwnerId::new(owner_id).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 1),
            None,
            None,
        )
    }

    #[test]
    fn new_store_is_empty() {
        let store = VesselStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn insert_and_get_roundtrip() {
        let store = VesselStore::new();
        let rec = record("AB-PE-1", "V-1");
        let code = rec.registry_code.clone();

        assert!(store.insert(rec).is_none());
        let fetched = store.get(&code).unwrap();
        assert_eq!(fetched.registry_code, code);
    }

    #[test]
    fn insert_returns_previous_record() {
        let store = VesselStore::new();
        store.insert(record("AB-PE-1", "V-1"));
        let prev = store.insert(record("AB-PE-1", "V-2"));
        assert!(prev.is_some());
        assert_eq!(prev.unwrap().owner_id.as_str(), "V-1");
    }

    #[test]
    fn insert_if_absent_never_overwrites() {
        let store = VesselStore::new();
        assert!(store.insert_if_absent(record("AB-PE-1", "V-1")));
        assert!(!store.insert_if_absent(record("AB-PE-1", "V-2")));

        // The original record survives.
        let code = RegistryCode::parse("AB-PE-1").unwrap();
        assert_eq!(store.get(&code).unwrap().owner_id.as_str(), "V-1");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_modifies_existing() {
        let store = VesselStore::new();
        store.insert(record("AB-PE-1", "V-1"));
        let code = RegistryCode::parse("AB-PE-1").unwrap();

        let updated = store.update(&code, |r| r.name = "Renamed".to_string());
        assert_eq!(updated.unwrap().name, "Renamed");
        assert_eq!(store.get(&code).unwrap().name, "Renamed");
    }

    #[test]
    fn update_returns_none_for_missing_code() {
        let store = VesselStore::new();
        let code = RegistryCode::parse("AB-PE-1").unwrap();
        assert!(store.update(&code, |_| {}).is_none());
    }

    #[test]
    fn remove_deletes_record() {
        let store = VesselStore::new();
        store.insert(record("AB-PE-1", "V-1"));
        let code = RegistryCode::parse("AB-PE-1").unwrap();

        assert!(store.remove(&code).is_some());
        assert!(store.get(&code).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn list_is_ordered_by_code() {
        let store = VesselStore::new();
        store.insert(record("ZZ-PE-9", "V-3"));
        store.insert(record("AA-CA-1", "V-1"));
        store.insert(record("MM-TU-5", "V-2"));

        let codes: Vec<String> = store
            .list()
            .iter()
            .map(|r| r.registry_code.to_string())
            .collect();
        assert_eq!(codes, vec!["AA-CA-1", "MM-TU-5", "ZZ-PE-9"]);
    }

    #[test]
    fn filter_by_search_matches_code_and_owner() {
        let store = VesselStore::new();
        store.insert(record("AB-PE-1", "V-111"));
        store.insert(record("CD-CA-2", "V-222"));

        let hits = store.filter(Some("ab-pe"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].registry_code.as_str(), "AB-PE-1");

        let hits = store.filter(Some("222"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].registry_code.as_str(), "CD-CA-2");
    }

    #[test]
    fn filter_by_category() {
        let store = VesselStore::new();
        store.insert(record("AB-PE-1", "V-1"));
        store.insert(record("CD-CA-2", "V-2"));
        store.insert(record("EF-PE-3", "V-3"));

        let fishing = store.filter(None, Some(VesselCategory::Fishing));
        assert_eq!(fishing.len(), 2);
        assert!(fishing.iter().all(|r| r.category == VesselCategory::Fishing));
    }

    #[test]
    fn filter_combines_search_and_category() {
        let store = VesselStore::new();
        store.insert(record("AB-PE-1", "V-1"));
        store.insert(record("EF-PE-3", "V-3"));

        let hits = store.filter(Some("EF"), Some(VesselCategory::Fishing));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].registry_code.as_str(), "EF-PE-3");

        let hits = store.filter(Some("EF"), Some(VesselCategory::Cargo));
        assert!(hits.is_empty());
    }

    #[test]
    fn search_and_by_category_shortcuts() {
        let store = VesselStore::new();
        store.insert(record("AB-PE-1", "V-1"));
        store.insert(record("CD-CA-2", "V-2"));

        assert_eq!(store.search("ca-2").len(), 1);
        assert_eq!(store.by_category(VesselCategory::Cargo).len(), 1);
    }

    #[test]
    fn blank_search_matches_everything() {
        let store = VesselStore::new();
        store.insert(record("AB-PE-1", "V-1"));
        store.insert(record("CD-CA-2", "V-2"));
        assert_eq!(store.filter(Some("   "), None).len(), 2);
    }

    #[test]
    fn clone_shares_underlying_data() {
        let store = VesselStore::new();
        let clone = store.clone();
        store.insert(record("AB-PE-1", "V-1"));
        assert_eq!(clone.len(), 1);

        clone.insert(record("CD-CA-2", "V-2"));
        assert_eq!(store.len(), 2);
    }
}
