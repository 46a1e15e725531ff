//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers in the vessel registry.
//! Each identifier is a distinct type — you cannot pass an [`OwnerId`]
//! where a [`VesselId`] is expected.
//!
//! ## Validation
//!
//! The string-based [`OwnerId`] validates at construction time. The
//! UUID-based [`VesselId`] is always valid by construction. The registry
//! code, the primary lookup key, lives in [`crate::registry_code`] with its
//! own shape validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A unique identifier for a vessel record in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VesselId(Uuid);

impl VesselId {
    /// Create a new random vessel identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a vessel identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for VesselId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VesselId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The vessel owner's identity document number (cédula).
///
/// Free-form because document formats vary across issuing authorities, but
/// never empty — a record without an owner document cannot be searched by
/// owner, which is one of the registry's two lookup paths.
///
/// Deserialization funnels through [`OwnerId::new`], so blank documents are
/// rejected on the wire as well as in code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct OwnerId(String);

impl OwnerId {
    /// Create an owner identifier, rejecting blank input.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidOwnerId`] if the trimmed string
    /// is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidOwnerId(s));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the document number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OwnerId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
