//! # Registry Code Newtype
//!
//! The registration code (matrícula) is the registry's primary lookup key:
//! exactly three hyphen-separated ASCII alphanumeric segments, for example
//! `AB-PE-1234`. The middle segment encodes the vessel category and is
//! consumed by [`crate::category::VesselCategory::classify`].
//!
//! ## Validation
//!
//! Shape is validated at construction and input is normalized to uppercase,
//! matching how codes are printed on the physical license document. A
//! non-conforming code is a *user input* error ([`ValidationError`]) raised
//! before any registry lookup — it is never an engine error.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A validated, uppercase three-segment vessel registration code.
///
/// Deserialization funnels through [`RegistryCode::parse`], so a code read
/// from stored or wire JSON satisfies the same invariants as one built in
/// code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct RegistryCode(String);

impl RegistryCode {
    /// Parse and normalize a registration code.
    ///
    /// Surrounding whitespace is trimmed and the code is uppercased before
    /// shape validation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRegistryCode`] unless the input is
    /// exactly three hyphen-separated, non-empty, ASCII alphanumeric
    /// segments.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_uppercase();

        let segments: Vec<&str> = normalized.split('-').collect();
        if segments.len() != 3 {
            return Err(ValidationError::InvalidRegistryCode(raw));
        }
        for segment in &segments {
            if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ValidationError::InvalidRegistryCode(raw));
            }
        }

        Ok(Self(normalized))
    }

    /// Access the normalized code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The middle segment, which encodes the vessel category.
    pub fn category_segment(&self) -> &str {
        // Shape is validated at construction: exactly three segments.
        self.0.split('-').nth(1).unwrap_or_default()
    }
}

impl TryFrom<String> for RegistryCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl std::fmt::Display for RegistryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
