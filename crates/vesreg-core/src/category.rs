//! # Vessel Categories — Single Source of Truth
//!
//! Defines the [`VesselCategory`] enum and the one fixed table that maps the
//! middle segment of a registration code to a category. Both the manual
//! registration path and the bulk import path classify through this module —
//! there is no second copy of the table to drift.
//!
//! ## Leniency
//!
//! Classification never fails. An unmapped or malformed segment classifies
//! as [`VesselCategory::Unknown`] so that a single bad code can never abort
//! an import or block a registration.

use serde::{Deserialize, Serialize};

use crate::registry_code::RegistryCode;

/// The category of a registered vessel, encoded in the middle segment of
/// its registration code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VesselCategory {
    /// Fishing vessels (`PE`).
    Fishing,
    /// Cargo vessels (`CA`).
    Cargo,
    /// Service vessels (`SE`).
    Service,
    /// Recreational craft (`RE`).
    Recreation,
    /// Tourism vessels (`TU`).
    Tourism,
    /// Navigation accessories — barges, pontoons (`AC`).
    NavigationAccessory,
    /// Passenger transport (`PJ`).
    Passenger,
    /// Sport craft (`DE`).
    Sport,
    /// Segment not in the table, or code malformed.
    Unknown,
}

impl VesselCategory {
    /// Classify a validated registration code by its middle segment.
    pub fn classify(code: &RegistryCode) -> Self {
        Self::from_segment(code.category_segment())
    }

    /// Map a raw middle segment through the fixed table.
    ///
    /// Unmapped segments yield [`VesselCategory::Unknown`] — never an error.
    pub fn from_segment(segment: &str) -> Self {
        match segment.trim().to_ascii_uppercase().as_str() {
            "PE" => Self::Fishing,
            "CA" => Self::Cargo,
            "SE" => Self::Service,
            "RE" => Self::Recreation,
            "TU" => Self::Tourism,
            "AC" => Self::NavigationAccessory,
            "PJ" => Self::Passenger,
            "DE" => Self::Sport,
            _ => Self::Unknown,
        }
    }

    /// Parse a category label, as produced by [`VesselCategory::as_str`].
    ///
    /// Case-insensitive. Returns `None` for unrecognized labels (note that
    /// `"UNKNOWN"` parses to `Some(Unknown)` — it is a real category label).
    pub fn from_label(label: &str) -> Option<Self> {
        let upper = label.trim().to_ascii_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|category| category.as_str() == upper)
    }

    /// Return the string representation of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fishing => "FISHING",
            Self::Cargo => "CARGO",
            Self::Service => "SERVICE",
            Self::Recreation => "RECREATION",
            Self::Tourism => "TOURISM",
            Self::NavigationAccessory => "NAVIGATION_ACCESSORY",
            Self::Passenger => "PASSENGER",
            Self::Sport => "SPORT",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Return all categories as a slice, in table order.
    pub fn all() -> &'static [VesselCategory] {
        &[
            Self::Fishing,
            Self::Cargo,
            Self::Service,
            Self::Recreation,
            Self::Tourism,
            Self::NavigationAccessory,
            Self::Passenger,
            Self::Sport,
            Self::Unknown,
        ]
    }
}

impl std::fmt::Display for VesselCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
