//! # vesreg-core — Foundational Types for the Vessel Registration Stack
//!
//! This crate is the bedrock of the VESREG stack. It defines the domain
//! primitives and the one piece of real decision logic in the system: the
//! navigation license status engine. Every other crate in the workspace
//! depends on `vesreg-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`RegistryCode`] and
//!    [`OwnerId`] are validated newtypes — no bare strings for identifiers.
//!    A registry code that does not have the three-segment shape is
//!    unrepresentable.
//!
//! 2. **One classification table.** [`VesselCategory::classify`] is the
//!    single middle-segment lookup consumed by both the manual registration
//!    path and the bulk import path. There is no second copy to drift.
//!
//! 3. **Injected time.** The license engine takes `today` as an argument.
//!    It never reads the system clock, so every evaluation is deterministic
//!    and testable.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vesreg-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod category;
pub mod error;
pub mod identity;
pub mod license;
pub mod registry_code;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use category::VesselCategory;
pub use error::ValidationError;
pub use identity::{OwnerId, VesselId};
pub use license::{
    endorsement_deadline, evaluate, Advisory, EvaluationError, LicenseStatus, StatusReport,
    ENDORSEMENT_GRACE_DAYS, LICENSE_VALIDITY_DAYS,
};
pub use registry_code::RegistryCode;
pub use temporal::{parse_date, parse_date_lenient};
