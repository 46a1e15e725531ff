//! # Route Modules
//!
//! - [`vessels`] — registry CRUD, dashboard listing, and the public
//!   license-status lookup.
//! - [`import`] — bulk CSV import.

pub mod import;
pub mod vessels;
