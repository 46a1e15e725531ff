//! # vesreg-registry — The Vessel Registry Store
//!
//! The registry is the one shared mutable resource in the system: a keyed,
//! persistent collection of vessel records. It supplies the three license
//! dates to the status engine in `vesreg-core` and carries no decision
//! logic of its own — lookups attach a freshly derived status, they never
//! persist one.
//!
//! ## Pieces
//!
//! - [`record`] — the [`VesselRecord`] model keyed by registration code.
//! - [`store`] — a thread-safe in-memory store with the additive-only
//!   `insert_if_absent` operation the bulk import path relies on.
//! - [`db`] — SQLite persistence (optional; absent `DATABASE_URL` means
//!   in-memory only). The in-memory store remains the read path; the
//!   database is hydrated from and written through.

pub mod db;
pub mod record;
pub mod store;

pub use db::StoreError;
pub use record::{VesselRecord, DOCUMENT_LABEL};
pub use store::VesselStore;
