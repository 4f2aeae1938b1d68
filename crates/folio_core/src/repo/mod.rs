//! Store access for published projects.
//!
//! # Responsibility
//! - Define the read-only store contract consumed by services.
//! - Isolate Firestore REST and SQLite details behind that contract.
//!
//! # Invariants
//! - Every fetch is one read with the fixed `isPublished == true` filter.
//! - A failed fetch returns `StoreUnavailable`, never a partial list.

pub mod firestore;
pub mod project_repo;
