//! Domain model for published portfolio projects.
//!
//! # Responsibility
//! - Define the read-only project record shape consumed by presentation.
//! - Derive display category and renderable links from raw records.
//!
//! # Invariants
//! - Records are snapshots owned by the external store; core never mutates them.
//! - Classification and link resolution are pure and total.

pub mod category;
pub mod link;
pub mod project;
