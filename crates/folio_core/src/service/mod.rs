//! Use-case services and presentation helpers.
//!
//! # Responsibility
//! - Orchestrate the single project fetch into listing and card APIs.
//! - Keep UI state (load progress, image selection) out of the pure model.

pub mod card;
pub mod gallery;
pub mod page_state;
pub mod project_service;
