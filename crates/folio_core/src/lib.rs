//! Core project-data layer for the Folio portfolio site.
//! This crate is the single source of truth for classification and link rules.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, ContactConfig, FirestoreConfig, FolioConfig, SqliteConfig};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingError};
pub use model::category::{classify, Category, NamedException, NAMED_EXCEPTIONS};
pub use model::link::{resolve_live_link, resolve_repository_link, RenderableUrl};
pub use model::project::ProjectRecord;
pub use repo::firestore::FirestoreProjectStore;
pub use repo::project_repo::{ProjectStore, RepoError, RepoResult, SqliteProjectStore};
pub use service::card::{CallToAction, ContactIntent, ProjectCard};
pub use service::gallery::{describe_image, GallerySelection, ImageInfo, SelectedImage};
pub use service::page_state::{LoadState, ViewMessage};
pub use service::project_service::ProjectService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
