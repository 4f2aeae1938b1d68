//! Project listing use-case service.
//!
//! # Responsibility
//! - Call the injected store once per listing.
//! - Apply the documented listing order.
//! - Turn records into presentation cards.
//!
//! # Invariants
//! - Listing order is `created_at DESC` (missing timestamps last), then `id ASC`.
//! - A store failure is returned unchanged; no retry happens here.

use crate::model::project::ProjectRecord;
use crate::repo::project_repo::{ProjectStore, RepoResult};
use crate::service::card::ProjectCard;
use log::{error, info};
use std::cmp::Ordering;
use std::time::Instant;

/// Service facade over one injected project store.
pub struct ProjectService<S: ProjectStore> {
    store: S,
}

impl<S: ProjectStore> ProjectService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetches published projects in listing order.
    ///
    /// An empty vector means "no published projects"; an error means the
    /// store could not be read.
    pub fn fetch_published_projects(&self) -> RepoResult<Vec<ProjectRecord>> {
        let started_at = Instant::now();
        let backend = self.store.backend_name();

        match self.store.fetch_published_projects() {
            Ok(mut records) => {
                sort_for_listing(&mut records);
                info!(
                    "event=projects_fetch module=service status=ok backend={} count={} duration_ms={}",
                    backend,
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(records)
            }
            Err(err) => {
                error!(
                    "event=projects_fetch module=service status=error backend={} duration_ms={} error={}",
                    backend,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Fetches published projects and derives one card per record.
    pub fn project_cards(&self) -> RepoResult<Vec<ProjectCard>> {
        Ok(self
            .fetch_published_projects()?
            .iter()
            .map(ProjectCard::from_record)
            .collect())
    }
}

/// Sorts records into listing order.
pub fn sort_for_listing(records: &mut [ProjectRecord]) {
    records.sort_by(|left, right| {
        compare_created_desc(left.created_at, right.created_at).then_with(|| left.id.cmp(&right.id))
    });
}

fn compare_created_desc(left: Option<i64>, right: Option<i64>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
