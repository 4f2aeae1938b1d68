//! Project listing load state.
//!
//! # Responsibility
//! - Track one page load as `Idle -> Loading -> Loaded | Failed`.
//! - Map the outcome to a user-facing message.
//!
//! # Invariants
//! - A load starts only from `Idle`; one fetch per mount.
//! - An empty successful load is distinct from a failed load.

use crate::repo::project_repo::RepoResult;
use crate::service::card::ProjectCard;

pub const MESSAGE_LOADING: &str = "Loading projects...";
pub const MESSAGE_EMPTY: &str = "No projects published yet. Check back soon!";
pub const MESSAGE_FAILED: &str = "Could not load projects.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<ProjectCard>),
    /// Carries the error text for diagnostics, not for display.
    Failed(String),
}

/// Message shown instead of (or alongside) the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMessage {
    Loading,
    Empty,
    Failed,
}

impl ViewMessage {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Loading => MESSAGE_LOADING,
            Self::Empty => MESSAGE_EMPTY,
            Self::Failed => MESSAGE_FAILED,
        }
    }
}

impl LoadState {
    /// `Idle -> Loading`. Returns `false` for any other starting state.
    pub fn begin(&mut self) -> bool {
        if *self != Self::Idle {
            return false;
        }
        *self = Self::Loading;
        true
    }

    /// `Loading -> Loaded | Failed`. Returns `false` when not loading.
    pub fn finish(&mut self, result: RepoResult<Vec<ProjectCard>>) -> bool {
        if *self != Self::Loading {
            return false;
        }
        *self = match result {
            Ok(cards) => Self::Loaded(cards),
            Err(err) => Self::Failed(err.to_string()),
        };
        true
    }

    /// Runs one load through `fetch` when idle.
    pub fn load_with(&mut self, fetch: impl FnOnce() -> RepoResult<Vec<ProjectCard>>) -> bool {
        if !self.begin() {
            return false;
        }
        self.finish(fetch())
    }

    pub fn cards(&self) -> &[ProjectCard] {
        match self {
            Self::Loaded(cards) => cards,
            _ => &[],
        }
    }

    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::Loaded(cards) if cards.is_empty())
    }

    pub fn message(&self) -> Option<ViewMessage> {
        match self {
            Self::Idle => None,
            Self::Loading => Some(ViewMessage::Loading),
            Self::Loaded(cards) if cards.is_empty() => Some(ViewMessage::Empty),
            Self::Loaded(_) => None,
            Self::Failed(_) => Some(ViewMessage::Failed),
        }
    }
}
