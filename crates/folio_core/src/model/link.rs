//! Link resolution for project call-to-action buttons.
//!
//! # Responsibility
//! - Decide which stored URLs are safe to render as anchors.
//! - Apply category rules for repository and live-demo links.
//!
//! # Invariants
//! - A `RenderableUrl` is never empty, never `#`, and always has an HTTP(S)
//!   scheme followed by at least one host character.
//! - `None` is the explicit "no link" outcome; callers render a disabled placeholder.

use crate::model::category::Category;
use crate::model::project::ProjectRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt::{Display, Formatter};

static HTTP_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://[^\s/?#]").expect("valid scheme regex"));

/// URL that passed the render validity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderableUrl(String);

impl RenderableUrl {
    /// Validates a raw stored value. Returns the trimmed URL when renderable.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "#" || !HTTP_SCHEME_RE.is_match(trimmed) {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RenderableUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves the repository link for a classified record.
///
/// Named exceptions ignore the stored field and use the curated URL.
pub fn resolve_repository_link(record: &ProjectRecord, category: Category) -> Option<RenderableUrl> {
    match category {
        Category::NamedException(entry) => RenderableUrl::parse(entry.canonical_repository_url),
        Category::Private | Category::Public => {
            record.github_url.as_deref().and_then(RenderableUrl::parse)
        }
    }
}

/// Resolves the live-demo link for a classified record.
///
/// Private projects never expose a live demo.
pub fn resolve_live_link(record: &ProjectRecord, category: Category) -> Option<RenderableUrl> {
    match category {
        Category::Private => None,
        Category::NamedException(_) | Category::Public => {
            record.live_url.as_deref().and_then(RenderableUrl::parse)
        }
    }
}
