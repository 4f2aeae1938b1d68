//! Project display classification.
//!
//! # Responsibility
//! - Derive the display category of a project from its raw record.
//! - Hold the curated exception table for projects with unreliable metadata.
//!
//! # Invariants
//! - `status == "private"` always wins, regardless of other fields.
//! - Exception matching is case-insensitive on title/id and literal on `githubUrl`.
//! - Classification never fails; absent fields compare as empty strings.

use crate::model::project::ProjectRecord;
use serde::{Serialize, Serializer};

/// Curated override for a project whose stored metadata cannot be trusted.
#[derive(Debug, PartialEq, Eq)]
pub struct NamedException {
    /// Stable key used in logs and serialized output.
    pub key: &'static str,
    /// Lowercase markers searched in the lowercased title and id.
    pub title_markers: &'static [&'static str],
    /// Fragment searched verbatim in the stored `githubUrl`.
    pub repository_fragment: &'static str,
    /// Repository URL rendered instead of the stored one.
    pub canonical_repository_url: &'static str,
}

impl NamedException {
    fn matches(&self, record: &ProjectRecord) -> bool {
        let title = record.title.to_lowercase();
        let id = record.id.to_lowercase();
        let marker_hit = self
            .title_markers
            .iter()
            .any(|marker| title.contains(marker) || id.contains(marker));

        marker_hit
            || record
                .github_url
                .as_deref()
                .is_some_and(|url| url.contains(self.repository_fragment))
    }
}

/// Exception table. New overrides are added here, not in `classify`.
pub static NAMED_EXCEPTIONS: &[NamedException] = &[NamedException {
    key: "where_in_the_law",
    title_markers: &["where in the law", "where-in-the-law"],
    repository_fragment: "where_in_the_law",
    canonical_repository_url: "https://github.com/life2allsofts/where_in_the_law",
}];

/// Display category controlling which call-to-action buttons render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Private,
    NamedException(&'static NamedException),
    Public,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::NamedException(_) => "named_exception",
            Self::Public => "public",
        }
    }

    /// Projects in these categories offer a contact action instead of a demo.
    pub fn prefers_contact(&self) -> bool {
        matches!(self, Self::Private | Self::NamedException(_))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Classifies one record. First match wins.
pub fn classify(record: &ProjectRecord) -> Category {
    classify_with(record, NAMED_EXCEPTIONS)
}

/// Classifies against an explicit exception table.
pub fn classify_with(record: &ProjectRecord, exceptions: &'static [NamedException]) -> Category {
    if record.is_private() {
        return Category::Private;
    }

    match exceptions.iter().find(|entry| entry.matches(record)) {
        Some(entry) => Category::NamedException(entry),
        None => Category::Public,
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, classify_with, Category, NamedException, NAMED_EXCEPTIONS};
    use crate::model::project::ProjectRecord;

    fn record(id: &str, title: &str, status: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: title.to_string(),
            status: status.to_string(),
            ..ProjectRecord::default()
        }
    }

    #[test]
    fn private_status_beats_exception_markers() {
        let mut project = record("where-in-the-law", "Where In The Law", "private");
        project.github_url = Some("https://github.com/a/where_in_the_law".to_string());
        assert_eq!(classify(&project), Category::Private);
    }

    #[test]
    fn exception_matches_title_case_insensitively() {
        let project = record("p3", "WHERE IN THE LAW", "public");
        assert_eq!(
            classify(&project),
            Category::NamedException(&NAMED_EXCEPTIONS[0])
        );
    }

    #[test]
    fn exception_matches_hyphenated_id() {
        let project = record("Where-In-The-Law-v2", "Legal reader", "");
        assert!(matches!(classify(&project), Category::NamedException(_)));
    }

    #[test]
    fn repository_fragment_is_matched_literally() {
        let mut project = record("p9", "Legal reader", "public");
        project.github_url = Some("https://github.com/x/WHERE_IN_THE_LAW".to_string());
        assert_eq!(classify(&project), Category::Public);

        project.github_url = Some("garbage where_in_the_law garbage".to_string());
        assert!(matches!(classify(&project), Category::NamedException(_)));
    }

    #[test]
    fn status_comparison_is_exact() {
        assert_eq!(classify(&record("p1", "Tool", "Private")), Category::Public);
        assert_eq!(classify(&record("p1", "Tool", "")), Category::Public);
    }

    #[test]
    fn empty_table_never_yields_exception() {
        static EMPTY: &[NamedException] = &[];
        let project = record("where-in-the-law", "Where In The Law", "public");
        assert_eq!(classify_with(&project, EMPTY), Category::Public);
    }

    #[test]
    fn category_serializes_as_stable_name() {
        let json = serde_json::to_string(&Category::NamedException(&NAMED_EXCEPTIONS[0]))
            .expect("category should serialize");
        assert_eq!(json, "\"named_exception\"");
        assert!(Category::Private.prefers_contact());
        assert!(!Category::Public.prefers_contact());
    }
}
