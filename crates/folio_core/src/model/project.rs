//! Project record model.
//!
//! # Responsibility
//! - Define the canonical project record read from document stores.
//! - Decode loosely-typed store documents without failing.
//!
//! # Invariants
//! - `id` is the store document id and stays stable across reads.
//! - Missing or mistyped fields degrade to empty defaults, never errors.
//! - `launch_date` is meaningful only when `status == "private"`.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status value that marks a project as private.
pub const PRIVATE_STATUS: &str = "private";

/// One project document as stored in the `projects` collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Opaque document id.
    pub id: String,
    pub title: String,
    pub description: String,
    /// May be absent, empty, `#` or garbage.
    pub github_url: Option<String>,
    /// Same laxity as `github_url`.
    pub live_url: Option<String>,
    /// Rendering order matters; duplicates are allowed.
    pub tech_stack: Vec<String>,
    /// Open set; only `"private"` carries meaning.
    pub status: String,
    pub launch_date: Option<String>,
    pub featured_image: Option<String>,
    pub images: Vec<String>,
    pub is_published: bool,
    /// Unix epoch milliseconds. Sort key for published listings.
    pub created_at: Option<i64>,
}

impl ProjectRecord {
    /// Builds a record from a plain JSON field map.
    ///
    /// Every field is read leniently: a value of the wrong type is treated
    /// as absent. This keeps one bad field from hiding a whole project.
    pub fn from_document(id: impl Into<String>, fields: &Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            title: string_field(fields, "title").unwrap_or_default(),
            description: string_field(fields, "description").unwrap_or_default(),
            github_url: string_field(fields, "githubUrl"),
            live_url: string_field(fields, "liveUrl"),
            tech_stack: string_list_field(fields, "techStack"),
            status: string_field(fields, "status").unwrap_or_default(),
            launch_date: string_field(fields, "launchDate"),
            featured_image: string_field(fields, "featuredImage"),
            images: string_list_field(fields, "images"),
            is_published: fields
                .get("isPublished")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            created_at: fields.get("dateCreated").and_then(parse_timestamp_millis),
        }
    }

    /// Returns whether the stored status marks this project private.
    pub fn is_private(&self) -> bool {
        self.status == PRIVATE_STATUS
    }

    /// Launch date label, only for private projects with a non-blank value.
    pub fn private_launch_date(&self) -> Option<&str> {
        if !self.is_private() {
            return None;
        }
        self.launch_date
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Tech labels trimmed for display, blank entries skipped, order kept.
    pub fn tech_labels(&self) -> Vec<&str> {
        self.tech_stack
            .iter()
            .map(|label| label.trim())
            .filter(|label| !label.is_empty())
            .collect()
    }
}

/// Converts a timestamp JSON value into epoch milliseconds.
///
/// Accepts RFC 3339 strings and integer epoch milliseconds.
pub fn parse_timestamp_millis(value: &Value) -> Option<i64> {
    match value {
        Value::String(text) => DateTime::parse_from_rfc3339(text.trim())
            .ok()
            .map(|parsed| parsed.timestamp_millis()),
        Value::Number(number) => number.as_i64(),
        _ => None,
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

fn string_list_field(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    match fields.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_timestamp_millis, ProjectRecord};
    use serde_json::{json, Map, Value};

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("fixture must be an object")
    }

    #[test]
    fn from_document_reads_all_known_fields() {
        let record = ProjectRecord::from_document(
            "ita-computations",
            &fields(json!({
                "title": "ITA-COMPUTATIONS",
                "description": "Geospatial web app",
                "githubUrl": "https://github.com/x/y",
                "liveUrl": "https://example.app",
                "techStack": ["Flutter", " Dart "],
                "status": "public",
                "featuredImage": "/images/home.png",
                "images": ["/images/home.png", "/images/map.png"],
                "isPublished": true,
                "dateCreated": "2024-11-01T09:00:00Z"
            })),
        );

        assert_eq!(record.id, "ita-computations");
        assert_eq!(record.title, "ITA-COMPUTATIONS");
        assert_eq!(record.github_url.as_deref(), Some("https://github.com/x/y"));
        assert_eq!(record.tech_stack, vec!["Flutter", " Dart "]);
        assert_eq!(record.images.len(), 2);
        assert!(record.is_published);
        assert_eq!(record.created_at, Some(1_730_451_600_000));
    }

    #[test]
    fn from_document_degrades_mistyped_fields_to_defaults() {
        let record = ProjectRecord::from_document(
            "",
            &fields(json!({
                "title": 42,
                "githubUrl": false,
                "techStack": "Rust",
                "images": ["a.png", 7, null],
                "isPublished": "yes",
                "dateCreated": {"seconds": 1}
            })),
        );

        assert_eq!(record.title, "");
        assert_eq!(record.github_url, None);
        assert!(record.tech_stack.is_empty());
        assert_eq!(record.images, vec!["a.png"]);
        assert!(!record.is_published);
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn launch_date_is_only_exposed_for_private_projects() {
        let mut record = ProjectRecord {
            status: "public".to_string(),
            launch_date: Some("Q1 2025".to_string()),
            ..ProjectRecord::default()
        };
        assert_eq!(record.private_launch_date(), None);

        record.status = "private".to_string();
        assert_eq!(record.private_launch_date(), Some("Q1 2025"));
    }

    #[test]
    fn tech_labels_are_trimmed_and_keep_order() {
        let record = ProjectRecord {
            tech_stack: vec![" Next.js".into(), "".into(), "Firebase ".into(), "Next.js".into()],
            ..ProjectRecord::default()
        };
        assert_eq!(record.tech_labels(), vec!["Next.js", "Firebase", "Next.js"]);
    }

    #[test]
    fn parse_timestamp_accepts_rfc3339_and_millis() {
        assert_eq!(
            parse_timestamp_millis(&json!("1970-01-01T00:00:01.500Z")),
            Some(1_500)
        );
        assert_eq!(parse_timestamp_millis(&json!(1_234)), Some(1_234));
        assert_eq!(parse_timestamp_millis(&json!("not a date")), None);
    }
}
