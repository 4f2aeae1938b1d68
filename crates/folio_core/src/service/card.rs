//! Project card projection.
//!
//! # Responsibility
//! - Combine classification and link resolution into button decisions.
//! - Keep mail addresses and markup out of core; only intents are emitted.
//!
//! # Invariants
//! - Private and named-exception cards lead with a contact action.
//! - Private cards never expose a repository anchor.
//! - Every missing link becomes an explicit `Disabled` placeholder.

use crate::model::category::{classify, Category};
use crate::model::link::{resolve_live_link, resolve_repository_link, RenderableUrl};
use crate::model::project::ProjectRecord;
use crate::service::gallery::thumbnails;
use serde::Serialize;

pub const LABEL_REQUEST_DEMO: &str = "Request Demo";
pub const LABEL_LIVE_DEMO: &str = "Live Demo";
pub const LABEL_VIEW_CODE: &str = "View Code";
pub const LABEL_DEMO_COMING_SOON: &str = "Demo Coming Soon";
pub const LABEL_CODE_PRIVATE: &str = "Code Private";
pub const LABEL_PRIVATE_REPOSITORY: &str = "Private Repository";

/// Why the visitor is asked to get in touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactIntent {
    Inquiry,
    DemoRequest,
}

impl ContactIntent {
    /// Mail subject line for this intent.
    pub fn subject(&self, title: &str) -> String {
        match self {
            Self::Inquiry => format!("Inquiry: {title}"),
            Self::DemoRequest => format!("Demo Request: {title}"),
        }
    }
}

/// One rendered button slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallToAction {
    Link {
        label: &'static str,
        url: RenderableUrl,
    },
    Contact {
        label: &'static str,
        intent: ContactIntent,
    },
    Disabled {
        label: &'static str,
    },
}

impl CallToAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Link { label, .. } | Self::Contact { label, .. } | Self::Disabled { label } => {
                *label
            }
        }
    }

    fn link_or_disabled(
        url: Option<RenderableUrl>,
        label: &'static str,
        disabled_label: &'static str,
    ) -> Self {
        match url {
            Some(url) => Self::Link { label, url },
            None => Self::Disabled {
                label: disabled_label,
            },
        }
    }
}

/// Presentation-ready view of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub badge: String,
    pub tech_labels: Vec<String>,
    pub featured_image: Option<String>,
    pub thumbnails: Vec<String>,
    pub repository_link: Option<RenderableUrl>,
    pub live_link: Option<RenderableUrl>,
    pub primary: CallToAction,
    pub secondary: CallToAction,
}

impl ProjectCard {
    pub fn from_record(record: &ProjectRecord) -> Self {
        let category = classify(record);
        let repository_link = match category {
            Category::Private => None,
            Category::NamedException(_) | Category::Public => {
                resolve_repository_link(record, category)
            }
        };
        let live_link = resolve_live_link(record, category);

        let (primary, secondary) = match category {
            Category::Private => (
                CallToAction::Contact {
                    label: LABEL_REQUEST_DEMO,
                    intent: ContactIntent::Inquiry,
                },
                CallToAction::Disabled {
                    label: LABEL_PRIVATE_REPOSITORY,
                },
            ),
            Category::NamedException(_) => (
                CallToAction::Contact {
                    label: LABEL_REQUEST_DEMO,
                    intent: ContactIntent::DemoRequest,
                },
                CallToAction::link_or_disabled(
                    repository_link.clone(),
                    LABEL_VIEW_CODE,
                    LABEL_CODE_PRIVATE,
                ),
            ),
            Category::Public => (
                CallToAction::link_or_disabled(
                    live_link.clone(),
                    LABEL_LIVE_DEMO,
                    LABEL_DEMO_COMING_SOON,
                ),
                CallToAction::link_or_disabled(
                    repository_link.clone(),
                    LABEL_VIEW_CODE,
                    LABEL_CODE_PRIVATE,
                ),
            ),
        };

        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            category,
            badge: status_badge(record),
            tech_labels: record.tech_labels().into_iter().map(str::to_string).collect(),
            featured_image: record
                .featured_image
                .clone()
                .filter(|image| !image.trim().is_empty()),
            thumbnails: thumbnails(record),
            repository_link,
            live_link,
            primary,
            secondary,
        }
    }
}

fn status_badge(record: &ProjectRecord) -> String {
    if !record.is_private() {
        return "Public • Live".to_string();
    }
    match record.private_launch_date() {
        Some(date) => format!("Private • {date}"),
        None => "Private".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{CallToAction, ContactIntent, ProjectCard};
    use crate::model::project::ProjectRecord;

    #[test]
    fn contact_subjects_include_title() {
        assert_eq!(ContactIntent::Inquiry.subject("GPS"), "Inquiry: GPS");
        assert_eq!(
            ContactIntent::DemoRequest.subject("Where In The Law"),
            "Demo Request: Where In The Law"
        );
    }

    #[test]
    fn private_card_hides_repository_even_when_valid() {
        let record = ProjectRecord {
            id: "p2".into(),
            title: "ITA-Gh-Surveyor GPS".into(),
            status: "private".into(),
            launch_date: Some("Q1 2025".into()),
            github_url: Some("https://github.com/x/gps".into()),
            ..ProjectRecord::default()
        };
        let card = ProjectCard::from_record(&record);

        assert_eq!(card.badge, "Private • Q1 2025");
        assert_eq!(card.repository_link, None);
        assert_eq!(card.secondary.label(), "Private Repository");
        assert!(matches!(
            card.primary,
            CallToAction::Contact {
                intent: ContactIntent::Inquiry,
                ..
            }
        ));
    }

    #[test]
    fn private_card_json_never_carries_repository_url() {
        let record = ProjectRecord {
            id: "secret".into(),
            title: "Secret".into(),
            status: "private".into(),
            github_url: Some("https://github.com/owner/secret-repo".into()),
            live_url: Some("https://secret.example.app".into()),
            ..ProjectRecord::default()
        };
        let json = serde_json::to_value(ProjectCard::from_record(&record)).unwrap();

        assert_eq!(json["repository_link"], serde_json::Value::Null);
        assert_eq!(json["live_link"], serde_json::Value::Null);
        assert!(!json.to_string().contains("secret-repo"));
    }

    #[test]
    fn card_serializes_button_kinds() {
        let record = ProjectRecord {
            id: "p1".into(),
            title: "Tool X".into(),
            github_url: Some("https://github.com/x/y".into()),
            ..ProjectRecord::default()
        };
        let json = serde_json::to_value(ProjectCard::from_record(&record)).unwrap();

        assert_eq!(json["category"], "public");
        assert_eq!(json["primary"]["kind"], "disabled");
        assert_eq!(json["primary"]["label"], "Demo Coming Soon");
        assert_eq!(json["secondary"]["kind"], "link");
        assert_eq!(json["secondary"]["url"], "https://github.com/x/y");
    }
}
