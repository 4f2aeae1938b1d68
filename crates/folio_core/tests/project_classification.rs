use folio_core::{
    classify, resolve_live_link, resolve_repository_link, CallToAction, Category, ProjectCard,
    ProjectRecord, NAMED_EXCEPTIONS,
};

const CANONICAL_REPO: &str = "https://github.com/life2allsofts/where_in_the_law";

fn record(id: &str, title: &str, status: &str) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: title.to_string(),
        status: status.to_string(),
        ..ProjectRecord::default()
    }
}

fn messy_url_values() -> Vec<Option<String>> {
    vec![
        None,
        Some(String::new()),
        Some("#".to_string()),
        Some("  #  ".to_string()),
        Some("bad-value".to_string()),
        Some("www.example.com".to_string()),
        Some("https://example.com/demo".to_string()),
        Some("https://github.com/x/where_in_the_law".to_string()),
    ]
}

#[test]
fn scenario_public_tool_with_empty_live_url() {
    let mut project = record("p1", "Tool X", "public");
    project.github_url = Some("https://github.com/x/y".to_string());
    project.live_url = Some(String::new());

    let category = classify(&project);
    assert_eq!(category, Category::Public);
    assert_eq!(
        resolve_repository_link(&project, category)
            .unwrap()
            .as_str(),
        "https://github.com/x/y"
    );
    assert_eq!(resolve_live_link(&project, category), None);
}

#[test]
fn scenario_private_project_offers_contact_only() {
    let mut project = record("p2", "ITA-Gh-Surveyor GPS", "private");
    project.launch_date = Some("Q1 2025".to_string());

    let category = classify(&project);
    assert_eq!(category, Category::Private);
    assert_eq!(resolve_repository_link(&project, category), None);
    assert_eq!(resolve_live_link(&project, category), None);

    let card = ProjectCard::from_record(&project);
    assert!(matches!(card.primary, CallToAction::Contact { .. }));
    assert!(matches!(card.secondary, CallToAction::Disabled { .. }));
}

#[test]
fn scenario_named_exception_ignores_bad_stored_url() {
    let mut project = record("p3", "Where In The Law", "public");
    project.github_url = Some("bad-value".to_string());

    let category = classify(&project);
    assert_eq!(category, Category::NamedException(&NAMED_EXCEPTIONS[0]));
    assert_eq!(
        resolve_repository_link(&project, category).unwrap().as_str(),
        CANONICAL_REPO
    );

    let card = ProjectCard::from_record(&project);
    assert!(matches!(card.primary, CallToAction::Contact { .. }));
    assert!(matches!(
        &card.secondary,
        CallToAction::Link { url, .. } if url.as_str() == CANONICAL_REPO
    ));
}

#[test]
fn private_status_always_wins_and_never_has_live_link() {
    for title in ["Tool", "Where In The Law", ""] {
        for url in messy_url_values() {
            let mut project = record("where-in-the-law", title, "private");
            project.github_url = url.clone();
            project.live_url = url;

            let category = classify(&project);
            assert_eq!(category, Category::Private);
            assert_eq!(resolve_live_link(&project, category), None);
        }
    }
}

#[test]
fn repository_fragment_forces_exception_even_with_garbage_url() {
    let mut project = record("x1", "Unrelated", "draft");
    project.github_url = Some("not a url where_in_the_law".to_string());

    let category = classify(&project);
    assert!(matches!(category, Category::NamedException(_)));
    assert_eq!(
        resolve_repository_link(&project, category).unwrap().as_str(),
        CANONICAL_REPO
    );
}

#[test]
fn resolved_links_are_never_placeholders() {
    for status in ["public", "private", ""] {
        for github in messy_url_values() {
            for live in messy_url_values() {
                let mut project = record("any", "Any", status);
                project.github_url = github.clone();
                project.live_url = live;
                let category = classify(&project);

                for link in [
                    resolve_repository_link(&project, category),
                    resolve_live_link(&project, category),
                ]
                .into_iter()
                .flatten()
                {
                    assert!(!link.as_str().is_empty());
                    assert_ne!(link.as_str(), "#");
                    assert!(link.as_str().starts_with("http"));
                }
            }
        }
    }
}

#[test]
fn classification_and_resolution_are_repeatable() {
    let mut project = record("p4", "Mixed", "public");
    project.github_url = Some(" https://github.com/a/b ".to_string());
    project.live_url = Some("#".to_string());

    let first = classify(&project);
    assert_eq!(first, classify(&project));
    assert_eq!(
        resolve_repository_link(&project, first),
        resolve_repository_link(&project, first)
    );
    assert_eq!(
        ProjectCard::from_record(&project),
        ProjectCard::from_record(&project)
    );
}

#[test]
fn missing_fields_degrade_to_public_with_placeholders() {
    let project = ProjectRecord::default();
    let card = ProjectCard::from_record(&project);

    assert_eq!(card.category, Category::Public);
    assert_eq!(card.primary.label(), "Demo Coming Soon");
    assert_eq!(card.secondary.label(), "Code Private");
    assert_eq!(card.badge, "Public • Live");
}
