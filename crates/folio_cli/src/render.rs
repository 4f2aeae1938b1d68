//! Text and JSON rendering of the project listing.

use folio_core::{CallToAction, GallerySelection, LoadState, ProjectCard, SelectedImage};
use serde::Serialize;

/// JSON envelope for one listing.
#[derive(Serialize)]
struct ListingOutput<'a> {
    status: &'static str,
    message: Option<&'static str>,
    projects: Vec<CardOutput<'a>>,
    selected_image: Option<&'a SelectedImage>,
}

#[derive(Serialize)]
struct CardOutput<'a> {
    #[serde(flatten)]
    card: &'a ProjectCard,
    primary_href: Option<String>,
    secondary_href: Option<String>,
}

pub fn render_json(
    state: &LoadState,
    gallery: &GallerySelection,
    contact_email: Option<&str>,
) -> serde_json::Result<String> {
    let status = match state {
        LoadState::Idle => "idle",
        LoadState::Loading => "loading",
        LoadState::Loaded(_) => "loaded",
        LoadState::Failed(_) => "failed",
    };
    let output = ListingOutput {
        status,
        message: state.message().map(|message| message.text()),
        projects: state
            .cards()
            .iter()
            .map(|card| CardOutput {
                card,
                primary_href: href(&card.primary, &card.title, contact_email),
                secondary_href: href(&card.secondary, &card.title, contact_email),
            })
            .collect(),
        selected_image: gallery.selected(),
    };
    serde_json::to_string_pretty(&output)
}

pub fn render_text(
    state: &LoadState,
    gallery: &GallerySelection,
    contact_email: Option<&str>,
) -> String {
    let mut out = match state.message() {
        Some(message) => format!("{}\n", message.text()),
        None => listing_text(state, contact_email),
    };
    if let Some(image) = gallery.selected() {
        out.push_str(&format!(
            "viewing: {}\n  {}\n  {}\n",
            image.title, image.description, image.src
        ));
    }
    out
}

fn listing_text(state: &LoadState, contact_email: Option<&str>) -> String {
    let mut out = String::new();
    for card in state.cards() {
        out.push_str(&format!("{}  [{}]\n", card.title, card.badge));
        if !card.description.is_empty() {
            out.push_str(&format!("  {}\n", card.description));
        }
        if !card.tech_labels.is_empty() {
            out.push_str(&format!("  tech: {}\n", card.tech_labels.join(" · ")));
        }
        match &card.featured_image {
            Some(image) => out.push_str(&format!(
                "  image: {} (+{} more)\n",
                image,
                card.thumbnails.len()
            )),
            None => out.push_str("  image: Screenshot coming soon\n"),
        }
        out.push_str(&format!(
            "  {}   {}\n\n",
            button(&card.primary, &card.title, contact_email),
            button(&card.secondary, &card.title, contact_email)
        ));
    }
    out
}

fn button(action: &CallToAction, title: &str, contact_email: Option<&str>) -> String {
    match (action, href(action, title, contact_email)) {
        (CallToAction::Disabled { label }, _) => format!("({label})"),
        (_, Some(target)) => format!("[{} -> {}]", action.label(), target),
        (_, None) => format!("[{}]", action.label()),
    }
}

fn href(action: &CallToAction, title: &str, contact_email: Option<&str>) -> Option<String> {
    match action {
        CallToAction::Link { url, .. } => Some(url.to_string()),
        CallToAction::Contact { intent, .. } => contact_email.map(|email| {
            format!(
                "mailto:{}?subject={}",
                email,
                urlencoding::encode(&intent.subject(title))
            )
        }),
        CallToAction::Disabled { .. } => None,
    }
}
