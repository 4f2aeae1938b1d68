//! Screenshot gallery helpers.
//!
//! # Responsibility
//! - Describe known screenshots by file name.
//! - Pick thumbnails and track the image selected for enlarged viewing.
//!
//! # Invariants
//! - Unknown file names fall back to a generic description.
//! - A selection is never created from an empty source.

use crate::model::project::ProjectRecord;
use serde::Serialize;

/// Display copy for one screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub short_title: &'static str,
}

const FALLBACK_IMAGE: ImageInfo = ImageInfo {
    title: "App Feature",
    description: "Screenshot preview of application functionality",
    short_title: "Feature",
};

static IMAGE_CATALOG: &[(&str, ImageInfo)] = &[
    (
        "surveyor-gps-home.png",
        ImageInfo {
            title: "Main Application Interface",
            description: "Clean, professional home screen showing the 2-in-1 geospatial suite with Ghana Grid Converter and Control Points Locator",
            short_title: "Home",
        },
    ),
    (
        "surveyor-gps-manual-grid-entry.png",
        ImageInfo {
            title: "Manual Grid to Geo Conversion",
            description: "Input Ghana Grid coordinates manually and convert to geographic coordinates for mapping and verification",
            short_title: "Grid→Geo",
        },
    ),
    (
        "surveyor-gps-manual-geo-entry.png",
        ImageInfo {
            title: "Manual Geo to Grid Conversion",
            description: "Input geographic coordinates and convert to Ghana Grid coordinates for site plans and documentation",
            short_title: "Geo→Grid",
        },
    ),
    (
        "surveyor-gps-csv-import.png",
        ImageInfo {
            title: "Bulk CSV Processing",
            description: "Import and convert multiple coordinates simultaneously between Ghana Grid and geographic systems for efficient workflow",
            short_title: "CSV Import",
        },
    ),
    (
        "surveyor-gps-dodowa-search.png",
        ImageInfo {
            title: "Control Points Database Search",
            description: "Search for official survey control points by ID or town name - featuring well-known Dodowa pillars recognized by Ghanaian surveyors",
            short_title: "Dodowa Search",
        },
    ),
    (
        "surveyor-gps-dodowa-map.png",
        ImageInfo {
            title: "Dodowa Junction Navigation",
            description: "Get precise directions to the famous Dodowa-Ashaiman junction control points using integrated Google Maps",
            short_title: "Dodowa Map",
        },
    ),
    (
        "surveyor-gps-tema-search.png",
        ImageInfo {
            title: "Tema Motorway Control Points",
            description: "Search for control points along major infrastructure like the Tema Motorway for professional surveying work",
            short_title: "Tema Search",
        },
    ),
    (
        "surveyor-gps-tema-map.png",
        ImageInfo {
            title: "Tema Motorway Navigation",
            description: "Navigate to exact control point locations at the Tema Motorway roundabout for field verification",
            short_title: "Tema Map",
        },
    ),
    (
        "surveyor-gps-details-modal.png",
        ImageInfo {
            title: "Control Point Details & Navigation",
            description: "View comprehensive pillar information including coordinates and properties, then navigate directly to field locations",
            short_title: "Details",
        },
    ),
    (
        "ita-computations-home.png",
        ImageInfo {
            title: "Web Application Interface",
            description: "Professional geospatial web app for Ghanaian surveyors featuring coordinate processing, area calculations, bearing/distance computations, and CSV imports",
            short_title: "Web App",
        },
    ),
    (
        "where-in-the-law-home.png",
        ImageInfo {
            title: "Main Law Library Interface",
            description: "Clean, professional home screen showcasing multiple legal scenarios with Ghana-themed design and intuitive navigation",
            short_title: "Home Screen",
        },
    ),
    (
        "where-in-the-law-plain-explanations.png",
        ImageInfo {
            title: "Dual-Text Law Explanations",
            description: "Core feature showing original legal text alongside plain English explanations - making complex laws accessible to everyone",
            short_title: "Law Explanations",
        },
    ),
    (
        "where-in-the-law-categories.png",
        ImageInfo {
            title: "Comprehensive Category System",
            description: "Organized browsing across 13+ legal domains with law counts and intuitive categorization for easy navigation",
            short_title: "Categories",
        },
    ),
    (
        "where-in-the-law-selected-category.png",
        ImageInfo {
            title: "Focused Legal Browsing",
            description: "Practical use case showing child protection laws with real legal content and social impact focus",
            short_title: "Category View",
        },
    ),
];

/// Looks up display copy by the last path segment of `src`.
pub fn describe_image(src: &str) -> &'static ImageInfo {
    let file_name = src.rsplit('/').next().unwrap_or(src);
    IMAGE_CATALOG
        .iter()
        .find(|(name, _)| *name == file_name)
        .map_or(&FALLBACK_IMAGE, |(_, info)| info)
}

/// Secondary images shown under the featured one.
///
/// Only projects with more than one image get thumbnails; blank entries and
/// the featured image itself are skipped.
pub fn thumbnails(record: &ProjectRecord) -> Vec<String> {
    if record.images.len() <= 1 {
        return Vec::new();
    }
    record
        .images
        .iter()
        .filter(|image| !image.trim().is_empty())
        .filter(|image| record.featured_image.as_deref() != Some(image.as_str()))
        .cloned()
        .collect()
}

/// Image currently enlarged in the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedImage {
    pub src: String,
    pub title: &'static str,
    pub description: &'static str,
}

/// Viewer selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GallerySelection {
    selected: Option<SelectedImage>,
}

impl GallerySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects an image. Returns `false` and keeps the state for blank sources.
    pub fn select(&mut self, src: &str) -> bool {
        let trimmed = src.trim();
        if trimmed.is_empty() {
            return false;
        }

        let info = describe_image(trimmed);
        let src = if trimmed.starts_with('/') || trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        self.selected = Some(SelectedImage {
            src,
            title: info.title,
            description: info.description,
        });
        true
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }
}
