//! The image gallery: a static catalog plus the grid/preview selection.
//!
//! The catalog is the one data file in the system - an embedded JSON
//! table parsed and validated once per process. Changing it means
//! rebuilding the bundle; nothing edits it at runtime.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: u32,
    /// Bundle-relative asset path; a missing file degrades to the
    /// webview's broken-image rendering.
    pub url: String,
    pub caption: String,
    /// Accent glyph shown on the card badge and in the preview.
    pub emoji: String,
    /// CSS gradient used for the card glow.
    pub theme: String,
}

const CATALOG_JSON: &str = include_str!("../assets/images.json");

static CATALOG: OnceLock<Vec<ImageRecord>> = OnceLock::new();

/// The full catalog, parsed and validated on first access.
pub fn catalog() -> Result<&'static [ImageRecord], CatalogError> {
    if let Some(records) = CATALOG.get() {
        return Ok(records);
    }
    let parsed = parse_catalog(CATALOG_JSON)?;
    Ok(CATALOG.get_or_init(|| parsed))
}

/// Look up a record by id.
pub fn find(id: u32) -> Option<&'static ImageRecord> {
    catalog().ok()?.iter().find(|record| record.id == id)
}

fn parse_catalog(json: &str) -> Result<Vec<ImageRecord>, CatalogError> {
    let records: Vec<ImageRecord> = serde_json::from_str(json)?;

    if records.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut seen = std::collections::HashSet::new();
    for record in &records {
        if !seen.insert(record.id) {
            return Err(CatalogError::DuplicateId(record.id));
        }
        if record.url.trim().is_empty() {
            return Err(CatalogError::MissingUrl(record.id));
        }
    }

    Ok(records)
}

/// Which image, if any, is open in the full-screen preview.
///
/// Absent means the grid is showing. Selection is owned by the gallery
/// modal and resets whenever the modal is remounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GallerySelection {
    selected: Option<u32>,
}

impl GallerySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_previewing(&self) -> bool {
        self.selected.is_some()
    }

    /// Open the full-screen preview on a record.
    pub fn select(&mut self, id: u32) {
        self.selected = Some(id);
    }

    /// Back to the grid.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Resolve the selected record against the catalog.
    pub fn record(&self) -> Option<&'static ImageRecord> {
        find(self.selected?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_is_valid() {
        let records = catalog().expect("embedded catalog must parse");
        assert_eq!(records.len(), 14);
    }

    #[test]
    fn ids_are_unique_and_sequential() {
        let records = catalog().unwrap();
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.id, i as u32 + 1);
        }
    }

    #[test]
    fn selection_round_trip() {
        let mut selection = GallerySelection::new();
        assert!(!selection.is_previewing());

        selection.select(3);
        let record = selection.record().expect("id 3 exists");
        assert_eq!(record.caption, "Beautiful Moments with You 🌹");
        assert_eq!(record.emoji, "🌹");

        selection.clear();
        assert!(!selection.is_previewing());
        assert_eq!(selection.record(), None);
    }

    #[test]
    fn find_unknown_id_is_none() {
        assert_eq!(find(999), None);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "url": "a.jpeg", "caption": "a", "emoji": "💕", "theme": "t"},
            {"id": 1, "url": "b.jpeg", "caption": "b", "emoji": "💖", "theme": "t"}
        ]"#;
        assert!(matches!(
            parse_catalog(json),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn rejects_empty_catalog_and_blank_urls() {
        assert!(matches!(parse_catalog("[]"), Err(CatalogError::Empty)));

        let json = r#"[{"id": 4, "url": "  ", "caption": "c", "emoji": "✨", "theme": "t"}]"#;
        assert!(matches!(
            parse_catalog(json),
            Err(CatalogError::MissingUrl(4))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_catalog("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
