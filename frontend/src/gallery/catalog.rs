use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoItem {
    pub src: String,
    #[serde(default)]
    pub poster: Option<String>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid gallery catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only map from service key to its ordered list of videos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct GalleryCatalog {
    galleries: HashMap<String, Vec<VideoItem>>,
}

impl GalleryCatalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The catalog shipped with the site. A broken document leaves every
    /// gallery empty instead of taking the page down.
    pub fn builtin() -> Self {
        match Self::from_json(config::GALLERY_CATALOG_JSON) {
            Ok(catalog) => {
                log::info!("Loaded {} galleries", catalog.galleries.len());
                catalog
            }
            Err(e) => {
                log::error!("Failed to load gallery catalog: {}", e);
                Self::default()
            }
        }
    }

    /// Items for `key`, or an empty list when the key is unknown.
    pub fn items_for(&self, key: &str) -> Vec<VideoItem> {
        self.galleries.get(key).cloned().unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.galleries.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_every_service() {
        let catalog = GalleryCatalog::builtin();
        for key in ["television", "tours", "comerciales", "festivales"] {
            assert!(catalog.contains(key), "missing gallery {key}");
            assert_eq!(catalog.items_for(key).len(), 2);
        }
    }

    #[test]
    fn items_keep_document_order() {
        let catalog = GalleryCatalog::from_json(
            r#"{"tours": [{"src": "a.mp4", "poster": "a.jpg"}, {"src": "b.mp4"}]}"#,
        )
        .unwrap();
        let items = catalog.items_for("tours");
        assert_eq!(items[0].src, "a.mp4");
        assert_eq!(items[0].poster.as_deref(), Some("a.jpg"));
        assert_eq!(items[1].src, "b.mp4");
        assert_eq!(items[1].poster, None);
    }

    #[test]
    fn unknown_key_is_empty() {
        let catalog = GalleryCatalog::builtin();
        assert!(catalog.items_for("unknown-key").is_empty());
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = GalleryCatalog::from_json(r#"{"tours": [{"poster": "x.jpg"}]}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid gallery catalog"));
    }
}
