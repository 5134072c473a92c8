//! Listing catalog loading.
//!
//! The scoring and matching core never initiates I/O; this loader is the
//! convenience the surrounding glue uses to supply the catalog slice.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::models::ListingRecord;

/// Errors raised while loading a listing catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load listings from a JSON catalog file
///
/// A missing file is an empty catalog, not an error; the caller decides
/// whether that is worth surfacing. Malformed JSON is an error.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<ListingRecord>, CatalogError> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!("Catalog file {} not found, using empty catalog", path.display());
        return Ok(Vec::new());
    }

    let raw = fs::read_to_string(path)?;
    let listings: Vec<ListingRecord> = serde_json::from_str(&raw)?;

    tracing::info!("Loaded {} listings from {}", listings.len(), path.display());
    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("serenity-algo-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_is_empty_catalog() {
        let listings = load_catalog(temp_path("does-not-exist.json")).unwrap();
        assert!(listings.is_empty());
    }

    #[test]
    fn test_load_catalog_from_listings_feed_shape() {
        let path = temp_path("catalog.json");
        fs::write(
            &path,
            r#"[
                {
                    "id": "1",
                    "title": "Luxury Villa in Dubai Marina",
                    "location": "Dubai Marina",
                    "price": 2500000,
                    "bedrooms": 4,
                    "bathrooms": 3,
                    "area": 3500,
                    "type": "Villa",
                    "description": "Stunning waterfront villa with panoramic views",
                    "images": ["https://example.com/villa1.jpg"],
                    "features": ["Swimming Pool", "Garden", "Parking", "Sea View"]
                },
                {
                    "title": "Modern 3BR Townhouse in Jumeirah",
                    "price": 2150000.0,
                    "location": "Jumeirah Village Circle, Dubai",
                    "media": ["https://cdn.example.com/media/property1.jpg"]
                }
            ]"#,
        )
        .unwrap();

        let listings = load_catalog(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].property_type.as_deref(), Some("Villa"));
        assert_eq!(listings[0].bedrooms, Some(4));
        assert_eq!(listings[1].bedrooms, None);
        assert_eq!(listings[1].images.len(), 1);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let path = temp_path("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let result = load_catalog(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
