//! Shared test utilities for the folio-one test suite.
//!
//! Provides compact builders for media files, folders, and whole configs so
//! unit tests can assemble catalogs without spelling out every field.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let catalog = catalog_fixture();
//! let config = sample_config();
//!
//! let f = folder("trip", "Trip", vec![image("dawn", "2024-01-01")]);
//! assert_eq!(f.items.len(), 1);
//! ```

use crate::catalog::{Category, FolderSpec, MediaEntry, MediaFile, MediaItem, build_catalog};
use crate::config::{Profile, SiteConfig, Texts};

// =========================================================================
// Media builders
// =========================================================================

/// A media file with `title` = `src` and no date.
pub fn media_file(src: &str) -> MediaFile {
    MediaFile {
        src: src.to_string(),
        thumbnail: None,
        title: src.to_string(),
        description: String::new(),
        date: None,
    }
}

/// A dated media file with `title` = `src`.
pub fn dated(src: &str, date: &str) -> MediaFile {
    MediaFile {
        date: Some(date.to_string()),
        ..media_file(src)
    }
}

/// A dated image item (for folder contents and featured lists).
pub fn image(src: &str, date: &str) -> MediaItem {
    MediaItem::Image(dated(src, date))
}

/// An undated video item.
pub fn video(src: &str) -> MediaItem {
    MediaItem::Video(media_file(src))
}

/// A video item with a poster thumbnail.
pub fn video_with_thumb(src: &str, thumb: &str) -> MediaItem {
    let mut media = media_file(src);
    media.thumbnail = Some(thumb.to_string());
    MediaItem::Video(media)
}

/// A folder with the given items and no explicit cover.
pub fn folder(id: &str, title: &str, items: Vec<MediaItem>) -> FolderSpec {
    FolderSpec {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        thumbnail: None,
        date: None,
        items,
    }
}

// =========================================================================
// Fixture catalog and config
// =========================================================================

/// Two categories exercising every entry shape:
///
/// ```text
/// nature: folder "Trip" (2 images), image "lake" (2024-02-01), video "reel"
/// people: image "portrait" (2024-04-01), video "interview" (2024-05-01)
/// ```
pub fn fixture_categories() -> Vec<Category> {
    vec![
        Category {
            id: "nature".to_string(),
            name: "Nature".to_string(),
            media: vec![
                MediaEntry::Folder(FolderSpec {
                    date: Some("2024-06-01".to_string()),
                    ..folder(
                        "trip",
                        "Trip",
                        vec![image("dawn", "2024-01-01"), image("dusk", "2024-06-01")],
                    )
                }),
                MediaEntry::Image(dated("lake", "2024-02-01")),
                MediaEntry::Video(media_file("reel")),
            ],
        },
        Category {
            id: "people".to_string(),
            name: "People".to_string(),
            media: vec![
                MediaEntry::Image(dated("portrait", "2024-04-01")),
                MediaEntry::Video(dated("interview", "2024-05-01")),
            ],
        },
    ]
}

/// The flattened fixture catalog (7 entries: 5 top-level + 2 folder children).
pub fn catalog_fixture() -> Vec<crate::catalog::CatalogEntry> {
    build_catalog(&fixture_categories())
}

/// A full config around [`fixture_categories`], with one featured image.
pub fn sample_config() -> SiteConfig {
    SiteConfig {
        profile: Profile {
            name: "Nadia".to_string(),
            title: "Photographer".to_string(),
            bio: "Shooting **light** since 2015.".to_string(),
            photo: Some("https://drive.google.com/file/d/PHOTO1/view".to_string()),
            location: "Bandung".to_string(),
            email: "nadia@example.com".to_string(),
            instagram: "@nadia.shoots".to_string(),
            whatsapp: Some("628111222333".to_string()),
        },
        texts: Texts::default(),
        featured: vec![image("https://drive.google.com/file/d/FEAT1/view", "2024-05-01")],
        categories: fixture_categories(),
        social_media: Vec::new(),
    }
}

/// The sample config serialized as a JSON document.
pub fn sample_config_json() -> String {
    serde_json::to_string_pretty(&sample_config()).unwrap()
}
