//! Media catalog types and flattening.
//!
//! The configuration organizes media as a two-level tree: categories own a
//! mix of plain media entries and folders, and folders own one level of
//! media items (folders never nest — the type model makes a deeper tree
//! unrepresentable, so a config that tries gets a parse error instead of a
//! half-rendered page).
//!
//! Everything downstream — filtering, sorting, rendering, the navigator —
//! works against a single flat **catalog** built once from that tree:
//!
//! ```text
//! categories                       catalog
//! ├── Nature                       entry "Trip"       category=nature
//! │   ├── folder "Trip"      →     entry "Dawn"       category=nature  parent=Trip
//! │   │   ├── Dawn                 entry "Dusk"       category=nature  parent=Trip
//! │   │   └── Dusk                 entry "Lake"       category=nature
//! │   └── Lake                     entry "Portrait"   category=people
//! └── People
//!     └── Portrait
//! ```
//!
//! Each entry is annotated with its owning category; folder children
//! additionally carry a back-reference to their parent folder, which is how
//! the filter engine keeps them out of the top-level view. A folder entry
//! precedes its children and retains its item list, so folder detail views
//! and thumbnail rotation need no second lookup structure.
//!
//! Order is preserved throughout: categories in config order, entries in
//! declaration order within each category. That insertion order is the
//! stable-sort tie-break for entries with equal dates.

use crate::drive;
use serde::{Deserialize, Serialize};

/// Kind of a playable media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A single media file as declared in the config.
///
/// `src` may be a direct URL or a Drive share link; resolution to an
/// embeddable URL happens at render time. `thumbnail` is only meaningful for
/// videos (poster image) and folders (explicit cover).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaFile {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Date string used for sorting (`YYYY-MM-DD` or RFC 3339). Entries
    /// without a date sort to the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A tagged playable media item: folder contents and the featured list are
/// both lists of these. There is no `Folder` variant, which is what rules
/// out folder nesting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaItem {
    Image(MediaFile),
    Video(MediaFile),
}

impl MediaItem {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaItem::Image(_) => MediaKind::Image,
            MediaItem::Video(_) => MediaKind::Video,
        }
    }

    pub fn media(&self) -> &MediaFile {
        match self {
            MediaItem::Image(m) | MediaItem::Video(m) => m,
        }
    }
}

/// A folder: a titled group of media items listed as one gallery card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolderSpec {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Explicit cover image. When absent the cover rotates through the
    /// items' own sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

/// A top-level entry in a category's media list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaEntry {
    Image(MediaFile),
    Video(MediaFile),
    Folder(FolderSpec),
}

/// A named category owning top-level media entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub media: Vec<MediaEntry>,
}

// ============================================================================
// Flattened catalog
// ============================================================================

/// Owning category annotation carried by every catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

/// Parent-folder back-reference carried by folder children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRef {
    pub id: String,
    pub title: String,
}

/// Entry kind as seen by the filter engine and renderer. Folders are a
/// distinct kind: they survive media-type filters and open a detail view
/// instead of a lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Image,
    Video,
    Folder,
}

/// Kind-specific payload of a catalog entry.
#[derive(Debug, Clone)]
pub enum EntryBody {
    Media {
        kind: MediaKind,
        src: String,
        thumbnail: Option<String>,
    },
    Folder {
        id: String,
        thumbnail: Option<String>,
        items: Vec<MediaItem>,
    },
}

/// One flattened, annotated catalog entry.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub title: String,
    pub description: String,
    pub date: Option<String>,
    pub category: CategoryRef,
    /// `Some` on folder children; the filter engine drops these from the
    /// top-level view.
    pub parent: Option<FolderRef>,
    pub body: EntryBody,
}

impl CatalogEntry {
    pub fn kind(&self) -> EntryKind {
        match &self.body {
            EntryBody::Media {
                kind: MediaKind::Image,
                ..
            } => EntryKind::Image,
            EntryBody::Media {
                kind: MediaKind::Video,
                ..
            } => EntryKind::Video,
            EntryBody::Folder { .. } => EntryKind::Folder,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.body, EntryBody::Folder { .. })
    }
}

fn media_entry(media: &MediaFile, kind: MediaKind, category: &Category) -> CatalogEntry {
    CatalogEntry {
        title: media.title.clone(),
        description: media.description.clone(),
        date: media.date.clone(),
        category: CategoryRef {
            id: category.id.clone(),
            name: category.name.clone(),
        },
        parent: None,
        body: EntryBody::Media {
            kind,
            src: media.src.clone(),
            thumbnail: media.thumbnail.clone(),
        },
    }
}

/// Flatten the category tree into the catalog.
///
/// Category and entry order is preserved. A folder contributes itself first,
/// then each of its children tagged with the folder back-reference. Nothing
/// is deduplicated: an item listed once appears exactly once.
pub fn build_catalog(categories: &[Category]) -> Vec<CatalogEntry> {
    let mut catalog = Vec::new();

    for category in categories {
        for entry in &category.media {
            match entry {
                MediaEntry::Image(m) => {
                    catalog.push(media_entry(m, MediaKind::Image, category));
                }
                MediaEntry::Video(m) => {
                    catalog.push(media_entry(m, MediaKind::Video, category));
                }
                MediaEntry::Folder(folder) => {
                    catalog.push(CatalogEntry {
                        title: folder.title.clone(),
                        description: folder.description.clone(),
                        date: folder.date.clone(),
                        category: CategoryRef {
                            id: category.id.clone(),
                            name: category.name.clone(),
                        },
                        parent: None,
                        body: EntryBody::Folder {
                            id: folder.id.clone(),
                            thumbnail: folder.thumbnail.clone(),
                            items: folder.items.clone(),
                        },
                    });
                    for item in &folder.items {
                        let mut child = media_entry(item.media(), item.kind(), category);
                        child.parent = Some(FolderRef {
                            id: folder.id.clone(),
                            title: folder.title.clone(),
                        });
                        catalog.push(child);
                    }
                }
            }
        }
    }

    catalog
}

// ============================================================================
// Folder cover sources
// ============================================================================

/// Collect the cover-image rotation sources for a folder.
///
/// An explicit `thumbnail` wins and yields a single-element list (no
/// rotation). Otherwise, in item order: image sources directly, video poster
/// thumbnails when present, and for poster-less Drive videos the derived
/// Drive thumbnail URL. A poster-less non-Drive video contributes its raw
/// src (the browser shows the first frame).
pub fn folder_thumbnail_sources(folder: &FolderSpec) -> Vec<String> {
    cover_sources(folder.thumbnail.as_deref(), &folder.items)
}

/// Core of [`folder_thumbnail_sources`], usable on a flattened folder entry's
/// parts as well as on a [`FolderSpec`].
pub fn cover_sources(thumbnail: Option<&str>, items: &[MediaItem]) -> Vec<String> {
    if let Some(thumb) = thumbnail {
        return vec![thumb.to_string()];
    }

    items
        .iter()
        .map(|item| {
            let media = item.media();
            match item.kind() {
                MediaKind::Image => media.src.clone(),
                MediaKind::Video => match &media.thumbnail {
                    Some(thumb) => thumb.clone(),
                    None if drive::is_drive_url(&media.src) => {
                        drive::image_url(&media.src).into_owned()
                    }
                    None => media.src.clone(),
                },
            }
        })
        .collect()
}

/// Initial cover for a folder card: `sources[index % len]`, or `None` for a
/// folder with no usable sources.
pub fn folder_thumbnail(folder: &FolderSpec, index: usize) -> Option<String> {
    let sources = folder_thumbnail_sources(folder);
    if sources.is_empty() {
        return None;
    }
    let pick = index % sources.len();
    Some(sources[pick].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{dated, folder, image, media_file, video, video_with_thumb};

    fn category(id: &str, name: &str, media: Vec<MediaEntry>) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            media,
        }
    }

    // =========================================================================
    // build_catalog tests
    // =========================================================================

    #[test]
    fn catalog_length_is_top_level_plus_children() {
        let categories = vec![
            category(
                "nature",
                "Nature",
                vec![
                    MediaEntry::Folder(folder(
                        "trip",
                        "Trip",
                        vec![image("a", "2024-01-01"), image("b", "2024-06-01")],
                    )),
                    MediaEntry::Image(dated("lake", "2024-02-01")),
                ],
            ),
            category("people", "People", vec![MediaEntry::Video(media_file("v1"))]),
        ];

        let catalog = build_catalog(&categories);
        // 3 top-level entries (folder, lake, v1) + 2 folder children
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn every_entry_has_category_annotation() {
        let categories = vec![category(
            "nature",
            "Nature",
            vec![MediaEntry::Folder(folder("trip", "Trip", vec![image("a", "2024-01-01")]))],
        )];

        for entry in build_catalog(&categories) {
            assert_eq!(entry.category.id, "nature");
            assert_eq!(entry.category.name, "Nature");
        }
    }

    #[test]
    fn folder_children_carry_parent_backreference() {
        let categories = vec![category(
            "nature",
            "Nature",
            vec![MediaEntry::Folder(folder(
                "trip",
                "Trip",
                vec![image("a", "2024-01-01"), video("b")],
            ))],
        )];

        let catalog = build_catalog(&categories);
        assert!(catalog[0].is_folder());
        assert!(catalog[0].parent.is_none());

        for child in &catalog[1..] {
            let parent = child.parent.as_ref().expect("child must have parent");
            assert_eq!(parent.id, "trip");
            assert_eq!(parent.title, "Trip");
        }
    }

    #[test]
    fn folder_entry_precedes_its_children() {
        let categories = vec![category(
            "c",
            "C",
            vec![
                MediaEntry::Image(dated("first", "2024-01-01")),
                MediaEntry::Folder(folder("f", "F", vec![image("child", "2024-01-02")])),
            ],
        )];

        let catalog = build_catalog(&categories);
        let titles: Vec<&str> = catalog.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "F", "child"]);
    }

    #[test]
    fn category_order_preserved() {
        let categories = vec![
            category("b", "B", vec![MediaEntry::Image(dated("b1", "2024-01-01"))]),
            category("a", "A", vec![MediaEntry::Image(dated("a1", "2024-01-01"))]),
        ];

        let catalog = build_catalog(&categories);
        assert_eq!(catalog[0].category.id, "b");
        assert_eq!(catalog[1].category.id, "a");
    }

    #[test]
    fn empty_categories_yield_empty_catalog() {
        assert!(build_catalog(&[]).is_empty());
        assert!(build_catalog(&[category("x", "X", vec![])]).is_empty());
    }

    #[test]
    fn folder_entry_retains_items() {
        let categories = vec![category(
            "c",
            "C",
            vec![MediaEntry::Folder(folder(
                "f",
                "F",
                vec![image("a", "2024-01-01"), image("b", "2024-02-01")],
            ))],
        )];

        let catalog = build_catalog(&categories);
        match &catalog[0].body {
            EntryBody::Folder { id, items, .. } => {
                assert_eq!(id, "f");
                assert_eq!(items.len(), 2);
            }
            other => panic!("expected folder body, got {other:?}"),
        }
    }

    // =========================================================================
    // Folder cover source tests
    // =========================================================================

    #[test]
    fn explicit_thumbnail_wins_as_single_source() {
        let mut f = folder("f", "F", vec![image("a", "2024-01-01"), image("b", "2024-01-02")]);
        f.thumbnail = Some("cover.jpg".to_string());

        assert_eq!(folder_thumbnail_sources(&f), vec!["cover.jpg".to_string()]);
    }

    #[test]
    fn sources_follow_item_order() {
        let f = folder(
            "f",
            "F",
            vec![
                image("one.jpg", "2024-01-01"),
                video_with_thumb("clip.mp4", "poster.jpg"),
                image("two.jpg", "2024-01-02"),
            ],
        );

        assert_eq!(
            folder_thumbnail_sources(&f),
            vec!["one.jpg", "poster.jpg", "two.jpg"]
        );
    }

    #[test]
    fn posterless_drive_video_derives_thumbnail() {
        let f = folder(
            "f",
            "F",
            vec![video("https://drive.google.com/file/d/VID1/view")],
        );

        assert_eq!(
            folder_thumbnail_sources(&f),
            vec!["https://drive.google.com/thumbnail?id=VID1&sz=w1000"]
        );
    }

    #[test]
    fn posterless_plain_video_uses_raw_src() {
        let f = folder("f", "F", vec![video("https://example.com/clip.mp4")]);
        assert_eq!(
            folder_thumbnail_sources(&f),
            vec!["https://example.com/clip.mp4"]
        );
    }

    #[test]
    fn folder_thumbnail_wraps_index() {
        let f = folder("f", "F", vec![image("a", "2024-01-01"), image("b", "2024-01-02")]);
        assert_eq!(folder_thumbnail(&f, 0).as_deref(), Some("a"));
        assert_eq!(folder_thumbnail(&f, 1).as_deref(), Some("b"));
        assert_eq!(folder_thumbnail(&f, 2).as_deref(), Some("a"));
    }

    #[test]
    fn folder_thumbnail_none_when_empty() {
        let f = folder("f", "F", vec![]);
        assert_eq!(folder_thumbnail(&f, 0), None);
    }

    // =========================================================================
    // Serde shape tests
    // =========================================================================

    #[test]
    fn media_entry_parses_tagged_types() {
        let json = r#"[
            {"type": "image", "src": "a.jpg", "title": "A"},
            {"type": "video", "src": "b.mp4", "title": "B", "thumbnail": "b.jpg"},
            {"type": "folder", "id": "f", "title": "F", "items": [
                {"type": "image", "src": "c.jpg", "title": "C"}
            ]}
        ]"#;

        let entries: Vec<MediaEntry> = serde_json::from_str(json).unwrap();
        assert!(matches!(entries[0], MediaEntry::Image(_)));
        assert!(matches!(entries[1], MediaEntry::Video(_)));
        assert!(matches!(entries[2], MediaEntry::Folder(_)));
    }

    #[test]
    fn nested_folder_is_a_parse_error() {
        let json = r#"{"type": "folder", "id": "outer", "title": "Outer", "items": [
            {"type": "folder", "id": "inner", "title": "Inner", "items": []}
        ]}"#;

        let result: Result<MediaEntry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_media_field_rejected() {
        let json = r#"{"type": "image", "src": "a.jpg", "title": "A", "caption": "x"}"#;
        let result: Result<MediaEntry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
