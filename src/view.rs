//! The gallery filter/sort engine.
//!
//! [`apply_filters`] derives the **view list** — the ordered subset of the
//! catalog the gallery actually shows — from a [`ViewState`]. It is a pure
//! function: no hidden state, no mutation of the catalog, same inputs →
//! same ordered output. The renderer evaluates it once for the default view
//! state; unit tests exercise it directly.
//!
//! The pipeline runs in a fixed order:
//!
//! 1. **Category**: `All` keeps everything; a selected category keeps only
//!    its own entries.
//! 2. **Folder-child exclusion**: entries with a parent back-reference are
//!    dropped — children are reachable only through their folder's detail
//!    view. Folders themselves always survive this step.
//! 3. **Media type**: with a type selected, keep matching entries *and all
//!    folders*. Folders are type-agnostic containers and are retained even
//!    when none of their children match the selected type.
//! 4. **Sort**: stable sort by date key. Entries without a date (or with an
//!    unparseable one) key to the epoch. Stability is the only tie-break,
//!    so equal dates keep catalog (insertion) order.

use crate::catalog::{CatalogEntry, MediaKind};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Category selection: everything, or one category by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Id(String),
}

/// Gallery sort order over media dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

/// The current filter/sort selection. A value, not a place: update entry
/// points replace the whole state rather than mutating fields in scattered
/// callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub category: CategoryFilter,
    pub media_type: Option<MediaKind>,
    pub sort: SortOrder,
}

/// Parse a media date string: RFC 3339 (`2024-06-01T09:30:00Z`), a bare
/// datetime, or a bare date (midnight UTC).
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc())
}

/// Sort key for a media date (seconds since the epoch). Missing and
/// unparseable dates key to 0 so undated entries sink to the old end of the
/// ordering.
pub fn date_key(date: Option<&str>) -> i64 {
    date.and_then(parse_date).map(|dt| dt.timestamp()).unwrap_or(0)
}

/// Derive the view list for a filter/sort selection.
///
/// Returns references into the catalog in display order. Total: every
/// selection yields a list (possibly empty), never an error.
pub fn apply_filters<'a>(catalog: &'a [CatalogEntry], state: &ViewState) -> Vec<&'a CatalogEntry> {
    let mut view: Vec<&CatalogEntry> = catalog
        .iter()
        .filter(|entry| match &state.category {
            CategoryFilter::All => true,
            CategoryFilter::Id(id) => entry.category.id == *id,
        })
        .filter(|entry| entry.is_folder() || entry.parent.is_none())
        .filter(|entry| match state.media_type {
            None => true,
            Some(kind) => entry.is_folder() || entry_matches_kind(entry, kind),
        })
        .collect();

    // sort_by_key is stable; insertion order breaks ties
    match state.sort {
        SortOrder::Newest => view.sort_by_key(|e| std::cmp::Reverse(date_key(e.date.as_deref()))),
        SortOrder::Oldest => view.sort_by_key(|e| date_key(e.date.as_deref())),
    }

    view
}

fn entry_matches_kind(entry: &CatalogEntry, kind: MediaKind) -> bool {
    use crate::catalog::EntryBody;
    matches!(&entry.body, EntryBody::Media { kind: k, .. } if *k == kind)
}

/// Order a folder's items for its detail view.
///
/// Folder contents are never filtered (a folder is opened as a whole), only
/// sorted — same stable date ordering as the gallery, so the worked default
/// is newest-first. The returned order is the folder's lightbox context list.
pub fn folder_view(items: &[crate::catalog::MediaItem], sort: SortOrder) -> Vec<&crate::catalog::MediaItem> {
    let mut view: Vec<_> = items.iter().collect();
    match sort {
        SortOrder::Newest => {
            view.sort_by_key(|i| std::cmp::Reverse(date_key(i.media().date.as_deref())))
        }
        SortOrder::Oldest => view.sort_by_key(|i| date_key(i.media().date.as_deref())),
    }
    view
}
