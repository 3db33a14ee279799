//! Google Drive share-link resolution.
//!
//! Portfolio configs routinely point `src` at Drive share links rather than
//! direct file URLs, because that is what the Drive UI hands you. Share links
//! are not embeddable as-is, so every URL that reaches the page goes through
//! this module first.
//!
//! ## Recognized patterns
//!
//! A file id is extracted from either of two forms:
//!
//! - Path form: `.../d/<id>/...` (covers `/file/d/<id>/view`,
//!   `/file/d/<id>/preview`, and bare `/d/<id>`)
//! - Query form: `?id=<id>` or `&id=<id>`
//!
//! Ids are `[A-Za-z0-9_-]+`. Extraction is best-effort string scanning, not
//! URL parsing — a malformed input simply fails to match.
//!
//! ## Pass-through policy
//!
//! Absence of a match is not an error. Every resolver returns the input
//! unchanged when no id is found, so non-Drive URLs (a CDN path, a relative
//! asset path) flow through untouched. None of these functions can fail.

use std::borrow::Cow;

/// Width parameter for the Drive thumbnail service. Direct-view formats are
/// unreliable for large files; the thumbnail endpoint at 1000px is not.
const THUMBNAIL_WIDTH: u32 = 1000;

/// Whether a URL points at Google Drive.
///
/// A plain substring test. False positives are acceptable: the result only
/// selects a formatting strategy (iframe vs `<video>`, resolver vs raw src),
/// never a trust decision.
pub fn is_drive_url(url: &str) -> bool {
    url.contains("drive.google.com")
}

/// Extract the Drive file id from a share URL, if present.
///
/// Tries the `/d/<id>` path form first, then the `id=` query form.
pub fn file_id(url: &str) -> Option<&str> {
    id_after(url, "/d/").or_else(|| {
        // Query form: the parameter may be first (?id=) or not (&id=)
        id_after(url, "?id=").or_else(|| id_after(url, "&id="))
    })
}

/// Return the id-charset run following `marker`, if non-empty.
fn id_after<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    let start = url.find(marker)? + marker.len();
    let rest = &url[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(rest.len());
    if end == 0 { None } else { Some(&rest[..end]) }
}

/// Resolve a share URL to a directly embeddable image URL.
///
/// Matched ids map to the Drive thumbnail service (`sz=w1000`); everything
/// else passes through unchanged.
pub fn image_url(url: &str) -> Cow<'_, str> {
    match file_id(url) {
        Some(id) => Cow::Owned(format!(
            "https://drive.google.com/thumbnail?id={id}&sz=w{THUMBNAIL_WIDTH}"
        )),
        None => Cow::Borrowed(url),
    }
}

/// Resolve a share URL to an embeddable preview URL (iframe `src` for videos).
pub fn preview_url(url: &str) -> Cow<'_, str> {
    match file_id(url) {
        Some(id) => Cow::Owned(format!("https://drive.google.com/file/d/{id}/preview")),
        None => Cow::Borrowed(url),
    }
}

/// The `uc?export=view` form of an image URL.
///
/// The thumbnail service occasionally 403s on files it has not rasterized
/// yet; the generated page wires this form into each image's `onerror`
/// fallback. Returns `None` when no id can be extracted (no fallback is
/// emitted in that case).
pub fn fallback_image_url(url: &str) -> Option<String> {
    file_id(url).map(|id| format!("https://drive.google.com/uc?export=view&id={id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // file_id() tests
    // =========================================================================

    #[test]
    fn file_id_from_path_form() {
        assert_eq!(
            file_id("https://drive.google.com/file/d/1aB_c-9/view?usp=sharing"),
            Some("1aB_c-9")
        );
    }

    #[test]
    fn file_id_from_bare_d_segment() {
        assert_eq!(file_id("https://drive.google.com/d/XYZ123"), Some("XYZ123"));
    }

    #[test]
    fn file_id_from_query_form() {
        assert_eq!(
            file_id("https://drive.google.com/open?id=AbC123_-"),
            Some("AbC123_-")
        );
        assert_eq!(
            file_id("https://drive.google.com/uc?export=view&id=Q9z"),
            Some("Q9z")
        );
    }

    #[test]
    fn file_id_none_for_plain_url() {
        assert_eq!(file_id("https://example.com/photo.jpg"), None);
    }

    #[test]
    fn file_id_none_for_empty_id() {
        assert_eq!(file_id("https://drive.google.com/d/"), None);
        assert_eq!(file_id("https://drive.google.com/open?id="), None);
    }

    #[test]
    fn file_id_stops_at_non_id_char() {
        assert_eq!(
            file_id("https://drive.google.com/file/d/abc/preview"),
            Some("abc")
        );
    }

    // =========================================================================
    // Resolver tests
    // =========================================================================

    #[test]
    fn image_url_uses_thumbnail_service() {
        let resolved = image_url("https://drive.google.com/file/d/FILE1/view");
        assert_eq!(
            resolved,
            "https://drive.google.com/thumbnail?id=FILE1&sz=w1000"
        );
    }

    #[test]
    fn image_url_passes_through_unmatched() {
        let url = "https://cdn.example.com/img/001.jpg";
        assert!(matches!(image_url(url), Cow::Borrowed(u) if u == url));
    }

    #[test]
    fn image_url_does_not_panic_on_garbage() {
        for garbage in ["", "not a url", "/d/", "???id=", "drive.google.com"] {
            let _ = image_url(garbage);
        }
    }

    #[test]
    fn preview_url_uses_embed_format() {
        let resolved = preview_url("https://drive.google.com/file/d/VID9/view");
        assert_eq!(resolved, "https://drive.google.com/file/d/VID9/preview");
    }

    #[test]
    fn preview_url_passes_through_unmatched() {
        let url = "https://example.com/clip.mp4";
        assert_eq!(preview_url(url), url);
    }

    #[test]
    fn fallback_url_present_only_with_id() {
        assert_eq!(
            fallback_image_url("https://drive.google.com/d/F1").as_deref(),
            Some("https://drive.google.com/uc?export=view&id=F1")
        );
        assert_eq!(fallback_image_url("https://example.com/a.jpg"), None);
    }

    // =========================================================================
    // is_drive_url() tests
    // =========================================================================

    #[test]
    fn drive_detection_is_substring_based() {
        assert!(is_drive_url("https://drive.google.com/file/d/x/view"));
        assert!(!is_drive_url("https://photos.google.com/share/x"));
        // False positive by design — only picks a formatting strategy
        assert!(is_drive_url("https://example.com/?ref=drive.google.com"));
    }
}
