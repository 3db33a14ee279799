//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (category, folder, media item) is its semantic identity —
//! positional index and title — with source URLs and ids as secondary,
//! indented context. The inventory reads as a content listing, not a dump of
//! the config file.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Categories
//! 001 Nature (3 entries)
//!     Id: nature
//!     001 Trip (folder, 2 items)
//!         001 dusk (1 Juni 2024)
//!         002 dawn (1 Januari 2024)
//!     002 lake (1 Februari 2024)
//!     003 reel (video)
//!
//! Featured: 1 item
//! Social links: 2
//! ```
//!
//! ## Build
//!
//! ```text
//! index.html (5 of 7 entries visible in default view)
//! favicon.svg
//! assets: 3 files copied
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::catalog::{MediaEntry, MediaItem, MediaKind};
use crate::config::SiteConfig;
use crate::render::{BuildReport, format_date};
use crate::view::{SortOrder, folder_view};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Nature (3 entries)
/// 002 lake (1 Februari 2024)
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

/// One media item line: title plus date when present, kind when undated.
fn media_line(index: usize, item: &MediaItem, depth: usize, locale: &str) -> String {
    let media = item.media();
    let detail = match media.date.as_deref() {
        Some(date) => format_date(date, locale),
        None => match item.kind() {
            MediaKind::Image => "image".to_string(),
            MediaKind::Video => "video".to_string(),
        },
    };
    format!(
        "{}{}",
        indent(depth),
        entity_header(index, &media.title, Some(&detail))
    )
}

// ============================================================================
// Check output
// ============================================================================

/// Format the content inventory for the `check` command.
pub fn format_check_output(config: &SiteConfig) -> Vec<String> {
    let locale = &config.texts.date_format.locale;
    let mut lines = Vec::new();

    lines.push("Categories".to_string());
    if config.categories.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }

    for (c_idx, category) in config.categories.iter().enumerate() {
        let detail = format!(
            "{} {}",
            category.media.len(),
            plural(category.media.len(), "entry", "entries")
        );
        lines.push(entity_header(c_idx + 1, &category.name, Some(&detail)));
        lines.push(format!("{}Id: {}", indent(1), category.id));

        for (e_idx, entry) in category.media.iter().enumerate() {
            match entry {
                MediaEntry::Folder(folder) => {
                    let detail = format!(
                        "folder, {} {}",
                        folder.items.len(),
                        plural(folder.items.len(), "item", "items")
                    );
                    lines.push(format!(
                        "{}{}",
                        indent(1),
                        entity_header(e_idx + 1, &folder.title, Some(&detail))
                    ));
                    for (i_idx, item) in folder_view(&folder.items, SortOrder::Newest)
                        .iter()
                        .enumerate()
                    {
                        lines.push(media_line(i_idx + 1, item, 2, locale));
                    }
                }
                MediaEntry::Image(m) => {
                    let item = MediaItem::Image(m.clone());
                    lines.push(media_line(e_idx + 1, &item, 1, locale));
                }
                MediaEntry::Video(m) => {
                    let item = MediaItem::Video(m.clone());
                    lines.push(media_line(e_idx + 1, &item, 1, locale));
                }
            }
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Featured: {} {}",
        config.featured.len(),
        plural(config.featured.len(), "item", "items")
    ));
    lines.push(format!("Social links: {}", config.social_media.len()));

    lines
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

pub fn print_check_output(config: &SiteConfig) {
    for line in format_check_output(config) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the build summary for the `build` command.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec![format!(
        "index.html ({} of {} entries visible in default view)",
        report.visible_entries, report.catalog_entries
    )];
    if report.wrote_favicon {
        lines.push("favicon.svg".to_string());
    }
    if report.assets_copied > 0 {
        lines.push(format!(
            "assets: {} {} copied",
            report.assets_copied,
            plural(report.assets_copied, "file", "files")
        ));
    }
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}
