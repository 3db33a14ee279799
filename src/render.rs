//! Single-page site generation.
//!
//! Takes a validated [`SiteConfig`], builds the flattened catalog, and emits
//! the finished site: one `index.html` with inline CSS and a small vanilla
//! JS runtime, plus `favicon.svg` and a copy of the optional `assets/`
//! directory.
//!
//! ## Build-time vs runtime
//!
//! Everything decidable from the config is decided here:
//!
//! - the default gallery view is pre-rendered through
//!   [`view::apply_filters`] with the default [`ViewState`];
//! - every folder's detail view is pre-rendered from its ordered context
//!   list ([`view::folder_view`]);
//! - folder-item lightbox neighbors are baked as `data-prev`/`data-next`
//!   via [`navigator::step`] (folder lists are static, so wrap-around
//!   indices are known at build time);
//! - all media URLs go through the [`drive`] resolver once, with the
//!   `uc?export=view` fallback attached where one exists.
//!
//! What remains for the client runtime is re-filtering/re-sorting the
//! pre-rendered cards (every card carries `data-category`, `data-kind`, and
//! a pre-computed `data-date-key`), folder/lightbox show-hide, the featured
//! slider, cover rotation, and the WhatsApp redirect. The runtime reads its
//! timing constants from data attributes emitted out of [`navigator`], so
//! Rust stays the single source of truth.
//!
//! ## HTML generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time templating.
//! Everything user-supplied is auto-escaped; `PreEscaped` is reserved for
//! the crate's own CSS/JS and the markdown-rendered bio.

use crate::catalog::{
    CatalogEntry, EntryBody, MediaItem, MediaKind, build_catalog, cover_sources,
};
use crate::config::{Favicon, SiteConfig, Texts};
use crate::drive;
use crate::navigator::{
    self, ROTATE_PERIOD_MS, RotationDeck, SLIDE_SETTLE_MS, SLIDE_TRIGGER_MS,
};
use crate::view::{self, ViewState};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Featured slider autoplay period.
pub const SLIDER_PERIOD_MS: u64 = 5000;

/// `wa.me` number used when the profile does not set one.
const STOCK_WA_NUMBER: &str = "6281234567890";

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/app.js");

/// What a build wrote, for CLI reporting.
#[derive(Debug)]
pub struct BuildReport {
    /// Total flattened catalog entries.
    pub catalog_entries: usize,
    /// Entries visible in the default gallery view.
    pub visible_entries: usize,
    pub wrote_favicon: bool,
    pub assets_copied: usize,
}

/// Build the site into `out_dir`.
///
/// `config_dir` is the directory containing `config.json`; an `assets/`
/// directory beside it is copied into the output verbatim.
pub fn build(
    config: &SiteConfig,
    config_dir: &Path,
    out_dir: &Path,
) -> Result<BuildReport, BuildError> {
    let catalog = build_catalog(&config.categories);
    let default_view = view::apply_filters(&catalog, &ViewState::default());

    let report = BuildReport {
        catalog_entries: catalog.len(),
        visible_entries: default_view.len(),
        wrote_favicon: config.texts.favicon.use_icon,
        assets_copied: 0,
    };

    fs::create_dir_all(out_dir)?;
    let page = render_page(config, &catalog);
    fs::write(out_dir.join("index.html"), page.into_string())?;

    if config.texts.favicon.use_icon {
        fs::write(
            out_dir.join("favicon.svg"),
            icon_svg(&config.texts.favicon, 100).into_string(),
        )?;
    }

    let assets_dir = config_dir.join("assets");
    let assets_copied = if assets_dir.is_dir() {
        copy_dir_recursive(&assets_dir, &out_dir.join("assets"))?
    } else {
        0
    };

    Ok(BuildReport {
        assets_copied,
        ..report
    })
}

/// Recursively copy a directory, returning the number of files copied.
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize, BuildError> {
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walk stays under its root");
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// Page assembly
// ============================================================================

/// Render the complete single-page document.
pub fn render_page(config: &SiteConfig, catalog: &[CatalogEntry]) -> Markup {
    let texts = &config.texts;
    let title = if config.profile.title.is_empty() {
        config.profile.name.clone()
    } else {
        format!("{} — {}", config.profile.name, config.profile.title)
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="https://unpkg.com/boxicons@2.1.4/css/boxicons.min.css";
                @if texts.favicon.use_icon {
                    link rel="icon" type="image/svg+xml" href="favicon.svg";
                }
                style { (PreEscaped(CSS)) }
            }
            body {
                (navbar(config))
                (hero(config))
                @if !config.featured.is_empty() {
                    (featured_slider(&config.featured))
                }
                (gallery_section(config, catalog))
                (about_section(config))
                (contact_section(config))
                (whatsapp_widget(config))
                (lightbox_shell())
                footer.site-footer {
                    p { "© " span #year {} " " (config.profile.name) }
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

fn navbar(config: &SiteConfig) -> Markup {
    let texts = &config.texts;
    html! {
        nav #navbar .navbar {
            div.nav-container {
                a.nav-logo href="#home" {
                    @if texts.favicon.use_icon {
                        span.logo-icon { (icon_svg(&texts.favicon, 40)) }
                    }
                    span.logo-text { (config.profile.name) }
                }
                button #navbar-back .navbar-back hidden {
                    i.bx.bx-arrow-back {}
                    span { (texts.folder_labels.back_to_gallery) }
                }
                button #hamburger .hamburger aria-label="Menu" {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
                ul #nav-menu .nav-menu {
                    li { a.nav-link href="#home" { "Home" } }
                    li { a.nav-link href="#gallery" { (texts.section_titles.gallery) } }
                    li { a.nav-link href="#about" { (texts.section_titles.about) } }
                    li { a.nav-link href="#contact" { (texts.section_titles.contact) } }
                }
            }
        }
    }
}

fn hero(config: &SiteConfig) -> Markup {
    let profile = &config.profile;
    html! {
        section #home .hero {
            div.hero-content {
                @if let Some(photo) = &profile.photo {
                    div.hero-photo {
                        img src=(drive::image_url(photo))
                            data-fallback=[drive::fallback_image_url(photo)]
                            alt=(profile.name);
                    }
                }
                h1.hero-name { (profile.name) }
                p.hero-title { (profile.title) }
                a.cta-button href="#gallery" { (config.texts.cta_button.0) }
            }
            div.scroll-indicator data-target="#gallery" {
                i.bx.bx-chevron-down {}
            }
        }
    }
}

fn featured_slider(featured: &[MediaItem]) -> Markup {
    html! {
        section.featured-slider data-autoplay=(SLIDER_PERIOD_MS) {
            div #featured-wrapper .slider-wrapper {
                @for (index, item) in featured.iter().enumerate() {
                    div.slider-item {
                        @match item {
                            MediaItem::Video(media) => {
                                @if drive::is_drive_url(&media.src) {
                                    iframe src=(drive::preview_url(&media.src))
                                        allow="autoplay; fullscreen"
                                        allowfullscreen frameborder="0" scrolling="no" {}
                                } @else {
                                    video src=(media.src) muted loop autoplay[index == 0] {}
                                }
                            }
                            MediaItem::Image(media) => {
                                img src=(drive::image_url(&media.src)) alt=(media.title);
                            }
                        }
                        div.slider-item-content {
                            h3 { (item.media().title) }
                            p { (item.media().description) }
                        }
                    }
                }
            }
            button #featured-prev .slider-nav.prev aria-label="Previous" {
                i.bx.bx-chevron-left {}
            }
            button #featured-next .slider-nav.next aria-label="Next" {
                i.bx.bx-chevron-right {}
            }
            div #featured-dots .slider-dots {
                @for (index, _) in featured.iter().enumerate() {
                    button.dot.active[index == 0] data-slide=(index) aria-label={ "Slide " (index + 1) } {}
                }
            }
        }
    }
}

// ============================================================================
// Gallery
// ============================================================================

fn gallery_section(config: &SiteConfig, catalog: &[CatalogEntry]) -> Markup {
    let texts = &config.texts;
    let default_view = view::apply_filters(catalog, &ViewState::default());

    html! {
        section #gallery .gallery-section {
            h2.section-title { (texts.section_titles.gallery) }
            (filter_bar(config))
            div #gallery-grid .gallery-grid
                data-rotate-period=(ROTATE_PERIOD_MS)
                data-rotate-trigger=(SLIDE_TRIGGER_MS)
                data-rotate-settle=(SLIDE_SETTLE_MS)
                data-empty-title=(texts.empty_state.title)
                data-empty-message=(texts.empty_state.message) {
                @if default_view.is_empty() {
                    (empty_state(&texts.empty_state.title, &texts.empty_state.message, "bx-image-alt"))
                } @else {
                    @for entry in &default_view {
                        (gallery_card(entry, texts))
                    }
                }
            }
            @for entry in catalog.iter().filter(|e| e.is_folder()) {
                (folder_detail(entry, texts))
            }
        }
    }
}

fn filter_bar(config: &SiteConfig) -> Markup {
    let texts = &config.texts;
    html! {
        div.gallery-filters {
            div.type-filters {
                button.filter-btn.type-filter data-type="image" {
                    i.bx.bx-image {} " " span { (texts.type_filters.image) }
                }
                button.filter-btn.type-filter data-type="video" {
                    i.bx.bx-video {} " " span { (texts.type_filters.video) }
                }
            }
            div.category-filters {
                button.filter-btn.category-filter.active data-category="all" { "All" }
                @for category in &config.categories {
                    button.filter-btn.category-filter data-category=(category.id) {
                        (category.name)
                    }
                }
            }
            div.sort-section {
                span.sort-label { (texts.sort_label.0) }
                div.sort-buttons {
                    button.sort-btn.active data-sort="newest" {
                        i.bx.bx-sort-down {} " " span { (texts.sort_options.newest) }
                    }
                    button.sort-btn data-sort="oldest" {
                        i.bx.bx-sort-up {} " " span { (texts.sort_options.oldest) }
                    }
                }
            }
        }
    }
}

fn empty_state(title: &str, message: &str, icon: &str) -> Markup {
    html! {
        div.gallery-empty {
            i class={ "bx " (icon) } {}
            h3 { (title) }
            p { (message) }
        }
    }
}

/// One card in the top-level gallery grid — a media card or a folder card.
fn gallery_card(entry: &CatalogEntry, texts: &Texts) -> Markup {
    match &entry.body {
        EntryBody::Media {
            kind,
            src,
            thumbnail,
        } => media_card(entry, *kind, src, thumbnail.as_deref(), texts, None),
        EntryBody::Folder {
            id,
            thumbnail,
            items,
        } => folder_card(entry, id, thumbnail.as_deref(), items, texts),
    }
}

/// Shared card markup for images and videos.
///
/// `data-date-key` is the pre-computed sort key so the client runtime never
/// parses dates. `nav` carries baked prev/next indices for items inside a
/// folder's static list.
fn media_card(
    entry: &CatalogEntry,
    kind: MediaKind,
    src: &str,
    thumbnail: Option<&str>,
    texts: &Texts,
    nav: Option<(usize, usize, usize)>,
) -> Markup {
    let date_key = view::date_key(entry.date.as_deref());
    let (kind_attr, full) = match kind {
        MediaKind::Image => ("image", drive::image_url(src).into_owned()),
        MediaKind::Video if drive::is_drive_url(src) => {
            ("video", drive::preview_url(src).into_owned())
        }
        MediaKind::Video => ("video", src.to_string()),
    };
    let drive_video = kind == MediaKind::Video && drive::is_drive_url(src);

    html! {
        div.gallery-item
            data-kind=(kind_attr)
            data-category=(entry.category.id)
            data-date-key=(date_key)
            data-full=(full)
            data-fallback=[matches!(kind, MediaKind::Image).then(|| drive::fallback_image_url(src)).flatten()]
            data-drive[drive_video]
            data-index=[nav.map(|(i, _, _)| i)]
            data-prev=[nav.map(|(_, p, _)| p)]
            data-next=[nav.map(|(_, _, n)| n)] {
            @match kind {
                MediaKind::Image => {
                    img src=(drive::image_url(src)) alt=(entry.title) loading="lazy";
                }
                MediaKind::Video => {
                    @if let Some(poster) = thumbnail {
                        img src=(drive::image_url(poster)) alt=(entry.title) loading="lazy";
                    } @else if drive_video {
                        iframe src=(drive::preview_url(src)) allow="autoplay; fullscreen"
                            allowfullscreen frameborder="0" scrolling="no" {}
                    } @else {
                        video src=(src) muted loop {}
                    }
                }
            }
            div.gallery-item-overlay {
                @match kind {
                    MediaKind::Image => { div.media-icon { i.bx.bx-image {} } }
                    MediaKind::Video => { div.media-icon { i.bx.bx-play-circle {} } }
                }
                h3 { (entry.title) }
                p { (entry.description) }
                @if let Some(date) = &entry.date {
                    span.gallery-item-date {
                        i.bx.bx-calendar {} " " (format_date(date, &texts.date_format.locale))
                    }
                }
            }
        }
    }
}

/// A folder card with its rotating cover.
fn folder_card(
    entry: &CatalogEntry,
    id: &str,
    thumbnail: Option<&str>,
    items: &[MediaItem],
    texts: &Texts,
) -> Markup {
    let sources: Vec<String> = cover_sources(thumbnail, items)
        .iter()
        .map(|s| drive::image_url(s).into_owned())
        .collect();
    let deck = RotationDeck::new(sources.clone());
    let cover = sources.first().cloned();
    let rotate = deck.map(|d| {
        serde_json::to_string(d.sources()).expect("cover sources must serialize")
    });

    html! {
        div.gallery-item.folder-item
            data-kind="folder"
            data-category=(entry.category.id)
            data-date-key=(view::date_key(entry.date.as_deref()))
            data-folder=(id) {
            div.thumbnail-container data-rotate=[rotate] {
                @if let Some(cover) = cover {
                    img.thumbnail-current src=(cover) alt=(entry.title) loading="lazy";
                }
            }
            div.gallery-item-overlay {
                div.folder-icon { i.bx.bx-folder {} }
                h3 { (entry.title) }
                p { (entry.description) }
                span.folder-item-count { (items.len()) " " (texts.folder_labels.items) }
                @if let Some(date) = &entry.date {
                    span.gallery-item-date {
                        i.bx.bx-calendar {} " " (format_date(date, &texts.date_format.locale))
                    }
                }
            }
        }
    }
}

/// The hidden detail view for one folder: ordered item grid plus back
/// controls. Lightbox neighbors are baked per item because this list never
/// changes after build.
fn folder_detail(entry: &CatalogEntry, texts: &Texts) -> Markup {
    let EntryBody::Folder { id, items, .. } = &entry.body else {
        return html! {};
    };
    let ordered = view::folder_view(items, ViewState::default().sort);

    html! {
        section.folder-detail id={ "folder-" (id) } hidden {
            header.folder-detail-header {
                button.folder-back {
                    i.bx.bx-arrow-back {} " " span { (texts.folder_labels.back_to_gallery) }
                }
                h3.folder-detail-title { (entry.title) }
                p.folder-detail-description { (entry.description) }
            }
            div.folder-items-grid {
                @if ordered.is_empty() {
                    (empty_state(&texts.folder_labels.empty_title, &texts.folder_labels.empty_message, "bx-folder-open"))
                } @else {
                    @for (index, item) in ordered.iter().enumerate() {
                        (folder_item_card(item, entry, index, ordered.len(), texts))
                    }
                }
            }
        }
    }
}

fn folder_item_card(
    item: &MediaItem,
    folder_entry: &CatalogEntry,
    index: usize,
    len: usize,
    texts: &Texts,
) -> Markup {
    let len = NonZeroUsize::new(len).expect("non-empty folder grid");
    let nav = (
        index,
        navigator::step(index, navigator::Direction::Prev, len),
        navigator::step(index, navigator::Direction::Next, len),
    );

    // Folder items inherit the folder's category annotation; build a
    // throwaway entry so the shared card markup applies unchanged.
    let media = item.media();
    let entry = CatalogEntry {
        title: media.title.clone(),
        description: media.description.clone(),
        date: media.date.clone(),
        category: folder_entry.category.clone(),
        parent: None,
        body: EntryBody::Media {
            kind: item.kind(),
            src: media.src.clone(),
            thumbnail: media.thumbnail.clone(),
        },
    };
    media_card(
        &entry,
        item.kind(),
        &media.src,
        media.thumbnail.as_deref(),
        texts,
        Some(nav),
    )
}

// ============================================================================
// About / contact / widgets
// ============================================================================

fn about_section(config: &SiteConfig) -> Markup {
    let profile = &config.profile;
    let labels = &config.texts.about_labels;

    let parser = Parser::new(&profile.bio);
    let mut bio_html = String::new();
    md_html::push_html(&mut bio_html, parser);

    html! {
        section #about .about-section {
            h2.section-title { (config.texts.section_titles.about) }
            div.about-text { (PreEscaped(bio_html)) }
            div.about-details {
                div.about-detail-item {
                    i.bx.bx-map {}
                    div {
                        strong { (labels.location) }
                        span { (profile.location) }
                    }
                }
                div.about-detail-item {
                    i.bx.bx-envelope {}
                    div {
                        strong { (labels.email) }
                        span {
                            a href={ "mailto:" (profile.email) } { (profile.email) }
                        }
                    }
                }
                div.about-detail-item {
                    i.bx.bxl-instagram {}
                    div {
                        strong { (labels.instagram) }
                        span { (profile.instagram) }
                    }
                }
            }
        }
    }
}

fn contact_section(config: &SiteConfig) -> Markup {
    let profile = &config.profile;
    html! {
        section #contact .contact-section {
            h2.section-title { (config.texts.section_titles.contact) }
            div.contact-content {
                @if config.social_media.is_empty() {
                    div.contact-item {
                        a href={ "mailto:" (profile.email) } {
                            i.bx.bx-envelope {} " " span { (profile.email) }
                        }
                    }
                    div.contact-item {
                        a href={ "https://instagram.com/" (profile.instagram.trim_start_matches('@')) }
                            target="_blank" rel="noopener noreferrer" {
                            i.bx.bxl-instagram {} " " span { (profile.instagram) }
                        }
                    }
                } @else {
                    @for social in &config.social_media {
                        div.contact-item {
                            @let external = social.url.starts_with("http");
                            a href=(social.url)
                                target=[external.then_some("_blank")]
                                rel=[external.then_some("noopener noreferrer")] {
                                i class=(social.icon) {} " " span { (social.label()) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn whatsapp_widget(config: &SiteConfig) -> Markup {
    let wa = &config.texts.whatsapp;
    let profile = &config.profile;
    let number = profile.whatsapp.as_deref().unwrap_or(STOCK_WA_NUMBER);

    html! {
        button #wa-float .wa-float-btn aria-label="WhatsApp" {
            i.bx.bxl-whatsapp {}
        }
        div #wa-modal .wa-chat-modal data-number=(number) data-time-label=(wa.time_label) {
            div.wa-chat-box {
                header.wa-chat-header {
                    div.wa-chat-avatar {
                        @if let Some(photo) = wa.avatar(profile) {
                            img src=(drive::image_url(photo))
                                data-fallback=[drive::fallback_image_url(photo)]
                                alt=(wa.display_name(profile));
                        }
                    }
                    div.wa-chat-identity {
                        span.wa-chat-name { (wa.display_name(profile)) }
                        span.wa-chat-status { (wa.status) }
                    }
                    button #wa-close .wa-chat-close aria-label="Close" { i.bx.bx-x {} }
                }
                div #wa-messages .wa-chat-messages {
                    div.wa-message.wa-message-received {
                        div.wa-message-content { p { (wa.greeting) } }
                        span.wa-message-time { (wa.time_label) }
                    }
                }
                footer.wa-chat-footer {
                    input #wa-input type="text" placeholder=(wa.placeholder);
                    button #wa-send .wa-chat-send aria-label="Send" { i.bx.bxs-send {} }
                }
            }
        }
    }
}

fn lightbox_shell() -> Markup {
    html! {
        div #lightbox .lightbox {
            button #lightbox-close .lightbox-close aria-label="Close" { i.bx.bx-x {} }
            button #lightbox-prev .lightbox-nav.prev aria-label="Previous" { i.bx.bx-chevron-left {} }
            button #lightbox-next .lightbox-nav.next aria-label="Next" { i.bx.bx-chevron-right {} }
            div #lightbox-content .lightbox-content {}
        }
    }
}

// ============================================================================
// Small helpers
// ============================================================================

/// Generated square icon used for the favicon and the nav logo.
///
/// Font size scales down with text length so two- and three-letter
/// monograms still fit the tile.
pub fn icon_svg(favicon: &Favicon, size: u32) -> Markup {
    let size_f = f64::from(size);
    let font_size = (match favicon.text.chars().count() {
        0 | 1 => size_f * 0.7,
        2 => size_f * 0.55,
        _ => size_f * 0.45,
    })
    .round();

    html! {
        svg xmlns="http://www.w3.org/2000/svg" viewBox={ "0 0 " (size) " " (size) } {
            rect width=(size) height=(size) fill=(favicon.background_color) rx=((size_f * 0.1).round()) {}
            text x=(size_f / 2.0) y=(size_f / 2.0)
                font-family="Arial, sans-serif"
                font-size=(font_size)
                font-weight="bold"
                fill=(favicon.text_color)
                text-anchor="middle"
                dominant-baseline="central"
                dy="0.1em" { (favicon.text) }
        }
    }
}

/// Format a media date for display, localized month names included.
///
/// Unparseable dates are shown verbatim — a config with freeform dates
/// still sorts (to the epoch) and still displays something sensible.
pub fn format_date(date: &str, locale_tag: &str) -> String {
    let Some(parsed) = view::parse_date(date) else {
        return date.to_string();
    };
    let locale = chrono::Locale::try_from(locale_tag.replace('-', "_").as_str())
        .unwrap_or(chrono::Locale::en_US);
    parsed
        .date_naive()
        .format_localized("%-d %B %Y", locale)
        .to_string()
}
