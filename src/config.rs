//! Site configuration.
//!
//! The entire site is described by one `config.json`. Loading is fail-fast:
//! a missing file, a JSON syntax error, or a validation failure aborts the
//! build before anything is written — there is no partially-configured site.
//!
//! ## Document shape
//!
//! ```text
//! {
//!   "profile":     { name, title, bio, photo?, location, email,
//!                    instagram, whatsapp? },
//!   "texts":       { sectionTitles?, ctaButton?, sortLabel?, sortOptions?,
//!                    typeFilters?, emptyState?, folderLabels?, aboutLabels?,
//!                    whatsapp?, favicon?, dateFormat? },
//!   "featured":    [ {type: image|video, src, title, ...} ],
//!   "categories":  [ { id, name, media: [ ...items and folders... ] } ],
//!   "socialMedia": [ { name, icon, url, text? } ]
//! }
//! ```
//!
//! Only `profile` is required. Every `texts` subsection falls back to fixed
//! defaults (the stock copy is Indonesian, matching the widget labels the
//! page ships with), so a sparse config stays sparse. Unknown keys are
//! rejected to catch typos early.
//!
//! ## Validation
//!
//! Structural rules the type model cannot express are checked after parsing:
//! non-empty profile name, unique non-empty category ids, unique folder ids,
//! and non-empty `src` on every media entry. Folder nesting is already
//! unrepresentable in [`crate::catalog`]'s types and fails at parse time.

use crate::catalog::{Category, FolderSpec, MediaEntry, MediaItem};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// The complete site configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SiteConfig {
    pub profile: Profile,
    #[serde(default)]
    pub texts: Texts,
    #[serde(default)]
    pub featured: Vec<MediaItem>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub social_media: Vec<SocialLink>,
}

/// Site owner identity shown in the hero, about, and contact sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    /// Hero/avatar photo URL (may be a Drive share link).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub instagram: String,
    /// WhatsApp number in international format without `+` (e.g.
    /// `6281234567890`), used for the `wa.me` deep link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

/// A contact/social entry. `icon` is a Boxicons class name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub url: String,
    /// Display label; falls back to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl SocialLink {
    pub fn label(&self) -> &str {
        self.text.as_deref().unwrap_or(&self.name)
    }
}

// ============================================================================
// Texts and their stock defaults
// ============================================================================

/// All user-visible copy. Every field has a stock default so `texts` (and
/// any of its subsections) can be omitted entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Texts {
    pub section_titles: SectionTitles,
    pub cta_button: CtaButton,
    pub sort_label: SortLabel,
    pub sort_options: SortOptions,
    pub type_filters: TypeFilters,
    pub empty_state: EmptyState,
    pub folder_labels: FolderLabels,
    pub about_labels: AboutLabels,
    pub whatsapp: WhatsAppTexts,
    pub favicon: Favicon,
    pub date_format: DateFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionTitles {
    pub gallery: String,
    pub about: String,
    pub contact: String,
}

impl Default for SectionTitles {
    fn default() -> Self {
        Self {
            gallery: "Gallery".to_string(),
            about: "About".to_string(),
            contact: "Contact".to_string(),
        }
    }
}

/// Newtype so the CTA label can default independently of its parent section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CtaButton(pub String);

impl Default for CtaButton {
    fn default() -> Self {
        Self("View Gallery".to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortLabel(pub String);

impl Default for SortLabel {
    fn default() -> Self {
        Self("Urutkan:".to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortOptions {
    pub newest: String,
    pub oldest: String,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            newest: "Terbaru".to_string(),
            oldest: "Terlama".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeFilters {
    pub image: String,
    pub video: String,
}

impl Default for TypeFilters {
    fn default() -> Self {
        Self {
            image: "Foto".to_string(),
            video: "Video".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            title: "Tidak ada konten".to_string(),
            message: "Kategori ini belum memiliki konten. Silakan pilih kategori lain."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct FolderLabels {
    /// Noun for the item count badge (`"12 item"`).
    pub items: String,
    pub back_to_gallery: String,
    pub empty_title: String,
    pub empty_message: String,
}

impl Default for FolderLabels {
    fn default() -> Self {
        Self {
            items: "item".to_string(),
            back_to_gallery: "Kembali ke Gallery".to_string(),
            empty_title: "Folder Kosong".to_string(),
            empty_message: "Folder ini belum memiliki konten.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutLabels {
    pub location: String,
    pub email: String,
    pub instagram: String,
}

impl Default for AboutLabels {
    fn default() -> Self {
        Self {
            location: "Location".to_string(),
            email: "Email".to_string(),
            instagram: "Instagram".to_string(),
        }
    }
}

/// Copy for the simulated WhatsApp chat widget. Name and photo fall back to
/// the main profile when absent or blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct WhatsAppTexts {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub status: String,
    pub greeting: String,
    pub placeholder: String,
    pub time_label: String,
}

impl Default for WhatsAppTexts {
    fn default() -> Self {
        Self {
            name: None,
            photo: None,
            status: "Online".to_string(),
            greeting: "Halo! Ada yang bisa saya bantu?".to_string(),
            placeholder: "Ketik pesan...".to_string(),
            time_label: "Sekarang".to_string(),
        }
    }
}

impl WhatsAppTexts {
    /// Widget display name: the WhatsApp-specific name when set and
    /// non-blank, otherwise the profile name.
    pub fn display_name<'a>(&'a self, profile: &'a Profile) -> &'a str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &profile.name,
        }
    }

    /// Widget avatar: the WhatsApp-specific photo when set and non-blank,
    /// otherwise the profile photo.
    pub fn avatar<'a>(&'a self, profile: &'a Profile) -> Option<&'a str> {
        match self.photo.as_deref().map(str::trim) {
            Some(photo) if !photo.is_empty() => Some(photo),
            _ => profile.photo.as_deref(),
        }
    }
}

/// Generated favicon / nav logo settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Favicon {
    pub use_icon: bool,
    /// One to three characters rendered into the icon.
    pub text: String,
    pub background_color: String,
    pub text_color: String,
}

impl Default for Favicon {
    fn default() -> Self {
        Self {
            use_icon: false,
            text: "N".to_string(),
            background_color: "#000000".to_string(),
            text_color: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateFormat {
    /// BCP 47 locale tag for month names on media dates (e.g. `id-ID`).
    pub locale: String,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            locale: "id-ID".to_string(),
        }
    }
}

// ============================================================================
// Loading and validation
// ============================================================================

impl SiteConfig {
    /// Validate structural rules the type model cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "profile.name must not be empty".into(),
            ));
        }

        let mut category_ids = HashSet::new();
        let mut folder_ids = HashSet::new();

        for category in &self.categories {
            if category.id.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "category \"{}\" has an empty id",
                    category.name
                )));
            }
            if !category_ids.insert(category.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate category id \"{}\"",
                    category.id
                )));
            }

            for entry in &category.media {
                match entry {
                    MediaEntry::Image(m) | MediaEntry::Video(m) => {
                        validate_src(&m.src, &m.title)?;
                    }
                    MediaEntry::Folder(folder) => validate_folder(folder, &mut folder_ids)?,
                }
            }
        }

        for item in &self.featured {
            validate_src(&item.media().src, &item.media().title)?;
        }

        Ok(())
    }
}

fn validate_src(src: &str, title: &str) -> Result<(), ConfigError> {
    if src.trim().is_empty() {
        return Err(ConfigError::Validation(format!(
            "media entry \"{title}\" has an empty src"
        )));
    }
    Ok(())
}

fn validate_folder<'a>(
    folder: &'a FolderSpec,
    folder_ids: &mut HashSet<&'a str>,
) -> Result<(), ConfigError> {
    if folder.id.trim().is_empty() {
        return Err(ConfigError::Validation(format!(
            "folder \"{}\" has an empty id",
            folder.title
        )));
    }
    if !folder_ids.insert(folder.id.as_str()) {
        return Err(ConfigError::Validation(format!(
            "duplicate folder id \"{}\"",
            folder.id
        )));
    }
    for item in &folder.items {
        validate_src(&item.media().src, &item.media().title)?;
    }
    Ok(())
}

/// Load and validate `config.json`.
///
/// Fail-fast: any IO, parse, or validation problem is returned as an error
/// and the caller must not proceed to render.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate a config document from a string.
pub fn parse_config(content: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// A documented sample `config.json`, used by the `gen-config` command.
///
/// JSON carries no comments, so the sample documents itself through filled-in
/// fields: every optional section is present with its stock default value.
/// Guaranteed to round-trip through [`parse_config`].
pub fn stock_config_json() -> String {
    let sample = SiteConfig {
        profile: Profile {
            name: "Your Name".to_string(),
            title: "Photographer & Videographer".to_string(),
            bio: "A few sentences about you. **Markdown** is supported.".to_string(),
            photo: Some("https://drive.google.com/file/d/FILE_ID/view".to_string()),
            location: "Jakarta, Indonesia".to_string(),
            email: "you@example.com".to_string(),
            instagram: "@yourhandle".to_string(),
            whatsapp: Some("6281234567890".to_string()),
        },
        texts: Texts::default(),
        featured: vec![MediaItem::Image(crate::catalog::MediaFile {
            src: "https://drive.google.com/file/d/FILE_ID/view".to_string(),
            thumbnail: None,
            title: "A featured shot".to_string(),
            description: "Shown in the hero slider".to_string(),
            date: Some("2024-06-01".to_string()),
        })],
        categories: vec![Category {
            id: "nature".to_string(),
            name: "Nature".to_string(),
            media: vec![MediaEntry::Folder(FolderSpec {
                id: "trip-2024".to_string(),
                title: "Mountain Trip".to_string(),
                description: "A weekend in the highlands".to_string(),
                thumbnail: None,
                date: Some("2024-06-01".to_string()),
                items: vec![MediaItem::Image(crate::catalog::MediaFile {
                    src: "https://drive.google.com/file/d/FILE_ID/view".to_string(),
                    thumbnail: None,
                    title: "Sunrise".to_string(),
                    description: String::new(),
                    date: Some("2024-06-01".to_string()),
                })],
            })],
        }],
        social_media: vec![SocialLink {
            name: "Instagram".to_string(),
            icon: "bx bxl-instagram".to_string(),
            url: "https://instagram.com/yourhandle".to_string(),
            text: Some("@yourhandle".to_string()),
        }],
    };

    serde_json::to_string_pretty(&sample).expect("sample config must serialize")
}
