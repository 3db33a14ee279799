//! # Folio One
//!
//! A single-page static site generator for photography portfolios. One
//! `config.json` is the data source: profile, featured media, categorized
//! galleries with folders, and contact details in; one self-contained HTML
//! page out.
//!
//! # Architecture: Decide at Build Time, Mirror at Runtime
//!
//! The generator runs a short pipeline over the config:
//!
//! ```text
//! 1. Load      config.json  →  SiteConfig     (parse + validate, fail-fast)
//! 2. Flatten   categories   →  catalog        (annotated flat entry list)
//! 3. Render    catalog      →  dist/          (index.html + favicon + assets)
//! ```
//!
//! The page is interactive — filtering, folder navigation, a lightbox, a
//! featured slider — but the logic governing that interactivity lives here,
//! in pure Rust modules:
//!
//! - [`view`] derives the visible gallery list from a filter/sort state;
//! - [`navigator`] is the state machine for folder and lightbox navigation
//!   (an intent reducer over a single session value);
//! - [`catalog`] owns the flattening and folder-cover rules;
//! - [`drive`] normalizes share links into embeddable URLs.
//!
//! The renderer pre-computes everything those modules can answer — the
//! default view order, folder detail views, wrap-around lightbox neighbors,
//! resolved URLs, date sort keys — and bakes the results into the markup as
//! data attributes. The shipped JavaScript only mirrors the reducer against
//! those attributes; it never re-derives policy. This keeps
//! the state machine unit-testable without a browser and keeps the page
//! working decades from now: plain HTML, inline CSS, no framework.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.json` model, text defaults, validation, sample generation |
//! | [`catalog`] | Media/folder/category types, catalog flattening, folder covers |
//! | [`view`] | Filter/sort engine: `ViewState` → ordered view list |
//! | [`navigator`] | Folder/lightbox state machine and cover-rotation decks |
//! | [`drive`] | Google Drive share-link resolution (pass-through on no match) |
//! | [`render`] | Maud single-page renderer and site build (HTML, favicon, assets) |
//! | [`output`] | Information-first CLI output formatting |
//!
//! # Design Decisions
//!
//! ## JSON Config, Rejected Typos
//!
//! The config is one JSON document (the format site owners already have
//! their data in), deserialized with serde. Unknown keys are rejected rather
//! than ignored: a misspelled `sortOption` should fail the build, not
//! silently fall back to defaults.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped — important
//! here because every title and description is user-supplied.
//!
//! ## Fail-Fast Configuration
//!
//! A config that cannot be loaded, parsed, or validated aborts the build
//! with an error before any output is written. There is no partially
//! rendered site and no best-effort fallback page.
//!
//! ## Best-Effort URL Resolution
//!
//! The one deliberately lenient surface is [`drive`]: a share URL that
//! matches no known pattern passes through unchanged. Bad URLs degrade to a
//! broken image on the page, never to a failed build.

pub mod catalog;
pub mod config;
pub mod drive;
pub mod navigator;
pub mod output;
pub mod render;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
