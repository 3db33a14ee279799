//! End-to-end build test: config.json in, finished site out.
//!
//! Exercises the whole pipeline the way the CLI does — load, validate,
//! flatten, render, write — against a temp directory, and asserts on the
//! generated markup rather than on intermediate structures.

use folio_one::{config, render};
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = r#"{
  "profile": {
    "name": "Nadia",
    "title": "Photographer",
    "bio": "Chasing **light**.",
    "photo": "https://drive.google.com/file/d/PHOTO1/view",
    "location": "Bandung",
    "email": "nadia@example.com",
    "instagram": "@nadia.shoots",
    "whatsapp": "628111222333"
  },
  "texts": {
    "favicon": { "useIcon": true, "text": "N" }
  },
  "featured": [
    { "type": "image", "src": "https://drive.google.com/file/d/FEAT1/view",
      "title": "Golden hour", "description": "Featured" }
  ],
  "categories": [
    {
      "id": "nature",
      "name": "Nature",
      "media": [
        {
          "type": "folder",
          "id": "trip",
          "title": "Trip",
          "description": "Weekend trip",
          "date": "2024-06-01",
          "items": [
            { "type": "image", "src": "first.jpg", "title": "First",
              "date": "2024-01-01" },
            { "type": "image", "src": "second.jpg", "title": "Second",
              "date": "2024-06-01" }
          ]
        },
        { "type": "image", "src": "lake.jpg", "title": "Lake",
          "date": "2024-02-01" }
      ]
    }
  ],
  "socialMedia": [
    { "name": "Instagram", "icon": "bx bxl-instagram",
      "url": "https://instagram.com/nadia.shoots", "text": "@nadia.shoots" }
  ]
}"#;

fn build_fixture() -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("config.json");
    fs::write(&config_path, CONFIG).unwrap();

    let site = config::load_config(&config_path).unwrap();
    let out = tmp.path().join("dist");
    render::build(&site, tmp.path(), &out).unwrap();

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    (tmp, html)
}

#[test]
fn build_produces_index_and_favicon() {
    let (tmp, html) = build_fixture();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(tmp.path().join("dist/favicon.svg").exists());
}

#[test]
fn worked_example_gallery_shows_one_folder_card() {
    let (_tmp, html) = build_fixture();

    // Top-level grid: the Trip folder card and the Lake image, children
    // hidden. Split on the rendered class attribute — the bare class name
    // also occurs in the inlined CSS and JS.
    let grid_end = html.find(r#"class="folder-detail""#).unwrap();
    let grid = &html[..grid_end];
    assert!(grid.contains(r#"data-kind="folder""#));
    assert!(grid.contains("Trip"));
    assert!(grid.contains("Lake"));
    assert!(!grid.contains(r#"data-full="first.jpg""#));

    // Folder card leads (2024-06-01 beats 2024-02-01 under newest-first)
    let trip = grid.find(r#"data-folder="trip""#).unwrap();
    let lake = grid.find("Lake").unwrap();
    assert!(trip < lake);
}

#[test]
fn worked_example_folder_detail_is_newest_first() {
    let (_tmp, html) = build_fixture();

    let detail = &html[html.find(r#"id="folder-trip""#).unwrap()..];
    let second = detail.find("Second").unwrap();
    let first = detail.find("First").unwrap();
    assert!(second < first, "2024-06-01 must precede 2024-01-01");

    // Wrap-around neighbors baked for a 2-item context
    assert!(detail.contains(r#"data-index="0" data-prev="1" data-next="1""#));
}

#[test]
fn drive_links_resolved_in_output() {
    let (_tmp, html) = build_fixture();
    assert!(html.contains("https://drive.google.com/thumbnail?id=PHOTO1"));
    assert!(html.contains("https://drive.google.com/thumbnail?id=FEAT1"));
}

#[test]
fn widgets_present_in_output() {
    let (_tmp, html) = build_fixture();
    assert!(html.contains(r#"data-number="628111222333""#));
    assert!(html.contains(r#"class="featured-slider""#));
    assert!(html.contains(r#"data-category="nature""#));
    assert!(html.contains("Terbaru"));
}

#[test]
fn invalid_config_fails_before_any_output() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("config.json");
    fs::write(&config_path, r#"{"profile": {"name": ""}}"#).unwrap();

    assert!(config::load_config(&config_path).is_err());
    assert!(!tmp.path().join("dist").exists());
}
