//! Fixture management for testing
//!
//! Provides the stock event page (every production anchor present) and a
//! few configuration documents, written into throwaway site directories.

use std::path::{Path, PathBuf};

/// Unmodified page template, containing every production anchor once,
/// except the event banner which appears twice (title and header)
pub const STOCK_PAGE: &str = include_str!("../fixtures/index.html");

/// Write `website/index.html` with the stock page under `root`
///
/// Returns the path of the written page.
///
/// # Panics
///
/// Panics if the directory or file cannot be created.
pub fn write_stock_site(root: &Path) -> PathBuf {
    let site_dir = root.join("website");
    std::fs::create_dir_all(&site_dir).expect("Failed to create website/ directory");

    let page = site_dir.join("index.html");
    std::fs::write(&page, STOCK_PAGE).expect("Failed to write stock index.html");
    page
}

/// Write `content` as `event_config.json` under `root`
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_config(root: &Path, content: &str) -> PathBuf {
    let path = root.join("event_config.json");
    std::fs::write(&path, content).expect("Failed to write event_config.json");
    path
}

/// Complete document for "API World 2025" without an Instagram link
pub fn api_world_config_json() -> String {
    r#"{
  "event_name": "API World 2025",
  "date": "Sep 3, 2025",
  "city": "Santa Clara",
  "credits_url": "https://example.com/credits",
  "survey_url": "https://example.com/survey",
  "demo_url": "https://github.com/example/api-world-demo",
  "deck_pdf": "decks/api-world-2025.pdf",
  "linkedin_profile_image": "https://example.com/me.jpg",
  "social_links": {
    "linkedin": "https://www.linkedin.com/in/example/",
    "twitter": "https://twitter.com/example",
    "github": "https://github.com/example",
    "youtube": "https://www.youtube.com/@example"
  }
}
"#
    .to_string()
}

/// Minimal valid document: required fields only
pub fn sample_like_config_json() -> String {
    r#"{
  "event_name": "Rust Meetup",
  "date": "October 19, 2026",
  "city": "Berlin",
  "credits_url": "https://example.com/credits",
  "survey_url": "https://example.com/survey",
  "demo_url": "https://example.com/demo"
}
"#
    .to_string()
}
