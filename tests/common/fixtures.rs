//! Test fixture helpers for creating source directories
//!
//! Provides a temp directory holding the three scripts the built-in
//! variants expect: two scrapers and a driver.

#![allow(dead_code)]

use std::fs;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Gemini scraper; ends with its own entry call
pub const GEMINI_JS: &str = r#"// Gemini conversation scraper
/* Collects every turn on the page
   and saves it as markdown. */
function scrapeGemini() {
    var turns = document.querySelectorAll('.conversation-turn'); // one per message
    return Array.from(turns).map(function (t) { return t.innerText; });
}

function downloadGeminiFile(text) {
    var link = document.createElement('a');
    link.href = 'data:text/markdown,' + encodeURIComponent(text);
    link.download = 'gemini.md';
    link.click();
}

function downloadGemini() {
    downloadGeminiFile(scrapeGemini().join('\n\n'));
}

downloadGemini();
"#;

/// AI Mode scraper; ends with its own entry call
pub const AIM_JS: &str = r#"// AI Mode scraper
function scrapeAim() {
    var source = "https://www.google.com/search?udm=50";
    return document.body.innerText + "\nSource: " + source;
}

function downloadAimFile(text) {
    var blob = new Blob([text], { type: 'text/markdown' });
    var link = document.createElement('a');
    link.href = URL.createObjectURL(blob);
    link.download = 'aim.md';
    link.click();
}

function downloadAim() {
    downloadAimFile(scrapeAim());
}

downloadAim();
"#;

/// Driver picking the scraper by location
pub const CHAT_JS: &str = r#"// Pick the scraper for the current site
if (location.href.indexOf('gemini.google.com') !== -1) {
    downloadGemini();
} else {
    downloadAim(); // Google AI Mode
}
"#;

/// Creates a source directory with gemini.js, aim.js and chat.js
///
/// The TempDir must be kept alive for the files to exist
pub fn create_source_dir() -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("gemini.js"), GEMINI_JS)?;
    fs::write(temp_dir.path().join("aim.js"), AIM_JS)?;
    fs::write(temp_dir.path().join("chat.js"), CHAT_JS)?;
    Ok(temp_dir)
}

/// Creates a source directory with a single named file
pub fn create_source_dir_with(file: &str, content: &str) -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join(file), content)?;
    Ok(temp_dir)
}
