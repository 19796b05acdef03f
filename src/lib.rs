#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! bookmarkletize library
//!
//! Converts hand-written browser-automation scripts into bookmarklets: a
//! single comment-free line wrapped in an immediately-invoked function and
//! prefixed with `javascript:`. Several scripts can be composed into one
//! bookmarklet first.
//!
//! # Basic Example
//!
//! ```
//! use bookmarkletize::transform::transform;
//!
//! let src = r#"
//!     // Grab the page title
//!     var t = document.title; /* no trailing newline needed */
//!     alert("Title: " + t + " from https://example.com");
//! "#;
//!
//! assert_eq!(
//!     transform(src).to_string(),
//!     r#"javascript:(function(){ var t = document.title; alert("Title: " + t + " from https://example.com"); })();"#
//! );
//! ```
//!
//! # Composing scripts
//!
//! Scrapers are listed first, the driver last. Each scraper's own entry call
//! is dropped so only the driver decides what runs.
//!
//! ```
//! use bookmarkletize::compose::{compose, SourceScript};
//! use bookmarkletize::transform::transform;
//!
//! let scraper = SourceScript::with_entry_call(
//!     "function downloadAim() { save(); }\ndownloadAim();",
//!     "downloadAim();",
//! );
//! let driver = SourceScript::new("if (ok) { downloadAim(); }");
//!
//! let bm = transform(&compose(&[scraper, driver]));
//! assert_eq!(
//!     bm.payload(),
//!     "function downloadAim() { save(); } if (ok) { downloadAim(); }"
//! );
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Merging several scripts into one bookmarklet body
pub mod compose;
/// Variant configuration and `.bookmarkletize.toml` handling
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Reading a variant's source scripts
pub mod source;
/// Comment stripping, flattening and IIFE wrapping
pub mod transform;
