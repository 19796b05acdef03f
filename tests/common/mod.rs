//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Source-directory fixtures with realistic scraper/driver scripts
//! - Assertions for the bookmarklet output contract

pub mod assertions;
pub mod fixtures;
