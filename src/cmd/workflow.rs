//! Build workflow orchestration
//!
//! Separates the business logic of building a bookmarklet from how the result
//! is presented, so builds can be run programmatically or via the CLI.
//!
//! A build runs in three phases:
//!
//! 1. **Resolve**: load `.bookmarkletize.toml` (or the built-ins) and find the
//!    requested variant.
//! 2. **Load**: read every source file. Any missing or unreadable file aborts
//!    here, before anything is transformed.
//! 3. **Transform**: compose the sources and run the bookmarklet pipeline.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use bookmarkletize::cmd::workflow::BuildWorkflow;
//!
//! let workflow = BuildWorkflow::new(Path::new("bookmarklets"));
//! let result = workflow.execute("chat").expect("Build failed");
//! println!("{}", result.bookmarklet);
//! ```

use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::compose::compose;
use crate::config::{ConfigLoader, VariantConfig};
use crate::error::BookmarkletError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::source::SourceLoader;
use crate::transform::{transform, Bookmarklet};

/// Result of building one variant
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Variant name
    pub variant: String,
    /// Source files in composition order
    pub sources: Vec<String>,
    /// Total size of the raw source files
    pub source_bytes: u64,
    /// The finished bookmarklet
    pub bookmarklet: Bookmarklet,
}

impl BuildResult {
    /// Size of the rendered bookmarklet
    pub fn bookmarklet_bytes(&self) -> u64 {
        self.bookmarklet.len() as u64
    }
}

/// Build workflow orchestrator
pub struct BuildWorkflow {
    source_dir: PathBuf,
    allow_empty: bool,
}

impl BuildWorkflow {
    /// Create a workflow reading sources from `source_dir`
    pub fn new(source_dir: &Path) -> Self {
        Self {
            source_dir: source_dir.to_path_buf(),
            allow_empty: false,
        }
    }

    /// Emit an empty-bodied bookmarklet instead of failing on blank sources
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Build a single named variant
    pub fn execute(&self, variant: &str) -> Result<BuildResult> {
        self.execute_with_fs(variant, &RealFileSystem)
    }

    /// Build a single variant with a custom filesystem implementation
    pub fn execute_with_fs<FS: FileSystem>(&self, variant: &str, fs: &FS) -> Result<BuildResult> {
        let config = ConfigLoader::load_with_fs(&self.source_dir, fs)?;
        let variant = config.variant(variant)?;
        Ok(self.build_variant(variant, fs)?)
    }

    /// Build every configured variant, in parallel, in listing order
    pub fn execute_all(&self) -> Result<Vec<BuildResult>> {
        self.execute_all_with_fs(&RealFileSystem)
    }

    /// Build every variant with a custom filesystem implementation
    pub fn execute_all_with_fs<FS: FileSystem>(&self, fs: &FS) -> Result<Vec<BuildResult>> {
        let config = ConfigLoader::load_with_fs(&self.source_dir, fs)?;
        let results = config
            .variants
            .par_iter()
            .map(|variant| self.build_variant(variant, fs))
            .collect::<Result<Vec<_>, BookmarkletError>>()?;
        Ok(results)
    }

    fn build_variant<FS: FileSystem>(
        &self,
        variant: &VariantConfig,
        fs: &FS,
    ) -> Result<BuildResult, BookmarkletError> {
        log::info!("building variant '{}'", variant.name);

        let scripts = SourceLoader::load_with_fs(variant, &self.source_dir, fs)?;
        let source_bytes = scripts.iter().map(|s| s.text.len() as u64).sum();

        let combined = compose(&scripts);
        if combined.trim().is_empty() && !self.allow_empty {
            return Err(BookmarkletError::EmptyInput {
                variant: variant.name.clone(),
            });
        }

        let bookmarklet = transform(&combined);
        if bookmarklet.is_empty() {
            log::warn!("variant '{}' produced an empty bookmarklet", variant.name);
        }

        Ok(BuildResult {
            variant: variant.name.clone(),
            sources: variant.sources.iter().map(|s| s.file.clone()).collect(),
            source_bytes,
            bookmarklet,
        })
    }
}
