//! Reading a variant's source scripts from disk

use std::io;
use std::path::Path;

use crate::compose::SourceScript;
use crate::config::VariantConfig;
use crate::error::BookmarkletError;
use crate::infra::{FileSystem, RealFileSystem};

/// Loads the scripts named by a variant, in composition order
pub struct SourceLoader;

impl SourceLoader {
    /// Read every source of `variant` from `source_dir`
    ///
    /// All files are read before anything is composed, so a missing or
    /// unreadable file stops the build without partial output.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bookmarkletize::config::ConfigFile;
    /// use bookmarkletize::source::SourceLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigFile::builtin();
    /// let scripts = SourceLoader::load(config.variant("chat")?, Path::new("bookmarklets"))?;
    /// assert_eq!(scripts.len(), 3);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(
        variant: &VariantConfig,
        source_dir: &Path,
    ) -> Result<Vec<SourceScript>, BookmarkletError> {
        Self::load_with_fs(variant, source_dir, &RealFileSystem)
    }

    /// Load sources with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(
        variant: &VariantConfig,
        source_dir: &Path,
        fs: &FS,
    ) -> Result<Vec<SourceScript>, BookmarkletError> {
        variant
            .sources
            .iter()
            .map(|source| -> Result<SourceScript, BookmarkletError> {
                let path = source_dir.join(&source.file);
                let text = fs.read_to_string(&path).map_err(|e| match e.kind() {
                    io::ErrorKind::NotFound => BookmarkletError::MissingSource {
                        path: path.clone(),
                        variant: variant.name.clone(),
                    },
                    _ => BookmarkletError::UnreadableSource {
                        path: path.clone(),
                        source: e,
                    },
                })?;

                log::debug!("read {} ({} bytes)", path.display(), text.len());

                Ok(SourceScript {
                    text,
                    entry_call: source.entry_call.clone(),
                })
            })
            .collect()
    }
}
