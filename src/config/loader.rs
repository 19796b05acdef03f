//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::BookmarkletError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the variants for a source directory
    ///
    /// Reads `.bookmarkletize.toml` from `source_dir` if present and overlays
    /// it on the built-in variants. Without a config file the built-ins are
    /// returned as-is.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bookmarkletize::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("bookmarklets"))?;
    /// println!("Variants: {}", config.variant_names().join(", "));
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(source_dir: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(source_dir, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(source_dir: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = source_dir.join(CONFIG_FILE_NAME);

        // NotFound means "no config", anything else is a real failure
        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!(
                    "no {} in {}, using built-in variants",
                    CONFIG_FILE_NAME,
                    source_dir.display()
                );
                return Ok(ConfigFile::builtin());
            }
            Err(e) => {
                return Err(e).context(format!("Failed to read {}", CONFIG_FILE_NAME));
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).map_err(|e| BookmarkletError::InvalidConfig {
                reason: format!("failed to parse {}: {}", CONFIG_FILE_NAME, e),
            })?;

        config.validate()?;

        log::debug!(
            "loaded {} variant(s) from {}",
            config.variants.len(),
            config_path.display()
        );

        Ok(config.merged_over_builtin())
    }

    /// Save config to `.bookmarkletize.toml` in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bookmarkletize::config::{ConfigFile, ConfigLoader};
    /// use std::path::Path;
    ///
    /// ConfigLoader::save(&ConfigFile::builtin(), Path::new("bookmarklets"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn save(config: &ConfigFile, source_dir: &Path) -> Result<()> {
        Self::save_with_fs(config, source_dir, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        source_dir: &Path,
        fs: &FS,
    ) -> Result<()> {
        let config_path = source_dir.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize config")?;

        fs.write(&config_path, contents)
            .context(format!("Failed to write {}", CONFIG_FILE_NAME))?;

        Ok(())
    }

    /// Check if config file exists in the source directory
    pub fn exists(source_dir: &Path) -> bool {
        RealFileSystem.exists(&source_dir.join(CONFIG_FILE_NAME))
    }
}
