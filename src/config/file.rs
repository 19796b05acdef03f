//! Configuration file data structures

use serde::{Deserialize, Serialize};

use crate::error::BookmarkletError;

/// Configuration file name, looked up in the source directory
pub const CONFIG_FILE_NAME: &str = ".bookmarkletize.toml";

/// bookmarkletize configuration file structure
///
/// ```toml
/// [[variant]]
/// name = "chat"
/// description = "Gemini + AIM scrapers driven by chat.js"
///
/// [[variant.source]]
/// file = "gemini.js"
/// entry-call = "downloadGemini();"
///
/// [[variant.source]]
/// file = "chat.js"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Named variants, in listing order
    #[serde(rename = "variant", default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<VariantConfig>,
}

/// One buildable bookmarklet: its sources in composition order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Name used on the command line
    pub name: String,

    /// Short human description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Source files, scrapers first and driver last
    #[serde(rename = "source", default)]
    pub sources: Vec<SourceConfig>,
}

/// A source file within a variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// File name relative to the source directory
    pub file: String,

    /// Self-invoking call removed before composing (e.g. "downloadAim();")
    #[serde(rename = "entry-call", default, skip_serializing_if = "Option::is_none")]
    pub entry_call: Option<String>,
}

impl SourceConfig {
    fn new(file: &str, entry_call: Option<&str>) -> Self {
        Self {
            file: file.to_string(),
            entry_call: entry_call.map(str::to_string),
        }
    }
}

impl ConfigFile {
    /// The variants available without any config file
    ///
    /// - `gemini`: `gemini.js` on its own
    /// - `aim`: `aim.js` on its own
    /// - `chat`: both scrapers with their download calls removed, then `chat.js`
    pub fn builtin() -> Self {
        Self {
            variants: vec![
                VariantConfig {
                    name: "gemini".to_string(),
                    description: Some("Download the current Gemini conversation".to_string()),
                    sources: vec![SourceConfig::new("gemini.js", None)],
                },
                VariantConfig {
                    name: "aim".to_string(),
                    description: Some("Download the current AI Mode conversation".to_string()),
                    sources: vec![SourceConfig::new("aim.js", None)],
                },
                VariantConfig {
                    name: "chat".to_string(),
                    description: Some(
                        "Detect the chat site and download with the matching scraper".to_string(),
                    ),
                    sources: vec![
                        SourceConfig::new("gemini.js", Some("downloadGemini();")),
                        SourceConfig::new("aim.js", Some("downloadAim();")),
                        SourceConfig::new("chat.js", None),
                    ],
                },
            ],
        }
    }

    /// Overlay these variants on the built-in ones
    ///
    /// A variant with a built-in name replaces it in place; new names are
    /// appended in file order.
    pub fn merged_over_builtin(self) -> Self {
        let mut merged = Self::builtin();
        for variant in self.variants {
            match merged.variants.iter_mut().find(|v| v.name == variant.name) {
                Some(existing) => *existing = variant,
                None => merged.variants.push(variant),
            }
        }
        merged
    }

    /// Check names and sources for obvious mistakes
    ///
    /// # Examples
    ///
    /// ```
    /// use bookmarkletize::config::ConfigFile;
    ///
    /// assert!(ConfigFile::builtin().validate().is_ok());
    ///
    /// let mut config = ConfigFile::builtin();
    /// config.variants[0].sources.clear();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), BookmarkletError> {
        let invalid = |reason: String| BookmarkletError::InvalidConfig { reason };

        for (i, variant) in self.variants.iter().enumerate() {
            if variant.name.trim().is_empty() {
                return Err(invalid(format!("variant #{} has an empty name", i + 1)));
            }
            if self.variants[..i].iter().any(|v| v.name == variant.name) {
                return Err(invalid(format!(
                    "variant '{}' is defined more than once",
                    variant.name
                )));
            }
            if variant.sources.is_empty() {
                return Err(invalid(format!(
                    "variant '{}' has no sources",
                    variant.name
                )));
            }
            for source in &variant.sources {
                if source.file.trim().is_empty() {
                    return Err(invalid(format!(
                        "variant '{}' has a source with an empty file name",
                        variant.name
                    )));
                }
                if source.entry_call.as_deref() == Some("") {
                    return Err(invalid(format!(
                        "variant '{}': entry-call for {} is empty",
                        variant.name, source.file
                    )));
                }
            }
        }

        Ok(())
    }

    /// Look up a variant by name
    pub fn variant(&self, name: &str) -> Result<&VariantConfig, BookmarkletError> {
        self.variants
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| BookmarkletError::UnknownVariant {
                name: name.to_string(),
                available: self.variant_names(),
            })
    }

    /// Configured variant names in order
    pub fn variant_names(&self) -> Vec<String> {
        self.variants.iter().map(|v| v.name.clone()).collect()
    }
}
