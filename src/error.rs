//! Enhanced error types with contextual suggestions
//!
//! The text pipeline itself never fails; every error here comes from the
//! boundary: finding variants, reading source files, validating config.
//! Each error carries:
//! - An actionable message
//! - A suggested fix
//! - A sysexits-style exit code
//!
//! # Examples
//!
//! ```
//! use bookmarkletize::error::BookmarkletError;
//! use std::path::PathBuf;
//!
//! let err = BookmarkletError::MissingSource {
//!     path: PathBuf::from("bookmarklets/aim.js"),
//!     variant: "chat".to_string(),
//! };
//!
//! assert_eq!(err.exit_code(), 66);
//! assert!(err.suggestion().unwrap().contains("aim.js"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing sources for the transform
#[derive(Error, Debug)]
pub enum BookmarkletError {
    /// A source file required by the variant does not exist
    #[error("Required source file not found: {path}")]
    MissingSource {
        /// Path to the missing file
        path: PathBuf,
        /// Variant that needed it
        variant: String,
    },

    /// A source file exists but could not be read
    #[error("Cannot read source file: {path}")]
    UnreadableSource {
        /// Path to the file
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// The composed sources contain nothing but whitespace
    #[error("No code provided for variant '{variant}'")]
    EmptyInput {
        /// Variant being built
        variant: String,
    },

    /// Variant name is not configured
    #[error("Unknown variant: '{name}'")]
    UnknownVariant {
        /// Requested variant name
        name: String,
        /// Configured variant names
        available: Vec<String>,
    },

    /// Configuration file is present but invalid
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it
        reason: String,
    },
}

impl BookmarkletError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookmarkletize::error::BookmarkletError;
    ///
    /// let error = BookmarkletError::UnknownVariant {
    ///     name: "gemeni".to_string(),
    ///     available: vec!["gemini".to_string(), "aim".to_string()],
    /// };
    ///
    /// assert!(error.suggestion().unwrap().contains("gemini, aim"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::MissingSource { path, variant } => Some(format!(
                "Variant '{}' needs {}. Check --dir or the variant's sources in .bookmarkletize.toml",
                variant,
                path.display()
            )),
            Self::UnreadableSource { path, source } => {
                if source.kind() == std::io::ErrorKind::InvalidData {
                    Some(format!("Save {} as UTF-8 text", path.display()))
                } else {
                    Some(format!(
                        "Check file permissions and that {} is accessible",
                        path.display()
                    ))
                }
            }
            Self::EmptyInput { .. } => Some(
                "Add code to the source files, or pass --allow-empty to emit an empty bookmarklet"
                    .to_string(),
            ),
            Self::UnknownVariant { available, .. } => Some(format!(
                "Available variants: {}\nRun 'bookmarkletize list' to see their sources",
                available.join(", ")
            )),
            Self::InvalidConfig { .. } => Some(
                "Fix .bookmarkletize.toml, or delete it and run 'bookmarkletize init'".to_string(),
            ),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes following sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingSource { .. } => 66,    // EX_NOINPUT
            Self::UnreadableSource { .. } => 74, // EX_IOERR
            Self::EmptyInput { .. } => 65,       // EX_DATAERR
            Self::UnknownVariant { .. } => 64,   // EX_USAGE
            Self::InvalidConfig { .. } => 78,    // EX_CONFIG
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(bm_error) = error.downcast_ref::<BookmarkletError>() {
            if let Some(suggestion) = bm_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(bm_error) = error.downcast_ref::<BookmarkletError>() {
            bm_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}
