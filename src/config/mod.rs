//! Variant configuration for bookmarkletize
//!
//! This module provides:
//! - The built-in `gemini`, `aim` and `chat` variants
//! - `.bookmarkletize.toml` support for adding or overriding variants
//! - Validation of variant definitions

pub mod file;
pub mod loader;

pub use file::{ConfigFile, SourceConfig, VariantConfig, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_module_exports_are_accessible() {
        let _: Option<ConfigFile> = None;
        let _: Option<VariantConfig> = None;
        let _: Option<SourceConfig> = None;
    }

    #[test]
    fn test_config_file_name_constant_is_correct() {
        assert_eq!(CONFIG_FILE_NAME, ".bookmarkletize.toml");
    }
}
