//! Init command implementation
//!
//! Handles the `bookmarkletize init` command which writes a
//! `.bookmarkletize.toml` describing the built-in variants, ready to edit.

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::config;
use crate::fmt::{icon, CHECKMARK, INFO, WARNING};

/// Write the built-in variants to `.bookmarkletize.toml` in `source_dir`
///
/// An existing config file is never overwritten.
///
/// # Examples
///
/// ```no_run
/// use bookmarkletize::cmd::init::cmd_init;
///
/// cmd_init("bookmarklets")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(source_dir: &str) -> Result<()> {
    let dir = Path::new(source_dir);

    if config::ConfigLoader::exists(dir) {
        println!(
            "{} Config file already exists: {}",
            icon(WARNING),
            style(dir.join(config::CONFIG_FILE_NAME).display()).cyan()
        );
        println!("   Delete it first or edit manually to update.");
        return Ok(());
    }

    let builtin = config::ConfigFile::builtin();
    config::ConfigLoader::save(&builtin, dir)?;
    log::info!("wrote {}", dir.join(config::CONFIG_FILE_NAME).display());

    println!(
        "{} Created {}",
        icon(CHECKMARK),
        style(dir.join(config::CONFIG_FILE_NAME).display())
            .cyan()
            .bold()
    );
    println!();
    println!("{}  Next Steps:", icon(INFO));
    println!(
        "   1. Add variants or change source order in {}",
        config::CONFIG_FILE_NAME
    );
    println!(
        "   2. Run {} to see what will be built",
        style("bookmarkletize list").cyan()
    );
    println!(
        "   3. Run {} to produce a bookmarklet",
        style("bookmarkletize build <VARIANT>").cyan()
    );

    Ok(())
}
