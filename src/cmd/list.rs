//! List command implementation
//!
//! Handles the `bookmarkletize list` command which shows every configured
//! variant and the source files it composes.

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::config::{self, ConfigFile};
use crate::fmt::{icon, INFO};

/// Print the variants available in `source_dir`
///
/// # Examples
///
/// ```no_run
/// use bookmarkletize::cmd::list::cmd_list;
///
/// cmd_list("bookmarklets")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_list(source_dir: &str) -> Result<()> {
    let dir = Path::new(source_dir);
    let config = config::ConfigLoader::load(dir)?;

    let origin = if config::ConfigLoader::exists(dir) {
        config::CONFIG_FILE_NAME
    } else {
        "built-in"
    };
    println!(
        "{}  Variants in {} ({})",
        icon(INFO),
        style(dir.display()).cyan(),
        style(origin).dim()
    );
    println!();

    for line in describe_variants(&config) {
        println!("{}", line);
    }

    Ok(())
}

/// One line per variant, followed by one indented line per source
fn describe_variants(config: &ConfigFile) -> Vec<String> {
    let mut lines = Vec::new();
    for variant in &config.variants {
        match &variant.description {
            Some(description) => lines.push(format!(
                "   {} - {}",
                style(&variant.name).bold(),
                style(description).dim()
            )),
            None => lines.push(format!("   {}", style(&variant.name).bold())),
        }
        for source in &variant.sources {
            match &source.entry_call {
                Some(call) => lines.push(format!(
                    "      {} {} (drops {})",
                    style("•").dim(),
                    source.file,
                    style(call).yellow()
                )),
                None => lines.push(format!("      {} {}", style("•").dim(), source.file)),
            }
        }
    }
    lines
}
