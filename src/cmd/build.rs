//! Build command implementation
//!
//! Thin presentation layer for the build command.
//! Business logic lives in `workflow::BuildWorkflow`.

use anyhow::Result;
use console::style;
use serde::Serialize;
use std::path::Path;

use crate::cmd::workflow::{BuildResult, BuildWorkflow};
use crate::fmt::{format_bytes, icon, reduction_percent, BOOKMARK, CHART, SCISSORS, WARNING};

/// Options for `bookmarkletize build`
#[derive(Debug, Clone, Default)]
pub struct BuildOptions<'a> {
    /// Variant to build; `None` together with `all` builds every variant
    pub variant: Option<&'a str>,
    /// Build every configured variant
    pub all: bool,
    /// Directory holding the source scripts
    pub source_dir: &'a str,
    /// Print a JSON report instead of the human-readable banner
    pub json: bool,
    /// Emit an empty bookmarklet for blank sources instead of failing
    pub allow_empty: bool,
}

/// JSON report for one built variant
#[derive(Debug, Serialize)]
pub struct BuildReport {
    /// Variant name
    pub variant: String,
    /// The bookmarklet URL
    pub bookmarklet: String,
    /// Total size of the raw sources
    pub source_bytes: u64,
    /// Size of the bookmarklet
    pub bookmarklet_bytes: u64,
    /// Source files in composition order
    pub sources: Vec<String>,
}

impl From<&BuildResult> for BuildReport {
    fn from(result: &BuildResult) -> Self {
        Self {
            variant: result.variant.clone(),
            bookmarklet: result.bookmarklet.to_string(),
            source_bytes: result.source_bytes,
            bookmarklet_bytes: result.bookmarklet_bytes(),
            sources: result.sources.clone(),
        }
    }
}

/// Main build command handler (presentation layer)
///
/// # Examples
///
/// ```no_run
/// use bookmarkletize::cmd::build::{cmd_build, BuildOptions};
///
/// cmd_build(&BuildOptions {
///     variant: Some("chat"),
///     source_dir: "bookmarklets",
///     ..Default::default()
/// })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_build(options: &BuildOptions<'_>) -> Result<()> {
    let workflow =
        BuildWorkflow::new(Path::new(options.source_dir)).allow_empty(options.allow_empty);

    let results = match (options.variant, options.all) {
        (Some(variant), false) => vec![workflow.execute(variant)?],
        (None, true) => workflow.execute_all()?,
        _ => anyhow::bail!("Specify either a variant name or --all"),
    };

    if options.json {
        present_json_report(&results, options.all)?;
    } else {
        for result in &results {
            present_bookmarklet(result);
        }
    }

    Ok(())
}

/// Print the copy banner, the bookmarklet line and a size summary
fn present_bookmarklet(result: &BuildResult) {
    println!(
        "{} --- Creating {} bookmarklet from {} ---",
        icon(SCISSORS),
        style(&result.variant).bold(),
        result.sources.join(" + ")
    );

    if result.bookmarklet.is_empty() {
        println!(
            "{} {}",
            icon(WARNING),
            style("Sources contain no code after stripping comments").yellow()
        );
    }

    println!();
    println!(
        "{} --- COPY THIS {} BOOKMARKLET BELOW ---",
        icon(BOOKMARK),
        result.variant.to_uppercase()
    );
    println!();
    println!("{}", result.bookmarklet);
    println!();
    println!("------------------------------");

    println!(
        "{} {} -> {} ({:.1}% smaller)",
        icon(CHART),
        format_bytes(result.source_bytes),
        style(format_bytes(result.bookmarklet_bytes())).green(),
        reduction_percent(result.source_bytes, result.bookmarklet_bytes())
    );
    println!();
}

/// Present JSON report: one object per variant, an array for `--all`
fn present_json_report(results: &[BuildResult], all: bool) -> Result<()> {
    let reports: Vec<BuildReport> = results.iter().map(BuildReport::from).collect();

    let json = match (all, reports.as_slice()) {
        (false, [single]) => serde_json::to_string_pretty(single)?,
        _ => serde_json::to_string_pretty(&reports)?,
    };
    println!("{}", json);

    Ok(())
}
