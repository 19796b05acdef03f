use bookmarkletize::cmd;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::process;

/// Default directory holding the source scripts
const DEFAULT_SOURCE_DIR: &str = "bookmarklets";

/// Turn browser-automation scripts into javascript: bookmarklets
///
/// bookmarkletize strips comments, flattens the script to a single line and
/// wraps it in an immediately-invoked function, ready to paste into a
/// bookmark's URL field.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a bookmarklet from a variant's sources
    Build {
        /// Variant to build (gemini, aim, chat, or one from .bookmarkletize.toml)
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        variant: Option<String>,

        /// Build every configured variant
        #[arg(long)]
        all: bool,

        /// Directory holding the source scripts
        #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
        dir: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Emit an empty bookmarklet when the sources hold no code
        #[arg(long)]
        allow_empty: bool,
    },

    /// List configured variants and their sources
    List {
        /// Directory holding the source scripts
        #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
        dir: String,
    },

    /// Write a .bookmarkletize.toml with the built-in variants
    Init {
        /// Directory holding the source scripts
        #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
        dir: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match &cli.command {
        Some(Commands::Build {
            variant,
            all,
            dir,
            json,
            allow_empty,
        }) => cmd::cmd_build(&cmd::BuildOptions {
            variant: variant.as_deref(),
            all: *all,
            source_dir: dir,
            json: *json,
            allow_empty: *allow_empty,
        }),
        Some(Commands::List { dir }) => cmd::cmd_list(dir),
        Some(Commands::Init { dir }) => cmd::cmd_init(dir),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("bookmarkletize v{}", env!("CARGO_PKG_VERSION"));
            println!("Turn browser-automation scripts into javascript: bookmarklets\n");
            println!("Usage: bookmarkletize <COMMAND>\n");
            println!("Commands:");
            println!("  build  Build a bookmarklet from a variant's sources");
            println!("  list   List configured variants and their sources");
            println!("  init   Write a .bookmarkletize.toml with the built-in variants");
            println!("\nRun 'bookmarkletize <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use bookmarkletize::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }

    #[test]
    fn test_build_requires_variant_or_all() {
        assert!(Cli::try_parse_from(["bookmarkletize", "build"]).is_err());
        assert!(Cli::try_parse_from(["bookmarkletize", "build", "chat"]).is_ok());
        assert!(Cli::try_parse_from(["bookmarkletize", "build", "--all"]).is_ok());
        assert!(Cli::try_parse_from(["bookmarkletize", "build", "chat", "--all"]).is_err());
    }
}
