//! Completions command implementation
//!
//! Handles the `bookmarkletize completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
///
/// # Examples
///
/// ```bash
/// # Bash
/// bookmarkletize completions bash > /etc/bash_completion.d/bookmarkletize
///
/// # Zsh
/// bookmarkletize completions zsh > ~/.zfunc/_bookmarkletize
/// ```
pub fn cmd_completions(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    // Cli lives in main.rs, so the command tree is rebuilt here
    use clap::{Arg, ArgAction, Command};

    let dir_arg = || {
        Arg::new("dir")
            .long("dir")
            .short('d')
            .help("Directory holding the source scripts")
    };

    let mut cmd = Command::new("bookmarkletize")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn browser-automation scripts into javascript: bookmarklets")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("build")
                .about("Build a bookmarklet from a variant's sources")
                .arg(Arg::new("variant"))
                .arg(Arg::new("all").long("all").action(ArgAction::SetTrue))
                .arg(dir_arg())
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("allow-empty")
                        .long("allow-empty")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List configured variants")
                .arg(dir_arg()),
        )
        .subcommand(
            Command::new("init")
                .about("Write a .bookmarkletize.toml with the built-in variants")
                .arg(dir_arg()),
        )
        .subcommand(Command::new("completions").about("Generate shell completions"));

    generate(shell, &mut cmd, "bookmarkletize", out);
}
