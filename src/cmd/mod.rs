//! Command handlers for bookmarkletize CLI
//!
//! This module contains all command implementations, organized by functionality.
//! Each submodule handles a specific CLI command.

pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod workflow;

// Re-export command functions for convenient access
pub use build::{cmd_build, BuildOptions};
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use list::cmd_list;
pub use workflow::BuildWorkflow;
