use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Maintain per-workspace include/ignore lists and drive repomix with them"
)]
pub struct Cli {
    /// Workspace root the lists are scoped to (defaults to the current directory)
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Packing executable to invoke (overrides config.toml, defaults to "repomix")
    #[arg(long, global = true)]
    pub executable: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add files to the include list
    Include {
        /// Files to add (workspace-relative or absolute)
        files: Vec<PathBuf>,
    },

    /// Add files to the ignore list
    Ignore {
        /// Files to add (workspace-relative or absolute)
        files: Vec<PathBuf>,
    },

    /// Empty both lists
    Clear,

    /// Show the current list contents and counts
    Show,

    /// Print the packing command for the current lists
    Export,

    /// Launch the packing tool with the current lists
    Run,
}
