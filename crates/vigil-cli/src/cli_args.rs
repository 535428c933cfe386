use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vigil", version, about = "Audit-adjacency enforcement for UI test suites")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Include extra detail in output
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Report action calls not followed by an audit call
    Check {
        /// Files or directories to analyze (default: current directory)
        paths: Vec<String>,
        /// Glob restricting which files are analyzed, relative to each
        /// directory argument (overrides the config scope)
        #[arg(long)]
        scope: Option<String>,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
        /// Directory containing .vigil.json (default: current directory)
        #[arg(long)]
        config: Option<String>,
    },

    /// Insert missing audit calls where a safe edit exists
    Fix {
        /// Files or directories to fix (default: current directory)
        paths: Vec<String>,
        /// Glob restricting which files are analyzed
        #[arg(long)]
        scope: Option<String>,
        /// Report what would change without writing files
        #[arg(long)]
        dry_run: bool,
        /// Directory containing .vigil.json (default: current directory)
        #[arg(long)]
        config: Option<String>,
    },
}
