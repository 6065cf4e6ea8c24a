//! CLI module for journey
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::schemas::ModuleId;

/// Journey - walk a learner through an ordered sequence of modules
#[derive(Parser, Debug)]
#[command(name = "journey")]
#[command(version)]
#[command(about = "Walk a learner through an ordered sequence of unlockable modules")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a .journey directory with a default config
    Init {
        /// Overwrite an existing config and discard saved progress
        #[arg(long)]
        force: bool,
    },

    /// List the module catalogue
    Modules {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the current journey
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the journey
    Begin {
        /// Learner name
        name: String,
    },

    /// Make an unlocked module active
    Select {
        /// Module ID
        id: ModuleId,
    },

    /// Mark a module as completed
    Complete {
        /// Module ID
        id: ModuleId,
    },

    /// Skip to the finished phase
    Finish,

    /// Start over with a fresh journey
    Restart,

    /// Show a module's content
    Content {
        /// Module ID
        id: ModuleId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complete() {
        let cli = Cli::try_parse_from(["journey", "--quiet", "complete", "2"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Complete { id: ModuleId(2) })));
    }

    #[test]
    fn test_parse_rejects_bad_module_id() {
        assert!(Cli::try_parse_from(["journey", "select", "two"]).is_err());
    }

    #[test]
    fn test_parse_global_cwd_after_subcommand() {
        let cli = Cli::try_parse_from(["journey", "status", "--json", "--cwd", "/tmp/x"]).unwrap();
        assert_eq!(cli.cwd, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Some(Commands::Status { json: true })));
    }
}
