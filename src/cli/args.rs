//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! glotpush commands. It uses clap's derive API for declarative argument
//! parsing.
//!
//! ## Commands
//!
//! - `push`: Diff local message files against Lokalise and upload new keys
//! - `init`: Initialize glotpush configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Push(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Workspace root the glob pattern is resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Glob pattern selecting message files (overrides config file)
    #[arg(long)]
    pub glob_pattern: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct PushArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Lokalise API token
    #[arg(long, env = "LOKALISE_API_TOKEN", hide_env_values = true)]
    pub api_token: String,

    /// Lokalise project id (overrides config file)
    #[arg(long)]
    pub project_id: Option<String>,

    /// Field of the remote key-name object compared against local keys
    /// (overrides config file)
    #[arg(long)]
    pub key_name_property: Option<String>,

    /// Actually create the new keys (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct PushCommand {
    #[command(flatten)]
    pub args: PushArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload translation keys that exist locally but not in Lokalise
    Push(PushCommand),
    /// Initialize a new .glotpushrc.json configuration file
    Init,
}
