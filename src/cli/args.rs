//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all tokex
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `scan`: Extract design tokens, report findings or write the bundle
//! - `init`: Initialize tokex configuration file

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
            Some(Command::Scan(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source root directory to scan (defaults to the current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write the aggregated token bundle to this JSON file (overrides config)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Exit with a non-zero status when hard-coded values are found
    #[arg(long)]
    pub deny_hardcoded: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract design tokens from stylesheets and image assets
    Scan(ScanCommand),
    /// Initialize a new .tokexrc.json configuration file
    Init,
}
