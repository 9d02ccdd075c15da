//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Glossa commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (duplicates, plural forms, placeholders, etc.)
//! - `stats`: Show per-catalog translation statistics
//! - `query`: Resolve one message the way the application would at runtime
//! - `export`: Dump finished translations as JSON
//! - `clean`: Remove retired messages from catalog files
//! - `init`: Initialize glossa configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

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
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Stats(cmd)) => cmd.args.common.verbose,
            Some(Command::Query(cmd)) => cmd.args.common.verbose,
            Some(Command::Export(cmd)) => cmd.args.common.verbose,
            Some(Command::Clean(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to search for catalog files (overrides config file)
    #[arg(long)]
    pub catalog_root: Option<PathBuf>,

    /// Fallback language for catalogs that declare none (overrides config file)
    #[arg(long)]
    pub language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct StatsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Restrict to one catalog, by language code or path suffix
    #[arg(long)]
    pub catalog: Option<String>,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub args: StatsArgs,
}

#[derive(Debug, Parser)]
pub struct QueryArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Catalog to query, by language code or path suffix (default: the only catalog)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Disambiguation comment of the message
    #[arg(long)]
    pub comment: Option<String>,

    /// Count for plural-aware lookup, substituted for %n
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    /// Argument substituted for %1, %2, ... in order
    /// Can be specified multiple times: --arg Documents --arg server1
    #[arg(long = "arg")]
    pub arguments: Vec<String>,
}

#[derive(Debug, Args)]
pub struct QueryCommand {
    /// Context name, usually the class the string belongs to
    pub context: String,

    /// Source text of the message
    pub source: String,

    #[command(flatten)]
    pub args: QueryArgs,
}

#[derive(Debug, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Catalog to export, by language code or path suffix (default: the only catalog)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Write the JSON to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include unfinished and retired messages
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub args: ExportArgs,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Catalog to clean, by language code or path suffix (default: all catalogs)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Actually rewrite the catalog files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for issues (duplicates, plural forms, placeholders, empty translations)
    Check(CheckCommand),
    /// Show per-catalog translation statistics
    Stats(StatsCommand),
    /// Resolve one message the way the application would at runtime
    Query(QueryCommand),
    /// Export finished translations as JSON
    Export(ExportCommand),
    /// Remove retired (vanished/obsolete) messages from catalog files
    Clean(CleanCommand),
    /// Initialize a new .glossarc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
