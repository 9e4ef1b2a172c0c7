//! CLI command definitions and argument parsing.

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inkwell CLI - Extract text, compute baselines, and inspect policies.
#[derive(Debug, Parser)]
#[command(name = "inkwell")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// TOML policy file replacing the builtin policies
    #[arg(short, long, global = true, env = "INKWELL_POLICIES")]
    pub policies: Option<PathBuf>,

    /// Log extractor and computation details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the plain text extracted from a document
    Extract(FileArgs),

    /// Compute the linguistic baseline of a document
    Baseline(FileArgs),

    /// Inspect compliance policies
    Policy(PolicyArgs),
}

/// Arguments naming a document on disk.
#[derive(Debug, Parser)]
pub struct FileArgs {
    /// Document path; its suffix selects the decoder
    pub file: PathBuf,
}

/// Arguments for the policy command.
#[derive(Debug, Parser)]
pub struct PolicyArgs {
    #[command(subcommand)]
    pub action: PolicyAction,
}

/// Policy actions.
#[derive(Debug, Subcommand)]
pub enum PolicyAction {
    /// Show the policy in effect
    Current,

    /// Show the policy with an exact version
    Show {
        /// Version label (e.g. "1.0")
        version: String,
    },

    /// List every policy, oldest first
    List,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}
