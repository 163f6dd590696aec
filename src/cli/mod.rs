//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `ipspan range <start> <end>` - Decompose an address range
//! - `ipspan normalize [cidr]...` - Validate and deduplicate CIDR blocks
//! - `ipspan resolve [file]` - Resolve registry allocation data
//! - `ipspan config show|init|path` - Manage settings

mod config;
mod normalize;
mod range;
mod resolve;

pub use config::{ConfigAction, ConfigCommand};
pub use normalize::NormalizeCommand;
pub use range::RangeCommand;
pub use resolve::ResolveCommand;

use crate::config::AppSettings;
use crate::error::CliResult;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ipspan - minimal CIDR cover of IP address ranges.
///
/// Turns an inclusive IPv4 or IPv6 address range into the smallest list of
/// CIDR blocks that covers exactly that range.
#[derive(Parser, Debug)]
#[command(name = "ipspan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Decompose IP address ranges into minimal CIDR blocks", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long = "config", global = true, value_name = "PATH", env = "IPSPAN_CONFIG")]
    pub config_file: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decompose an address range into CIDR blocks
    #[command(alias = "r")]
    Range(RangeCommand),

    /// Validate and deduplicate explicit CIDR blocks
    #[command(alias = "n")]
    Normalize(NormalizeCommand),

    /// Resolve a registry network record into CIDR blocks
    Resolve(ResolveCommand),

    /// Manage settings
    Config(ConfigCommand),
}

/// Shared state handed to every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: AppSettings,
    pub quiet: bool,
}

impl Context {
    /// Pick the command's explicit format, else the configured default.
    pub fn output_format(&self, explicit: Option<OutputFormat>) -> OutputFormat {
        explicit.unwrap_or(self.settings.default_output_format)
    }

    pub fn plain_options(&self) -> crate::output::PlainOptions {
        crate::output::PlainOptions {
            show_netmask: self.settings.show_netmask,
        }
    }
}

impl Cli {
    /// Load settings and run the selected subcommand.
    pub fn run(&self) -> CliResult<()> {
        // `config init --config PATH` may target a file that does not exist yet
        let settings = match &self.config_file {
            Some(path) if !path.exists() && matches!(self.command, Commands::Config(_)) => {
                AppSettings::default()
            }
            Some(path) => AppSettings::load_from(path)?,
            None => AppSettings::load()?,
        };
        let ctx = Context {
            settings,
            quiet: self.quiet,
        };

        match &self.command {
            Commands::Range(cmd) => cmd.execute(&ctx),
            Commands::Normalize(cmd) => cmd.execute(&ctx),
            Commands::Resolve(cmd) => cmd.execute(&ctx),
            Commands::Config(cmd) => cmd.execute(&ctx, self.config_file.as_deref()),
        }
    }
}

/// Output format for results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
