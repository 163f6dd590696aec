//! Config subcommand implementation.
//!
//! Handles the `ipspan config` command for inspecting and creating settings.

use super::Context;
use crate::config::{AppSettings, Paths};
use crate::error::{CliError, CliResult};
use crate::output;
use clap::{Parser, Subcommand};
use std::path::Path;

/// Manage settings.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Settings actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective settings as JSON
    Show,

    /// Write a settings file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the settings file location
    Path,
}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(&self, ctx: &Context, explicit: Option<&Path>) -> CliResult<()> {
        match &self.action {
            ConfigAction::Show => {
                let json = serde_json::to_string_pretty(&ctx.settings)
                    .map_err(|e| CliError::Other(e.to_string()))?;
                println!("{json}");
                Ok(())
            }
            ConfigAction::Init { force } => self.init(explicit, *force, ctx.quiet),
            ConfigAction::Path => {
                let path = match explicit {
                    Some(path) => path.to_path_buf(),
                    None => Paths::get()?.settings_file(),
                };
                println!("{}", path.display());
                Ok(())
            }
        }
    }

    fn init(&self, explicit: Option<&Path>, force: bool, quiet: bool) -> CliResult<()> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => Paths::get()?.settings_file(),
        };

        if path.exists() && !force {
            return Err(CliError::Other(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        AppSettings::default().save_to(&path)?;
        if !quiet {
            output::print_success(&format!("Wrote default settings to {}", path.display()));
        }
        Ok(())
    }
}
