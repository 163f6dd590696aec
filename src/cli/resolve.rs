//! Resolve subcommand implementation.
//!
//! Handles the `ipspan resolve [file]` command for registry network records.

use super::{Context, OutputFormat};
use crate::error::CliResult;
use crate::output::{self, BlockReport};
use crate::registry::resolve_with_policy;
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Resolve a registry network record (JSON) into CIDR blocks.
///
/// The record may carry a `cidr0_cidrs` prefix list or a
/// `startAddress`/`endAddress` pair; the prefix list wins when present.
#[derive(Parser, Debug)]
pub struct ResolveCommand {
    /// JSON file holding the network record (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print an empty list instead of failing on unusable data
    #[arg(long)]
    pub empty_on_error: bool,

    /// Output format for results
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let (source, json) = match &self.file {
            Some(path) => (path.display().to_string(), fs::read_to_string(path)?),
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                ("stdin".to_string(), buf)
            }
        };

        let empty_on_error = self.empty_on_error || ctx.settings.empty_on_error;
        let resolution = resolve_with_policy(&json, empty_on_error)?;
        if let Some(err) = &resolution.degraded {
            if !ctx.quiet {
                output::print_warning(&format!("{source}: {err}; returning no blocks"));
            }
        }

        let report = BlockReport::new(source, &resolution.blocks);
        output::print_report(&report, ctx.output_format(self.output), ctx.plain_options())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CliError, DecomposeError, RegistryError};

    fn resolve(json: &str, empty_on_error: bool) -> CliResult<Vec<String>> {
        let resolution = resolve_with_policy(json, empty_on_error)?;
        Ok(resolution.blocks.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_resolve_range() {
        assert_eq!(
            resolve(r#"{ "startAddress": "10.0.0.4", "endAddress": "10.0.0.11" }"#, false).unwrap(),
            vec!["10.0.0.4/30", "10.0.0.8/30"]
        );
    }

    #[test]
    fn test_resolve_errors_are_typed() {
        assert!(matches!(
            resolve("[]", false),
            Err(CliError::Registry(RegistryError::InvalidFormat(_)))
        ));
        assert!(matches!(
            resolve(r#"["NET-1", "10.0.0.0", "10.0.0.3"]"#, false),
            Err(CliError::Registry(RegistryError::InvalidFormat(_)))
        ));
        assert!(matches!(
            resolve(r#"{ "startAddress": "10.0.0.9", "endAddress": "10.0.0.1" }"#, false),
            Err(CliError::Decompose(DecomposeError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn test_resolve_degrades_when_asked() {
        assert!(resolve("[]", true).unwrap().is_empty());
        assert!(resolve(r#"{ "handle": "NET-2" }"#, true).unwrap().is_empty());
    }
}
