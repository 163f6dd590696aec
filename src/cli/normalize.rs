//! Normalize subcommand implementation.
//!
//! Handles the `ipspan normalize [cidr]...` command.

use super::{Context, OutputFormat};
use crate::decompose::normalize_blocks;
use crate::error::CliResult;
use crate::output::{self, BlockReport};
use clap::Parser;
use std::io::{self, BufRead};

/// Validate CIDR blocks and drop duplicates, keeping first-seen order.
#[derive(Parser, Debug)]
pub struct NormalizeCommand {
    /// CIDR blocks such as 10.0.0.0/8 (read from stdin, one per line, when omitted)
    #[arg(value_name = "CIDR")]
    pub cidrs: Vec<String>,

    /// Output format for results
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl NormalizeCommand {
    /// Execute the normalize command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let (source, entries) = if self.cidrs.is_empty() {
            ("stdin", read_entries(io::stdin().lock())?)
        } else {
            ("arguments", self.cidrs.clone())
        };

        let blocks = normalize_blocks(&entries)?;
        if !ctx.quiet && blocks.len() < entries.len() {
            output::print_info(&format!(
                "Dropped {} duplicate block(s)",
                entries.len() - blocks.len()
            ));
        }

        let report = BlockReport::new(source, &blocks);
        output::print_report(&report, ctx.output_format(self.output), ctx.plain_options())?;
        Ok(())
    }
}

/// Read one entry per line, skipping blanks and `#` comments.
fn read_entries<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        entries.push(line.to_string());
    }
    Ok(entries)
}
