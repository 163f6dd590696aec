//! Range subcommand implementation.
//!
//! Handles the `ipspan range <start> <end>` command.

use super::{Context, OutputFormat};
use crate::decompose::decompose;
use crate::error::CliResult;
use crate::output::{self, BlockReport};
use crate::types::AddressRange;
use clap::Parser;

/// Decompose an inclusive address range into its minimal CIDR cover.
#[derive(Parser, Debug)]
pub struct RangeCommand {
    /// First address of the range (IPv4 or IPv6)
    #[arg(value_name = "START")]
    pub start: String,

    /// Last address of the range, same family as START
    #[arg(value_name = "END")]
    pub end: String,

    /// Output format for results
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl RangeCommand {
    /// Execute the range command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let range = AddressRange::parse(&self.start, &self.end)?;
        let blocks = decompose(&range);
        tracing::debug!(%range, blocks = blocks.len(), "range decomposed");

        let report = BlockReport::new(range.to_string(), &blocks);
        output::print_report(&report, ctx.output_format(self.output), ctx.plain_options())?;
        Ok(())
    }
}
