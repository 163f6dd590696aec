//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of block lists.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::write_csv;
pub use json_format::write_json;
pub use plain::{print_error, print_info, print_success, print_warning, write_plain};

use crate::cli::OutputFormat;
use crate::types::{Address, CidrBlock, Family};
use serde::Serialize;
use std::io::{self, Write};

/// Address count of `::/0`, which does not fit in a `u128`.
const FULL_V6_COUNT: &str = "340282366920938463463374607431768211456";

/// One block in a report.
#[derive(Debug, Clone, Serialize)]
pub struct BlockRow {
    pub cidr: CidrBlock,
    pub family: Family,
    pub first: Address,
    pub last: Address,
    /// Decimal address count; a string because `::/0` overflows `u128`.
    pub addresses: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netmask: Option<String>,
}

impl From<&CidrBlock> for BlockRow {
    fn from(block: &CidrBlock) -> Self {
        let netmask = ipnetwork::IpNetwork::try_from(*block)
            .ok()
            .map(|network| network.mask().to_string());

        Self {
            cidr: *block,
            family: block.family(),
            first: block.base(),
            last: block.last(),
            addresses: block
                .size()
                .map_or_else(|| FULL_V6_COUNT.to_string(), |n| n.to_string()),
            netmask,
        }
    }
}

/// The blocks produced for one input, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct BlockReport {
    /// What the blocks were computed from (a range, a file, "arguments").
    pub source: String,
    pub count: usize,
    pub blocks: Vec<BlockRow>,
}

impl BlockReport {
    pub fn new(source: impl Into<String>, blocks: &[CidrBlock]) -> Self {
        Self {
            source: source.into(),
            count: blocks.len(),
            blocks: blocks.iter().map(BlockRow::from).collect(),
        }
    }
}

/// Display options that only affect plain output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainOptions {
    pub show_netmask: bool,
}

/// Write a report in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &BlockReport,
    format: OutputFormat,
    options: PlainOptions,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => write_plain(out, report, options),
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Csv => write_csv(out, report),
    }
}

/// Format and print a report to stdout.
pub fn print_report(
    report: &BlockReport,
    format: OutputFormat,
    options: PlainOptions,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format, options)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(cidrs: &[&str]) -> BlockReport {
        let blocks: Vec<CidrBlock> = cidrs.iter().map(|c| c.parse().unwrap()).collect();
        BlockReport::new("test", &blocks)
    }

    #[test]
    fn test_block_row() {
        let row = BlockRow::from(&"10.0.0.0/29".parse::<CidrBlock>().unwrap());
        assert_eq!(row.first.to_text(), "10.0.0.0");
        assert_eq!(row.last.to_text(), "10.0.0.7");
        assert_eq!(row.addresses, "8");
        assert_eq!(row.netmask.as_deref(), Some("255.255.255.248"));
    }

    #[test]
    fn test_full_v6_count() {
        let row = BlockRow::from(&"::/0".parse::<CidrBlock>().unwrap());
        assert_eq!(row.addresses, FULL_V6_COUNT);
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        write_report(
            &mut buf,
            &report(&["10.0.0.4/30", "10.0.0.8/30"]),
            OutputFormat::Json,
            PlainOptions::default(),
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["blocks"][0]["cidr"], "10.0.0.4/30");
        assert_eq!(value["blocks"][1]["last"], "10.0.0.11");
        assert_eq!(value["blocks"][1]["family"], "v4");
    }

    #[test]
    fn test_csv_output() {
        let mut buf = Vec::new();
        write_report(
            &mut buf,
            &report(&["2001:db8::/127"]),
            OutputFormat::Csv,
            PlainOptions::default(),
        )
        .unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("cidr,family,first,last,addresses"));
        assert_eq!(lines.next(), Some("2001:db8::/127,v6,2001:db8::,2001:db8::1,2"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_plain_output() {
        let mut buf = Vec::new();
        write_report(
            &mut buf,
            &report(&["10.0.0.0/29"]),
            OutputFormat::Plain,
            PlainOptions { show_netmask: true },
        )
        .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("10.0.0.0/29"));
        assert!(text.contains("10.0.0.7"));
        assert!(text.contains("255.255.255.248"));
    }

    #[test]
    fn test_plain_output_empty() {
        let mut buf = Vec::new();
        write_report(
            &mut buf,
            &report(&[]),
            OutputFormat::Plain,
            PlainOptions::default(),
        )
        .unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("No blocks"));
    }
}
