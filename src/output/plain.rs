//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use super::{BlockReport, PlainOptions};
use console::style;
use std::io::{self, Write};

const RULE: &str = "───────────────────────────────────────────────────────────────";

/// Write a report as a human-readable table.
pub fn write_plain<W: Write>(
    out: &mut W,
    report: &BlockReport,
    options: PlainOptions,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {} {}", style("Source:").bold(), report.source)?;
    writeln!(
        out,
        "  {} {}",
        style("Blocks:").bold(),
        style(report.count).green().bold()
    )?;
    writeln!(out)?;

    if report.blocks.is_empty() {
        writeln!(out, "  {}", style("No blocks.").dim())?;
        writeln!(out)?;
        return Ok(());
    }

    // Column widths follow the longest value; IPv6 text varies a lot in length
    let cidr_w = column_width("BLOCK", report.blocks.iter().map(|r| r.cidr.to_string()));
    let first_w = column_width("FIRST", report.blocks.iter().map(|r| r.first.to_string()));
    let last_w = column_width("LAST", report.blocks.iter().map(|r| r.last.to_string()));

    writeln!(out, "  {}", style(RULE).dim())?;
    write!(
        out,
        "  {:<cidr_w$}  {:<first_w$}  {:<last_w$}  {:>10}",
        style("BLOCK").bold(),
        style("FIRST").bold(),
        style("LAST").bold(),
        style("ADDRESSES").bold(),
    )?;
    if options.show_netmask {
        write!(out, "  {}", style("NETMASK").bold())?;
    }
    writeln!(out)?;
    writeln!(out, "  {}", style(RULE).dim())?;

    for row in &report.blocks {
        write!(
            out,
            "  {:<cidr_w$}  {:<first_w$}  {:<last_w$}  {:>10}",
            style(row.cidr.to_string()).cyan(),
            row.first.to_string(),
            row.last.to_string(),
            row.addresses,
        )?;
        if options.show_netmask {
            write!(
                out,
                "  {}",
                style(row.netmask.as_deref().unwrap_or("-")).dim()
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "  {}", style(RULE).dim())?;
    writeln!(out)?;

    Ok(())
}

fn column_width(header: &str, values: impl Iterator<Item = String>) -> usize {
    values.map(|v| v.len()).fold(header.len(), usize::max)
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}
