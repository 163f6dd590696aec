//! CSV output formatting.

use super::BlockReport;
use std::io::{self, Write};

/// Write a report as CSV, one block per row.
pub fn write_csv<W: Write>(out: &mut W, report: &BlockReport) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    // Write header
    wtr.write_record(["cidr", "family", "first", "last", "addresses"])?;

    for row in &report.blocks {
        let family = match row.family {
            crate::types::Family::V4 => "v4",
            crate::types::Family::V6 => "v6",
        };
        let cidr = row.cidr.to_string();
        let first = row.first.to_string();
        let last = row.last.to_string();
        wtr.write_record([
            cidr.as_str(),
            family,
            first.as_str(),
            last.as_str(),
            row.addresses.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
