//! JSON output formatting.

use super::BlockReport;
use std::io::{self, Write};

/// Write a report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &BlockReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(out)
}
