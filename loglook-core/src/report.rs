use crate::record::{LineParser, LogRecord};
use crate::source::LogSource;
use anyhow::{Context, Result};
use std::io::Write;

/// separator printed after every report block
const SEPARATOR: &str = "-----------";

/// write one report block for a single record
///
/// A block is the raw line, a `Date: <ts>, Level: <label>` line with absent
/// fields rendered empty, a blank line, and the dashed separator.
pub fn write_record<W: Write>(out: &mut W, record: &LogRecord) -> std::io::Result<()> {
    writeln!(out, "Log Entry: {}", record.raw)?;
    writeln!(
        out,
        "Date: {}, Level: {}",
        record.timestamp.as_deref().unwrap_or(""),
        record.label.as_deref().unwrap_or("")
    )?;
    writeln!(out)?;
    writeln!(out, "{}", SEPARATOR)?;

    Ok(())
}

/// run the whole pipeline: read every line from the source, parse each line
/// independently, and write one block per line
///
/// The read happens up front, so a failed scan produces no output at all.
pub fn write_report<W: Write>(
    source: &dyn LogSource,
    parser: &dyn LineParser,
    out: &mut W,
) -> Result<()> {
    let lines = source.read_all()?;

    for line in &lines {
        let record = parser.parse(line);
        write_record(out, &record).context("failed to write report block")?;
    }

    Ok(())
}
