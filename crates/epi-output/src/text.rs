//! Human-readable console report.
//!
//! ```text
//! day, live_count, infected_count, dead_count, isolation_count, immune_count
//!    0,    10000,       10,        0,        0,        0
//!    1,    10000,       12,        0,        1,        0
//! ```

use std::io::Write;

use crate::writer::OutputWriter;
use crate::{DayStatsRow, OutputResult};

/// Writes the comma-separated, right-aligned day report to any writer.
///
/// The header line is written on construction.
pub struct TextReportWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextReportWriter<W> {
    pub fn new(mut out: W) -> OutputResult<Self> {
        writeln!(out, "{}", DayStatsRow::HEADER.join(", "))?;
        Ok(Self { out, finished: false })
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for TextReportWriter<W> {
    fn write_day(&mut self, row: &DayStatsRow) -> OutputResult<()> {
        writeln!(
            self.out,
            "{:4}, {:8}, {:8}, {:8}, {:8}, {:8}",
            row.day,
            row.live_count,
            row.infected_count,
            row.dead_count,
            row.isolation_count,
            row.immune_count,
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
