//! CSV output backend.
//!
//! Creates `day_stats.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DayStatsRow, OutputError, OutputResult};

/// File name written inside the output directory.
pub const DAY_STATS_FILE: &str = "day_stats.csv";

/// Writes one CSV row per simulated day.
pub struct CsvWriter {
    days:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `day_stats.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join(DAY_STATS_FILE);
        let mut days = match Writer::from_path(&path) {
            Ok(w) => w,
            Err(source) => return Err(OutputError::Create { path, source }),
        };
        days.write_record(DayStatsRow::HEADER)?;
        Ok(Self { days, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_day(&mut self, row: &DayStatsRow) -> OutputResult<()> {
        self.days.write_record(&[
            row.day.to_string(),
            row.live_count.to_string(),
            row.infected_count.to_string(),
            row.dead_count.to_string(),
            row.isolation_count.to_string(),
            row.immune_count.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.days.flush()?;
        Ok(())
    }
}
