//! `StatsObserver<W>`: bridges `WorldObserver` to an `OutputWriter`.

use epi_sim::{WorldObserver, WorldStat};

use crate::row::DayStatsRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`WorldObserver`] that writes one row per day to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `WorldObserver`
/// methods have no return value.  After `world.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct StatsObserver<W: OutputWriter> {
    writer:     W,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> StatsObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `world.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows successfully written so far.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> WorldObserver for StatsObserver<W> {
    fn on_day_stats(&mut self, day: u32, stat: &WorldStat) {
        let result = self.writer.write_day(&DayStatsRow::new(day, stat));
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_day: u32, _stat: &WorldStat) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
