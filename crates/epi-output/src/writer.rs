//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DayStatsRow, OutputResult};

/// Trait implemented by the CSV and text report writers.
///
/// Errors are stored by [`StatsObserver`](crate::StatsObserver) and retrieved
/// with [`take_error`](crate::StatsObserver::take_error).
pub trait OutputWriter {
    /// Write one day's counts.
    fn write_day(&mut self, row: &DayStatsRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
