//! `epi-output`: per-day report writers for the rust_epi epidemic simulator.
//!
//! | Writer               | Output                                                |
//! |----------------------|-------------------------------------------------------|
//! | [`CsvWriter`]        | `day_stats.csv` in a directory                        |
//! | [`TextReportWriter`] | Aligned console report on any `io::Write`             |
//!
//! Both implement [`OutputWriter`] and are driven by [`StatsObserver`],
//! which implements `epi_sim::WorldObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, StatsObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = StatsObserver::new(writer);
//! world.run(&mut obs, None);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv_writer;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv_writer::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StatsObserver;
pub use row::DayStatsRow;
pub use text::TextReportWriter;
pub use writer::OutputWriter;
