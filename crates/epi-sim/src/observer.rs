//! World observer trait for progress reporting and data collection.

use crate::{DayOutcome, WorldStat};

/// Callbacks invoked by [`World::run`][crate::World::run] at key points in
/// the day loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl WorldObserver for ProgressPrinter {
///     fn on_day_stats(&mut self, day: u32, stat: &WorldStat) {
///         println!("day {day}: {} infected", stat.infected_count);
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called with the snapshot taken at the start of `day`, before the
    /// loop decides whether to continue.  Every day the loop visits gets
    /// exactly one call, including the final one.
    fn on_day_stats(&mut self, _day: u32, _stat: &WorldStat) {}

    /// Called after `day` has been advanced.
    fn on_day_end(&mut self, _day: u32, _outcome: &DayOutcome) {}

    /// Called once when the loop stops.  `final_day` is the day whose
    /// snapshot `stat` is.
    fn on_sim_end(&mut self, _final_day: u32, _stat: &WorldStat) {}
}

/// A [`WorldObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
