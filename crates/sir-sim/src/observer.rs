//! Simulation observer trait for progress reporting and data collection.

use sir_agent::Population;
use sir_core::Tick;

use crate::StatusCounts;

/// Callbacks invoked by [`Sim::run_observed`][crate::Sim::run_observed] at
/// key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, counts: &StatusCounts) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} infected", counts.infected);
///         }
///     }
/// }
/// ```
///
/// # Tick labels
///
/// `on_tick_start` receives the number of ticks completed *before* the tick
/// runs.  Every later hook receives the number completed *after* it, which is
/// also the `tick` column of the matching [`StatusCounts`] row.
pub trait SimObserver {
    /// Checked at every tick boundary, before the tick starts.  Returning
    /// `true` ends the run; rows recorded so far stay in the history.
    fn should_stop(&mut self, _tick: Tick) -> bool {
        false
    }

    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the freshly recorded row.
    fn on_tick_end(&mut self, _tick: Tick, _counts: &StatusCounts) {}

    /// Called at snapshot intervals with read-only access to every live
    /// agent, so renderers and writers can record positions without the
    /// simulation knowing about any output format.
    fn on_snapshot(&mut self, _tick: Tick, _population: &Population) {}

    /// Called once, at the end of the tick in which the last agent died.
    fn on_extinction(&mut self, _tick: Tick) {}

    /// Called once after the final tick of a run completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
