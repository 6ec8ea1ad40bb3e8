//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sir_agent::Population;
use sir_core::Tick;
use sir_sim::{SimObserver, StatusCounts};
use tracing::{info, warn};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries and agent snapshots to any
/// [`OutputWriter`] backend (CSV, SQLite, Parquet, …).
///
/// One summary row is written per tick.  Snapshot rows are written whenever
/// the simulation fires `on_snapshot`, which is controlled by
/// `SimBuilder::snapshot_interval`.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, counts: &StatusCounts) {
        let row = TickSummaryRow::from_counts(counts);
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, population: &Population) {
        let rows: Vec<AgentSnapshotRow> = population
            .iter()
            .map(|agent| AgentSnapshotRow::from_agent(tick.0, agent))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
        info!(%final_tick, "output finished");
    }
}
