//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.parquet`
//! - `tick_summaries.parquet`
//!
//! Summary rows arrive one per tick, so they are buffered and written as
//! record batches of [`SUMMARY_BATCH`] rows rather than one tiny batch each.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Builder, StringBuilder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

/// Buffered summary rows per record batch.
pub const SUMMARY_BATCH: usize = 1024;

fn snapshot_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("agent_id", DataType::UInt32,  false),
        Field::new("tick",     DataType::UInt64,  false),
        Field::new("x",        DataType::Float64, false),
        Field::new("y",        DataType::Float64, false),
        Field::new("status",   DataType::Utf8,    false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",        DataType::UInt64,  false),
        Field::new("time",        DataType::Float64, false),
        Field::new("susceptible", DataType::UInt64,  false),
        Field::new("infected",    DataType::UInt64,  false),
        Field::new("recovered",   DataType::UInt64,  false),
        Field::new("dead",        DataType::UInt64,  false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes simulation output to two Parquet files.
///
/// `finish()` **must** be called to flush buffered summaries and write the
/// Parquet file footer; files written without calling `finish()` cannot be
/// opened by Parquet readers.
pub struct ParquetWriter {
    snapshots:   Option<ArrowWriter<File>>,
    summaries:   Option<ArrowWriter<File>>,
    pending:     Vec<TickSummaryRow>,
    snap_schema: Arc<Schema>,
    summ_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let snap_schema = snapshot_schema();
        let summ_schema = summary_schema();

        let snap_file = File::create(dir.join("agent_snapshots.parquet"))?;
        let snapshots = ArrowWriter::try_new(
            snap_file,
            Arc::clone(&snap_schema),
            Some(snappy_props()),
        )?;

        let summ_file = File::create(dir.join("tick_summaries.parquet"))?;
        let summaries = ArrowWriter::try_new(
            summ_file,
            Arc::clone(&summ_schema),
            Some(snappy_props()),
        )?;

        Ok(Self {
            snapshots: Some(snapshots),
            summaries: Some(summaries),
            pending:   Vec::with_capacity(SUMMARY_BATCH),
            snap_schema,
            summ_schema,
        })
    }

    fn flush_summaries(&mut self) -> OutputResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.summaries.as_mut() else {
            return Ok(());
        };

        let mut ticks       = UInt64Builder::new();
        let mut times       = Float64Builder::new();
        let mut susceptible = UInt64Builder::new();
        let mut infected    = UInt64Builder::new();
        let mut recovered   = UInt64Builder::new();
        let mut dead        = UInt64Builder::new();

        for row in self.pending.drain(..) {
            ticks.append_value(row.tick);
            times.append_value(row.time);
            susceptible.append_value(row.susceptible);
            infected.append_value(row.infected);
            recovered.append_value(row.recovered);
            dead.append_value(row.dead);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summ_schema),
            vec![
                Arc::new(ticks.finish()),
                Arc::new(times.finish()),
                Arc::new(susceptible.finish()),
                Arc::new(infected.finish()),
                Arc::new(recovered.finish()),
                Arc::new(dead.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }
}

impl OutputWriter for ParquetWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.snapshots.as_mut() else {
            return Ok(());
        };

        let mut agent_ids = UInt32Builder::new();
        let mut ticks     = UInt64Builder::new();
        let mut xs        = Float64Builder::new();
        let mut ys        = Float64Builder::new();
        let mut statuses  = StringBuilder::new();

        for row in rows {
            agent_ids.append_value(row.agent_id);
            ticks.append_value(row.tick);
            xs.append_value(row.x);
            ys.append_value(row.y);
            statuses.append_value(row.status.code());
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.snap_schema),
            vec![
                Arc::new(agent_ids.finish()),
                Arc::new(ticks.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
                Arc::new(statuses.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        if self.summaries.is_none() {
            return Ok(());
        }
        self.pending.push(*row);
        if self.pending.len() >= SUMMARY_BATCH {
            self.flush_summaries()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.flush_summaries()?;
        if let Some(w) = self.snapshots.take() {
            w.close()?;
        }
        if let Some(w) = self.summaries.take() {
            w.close()?;
        }
        Ok(())
    }
}
