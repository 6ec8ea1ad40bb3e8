//! Failures raised while persisting tick summaries and agent snapshots.

use thiserror::Error;

/// Why a summary row or snapshot batch could not be stored.
///
/// The backend variants only exist when their feature is enabled.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Creating the output directory or flushing a file failed.
    #[error("output file: {0}")]
    Io(#[from] std::io::Error),

    /// A summary or snapshot CSV record was rejected.
    #[error("csv output: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("sqlite output: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A column batch did not match its schema.
    #[cfg(feature = "parquet")]
    #[error("arrow batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("parquet output: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

/// Result of an [`OutputWriter`](crate::OutputWriter) call.
pub type OutputResult<T> = Result<T, OutputError>;
