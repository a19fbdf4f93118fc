//! Record sink trait and output errors

use crate::record::Record;
use thiserror::Error;

/// Errors that can occur while writing output
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Destination for normalized records
///
/// The sink is append-only: one header line first, then one line per
/// record, written synchronously in crawl order and never read back.
pub trait RecordSink {
    /// Writes the header line; called exactly once, before any record
    fn write_header(&mut self) -> OutputResult<()>;

    /// Writes one record line
    fn write_record(&mut self, record: &Record) -> OutputResult<()>;

    /// Flushes any buffered output
    fn flush(&mut self) -> OutputResult<()>;
}
