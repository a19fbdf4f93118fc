//! Output sinks for normalized records
//!
//! The crawl streams records to a `RecordSink`; the CSV file sink is the
//! production implementation, the memory sink backs tests.

mod csv_file;
mod memory;
mod traits;

pub use csv_file::CsvFileSink;
pub use memory::MemorySink;
pub use traits::{OutputError, OutputResult, RecordSink};
