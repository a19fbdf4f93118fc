//! CSV file sink

use crate::output::traits::{OutputResult, RecordSink};
use crate::record::Record;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Sink writing the header and record lines to a file on disk
pub struct CsvFileSink {
    writer: BufWriter<File>,
}

impl CsvFileSink {
    /// Creates (or truncates) the output file at the given path
    pub fn create(path: &Path) -> OutputResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl RecordSink for CsvFileSink {
    fn write_header(&mut self) -> OutputResult<()> {
        writeln!(self.writer, "{}", Record::header_line())?;
        Ok(())
    }

    fn write_record(&mut self, record: &Record) -> OutputResult<()> {
        writeln!(self.writer, "{}", record.to_line())?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{normalize, RawRecord};
    use tempfile::tempdir;

    #[test]
    fn test_file_sink_writes_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        {
            let mut sink = CsvFileSink::create(&path).unwrap();
            sink.write_header().unwrap();
            sink.write_record(&normalize(RawRecord::default())).unwrap();
            sink.flush().unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], Record::header_line());
        assert!(lines[1].starts_with("\"N/A\""));
    }
}
