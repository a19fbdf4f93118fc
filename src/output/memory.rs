//! In-memory sink, used by tests and library callers that want the
//! lines without touching the filesystem

use crate::output::traits::{OutputResult, RecordSink};
use crate::record::Record;

/// Sink collecting every written line in order
///
/// `flushes` counts `flush` calls so tests can assert the coordinator
/// flushed before handing the sink back.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
    pub flushes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordSink for MemorySink {
    fn write_header(&mut self) -> OutputResult<()> {
        self.lines.push(Record::header_line());
        Ok(())
    }

    fn write_record(&mut self, record: &Record) -> OutputResult<()> {
        self.lines.push(record.to_line());
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{normalize, RawRecord};

    #[test]
    fn test_memory_sink_preserves_order() {
        let mut sink = MemorySink::new();
        sink.write_header().unwrap();

        let mut raw = RawRecord::default();
        raw.name = Some("First".to_string());
        sink.write_record(&normalize(raw)).unwrap();

        let mut raw = RawRecord::default();
        raw.name = Some("Second".to_string());
        sink.write_record(&normalize(raw)).unwrap();

        assert_eq!(sink.lines.len(), 3);
        assert_eq!(sink.lines[0], Record::header_line());
        assert!(sink.lines[1].starts_with("\"First\""));
        assert!(sink.lines[2].starts_with("\"Second\""));
    }
}
