//! Deferred report buffer
//!
//! Lines accumulate in memory while workloads run and reach the sink in a
//! single flush once the run is over.

use std::io::Write;
use tracing::debug;

use crate::error::Result;
use crate::types::Measurement;

pub const BANNER: &str = "Beginning performance enhancement tests...";
pub const COMPLETION: &str = "Performance enhancement tests finished.";

/// Ordered, append-only list of report lines
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputBuffer {
    lines: Vec<String>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Blank separator followed by the `New Test` header
    pub fn push_test_header(&mut self, name: &str) {
        self.blank();
        self.push(format!("New Test: {}", name));
    }

    /// Start timestamp and the two result lines for a finished workload
    pub fn push_result(&mut self, start_ns: u64, measurement: &Measurement) {
        self.push(format!("Start time: {}", start_ns));
        self.blank();
        self.push(format!(
            "Time taken for test [{}]: {} nanoseconds",
            measurement.workload_name, measurement.elapsed_ns
        ));
        self.push(format!(
            "Time in seconds: {} seconds",
            measurement.elapsed_seconds()
        ));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write every line to `sink`, one per line, and empty the buffer.
    ///
    /// The buffer is drained even when the write fails part way; a failed
    /// flush is fatal and nothing is retried.
    pub fn flush<W: Write>(&mut self, sink: &mut W) -> Result<()> {
        let count = self.lines.len();
        for line in self.lines.drain(..) {
            writeln!(sink, "{}", line)?;
        }
        sink.flush()?;
        debug!(lines = count, "report flushed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(name: &str, ns: u64) -> Measurement {
        Measurement {
            workload_name: name.to_string(),
            elapsed_ns: ns,
        }
    }

    #[test]
    fn test_block_layout() {
        let mut buf = OutputBuffer::new();
        buf.push_test_header("boxed-array");
        buf.push_result(1000, &measurement("boxed-array", 2_500_000));

        assert_eq!(
            buf.lines(),
            &[
                "",
                "New Test: boxed-array",
                "Start time: 1000",
                "",
                "Time taken for test [boxed-array]: 2500000 nanoseconds",
                "Time in seconds: 0.0025 seconds",
            ]
        );
    }

    #[test]
    fn test_flush_drains_in_order() {
        let mut buf = OutputBuffer::new();
        buf.push(BANNER);
        buf.push("second");
        buf.push(COMPLETION);

        let mut sink = Vec::new();
        buf.flush(&mut sink).unwrap();

        assert!(buf.is_empty());
        let text = String::from_utf8(sink).unwrap();
        assert_eq!(
            text,
            format!("{}\nsecond\n{}\n", BANNER, COMPLETION)
        );
    }

    #[test]
    fn test_flush_empty_buffer_writes_nothing() {
        let mut buf = OutputBuffer::new();
        let mut sink = Vec::new();
        buf.flush(&mut sink).unwrap();
        assert!(sink.is_empty());
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_flush_reports_sink_failure() {
        let mut buf = OutputBuffer::new();
        buf.push("line");
        let err = buf.flush(&mut BrokenSink).unwrap_err();
        assert!(matches!(err, crate::error::BenchError::Io(_)));
        assert!(buf.is_empty());
    }
}
