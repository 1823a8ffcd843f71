//! Output sinks backed by `std::io::Write`.

use std::io::{self, Write};

use utilbelt_common::OutputSink;

/// Writes each line to an underlying writer.
///
/// I/O errors are logged and the line is dropped; callers never see them.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{}", line) {
            tracing::warn!(error = %e, "Dropped output line");
        }
    }
}

/// Sink for the process's standard output.
pub type StdoutSink = WriterSink<io::Stdout>;

/// Create a sink writing to standard output.
pub fn stdout() -> StdoutSink {
    WriterSink::new(io::stdout())
}
