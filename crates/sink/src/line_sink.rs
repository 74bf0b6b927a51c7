//! crates/sink/src/line_sink.rs
//! The sink capability and its writer/capture adapters.

use std::io::{self, Write};

use super::line_mode::LineMode;

/// Destination capability for composed diagnostic lines.
///
/// The dispatch layer hands each fully composed line (prefix plus payload) to
/// a `LineSink`. Implementors decide where the text goes: standard output, an
/// in-memory buffer, or the host toolkit's own session output.
pub trait LineSink {
    /// Accepts one composed line of text.
    fn accept(&mut self, line: &str) -> io::Result<()>;

    /// Flushes any buffered output.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink adapter over any [`io::Write`] implementor.
///
/// The sink owns the underlying writer together with the [`LineMode`] that
/// decides whether each accepted line gains a trailing newline (the default).
///
/// # Examples
///
/// Collect diagnostics into a [`Vec<u8>`] with newline terminators:
///
/// ```
/// use sink::{LineSink, WriterSink};
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.accept("[Core-4] x=1")?;
/// sink.accept("[Core-4] y=2")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "[Core-4] x=1\n[Core-4] y=2\n");
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Emit a final line without a newline:
///
/// ```
/// use sink::{LineMode, LineSink, WriterSink};
///
/// let mut sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.accept("done")?;
/// assert_eq!(sink.into_inner(), b"done".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct WriterSink<W> {
    writer: W,
    line_mode: LineMode,
}

impl<W> WriterSink<W> {
    /// Creates a sink that appends a newline after each accepted line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self { writer, line_mode }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent lines.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for WriterSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> LineSink for WriterSink<W>
where
    W: Write,
{
    fn accept(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        if self.line_mode.append_newline() {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Creates the facility's conventional standard-output sink.
#[must_use]
pub fn stdout_sink() -> WriterSink<io::Stdout> {
    WriterSink::new(io::stdout())
}

/// Creates a standard-error sink, for embedders that keep diagnostics off
/// stdout.
#[must_use]
pub fn stderr_sink() -> WriterSink<io::Stderr> {
    WriterSink::new(io::stderr())
}

/// In-memory sink that records each accepted line.
///
/// Used by the test suites and by host integrations that post-process
/// diagnostics before display.
///
/// # Examples
///
/// ```
/// use sink::{CaptureSink, LineSink};
///
/// let mut sink = CaptureSink::new();
/// sink.accept("first")?;
/// sink.accept("second")?;
/// assert_eq!(sink.lines(), ["first", "second"]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    lines: Vec<String>,
}

impl CaptureSink {
    /// Creates an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded lines in acceptance order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Reports whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drains the recorded lines, clearing the sink.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl LineSink for CaptureSink {
    fn accept(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_sink_appends_newlines_by_default() {
        let mut sink = WriterSink::new(Vec::new());
        sink.accept("one").expect("write succeeds");
        sink.accept("two").expect("write succeeds");
        assert_eq!(sink.into_inner(), b"one\ntwo\n".to_vec());
    }

    #[test]
    fn writer_sink_without_newline_preserves_output() {
        let mut sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        sink.accept("ready").expect("write succeeds");
        assert_eq!(sink.into_inner(), b"ready".to_vec());
    }

    #[test]
    fn line_mode_can_change_between_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.accept("first").expect("write succeeds");
        sink.set_line_mode(LineMode::WithoutNewline);
        sink.accept("second").expect("write succeeds");
        assert_eq!(sink.into_inner(), b"first\nsecond".to_vec());
    }

    #[test]
    fn capture_sink_records_in_order() {
        let mut sink = CaptureSink::new();
        sink.accept("a").expect("infallible");
        sink.accept("b").expect("infallible");
        assert_eq!(sink.lines(), ["a", "b"]);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn capture_sink_drain_clears() {
        let mut sink = CaptureSink::new();
        sink.accept("a").expect("infallible");
        let drained = sink.drain();
        assert_eq!(drained, ["a"]);
        assert!(sink.is_empty());
    }
}
