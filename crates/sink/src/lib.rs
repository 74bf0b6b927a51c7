#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/sink/src/lib.rs
//!
//! # Overview
//!
//! `sink` provides the output capability consumed by the simlog dispatch
//! layer: a [`LineSink`] accepts one composed line of text at a time and
//! reports success or failure. The facility treats the sink as an unbounded,
//! always-available destination; the trait is the seam through which the host
//! toolkit plugs its own session output in place of standard output.
//!
//! # Design
//!
//! [`WriterSink`] adapts any [`std::io::Write`] implementor, applying a
//! [`LineMode`] to decide whether each accepted line gains a trailing
//! newline. [`CaptureSink`] records lines in memory for tests and for host
//! integrations that post-process diagnostics. [`HostStatus`] is the small
//! status code handed back to the host runtime's session contract when the
//! facility intercepts the host's own text streams.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values from the underlying
//! writer unchanged. [`CaptureSink`] is infallible.
//!
//! # Examples
//!
//! ```
//! use sink::{CaptureSink, LineSink};
//!
//! let mut sink = CaptureSink::new();
//! sink.accept("[Core-4] x=1")?;
//! sink.accept("[Core-4] y=2")?;
//!
//! assert_eq!(sink.lines(), ["[Core-4] x=1", "[Core-4] y=2"]);
//! # Ok::<(), std::io::Error>(())
//! ```

mod host;
mod line_mode;
mod line_sink;

pub use host::HostStatus;
pub use line_mode::LineMode;
pub use line_sink::{stderr_sink, stdout_sink, CaptureSink, LineSink, WriterSink};
