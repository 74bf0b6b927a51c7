//! crates/dispatch/src/lib.rs
//! Guarded message emission for the simlog facility.
//!
//! # Overview
//!
//! This crate holds the call-site half of the facility: the [`Dispatcher`]
//! that checks each message's level against the registry threshold for its
//! type and writes accepted lines to a [`LineSink`](sink::LineSink), the
//! macro family that call sites actually use, and the warning, fatal, and
//! host-stream paths.
//!
//! # Design
//!
//! The dispatcher is an explicit context object: it owns its
//! [`MessageRegistry`](registry::MessageRegistry), its sink, and the
//! [`FatalHandler`] invoked at the end of the fatal path. There is no global
//! singleton; embedders decide where the context lives and thread it to call
//! sites.
//!
//! The macros expand to the corresponding dispatcher call expression, so `?`
//! applies at the call site and a gated-off message costs one map lookup.
//! The `sim_debug*` family goes further: without the `debug-messages`
//! feature those macros expand to `Ok(())` and their format arguments are
//! never evaluated.
//!
//! # Invariants
//!
//! - A message is written iff its level is less than or equal to the
//!   registry threshold for its type; an unknown type produces one warning
//!   line and suppresses the payload.
//! - Warnings are keyed on the reserved `"Warning"` type: threshold 0 is
//!   silent, 1 writes the banner line, 2 and above adds the call-site line.
//! - The fatal path always ends in exactly one [`FatalHandler`] call.
//!
//! # Errors
//!
//! Emission methods return [`std::io::Result`]; the only failure source is
//! the sink's underlying writer.
//!
//! # Examples
//!
//! ```
//! use dispatch::{sim_message, sim_warning, Dispatcher};
//! use registry::MessageRegistry;
//! use sink::CaptureSink;
//!
//! let mut registry = MessageRegistry::new();
//! registry.register_type("Geometry", "volume construction", 2);
//!
//! let mut d = Dispatcher::new(registry, CaptureSink::new());
//! sim_message!(d, "Geometry", 1, "building world volume")?;
//! sim_message!(d, "Geometry", 5, "too detailed, dropped")?;
//! sim_warning!(d, "overlapping daughters")?;
//!
//! assert_eq!(d.sink().len(), 2);
//! # Ok::<(), std::io::Error>(())
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod dispatcher;
mod exit;
mod fatal;
mod macros;
mod source;

pub use dispatcher::{Dispatcher, HOST_TYPE, WARNING_BANNER, WARNING_TYPE};
pub use exit::ExitCode;
pub use fatal::{ExitFatalHandler, FatalEvent, FatalHandler, RecordingFatalHandler};
pub use source::SourceLocation;
