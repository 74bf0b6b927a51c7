//! src/lib.rs
//! Categorized, level-gated message facility for simulation toolkits.
//!
//! # Overview
//!
//! `simlog` gives a long-running simulation one place to control how
//! talkative each subsystem is. Subsystems register a message *type* (a name,
//! a help string, and a default verbosity level); call sites emit through the
//! macro family, tagging each message with its type and a level; operators
//! raise or lower per-type thresholds at run time. A message is written only
//! when its level clears the threshold for its type.
//!
//! The facility is split across three crates, re-exported here:
//!
//! - [`registry`]: the [`MessageRegistry`] of types, thresholds, and the
//!   shared indentation state.
//! - [`sink`]: the [`LineSink`] output abstraction with writer, capture, and
//!   standard-stream implementations.
//! - [`dispatch`]: the [`Dispatcher`] context, the emission macros, and the
//!   warning, fatal, and host-stream paths.
//!
//! # Examples
//!
//! ```
//! use simlog::{sim_message, sim_warning, Dispatcher, MessageRegistry};
//! use simlog::CaptureSink;
//!
//! let mut registry = MessageRegistry::new();
//! registry.register_type("Geometry", "volume construction", 2);
//! registry.register_type("Physics", "process setup", 1);
//!
//! let mut log = Dispatcher::new(registry, CaptureSink::new());
//!
//! sim_message!(log, "Geometry", 1, "building {} volumes", 42)?;
//! sim_message!(log, "Physics", 3, "suppressed at threshold 1")?;
//! sim_warning!(log, "no magnetic field configured")?;
//!
//! assert_eq!(log.sink().len(), 2);
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Operators typically drive thresholds from command tokens:
//!
//! ```
//! use simlog::MessageRegistry;
//!
//! let mut registry = MessageRegistry::new();
//! registry.register_type("Tracking", "step tracing", 9);
//! registry.apply_level_token("Tracking3")?;
//! assert_eq!(registry.level("Tracking"), Some(3));
//! # Ok::<(), simlog::LevelTokenError>(())
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use dispatch::{
    Dispatcher, ExitCode, ExitFatalHandler, FatalEvent, FatalHandler, RecordingFatalHandler,
    SourceLocation, HOST_TYPE, WARNING_BANNER, WARNING_TYPE,
};
pub use registry::{LevelTokenError, MessageRegistry, TypeEntry, DEFAULT_LEVEL, TAB_STEP};
pub use sink::{
    stderr_sink, stdout_sink, CaptureSink, HostStatus, LineMode, LineSink, WriterSink,
};

pub use dispatch::{
    dump_value, log_source, sim_dec_tab, sim_debug, sim_debug_cont, sim_debug_dec, sim_debug_inc,
    sim_fatal, sim_global_fatal, sim_inc_tab, sim_message, sim_message_cont, sim_message_dec,
    sim_message_inc, sim_reset_tab, sim_warning,
};
