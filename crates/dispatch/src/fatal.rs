//! crates/dispatch/src/fatal.rs
//! The pluggable hand-off at the end of the fatal reporting path.
//!
//! The original facility both terminated the process and then attempted to
//! dispatch a host exception, leaving the second step unreachable. Here the
//! ordering is deterministic: the dispatcher always finishes by calling one
//! [`FatalHandler`]. The default handler terminates the process; a host
//! toolkit installs its own handler to route into its structured
//! fatal-exception mechanism instead.

use std::cell::RefCell;
use std::rc::Rc;

use super::exit::ExitCode;

/// Receives the formatted fatal line after it has been reported.
///
/// Implementations are expected not to return (process exit, panic, host
/// exception dispatch). Handlers that do return — the recording handler used
/// by tests — make the fatal operations observable without ending the test
/// process.
pub trait FatalHandler {
    /// Handles a fatal report. `line` is the fully formatted message,
    /// including the call-site file and line.
    fn handle(&mut self, line: &str, code: ExitCode);
}

/// Default handler: terminates the process with the code's exit status.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExitFatalHandler;

impl FatalHandler for ExitFatalHandler {
    fn handle(&mut self, _line: &str, code: ExitCode) {
        std::process::exit(code.as_i32());
    }
}

/// One recorded fatal hand-off.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FatalEvent {
    /// The formatted fatal line.
    pub line: String,
    /// The exit code the default handler would have used.
    pub code: ExitCode,
}

/// Handler that records hand-offs instead of terminating.
///
/// The facility is single-threaded by contract, so the shared event log is a
/// plain [`Rc<RefCell<_>>`]; callers keep a handle from
/// [`events_handle`](Self::events_handle) while the handler itself moves into
/// the dispatcher.
///
/// # Examples
///
/// ```
/// use dispatch::{FatalHandler, ExitCode, RecordingFatalHandler};
///
/// let mut handler = RecordingFatalHandler::new();
/// let events = handler.events_handle();
///
/// handler.handle("setup.rs (l.3): bad overlap", ExitCode::ObjectFatal);
///
/// assert_eq!(events.borrow().len(), 1);
/// assert_eq!(events.borrow()[0].code, ExitCode::ObjectFatal);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingFatalHandler {
    events: Rc<RefCell<Vec<FatalEvent>>>,
}

impl RecordingFatalHandler {
    /// Creates a handler with an empty event log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to the shared event log.
    #[must_use]
    pub fn events_handle(&self) -> Rc<RefCell<Vec<FatalEvent>>> {
        Rc::clone(&self.events)
    }
}

impl FatalHandler for RecordingFatalHandler {
    fn handle(&mut self, line: &str, code: ExitCode) {
        self.events.borrow_mut().push(FatalEvent {
            line: line.to_owned(),
            code,
        });
    }
}
