//! crates/dispatch/src/dispatcher.rs
//! The guarded-writer context: threshold checks, prefix composition, and the
//! warning, fatal, and host-stream paths.

use std::fmt;
use std::io;

use registry::MessageRegistry;
use sink::{stdout_sink, HostStatus, LineSink, WriterSink};

use super::exit::ExitCode;
use super::fatal::{ExitFatalHandler, FatalHandler};
use super::source::SourceLocation;

/// Reserved type name consulted by the warning path.
pub const WARNING_TYPE: &str = "Warning";

/// Banner prefixed to every warning-path line.
pub const WARNING_BANNER: &str = " <!> *** WARNING *** <!>  ";

/// Reserved type name used for forwarded host-runtime text.
pub const HOST_TYPE: &str = "Host";

/// The logging context handed to every call site.
///
/// A `Dispatcher` owns the [`MessageRegistry`] it consults, the sink it
/// writes to, and the [`FatalHandler`] that ends the fatal path. Each guarded
/// write resolves the caller's type against the registry, decides whether the
/// supplied level clears the current threshold, and composes
/// `[<type>-<level>] <indent><payload>` when it does.
///
/// # Examples
///
/// ```
/// use dispatch::{sim_message, Dispatcher};
/// use registry::MessageRegistry;
/// use sink::CaptureSink;
///
/// let mut registry = MessageRegistry::new();
/// registry.register_type("Core", "core messages", 5);
///
/// let mut d = Dispatcher::new(registry, CaptureSink::new());
/// sim_message!(d, "Core", 4, "x={}", 1)?;
/// sim_message!(d, "Core", 7, "y={}", 2)?;
///
/// assert_eq!(d.sink().lines(), ["[Core-4]     x=1"]);
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Dispatcher<S> {
    registry: MessageRegistry,
    sink: S,
    fatal: Box<dyn FatalHandler>,
    host_forwarding: bool,
}

impl<S> fmt::Debug for Dispatcher<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("sink", &self.sink)
            .field("host_forwarding", &self.host_forwarding)
            .finish_non_exhaustive()
    }
}

impl Dispatcher<WriterSink<io::Stdout>> {
    /// Creates the conventional dispatcher writing to standard output.
    #[must_use]
    pub fn to_stdout(registry: MessageRegistry) -> Self {
        Self::new(registry, stdout_sink())
    }
}

impl<S> Dispatcher<S> {
    /// Creates a dispatcher with the default process-terminating
    /// [`FatalHandler`].
    #[must_use]
    pub fn new(registry: MessageRegistry, sink: S) -> Self {
        Self::with_fatal_handler(registry, sink, Box::new(ExitFatalHandler))
    }

    /// Creates a dispatcher with an explicit [`FatalHandler`].
    #[must_use]
    pub fn with_fatal_handler(
        registry: MessageRegistry,
        sink: S,
        fatal: Box<dyn FatalHandler>,
    ) -> Self {
        Self {
            registry,
            sink,
            fatal,
            host_forwarding: true,
        }
    }

    /// Borrows the registry.
    #[must_use]
    pub fn registry(&self) -> &MessageRegistry {
        &self.registry
    }

    /// Mutably borrows the registry (operator interface: `set_level`,
    /// `register_type`, ...).
    #[must_use]
    pub fn registry_mut(&mut self) -> &mut MessageRegistry {
        &mut self.registry
    }

    /// Borrows the sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrows the sink.
    #[must_use]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the dispatcher and returns the registry and sink.
    #[must_use]
    pub fn into_parts(self) -> (MessageRegistry, S) {
        (self.registry, self.sink)
    }

    /// Enables or disables forwarding of intercepted host streams.
    ///
    /// When disabled the host entry points accept and drop the text.
    pub fn set_host_forwarding(&mut self, enabled: bool) {
        self.host_forwarding = enabled;
    }

    /// Reports whether host streams are being forwarded.
    #[must_use]
    pub const fn host_forwarding(&self) -> bool {
        self.host_forwarding
    }

    /// Clears the shared indentation. Ungated, unlike the tab mutations tied
    /// to a message type.
    pub fn reset_tab(&mut self) {
        self.registry.reset_tab();
    }

    fn compose(&self, kind: &str, level: u8, args: fmt::Arguments<'_>, debug: bool) -> String {
        let tab = self.registry.tab();
        let space = MessageRegistry::space(level as usize);
        if debug {
            format!("[Debug-{kind}-{level}] {tab}{space}{args}")
        } else {
            format!("[{kind}-{level}] {tab}{space}{args}")
        }
    }
}

impl<S> Dispatcher<S>
where
    S: LineSink,
{
    /// Resolves the threshold for `kind`; an unknown type produces one
    /// warning-path write, attributed to the emitting call site, and gates
    /// the caller off.
    #[track_caller]
    fn clears_threshold(&mut self, kind: &str, level: u8) -> io::Result<bool> {
        match self.registry.level(kind) {
            Some(threshold) => Ok(level <= threshold),
            None => {
                let caller = std::panic::Location::caller();
                let source = SourceLocation::from_parts(caller.file(), caller.line());
                self.warning(source, format_args!("message type '{kind}' unknown"))?;
                Ok(false)
            }
        }
    }

    /// Guarded write: emits `[<kind>-<level>] <indent><payload>` when `level`
    /// clears the registry threshold for `kind`; otherwise a no-op.
    #[track_caller]
    pub fn message(
        &mut self,
        kind: &str,
        level: u8,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if self.clears_threshold(kind, level)? {
            let line = self.compose(kind, level, args, false);
            mirror(&line, false);
            self.sink.accept(&line)?;
        }
        Ok(())
    }

    /// Continuation write: payload only, no tag or indent, same gating.
    ///
    /// Used to split one logical message across several calls.
    #[track_caller]
    pub fn message_cont(
        &mut self,
        kind: &str,
        level: u8,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if self.clears_threshold(kind, level)? {
            let line = format!("{args}");
            mirror(&line, false);
            self.sink.accept(&line)?;
        }
        Ok(())
    }

    /// Guarded write, then grow the indentation by one unit.
    #[track_caller]
    pub fn message_inc(
        &mut self,
        kind: &str,
        level: u8,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if self.clears_threshold(kind, level)? {
            let line = self.compose(kind, level, args, false);
            mirror(&line, false);
            self.sink.accept(&line)?;
            self.registry.inc_tab();
        }
        Ok(())
    }

    /// Shrink the indentation by one unit, then perform the guarded write.
    #[track_caller]
    pub fn message_dec(
        &mut self,
        kind: &str,
        level: u8,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if self.clears_threshold(kind, level)? {
            self.registry.dec_tab();
            let line = self.compose(kind, level, args, false);
            mirror(&line, false);
            self.sink.accept(&line)?;
        }
        Ok(())
    }

    /// Grow the indentation without writing, still gated by the threshold.
    #[track_caller]
    pub fn inc_tab(&mut self, kind: &str, level: u8) -> io::Result<()> {
        if self.clears_threshold(kind, level)? {
            self.registry.inc_tab();
        }
        Ok(())
    }

    /// Shrink the indentation without writing, still gated by the threshold.
    #[track_caller]
    pub fn dec_tab(&mut self, kind: &str, level: u8) -> io::Result<()> {
        if self.clears_threshold(kind, level)? {
            self.registry.dec_tab();
        }
        Ok(())
    }

    /// Two-tier warning write, keyed on the reserved "Warning" type.
    ///
    /// Threshold 0 silences warnings entirely; 1 writes the banner line;
    /// 2 and above adds a second line naming the call-site file and line.
    /// An unregistered "Warning" type counts as threshold 0.
    pub fn warning(
        &mut self,
        source: SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        let threshold = self.registry.level(WARNING_TYPE).unwrap_or(0);
        if threshold > 0 {
            self.sink.accept(&format!("{WARNING_BANNER}{args}"))?;
            if threshold > 1 {
                self.sink.accept(&format!(
                    "{WARNING_BANNER}In file '{}' ; Line {}",
                    source.path(),
                    source.line()
                ))?;
            }
        }
        Ok(())
    }

    /// Fatal error attributable to an object instance.
    ///
    /// Writes `<file> (l.<line>): <payload>` to the sink, flushes, and hands
    /// the line to the [`FatalHandler`]. With the default handler this call
    /// does not return.
    pub fn fatal(&mut self, source: SourceLocation, args: fmt::Arguments<'_>) -> io::Result<()> {
        let line = fatal_line(source, args);
        self.sink.accept(&line)?;
        self.sink.flush()?;
        self.fatal.handle(&line, ExitCode::ObjectFatal);
        Ok(())
    }

    /// Fatal error at global or static scope.
    ///
    /// The formatted line goes to the [`FatalHandler`] only; nothing is
    /// written to the sink. With the default handler this call does not
    /// return.
    pub fn global_fatal(
        &mut self,
        source: SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        let line = fatal_line(source, args);
        self.fatal.handle(&line, ExitCode::GlobalFatal);
        Ok(())
    }

    /// Entry point for the host runtime's informational text stream.
    ///
    /// Each line of `text` is forwarded as a "Host" message at level 1 so it
    /// shares the facility's prefixing convention. Returns the status the
    /// host session contract expects.
    pub fn receive_host_out(&mut self, text: &str) -> HostStatus {
        if !self.host_forwarding {
            return HostStatus::ACCEPTED;
        }
        for line in text.lines() {
            if self.message(HOST_TYPE, 1, format_args!("{line}")).is_err() {
                return HostStatus::REJECTED;
            }
        }
        HostStatus::ACCEPTED
    }

    /// Entry point for the host runtime's error text stream.
    ///
    /// Host error text goes through the warning banner formatting (host text
    /// carries no usable call site, so the file/line tier never applies).
    pub fn receive_host_err(&mut self, text: &str) -> HostStatus {
        if !self.host_forwarding {
            return HostStatus::ACCEPTED;
        }
        let threshold = self.registry.level(WARNING_TYPE).unwrap_or(0);
        if threshold == 0 {
            return HostStatus::ACCEPTED;
        }
        for line in text.lines() {
            if self.sink.accept(&format!("{WARNING_BANNER}{line}")).is_err() {
                return HostStatus::REJECTED;
            }
        }
        HostStatus::ACCEPTED
    }

    /// Writes the registry's type listing to the sink, one line per type.
    pub fn print_info(&mut self) -> io::Result<()> {
        let mut buf = Vec::new();
        self.registry.print_info(&mut buf)?;
        let listing = String::from_utf8_lossy(&buf);
        for line in listing.lines() {
            self.sink.accept(line)?;
        }
        Ok(())
    }
}

#[cfg(feature = "debug-messages")]
impl<S> Dispatcher<S>
where
    S: LineSink,
{
    /// Debug-category guarded write, tagged `[Debug-<kind>-<level>]`.
    #[track_caller]
    pub fn debug_message(
        &mut self,
        kind: &str,
        level: u8,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if self.clears_threshold(kind, level)? {
            let line = self.compose(kind, level, args, true);
            mirror(&line, true);
            self.sink.accept(&line)?;
        }
        Ok(())
    }

    /// Debug continuation write: payload only, same gating.
    #[track_caller]
    pub fn debug_message_cont(
        &mut self,
        kind: &str,
        level: u8,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if self.clears_threshold(kind, level)? {
            let line = format!("{args}");
            mirror(&line, true);
            self.sink.accept(&line)?;
        }
        Ok(())
    }

    /// Debug write, then grow the indentation by one unit.
    #[track_caller]
    pub fn debug_message_inc(
        &mut self,
        kind: &str,
        level: u8,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if self.clears_threshold(kind, level)? {
            let line = self.compose(kind, level, args, true);
            mirror(&line, true);
            self.sink.accept(&line)?;
            self.registry.inc_tab();
        }
        Ok(())
    }

    /// Shrink the indentation by one unit, then perform the debug write.
    #[track_caller]
    pub fn debug_message_dec(
        &mut self,
        kind: &str,
        level: u8,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if self.clears_threshold(kind, level)? {
            self.registry.dec_tab();
            let line = self.compose(kind, level, args, true);
            mirror(&line, true);
            self.sink.accept(&line)?;
        }
        Ok(())
    }
}

fn fatal_line(source: SourceLocation, args: fmt::Arguments<'_>) -> String {
    format!("{} (l.{}): {args}", source.file_name(), source.line())
}

#[cfg(feature = "tracing")]
fn mirror(line: &str, debug: bool) {
    if debug {
        tracing::debug!(target: "simlog", "{line}");
    } else {
        tracing::info!(target: "simlog", "{line}");
    }
}

#[cfg(not(feature = "tracing"))]
const fn mirror(_line: &str, _debug: bool) {}

#[cfg(test)]
mod tests {
    use super::*;
    use sink::CaptureSink;

    fn dispatcher_with(kind: &str, level: u8) -> Dispatcher<CaptureSink> {
        let mut registry = MessageRegistry::new();
        registry.register_type(kind, "", level);
        Dispatcher::new(registry, CaptureSink::new())
    }

    #[test]
    fn emits_at_or_below_threshold() {
        let mut d = dispatcher_with("Core", 5);
        d.message("Core", 5, format_args!("at threshold"))
            .expect("write succeeds");
        d.message("Core", 6, format_args!("above threshold"))
            .expect("write succeeds");

        assert_eq!(d.sink().len(), 1);
        assert!(d.sink().lines()[0].starts_with("[Core-5] "));
        assert!(d.sink().lines()[0].ends_with("at threshold"));
    }

    #[test]
    fn continuation_has_no_prefix() {
        let mut d = dispatcher_with("Core", 5);
        d.message_cont("Core", 3, format_args!("tail"))
            .expect("write succeeds");
        assert_eq!(d.sink().lines(), ["tail"]);
    }

    #[test]
    fn inc_and_dec_variants_move_the_tab() {
        let mut d = dispatcher_with("Core", 9);
        d.message_inc("Core", 1, format_args!("enter"))
            .expect("write succeeds");
        assert_eq!(d.registry().tab(), "   ");

        d.message("Core", 1, format_args!("inside"))
            .expect("write succeeds");
        d.message_dec("Core", 1, format_args!("leave"))
            .expect("write succeeds");
        assert_eq!(d.registry().tab(), "");

        let lines = d.sink().lines();
        assert!(lines[1].contains("   inside"));
        // The dec variant removes the indent before writing.
        assert!(!lines[2].contains("   leave"));
    }

    #[test]
    fn tab_only_operations_are_gated() {
        let mut d = dispatcher_with("Core", 2);
        d.inc_tab("Core", 9).expect("gated off");
        assert_eq!(d.registry().tab(), "");
        d.inc_tab("Core", 1).expect("gated on");
        assert_eq!(d.registry().tab(), "   ");
        d.dec_tab("Core", 1).expect("gated on");
        assert_eq!(d.registry().tab(), "");
    }

    #[test]
    fn unknown_type_reports_once_and_suppresses_payload() {
        let mut d = Dispatcher::new(MessageRegistry::new(), CaptureSink::new());
        d.message("Ghost", 0, format_args!("never shown"))
            .expect("write succeeds");

        let lines = d.sink().lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(WARNING_BANNER));
        assert!(lines[0].contains("message type 'Ghost' unknown"));
    }

    #[test]
    fn level_proportional_space_prefix() {
        let mut d = dispatcher_with("Core", 9);
        d.message("Core", 3, format_args!("x")).expect("write");
        assert_eq!(d.sink().lines()[0], "[Core-3]    x");
    }
}
