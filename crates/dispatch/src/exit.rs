//! crates/dispatch/src/exit.rs
//! Exit codes used by the fatal reporting path.

use std::fmt;

/// Exit codes handed to the [`FatalHandler`](crate::FatalHandler).
///
/// The facility's errors are unrecoverable by design; these codes distinguish
/// where the failure was reported from so that wrapping scripts can tell an
/// object-scope configuration problem from a failure before any object
/// existed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Fatal error attributable to an object instance.
    ///
    /// Used for setup problems detected while an object (a volume, a source,
    /// an actor) is configuring itself.
    ObjectFatal = 1,

    /// Fatal error at global or static scope.
    ///
    /// Used for failures before or outside any object context.
    GlobalFatal = 2,
}

impl ExitCode {
    /// Returns the raw process exit status.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns a short human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ObjectFatal => "fatal error reported by an object",
            Self::GlobalFatal => "fatal error at global scope",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_i32())
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}
