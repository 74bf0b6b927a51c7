//! crates/dispatch/src/source.rs
//! Call-site source locations for the warning and fatal paths.

use std::fmt;

/// Source location captured at a warning or fatal call site.
///
/// # Examples
///
/// ```
/// use dispatch::log_source;
///
/// let location = log_source!();
/// assert!(location.path().ends_with(".rs"));
/// assert!(location.line() > 0);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourceLocation {
    path: &'static str,
    line: u32,
}

impl SourceLocation {
    /// Creates a source location from `file!()`/`line!()` values.
    #[must_use]
    pub const fn from_parts(path: &'static str, line: u32) -> Self {
        Self { path, line }
    }

    /// Returns the path as recorded by the compiler.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the final path component, as shown by the fatal path.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        self.path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.path)
    }

    /// Returns the recorded line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

/// Captures the current source location.
///
/// # Examples
///
/// ```
/// use dispatch::{log_source, SourceLocation};
///
/// let location: SourceLocation = log_source!();
/// assert!(location.line() > 0);
/// ```
#[macro_export]
macro_rules! log_source {
    () => {
        $crate::SourceLocation::from_parts(file!(), line!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_file_and_line() {
        let location = log_source!();
        assert!(location.path().ends_with("source.rs"));
        assert!(location.line() > 0);
    }

    #[test]
    fn file_name_strips_directories() {
        let location = SourceLocation::from_parts("crates/dispatch/src/source.rs", 10);
        assert_eq!(location.file_name(), "source.rs");

        let bare = SourceLocation::from_parts("lib.rs", 1);
        assert_eq!(bare.file_name(), "lib.rs");
    }

    #[test]
    fn display_is_path_colon_line() {
        let location = SourceLocation::from_parts("src/a.rs", 12);
        assert_eq!(location.to_string(), "src/a.rs:12");
    }
}
