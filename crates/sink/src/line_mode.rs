//! crates/sink/src/line_mode.rs
//! Newline policy applied by [`WriterSink`](crate::WriterSink).

/// Controls whether a [`WriterSink`](crate::WriterSink) appends a trailing
/// newline when writing accepted lines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each accepted line.
    WithNewline,
    /// Emit the accepted line without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline.
    ///
    /// [`LineMode::WithNewline`] is the facility default: every diagnostic
    /// lands on its own line of the output stream. Exposing the policy as a
    /// method keeps integrations that mirror lines to several destinations
    /// from pattern-matching on the enum.
    ///
    /// # Examples
    ///
    /// ```
    /// use sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

impl From<bool> for LineMode {
    /// Converts a boolean newline flag into a [`LineMode`].
    ///
    /// `true` maps to [`LineMode::WithNewline`], `false` to
    /// [`LineMode::WithoutNewline`], so call sites that already compute the
    /// policy as a boolean can configure a sink without branching.
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    /// Converts a [`LineMode`] back into its boolean newline flag.
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_appends_newline() {
        assert_eq!(LineMode::default(), LineMode::WithNewline);
    }

    #[test]
    fn bool_conversions_are_consistent() {
        assert_eq!(LineMode::from(true), LineMode::WithNewline);
        assert_eq!(LineMode::from(false), LineMode::WithoutNewline);
        assert!(bool::from(LineMode::WithNewline));
        assert!(!bool::from(LineMode::WithoutNewline));
    }
}
