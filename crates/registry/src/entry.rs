//! crates/registry/src/entry.rs
//! Per-type registry entry: verbosity threshold plus help text.

/// State recorded for one registered message type.
///
/// An entry carries the current verbosity threshold and the human-readable
/// help string shown by [`MessageRegistry::print_info`](crate::MessageRegistry::print_info).
/// Entries are created by registration (or by
/// [`set_level`](crate::MessageRegistry::set_level), which backfills an empty
/// help string) and live for the lifetime of the registry.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeEntry {
    level: u8,
    help: String,
}

impl TypeEntry {
    /// Creates an entry with the given threshold and help text.
    #[must_use]
    pub fn new(level: u8, help: impl Into<String>) -> Self {
        Self {
            level,
            help: help.into(),
        }
    }

    /// Returns the current verbosity threshold.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Returns the help text supplied at registration.
    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }

    pub(crate) fn set_level(&mut self, level: u8) {
        self.level = level;
    }
}
