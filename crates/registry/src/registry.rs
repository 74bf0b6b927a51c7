//! crates/registry/src/registry.rs
//! The registry proper: type → threshold map plus shared indentation state.

use std::collections::BTreeMap;
use std::io::{self, Write};

use super::entry::TypeEntry;

/// Threshold assigned when a registration does not name one (show almost
/// everything).
pub const DEFAULT_LEVEL: u8 = 9;

/// One indentation unit, as appended or removed by the tab operations.
pub const TAB_STEP: &str = "   ";

/// Registry of message types and shared indentation state.
///
/// The registry is the single source of truth consulted by the dispatch layer
/// before every guarded write. It is an explicit context object with
/// process-wide lifetime by convention, but nothing prevents constructing
/// several independent registries (tests do exactly that).
///
/// # Examples
///
/// ```
/// use registry::{MessageRegistry, DEFAULT_LEVEL};
///
/// let mut registry = MessageRegistry::new();
/// registry.register_type_default("Geometry", "Volume construction tracing");
/// assert_eq!(registry.level("Geometry"), Some(DEFAULT_LEVEL));
///
/// registry.inc_tab();
/// assert_eq!(registry.tab(), "   ");
/// registry.dec_tab();
/// assert_eq!(registry.tab(), "");
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageRegistry {
    entries: BTreeMap<String, TypeEntry>,
    tab: String,
    max_name_len: usize,
}

impl MessageRegistry {
    /// Creates a registry pre-seeded with the reserved types.
    ///
    /// "Core" and "Warning" are always present so that the warning path has a
    /// threshold to consult from the first call, and "Host" backs the
    /// forwarded host-runtime streams.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_type("Core", "Messages generated by the toolkit core classes", 1);
        registry.register_type("Warning", "Warning message verbosity (0 silences warnings)", 1);
        registry.register_type("Host", "Messages forwarded from the host runtime streams", 1);
        registry
    }

    /// Creates a registry with no entries at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers `name`, overwriting any previous entry (last writer wins).
    pub fn register_type(&mut self, name: &str, help: &str, default_level: u8) {
        self.max_name_len = self.max_name_len.max(name.len());
        self.entries
            .insert(name.to_owned(), TypeEntry::new(default_level, help));
    }

    /// Registers `name` at [`DEFAULT_LEVEL`].
    pub fn register_type_default(&mut self, name: &str, help: &str) {
        self.register_type(name, help, DEFAULT_LEVEL);
    }

    /// Updates the threshold for `name`.
    ///
    /// A previously unregistered name is created with empty help text,
    /// mirroring the map-insert semantics the facility has always had. Plain
    /// lookups never do this.
    pub fn set_level(&mut self, name: &str, level: u8) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.set_level(level);
        } else {
            self.max_name_len = self.max_name_len.max(name.len());
            self.entries
                .insert(name.to_owned(), TypeEntry::new(level, ""));
        }
    }

    /// Applies one threshold to every registered type.
    pub fn set_all_levels(&mut self, level: u8) {
        for entry in self.entries.values_mut() {
            entry.set_level(level);
        }
    }

    /// Returns the current threshold for `name`, or [`None`] for an unknown
    /// type.
    ///
    /// This is the hot path called before every guarded emission; it never
    /// allocates and never creates entries.
    #[must_use]
    pub fn level(&self, name: &str) -> Option<u8> {
        self.entries.get(name).map(TypeEntry::level)
    }

    /// Returns the help text recorded for `name`, if registered.
    #[must_use]
    pub fn help(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(TypeEntry::help)
    }

    /// Reports whether `name` has been registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the registry holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over registered types in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeEntry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    /// Returns the current indentation string.
    #[must_use]
    pub fn tab(&self) -> &str {
        &self.tab
    }

    /// Grows the indentation by one [`TAB_STEP`].
    pub fn inc_tab(&mut self) {
        self.tab.push_str(TAB_STEP);
    }

    /// Shrinks the indentation by one [`TAB_STEP`], saturating at empty.
    pub fn dec_tab(&mut self) {
        let len = self.tab.len().saturating_sub(TAB_STEP.len());
        self.tab.truncate(len);
    }

    /// Clears the indentation entirely.
    pub fn reset_tab(&mut self) {
        self.tab.clear();
    }

    /// Returns a string of exactly `n` spaces.
    ///
    /// Used as the level-proportional indent, independent of the tab state.
    #[must_use]
    pub fn space(n: usize) -> String {
        " ".repeat(n)
    }

    /// Writes a human-readable listing of every registered type to `out`.
    ///
    /// The listing shows each name (padded so thresholds align), its current
    /// threshold, and its help text, one type per line. Intended for operator
    /// consoles; the output format is informational, not a stable interface.
    pub fn print_info<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Registered message types ({}):", self.entries.len())?;
        let width = self.max_name_len;
        for (name, entry) in &self.entries {
            writeln!(
                out,
                "  {name:<width$}  level {:>3}  {}",
                entry.level(),
                entry.help()
            )?;
        }
        Ok(())
    }
}
