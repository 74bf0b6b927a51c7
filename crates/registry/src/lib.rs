#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/registry/src/lib.rs
//!
//! # Overview
//!
//! `registry` owns the mutable state behind the simlog facility: the mapping
//! from message-type name to its current verbosity threshold and help text,
//! plus the shared indentation string that nested simulation phases use to
//! structure their traces. The dispatch layer consults this state before
//! every guarded write; an operator mutates it at runtime to raise or lower
//! the displayed verbosity per type.
//!
//! # Design
//!
//! The registry is an explicit context object. There is no singleton and no
//! hidden global: callers construct a [`MessageRegistry`] at process start and
//! hand it (usually via the dispatch layer) to every logging call site. The
//! entry map is a [`BTreeMap`](std::collections::BTreeMap) so that
//! [`MessageRegistry::print_info`] lists types in a deterministic order.
//!
//! # Invariants
//!
//! - Each type name maps to at most one [`TypeEntry`]; entries are never
//!   deleted for the lifetime of the registry.
//! - Plain lookups ([`MessageRegistry::level`]) never create entries; unknown
//!   names are reported as unknown ([`None`]) rather than auto-registered.
//! - [`MessageRegistry::dec_tab`] saturates at the empty string; indentation
//!   never underflows.
//!
//! # Examples
//!
//! ```
//! use registry::MessageRegistry;
//!
//! let mut registry = MessageRegistry::new();
//! registry.register_type("Physics", "Messages from the physics list builders", 5);
//!
//! assert_eq!(registry.level("Physics"), Some(5));
//! assert_eq!(registry.level("Geometry"), None);
//!
//! registry.set_level("Physics", 8);
//! assert_eq!(registry.level("Physics"), Some(8));
//! ```

mod entry;
mod registry;
mod token;

pub use entry::TypeEntry;
pub use registry::{MessageRegistry, DEFAULT_LEVEL, TAB_STEP};
pub use token::LevelTokenError;
