//! BibTeX entry type schemas
//!
//! This crate answers one question for bibliography validators and editors:
//! which fields does an entry of a given type require, and which may it carry?
//!
//! Features:
//! - Fixed table of the standard BibTeX entry types, including the `@string`
//!   and `@preamble` directives
//! - Case-insensitive lookup that accepts a leading `@`
//! - Field vocabulary with descriptions for completion popups
//!
//! The table is immutable and shared process-wide; lookups are safe from any
//! number of threads.

mod entry;
mod field;
mod registry;

pub use entry::{EntrySchema, ENTRY_TYPES};
pub use field::EntryField;
pub use registry::{
    all_entry_types, entry_tokens, lookup, normalize_token, try_lookup, RegistryError,
    ENTRY_MARKER,
};

#[cfg(feature = "uniffi")]
pub use registry::EntryTypeRecord;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
