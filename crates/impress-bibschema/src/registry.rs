//! Entry type lookup
//!
//! Tokens are matched after stripping one leading `@` and lowercasing, so
//! `@ARTICLE`, `article` and `Article` all resolve to the same schema.
//! There is no fuzzy or prefix matching.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::entry::{EntrySchema, ENTRY_TYPES};

/// Marker that introduces an entry in a `.bib` file
pub const ENTRY_MARKER: char = '@';

/// Error from the entry type registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Entry type not recognized: {0}")]
    UnknownEntryToken(String),
}

lazy_static! {
    /// Index from canonical token to its schema, built on first use.
    static ref LOOKUP: HashMap<&'static str, &'static EntrySchema> =
        ENTRY_TYPES.iter().map(|entry| (entry.token, entry)).collect();
}

/// Normalize a user-supplied entry type token to its canonical form.
pub fn normalize_token(token: &str) -> String {
    token
        .strip_prefix(ENTRY_MARKER)
        .unwrap_or(token)
        .to_lowercase()
}

/// Look up the schema for an entry type token.
///
/// Returns `None` when the type is not recognized.
pub fn lookup(token: &str) -> Option<&'static EntrySchema> {
    let normalized = normalize_token(token);
    let schema = LOOKUP.get(normalized.as_str()).copied();
    if schema.is_none() {
        tracing::trace!("No entry type registered for token {:?}", token);
    }
    schema
}

/// Like [`lookup`], but reports a miss as an error.
pub fn try_lookup(token: &str) -> Result<&'static EntrySchema, RegistryError> {
    lookup(token).ok_or_else(|| RegistryError::UnknownEntryToken(token.to_string()))
}

/// All entry types, in documentation order.
pub fn all_entry_types() -> &'static [EntrySchema] {
    ENTRY_TYPES
}

/// Canonical tokens of all entry types, for completion.
pub fn entry_tokens() -> impl Iterator<Item = &'static str> {
    ENTRY_TYPES.iter().map(|entry| entry.token)
}

/// Owned copy of an entry schema for foreign callers
#[cfg(feature = "uniffi")]
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct EntryTypeRecord {
    pub token: String,
    pub description: String,
    pub required: Vec<crate::field::EntryField>,
    pub optional: Vec<crate::field::EntryField>,
}

#[cfg(feature = "uniffi")]
impl From<&EntrySchema> for EntryTypeRecord {
    fn from(schema: &EntrySchema) -> Self {
        Self {
            token: schema.token.to_string(),
            description: schema.description.to_string(),
            required: schema.required.to_vec(),
            optional: schema.optional.to_vec(),
        }
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn lookup_entry_type_ffi(token: String) -> Option<EntryTypeRecord> {
    lookup(&token).map(EntryTypeRecord::from)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn all_entry_types_ffi() -> Vec<EntryTypeRecord> {
    ENTRY_TYPES.iter().map(EntryTypeRecord::from).collect()
}
