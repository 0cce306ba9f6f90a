//! Diagnostics for duplicated identifiers in a single document

use serde::{Deserialize, Serialize};

use crate::config::LintConfig;
use crate::declaration::{declarations, Namespace, SourceFile, TextRange};
use crate::scanner::DuplicateSet;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
}

/// A duplicated identifier at one place in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Diagnostic {
    pub document: String,
    pub namespace: Namespace,
    pub name: String,
    /// Offset of the declaring command or entry
    pub anchor: u32,
    /// Span of the name, relative to `anchor`
    pub range: TextRange,
    pub message: String,
    pub severity: Severity,
    /// Raised by a background pass rather than an explicit inspection run
    pub on_the_fly: bool,
}

impl Diagnostic {
    /// Span of the name within the document
    pub fn absolute_range(&self) -> TextRange {
        self.range.shift_right(self.anchor)
    }
}

/// Receiver for diagnostics, e.g. an editor's problem list
pub trait DiagnosticSink {
    /// Opaque problem handle returned by the sink
    type Handle;

    fn create_problem(
        &mut self,
        anchor: u32,
        range: TextRange,
        message: &str,
        severity: Severity,
        on_the_fly: bool,
    ) -> Self::Handle;
}

/// Message shown for a duplicated identifier
pub fn duplicate_message(namespace: Namespace, name: &str) -> String {
    format!("Duplicate {} '{}'", namespace.noun(), name)
}

/// Report every declaration in `document` whose identifier is in `duplicates`.
///
/// Output follows document order with one diagnostic per occurrence.
pub fn emit<F: SourceFile>(
    document: &F,
    duplicates: &DuplicateSet,
    config: &LintConfig,
    on_the_fly: bool,
) -> Vec<Diagnostic> {
    if duplicates.is_empty() {
        return Vec::new();
    }

    let diagnostics: Vec<Diagnostic> = declarations(document, config)
        .into_iter()
        .filter(|declaration| duplicates.contains(declaration.namespace, declaration.name))
        .filter_map(|declaration| {
            let Some(range) = declaration.location.range else {
                tracing::trace!(
                    "Not reporting '{}' at {}: name span unknown",
                    declaration.name,
                    declaration.location.anchor
                );
                return None;
            };
            Some(Diagnostic {
                document: declaration.location.document.to_string(),
                namespace: declaration.namespace,
                name: declaration.name.to_string(),
                anchor: declaration.location.anchor,
                range,
                message: duplicate_message(declaration.namespace, declaration.name),
                severity: config.severity,
                on_the_fly,
            })
        })
        .collect();

    tracing::debug!(
        "{} duplicate identifier(s) reported in {}",
        diagnostics.len(),
        document.path()
    );
    diagnostics
}

/// Like [`emit`], but hands each diagnostic to `sink` and returns its handles.
pub fn emit_into<F: SourceFile, S: DiagnosticSink>(
    document: &F,
    duplicates: &DuplicateSet,
    config: &LintConfig,
    on_the_fly: bool,
    sink: &mut S,
) -> Vec<S::Handle> {
    emit(document, duplicates, config, on_the_fly)
        .iter()
        .map(|d| sink.create_problem(d.anchor, d.range, &d.message, d.severity, d.on_the_fly))
        .collect()
}
