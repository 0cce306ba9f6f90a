//! The `DuplicateLabel` inspection
//!
//! Ties the project-wide [`scan`] to the per-document [`emit`]. The duplicate
//! set is rebuilt on every pass; nothing is cached between runs.

use serde::{Deserialize, Serialize};

use crate::config::LintConfig;
use crate::declaration::SourceFile;
use crate::emitter::{emit, emit_into, Diagnostic, DiagnosticSink};
use crate::scanner::{scan, DuplicateSet};

#[cfg(feature = "uniffi")]
use crate::declaration::Document;

/// Group an inspection is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum InsightGroup {
    Latex,
}

impl InsightGroup {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Latex => "LaTeX",
        }
    }
}

/// Flags labels and bibliography keys declared more than once in a project
#[derive(Debug, Clone, Default)]
pub struct DuplicateLabelInspection {
    config: LintConfig,
}

impl DuplicateLabelInspection {
    pub const ID: &'static str = "DuplicateLabel";
    pub const DISPLAY_NAME: &'static str = "Duplicate labels";
    pub const GROUP: InsightGroup = InsightGroup::Latex;

    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    pub fn scan<'a, F: SourceFile + 'a>(
        &self,
        file_set: impl IntoIterator<Item = &'a F>,
    ) -> DuplicateSet {
        scan(file_set, &self.config)
    }

    pub fn emit<F: SourceFile>(
        &self,
        document: &F,
        duplicates: &DuplicateSet,
        on_the_fly: bool,
    ) -> Vec<Diagnostic> {
        emit(document, duplicates, &self.config, on_the_fly)
    }

    /// Scan `file_set` and report the duplicates declared in `document`.
    pub fn inspect_file<'a, F: SourceFile + 'a>(
        &self,
        file_set: impl IntoIterator<Item = &'a F>,
        document: &F,
        on_the_fly: bool,
    ) -> Vec<Diagnostic> {
        let duplicates = self.scan(file_set);
        self.emit(document, &duplicates, on_the_fly)
    }

    /// Like [`inspect_file`](Self::inspect_file), reporting into `sink`.
    pub fn inspect_file_into<'a, F: SourceFile + 'a, S: DiagnosticSink>(
        &self,
        file_set: impl IntoIterator<Item = &'a F>,
        document: &F,
        on_the_fly: bool,
        sink: &mut S,
    ) -> Vec<S::Handle> {
        let duplicates = self.scan(file_set);
        emit_into(document, &duplicates, &self.config, on_the_fly, sink)
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn inspect_file_ffi(file_set: Vec<Document>, path: String, on_the_fly: bool) -> Vec<Diagnostic> {
    let inspection = DuplicateLabelInspection::default();
    match file_set.iter().find(|document| document.path == path) {
        Some(document) => inspection.inspect_file(&file_set, document, on_the_fly),
        None => Vec::new(),
    }
}
