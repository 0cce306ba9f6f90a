//! Duplicate identifier detection for LaTeX projects
//!
//! Labels (`\label`) and bibliography keys (`\bibitem` and `.bib` entry keys)
//! must be unique across every file of a compiled project. This crate finds
//! the ones that are not and reports each offending declaration with the
//! exact span of its name.
//!
//! Features:
//! - Project-wide scan producing a per-namespace duplicate set
//! - Per-document diagnostics anchored to the identifier text only
//! - Namespaces keep labels and bibliography keys apart, while `\bibitem`
//!   commands and `.bib` entries collide with each other
//! - Configurable declaration commands (TOML or JSON)
//!
//! Parsing is not done here. Callers expose parsed files through
//! [`SourceFile`], or load a JSON [`Project`] snapshot.
//!
//! # Example
//!
//! ```
//! use imprint_lint::{Command, Document, DuplicateLabelInspection};
//!
//! let main = Document::new("main.tex")
//!     .with_command(Command::new("\\label", 0).with_parameter("eq1"));
//! let appendix = Document::new("appendix.tex")
//!     .with_command(Command::new("\\label", 40).with_parameter("eq1"));
//! let project = [main, appendix];
//!
//! let inspection = DuplicateLabelInspection::default();
//! let diagnostics = inspection.inspect_file(&project, &project[0], false);
//! assert_eq!(diagnostics[0].message, "Duplicate label 'eq1'");
//! ```

pub mod config;
pub mod declaration;
pub mod emitter;
pub mod inspection;
pub mod project;
pub mod scanner;

pub use config::{ConfigError, LintConfig};
pub use declaration::{
    declarations, BibtexId, BibtexIdNode, Command, CommandNode, Declaration, Document, Namespace,
    SourceFile, SourceLocation, TextRange,
};
pub use emitter::{duplicate_message, emit, emit_into, Diagnostic, DiagnosticSink, Severity};
pub use inspection::{DuplicateLabelInspection, InsightGroup};
pub use project::{Project, ProjectError};
pub use scanner::{scan, DuplicateSet};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
