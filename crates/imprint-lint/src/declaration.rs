//! Identifier declarations and the document model they are read from
//!
//! Parsing happens elsewhere. A parsed file is exposed through [`SourceFile`],
//! which yields markup commands ([`CommandNode`]) and bibliography entry keys
//! ([`BibtexIdNode`]). [`Document`] is a plain owned implementation used by
//! project snapshots and tests.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::config::LintConfig;

/// Partition of the identifier space within which names must be unique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Namespace {
    /// `\label` and any configured aliases
    Label,
    /// `\bibitem` commands together with `.bib` entry keys
    Bibitem,
}

impl Namespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Bibitem => "bibitem",
        }
    }

    /// Noun used in diagnostic messages
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Bibitem => "bibliography key",
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A span of source text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct TextRange {
    pub start: u32,
    pub length: u32,
}

impl TextRange {
    pub fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    /// Exclusive end offset
    pub fn end(&self) -> u32 {
        self.start.saturating_add(self.length)
    }

    /// The same range moved right by `offset`
    pub fn shift_right(&self, offset: u32) -> Self {
        Self::new(self.start.saturating_add(offset), self.length)
    }

    pub fn as_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end() as usize
    }
}

/// A markup command as produced by the document parser
pub trait CommandNode {
    /// Command token including the backslash, e.g. `\label`
    fn name(&self) -> Option<&str>;

    /// Text of the `index`-th required (braced) argument
    fn required_parameter(&self, index: usize) -> Option<&str>;

    /// Offset of the command token within its document
    fn offset(&self) -> u32;
}

/// A bibliography entry key as produced by the `.bib` parser
pub trait BibtexIdNode {
    /// The entry key, e.g. `smith2024` in `@article{smith2024,`
    fn id_name(&self) -> Option<&str>;

    /// Entry type token including the marker, e.g. `@article`
    fn entry_token(&self) -> Option<&str>;

    /// Offset of the entry's marker within its document
    fn offset(&self) -> u32;
}

/// A parsed file belonging to a project
pub trait SourceFile {
    type Command: CommandNode;
    type BibtexId: BibtexIdNode;

    /// Path identifying this file within its project
    fn path(&self) -> &str;

    fn commands(&self) -> &[Self::Command];

    fn bibtex_ids(&self) -> &[Self::BibtexId];
}

/// Where a declared name sits in its document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation<'a> {
    pub document: &'a str,
    /// Start of the declaring command or entry
    pub anchor: u32,
    /// Span of the name, relative to `anchor`. `None` when the declaring
    /// keyword is unknown and the name cannot be placed.
    pub range: Option<TextRange>,
}

impl SourceLocation<'_> {
    pub fn absolute_range(&self) -> Option<TextRange> {
        self.range.map(|range| range.shift_right(self.anchor))
    }
}

/// A single occurrence of an identifier being introduced.
///
/// Equality and hashing consider only the namespace and the name; two
/// declarations at different places with the same key collide.
#[derive(Debug, Clone, Copy)]
pub struct Declaration<'a> {
    pub namespace: Namespace,
    pub name: &'a str,
    pub location: SourceLocation<'a>,
}

impl<'a> Declaration<'a> {
    /// Build a declaration whose name follows `keyword` and one separator
    /// character, as in `\label{name}` or `@article{name,`.
    pub fn new(
        namespace: Namespace,
        name: &'a str,
        document: &'a str,
        anchor: u32,
        keyword: &str,
    ) -> Self {
        let start = text_len(keyword).saturating_add(1);
        Self {
            namespace,
            name,
            location: SourceLocation {
                document,
                anchor,
                range: Some(TextRange::new(start, text_len(name))),
            },
        }
    }

    /// A declaration counted for uniqueness but with no known name span.
    pub fn unplaced(namespace: Namespace, name: &'a str, document: &'a str, anchor: u32) -> Self {
        Self {
            namespace,
            name,
            location: SourceLocation {
                document,
                anchor,
                range: None,
            },
        }
    }

    pub fn key(&self) -> (Namespace, &'a str) {
        (self.namespace, self.name)
    }
}

impl PartialEq for Declaration<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Declaration<'_> {}

impl Hash for Declaration<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

fn text_len(text: &str) -> u32 {
    u32::try_from(text.len()).unwrap_or(u32::MAX)
}

/// Every identifier declared in `file`, in source order.
///
/// Commands are kept only when `config` maps their name to a namespace.
/// Declarations without a name are skipped.
pub fn declarations<'a, F: SourceFile>(file: &'a F, config: &LintConfig) -> Vec<Declaration<'a>> {
    let path = file.path();
    let mut found = Vec::new();

    for command in file.commands() {
        let Some(keyword) = command.name() else {
            continue;
        };
        let Some(namespace) = config.namespace_of(keyword) else {
            continue;
        };
        match command.required_parameter(0).filter(|name| !name.is_empty()) {
            Some(name) => found.push(Declaration::new(
                namespace,
                name,
                path,
                command.offset(),
                keyword,
            )),
            None => tracing::trace!(
                "Skipping {} without a name in {} at {}",
                keyword,
                path,
                command.offset()
            ),
        }
    }

    for id in file.bibtex_ids() {
        let Some(name) = id.id_name().filter(|name| !name.is_empty()) else {
            tracing::trace!("Skipping entry without a key in {} at {}", path, id.offset());
            continue;
        };
        match id.entry_token().filter(|token| !token.is_empty()) {
            Some(token) => found.push(Declaration::new(
                Namespace::Bibitem,
                name,
                path,
                id.offset(),
                token,
            )),
            None => {
                tracing::trace!("Entry '{}' in {} at {} has no type token", name, path, id.offset());
                found.push(Declaration::unplaced(Namespace::Bibitem, name, path, id.offset()));
            }
        }
    }

    found.sort_by_key(|declaration| declaration.location.anchor);
    found
}

/// An owned markup command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Command {
    #[serde(default)]
    pub name: Option<String>,
    pub offset: u32,
    #[serde(default)]
    pub required_parameters: Vec<Option<String>>,
}

impl Command {
    pub fn new(name: impl Into<String>, offset: u32) -> Self {
        Self {
            name: Some(name.into()),
            offset,
            required_parameters: Vec::new(),
        }
    }

    /// Append a required argument
    pub fn with_parameter(mut self, value: impl Into<String>) -> Self {
        self.required_parameters.push(Some(value.into()));
        self
    }
}

impl CommandNode for Command {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn required_parameter(&self, index: usize) -> Option<&str> {
        self.required_parameters.get(index)?.as_deref()
    }

    fn offset(&self) -> u32 {
        self.offset
    }
}

/// An owned bibliography entry key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct BibtexId {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub entry_token: Option<String>,
    pub offset: u32,
}

impl BibtexId {
    pub fn new(entry_token: impl Into<String>, name: impl Into<String>, offset: u32) -> Self {
        Self {
            name: Some(name.into()),
            entry_token: Some(entry_token.into()),
            offset,
        }
    }
}

impl BibtexIdNode for BibtexId {
    fn id_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn entry_token(&self) -> Option<&str> {
        self.entry_token.as_deref()
    }

    fn offset(&self) -> u32 {
        self.offset
    }
}

/// An owned parsed document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Document {
    pub path: String,
    #[serde(default)]
    pub commands: Vec<Command>,
    #[serde(default)]
    pub bibtex_ids: Vec<BibtexId>,
}

impl Document {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn with_bibtex_id(mut self, id: BibtexId) -> Self {
        self.bibtex_ids.push(id);
        self
    }
}

impl SourceFile for Document {
    type Command = Command;
    type BibtexId = BibtexId;

    fn path(&self) -> &str {
        &self.path
    }

    fn commands(&self) -> &[Command] {
        &self.commands
    }

    fn bibtex_ids(&self) -> &[BibtexId] {
        &self.bibtex_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_only_declaration_commands_are_collected() {
        let doc = Document::new("main.tex")
            .with_command(Command::new("\\label", 0).with_parameter("eq1"))
            .with_command(Command::new("\\ref", 20).with_parameter("eq1"))
            .with_command(Command::new("\\bibitem", 40).with_parameter("knuth84"))
            .with_command(Command::new("\\section", 60).with_parameter("Intro"));

        let found = declarations(&doc, &LintConfig::default());
        let keys: Vec<_> = found.iter().map(|d| d.key()).collect();
        assert_eq!(
            keys,
            vec![(Namespace::Label, "eq1"), (Namespace::Bibitem, "knuth84")]
        );
    }

    #[test]
    fn test_unnamed_declarations_are_skipped() {
        let doc = Document::new("main.tex")
            .with_command(Command::new("\\label", 0))
            .with_command(Command::new("\\label", 10).with_parameter(""))
            .with_command(Command {
                name: None,
                offset: 20,
                required_parameters: vec![Some("eq1".into())],
            })
            .with_bibtex_id(BibtexId {
                name: None,
                entry_token: Some("@misc".into()),
                offset: 30,
            });

        assert!(declarations(&doc, &LintConfig::default()).is_empty());
    }

    #[test]
    fn test_name_range_skips_keyword_and_separator() {
        let doc = Document::new("main.tex")
            .with_command(Command::new("\\label", 100).with_parameter("fig:plot"));

        let found = declarations(&doc, &LintConfig::default());
        let location = found[0].location;
        assert_eq!(location.anchor, 100);
        assert_eq!(location.range, Some(TextRange::new(7, 8)));
        assert_eq!(location.absolute_range(), Some(TextRange::new(107, 8)));
    }

    #[test]
    fn test_bibtex_range_skips_entry_token() {
        let doc = Document::new("refs.bib").with_bibtex_id(BibtexId::new("@article", "ref1", 5));

        let found = declarations(&doc, &LintConfig::default());
        assert_eq!(found[0].namespace, Namespace::Bibitem);
        // "@article{" is nine characters
        assert_eq!(found[0].location.range, Some(TextRange::new(9, 4)));
        assert_eq!(found[0].location.absolute_range().map(|r| r.as_range()), Some(14..18));
    }

    #[test]
    fn test_entry_without_type_token_has_no_range() {
        let doc = Document::new("refs.bib").with_bibtex_id(BibtexId {
            name: Some("ref1".into()),
            entry_token: None,
            offset: 0,
        });

        let found = declarations(&doc, &LintConfig::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key(), (Namespace::Bibitem, "ref1"));
        assert_eq!(found[0].location.range, None);
    }

    #[test]
    fn test_sources_merged_in_offset_order() {
        let doc = Document::new("mixed.tex")
            .with_command(Command::new("\\label", 50).with_parameter("late"))
            .with_bibtex_id(BibtexId::new("@book", "early", 10));

        let names: Vec<_> = declarations(&doc, &LintConfig::default())
            .iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["early", "late"]);
    }

    #[test]
    fn test_equality_ignores_location() {
        let a = Declaration::new(Namespace::Label, "eq1", "a.tex", 0, "\\label");
        let b = Declaration::new(Namespace::Label, "eq1", "b.tex", 99, "\\label");
        let c = Declaration::new(Namespace::Bibitem, "eq1", "a.tex", 0, "\\bibitem");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_document_snapshot_json() {
        let json = r#"{
            "path": "main.tex",
            "commands": [
                {"name": "\\label", "offset": 12, "required_parameters": ["eq1"]}
            ]
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(
            doc,
            Document::new("main.tex").with_command(Command::new("\\label", 12).with_parameter("eq1"))
        );
        assert!(doc.bibtex_ids.is_empty());
    }
}
