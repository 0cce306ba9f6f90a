//! Project-wide duplicate identifier scan
//!
//! A single pass over every declaration of the file set. The first time a
//! name shows up in a namespace it is marked as seen; any later occurrence
//! marks it as duplicated. The result is the same for every ordering of the
//! input.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::config::LintConfig;
use crate::declaration::{declarations, Namespace, SourceFile};

/// Names declared at least twice, per namespace.
///
/// A namespace without duplicates has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DuplicateSet {
    names: BTreeMap<Namespace, BTreeSet<String>>,
}

impl DuplicateSet {
    pub fn contains(&self, namespace: Namespace, name: &str) -> bool {
        self.names
            .get(&namespace)
            .is_some_and(|names| names.contains(name))
    }

    /// Duplicated names in one namespace
    pub fn names(&self, namespace: Namespace) -> Option<&BTreeSet<String>> {
        self.names.get(&namespace)
    }

    /// Namespaces that contain at least one duplicate
    pub fn namespaces(&self) -> impl Iterator<Item = Namespace> + '_ {
        self.names.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Namespace, &str)> + '_ {
        self.names
            .iter()
            .flat_map(|(namespace, names)| names.iter().map(|name| (*namespace, name.as_str())))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of duplicated (namespace, name) pairs
    pub fn len(&self) -> usize {
        self.names.values().map(BTreeSet::len).sum()
    }

    fn insert(&mut self, namespace: Namespace, name: &str) {
        let names = self.names.entry(namespace).or_default();
        if !names.contains(name) {
            names.insert(name.to_string());
        }
    }
}

/// Find every identifier declared more than once within its namespace
/// across `file_set`.
pub fn scan<'a, F: SourceFile + 'a>(
    file_set: impl IntoIterator<Item = &'a F>,
    config: &LintConfig,
) -> DuplicateSet {
    let mut seen: HashMap<Namespace, HashSet<&'a str>> = HashMap::new();
    let mut duplicates = DuplicateSet::default();
    let mut files = 0usize;
    let mut total = 0usize;

    for file in file_set {
        files += 1;
        for declaration in declarations(file, config) {
            total += 1;
            let first = seen
                .entry(declaration.namespace)
                .or_default()
                .insert(declaration.name);
            if !first {
                duplicates.insert(declaration.namespace, declaration.name);
            }
        }
    }

    tracing::debug!(
        "Scanned {} declaration(s) in {} file(s), {} duplicated",
        total,
        files,
        duplicates.len()
    );
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{BibtexId, Command, Document};

    fn label(name: &str, offset: u32) -> Command {
        Command::new("\\label", offset).with_parameter(name)
    }

    fn bibitem(name: &str, offset: u32) -> Command {
        Command::new("\\bibitem", offset).with_parameter(name)
    }

    #[test]
    fn test_duplicate_across_documents() {
        let doc1 = Document::new("doc1.tex")
            .with_command(label("eq1", 0))
            .with_command(label("eq2", 20));
        let doc2 = Document::new("doc2.tex").with_command(label("eq1", 0));

        let duplicates = scan(&[doc1, doc2], &LintConfig::default());
        assert!(duplicates.contains(Namespace::Label, "eq1"));
        assert!(!duplicates.contains(Namespace::Label, "eq2"));
        assert_eq!(duplicates.len(), 1);
        assert!(duplicates.names(Namespace::Bibitem).is_none());
    }

    #[test]
    fn test_bib_ids_share_the_bibitem_namespace() {
        let bib = Document::new("refs.bib")
            .with_bibtex_id(BibtexId::new("@article", "ref1", 0))
            .with_bibtex_id(BibtexId::new("@book", "ref2", 40))
            .with_bibtex_id(BibtexId::new("@misc", "ref1", 80));

        let duplicates = scan([&bib], &LintConfig::default());
        let names: Vec<_> = duplicates.iter().collect();
        assert_eq!(names, vec![(Namespace::Bibitem, "ref1")]);
    }

    #[test]
    fn test_bibitem_collides_with_bib_entry() {
        let tex = Document::new("main.tex").with_command(bibitem("knuth84", 0));
        let bib = Document::new("refs.bib").with_bibtex_id(BibtexId::new("@book", "knuth84", 0));

        let duplicates = scan([&tex, &bib], &LintConfig::default());
        assert!(duplicates.contains(Namespace::Bibitem, "knuth84"));
    }

    #[test]
    fn test_label_does_not_collide_with_bib_key() {
        let tex = Document::new("main.tex")
            .with_command(label("knuth84", 0))
            .with_command(bibitem("other", 30));
        let bib = Document::new("refs.bib").with_bibtex_id(BibtexId::new("@book", "knuth84", 0));

        let duplicates = scan([&tex, &bib], &LintConfig::default());
        assert!(duplicates.is_empty());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let doc = Document::new("main.tex")
            .with_command(label("Eq1", 0))
            .with_command(label("eq1", 20));
        assert!(scan([&doc], &LintConfig::default()).is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let none: [Document; 0] = [];
        assert!(scan(&none, &LintConfig::default()).is_empty());
        assert!(scan([&Document::new("empty.tex")], &LintConfig::default()).is_empty());
    }

    #[test]
    fn test_aliased_label_command() {
        let config = LintConfig {
            label_commands: vec!["\\label".into(), "\\zlabel".into()],
            ..LintConfig::default()
        };
        let doc = Document::new("main.tex")
            .with_command(label("sec:intro", 0))
            .with_command(Command::new("\\zlabel", 40).with_parameter("sec:intro"));

        assert!(scan([&doc], &config).contains(Namespace::Label, "sec:intro"));
        assert!(scan([&doc], &LintConfig::default()).is_empty());
    }

    #[test]
    fn test_serializes_as_namespace_map() {
        let doc = Document::new("main.tex")
            .with_command(label("eq1", 0))
            .with_command(label("eq1", 20));
        let json = serde_json::to_string(&scan([&doc], &LintConfig::default())).unwrap();
        assert_eq!(json, r#"{"label":["eq1"]}"#);
    }
}
