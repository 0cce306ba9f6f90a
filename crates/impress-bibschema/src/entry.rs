//! BibTeX entry type definitions
//!
//! Each entry type lists the fields a well-formed entry must carry and the
//! fields it may carry in addition. `@string` and `@preamble` are directives
//! rather than records, so both of their lists are empty.

use serde::Serialize;

use crate::field::EntryField::{self, *};

/// Required and optional fields of a single entry type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntrySchema {
    /// Canonical lowercase token, without the leading `@`
    pub token: &'static str,
    pub description: &'static str,
    pub required: &'static [EntryField],
    pub optional: &'static [EntryField],
}

impl EntrySchema {
    /// Whether an entry of this type must carry `field`
    pub fn requires(&self, field: EntryField) -> bool {
        self.required.contains(&field)
    }

    /// Whether `field` is part of this type's contract, required or optional
    pub fn permits(&self, field: EntryField) -> bool {
        self.requires(field) || self.optional.contains(&field)
    }

    /// Required fields followed by optional fields
    pub fn fields(&self) -> impl Iterator<Item = EntryField> + '_ {
        self.required.iter().chain(self.optional.iter()).copied()
    }

    /// `@string` and `@preamble` define no fields at all
    pub fn is_structural(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }
}

/// Every known entry type, in documentation order.
pub static ENTRY_TYPES: &[EntrySchema] = &[
    // Regular entry types
    EntrySchema {
        token: "article",
        description: "An article from a journal or magazine.",
        required: &[Author, Title, Journal, Year],
        optional: &[Number, Pages, Month, Note, Volume, Key],
    },
    EntrySchema {
        token: "book",
        description: "A book with an explicit publisher.",
        required: &[Author, Title, Publisher, Year],
        optional: &[Edition, Volume, Number, Series, Address, Month, Note, Key],
    },
    EntrySchema {
        token: "booklet",
        description: "A work that is printed and bound, but without a named publisher or sponsoring institution.",
        required: &[Title],
        optional: &[Author, HowPublished, Address, Month, Year, Note, Key],
    },
    EntrySchema {
        token: "conference",
        description: "The same as inproceedings, included for Scribe compatibility.",
        required: &[Author, Title, BookTitle, Year],
        optional: &[
            Editor,
            Volume,
            Number,
            Series,
            Pages,
            Address,
            Month,
            Organization,
            Publisher,
            Note,
            Key,
        ],
    },
    EntrySchema {
        token: "inbook",
        description: "A part of a book, usually untitled. May be a chapter (or section, etc.) and/or a range of pages.",
        required: &[Author, Title, Pages, Publisher, Year],
        optional: &[
            Editor, Chapter, Volume, Number, Series, Type, Address, Edition, Month, Note, Key,
        ],
    },
    EntrySchema {
        token: "incollection",
        description: "A part of a book having its own title.",
        required: &[Author, Title, BookTitle, Publisher, Year],
        optional: &[
            Editor, Volume, Number, Series, Type, Chapter, Pages, Address, Edition, Month, Note,
            Key,
        ],
    },
    EntrySchema {
        token: "inproceedings",
        description: "An article in a conference proceedings.",
        required: &[Author, Title, BookTitle, Year],
        optional: &[
            Editor,
            Volume,
            Number,
            Series,
            Pages,
            Address,
            Month,
            Organization,
            Publisher,
            Note,
            Key,
        ],
    },
    EntrySchema {
        token: "manual",
        description: "Technical documentation.",
        required: &[Title],
        optional: &[Author, Organization, Address, Edition, Month, Year, Note, Key],
    },
    EntrySchema {
        token: "masterthesis",
        description: "A Master's thesis.",
        required: &[Author, Title, School, Year],
        optional: &[Type, Address, Month, Note, Key],
    },
    EntrySchema {
        token: "misc",
        description: "For use when nothing else fits.",
        required: &[],
        optional: &[Author, Title, HowPublished, Month, Year, Note, Key],
    },
    EntrySchema {
        token: "phdthesis",
        description: "A Ph.D. thesis.",
        required: &[Author, Title, School, Year],
        optional: &[Type, Address, Month, Note, Key],
    },
    EntrySchema {
        token: "proceedings",
        description: "The proceedings of a conference.",
        required: &[Title, Year],
        optional: &[
            Editor,
            Volume,
            Number,
            Series,
            Address,
            Month,
            Publisher,
            Organization,
            Note,
            Key,
        ],
    },
    EntrySchema {
        token: "techreport",
        description: "A report published by a school or other institution, usually numbered within a series.",
        required: &[Author, Title, Institution, Year],
        optional: &[Type, Number, Address, Month, Note, Key],
    },
    EntrySchema {
        token: "unpublished",
        description: "A document having an author and title, but not formally published.",
        required: &[Author, Title, Note],
        optional: &[Month, Year, Key],
    },
    // Special entries
    EntrySchema {
        token: "string",
        description: "Define a string to be used later on in the bibliography.",
        required: &[],
        optional: &[],
    },
    EntrySchema {
        token: "preamble",
        description: "LaTeX commands that BibTeX copies into the generated .bbl file.",
        required: &[],
        optional: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::EntryField::{Journal, Pages, School};
    use std::collections::HashSet;

    #[test]
    fn test_tokens_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for entry in ENTRY_TYPES {
            assert_eq!(entry.token, entry.token.to_lowercase());
            assert!(!entry.token.starts_with('@'));
            assert!(seen.insert(entry.token), "duplicate token {}", entry.token);
        }
    }

    #[test]
    fn test_no_field_listed_twice() {
        for entry in ENTRY_TYPES {
            let mut seen = HashSet::new();
            for field in entry.fields() {
                assert!(
                    seen.insert(field),
                    "{} lists '{}' more than once",
                    entry.token,
                    field
                );
            }
        }
    }

    #[test]
    fn test_article_contract() {
        let article = &ENTRY_TYPES[0];
        assert_eq!(article.token, "article");
        assert!(article.requires(Journal));
        assert!(!article.requires(Pages));
        assert!(article.permits(Pages));
        assert!(!article.permits(School));
        assert!(!article.is_structural());
    }

    #[test]
    fn test_only_directives_are_structural() {
        let structural: Vec<_> = ENTRY_TYPES
            .iter()
            .filter(|e| e.is_structural())
            .map(|e| e.token)
            .collect();
        assert_eq!(structural, vec!["string", "preamble"]);
    }
}
