//! BibTeX field vocabulary

use serde::{Deserialize, Serialize};

/// A standard BibTeX field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum EntryField {
    Address,
    Annote,
    Author,
    BookTitle,
    Chapter,
    CrossRef,
    Edition,
    Editor,
    HowPublished,
    Institution,
    Journal,
    Key,
    Month,
    Note,
    Number,
    Organization,
    Pages,
    Publisher,
    School,
    Series,
    Title,
    Type,
    Volume,
    Year,
}

impl EntryField {
    /// Every field, in alphabetical token order
    pub const ALL: [EntryField; 24] = [
        Self::Address,
        Self::Annote,
        Self::Author,
        Self::BookTitle,
        Self::Chapter,
        Self::CrossRef,
        Self::Edition,
        Self::Editor,
        Self::HowPublished,
        Self::Institution,
        Self::Journal,
        Self::Key,
        Self::Month,
        Self::Note,
        Self::Number,
        Self::Organization,
        Self::Pages,
        Self::Publisher,
        Self::School,
        Self::Series,
        Self::Title,
        Self::Type,
        Self::Volume,
        Self::Year,
    ];

    /// Canonical field name as written in a `.bib` file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Annote => "annote",
            Self::Author => "author",
            Self::BookTitle => "booktitle",
            Self::Chapter => "chapter",
            Self::CrossRef => "crossref",
            Self::Edition => "edition",
            Self::Editor => "editor",
            Self::HowPublished => "howpublished",
            Self::Institution => "institution",
            Self::Journal => "journal",
            Self::Key => "key",
            Self::Month => "month",
            Self::Note => "note",
            Self::Number => "number",
            Self::Organization => "organization",
            Self::Pages => "pages",
            Self::Publisher => "publisher",
            Self::School => "school",
            Self::Series => "series",
            Self::Title => "title",
            Self::Type => "type",
            Self::Volume => "volume",
            Self::Year => "year",
        }
    }

    /// Human-readable explanation, suitable for completion popups
    pub fn description(&self) -> &'static str {
        match self {
            Self::Address => "Publisher's address (usually just the city, but can be the full address for lesser-known publishers).",
            Self::Annote => "An annotation for annotated bibliography styles.",
            Self::Author => "The name(s) of the author(s), separated by 'and'.",
            Self::BookTitle => "The title of the book, if only part of it is being cited.",
            Self::Chapter => "The chapter number.",
            Self::CrossRef => "The key of the cross-referenced entry.",
            Self::Edition => "The edition of a book, long form (such as \"First\" or \"Second\").",
            Self::Editor => "The name(s) of the editor(s).",
            Self::HowPublished => "How it was published, if the publishing method is nonstandard.",
            Self::Institution => "The institution that was involved in the publishing, but not necessarily the publisher.",
            Self::Journal => "The journal or magazine the work was published in.",
            Self::Key => "A hidden field used for specifying or overriding the alphabetical order of entries.",
            Self::Month => "The month of publication (or, if unpublished, the month of creation).",
            Self::Note => "Miscellaneous extra information.",
            Self::Number => "The issue number of a journal, magazine, or tech-report.",
            Self::Organization => "The conference sponsor.",
            Self::Pages => "Page numbers, separated either by commas or double-hyphens.",
            Self::Publisher => "The publisher's name.",
            Self::School => "The school where the thesis was written.",
            Self::Series => "The series of books the book was published in.",
            Self::Title => "The title of the work.",
            Self::Type => "The field overriding the default type of publication.",
            Self::Volume => "The volume of a journal or multi-volume book.",
            Self::Year => "The year of publication (or, if unpublished, the year of creation).",
        }
    }

    /// Parse a field name (case-insensitive)
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.to_lowercase();
        Self::ALL.into_iter().find(|f| f.as_str() == token)
    }
}

impl std::fmt::Display for EntryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
