//! Entry type registry integration tests

use impress_bibschema::{all_entry_types, entry_tokens, lookup, try_lookup, EntryField};
use rstest::rstest;

// === Normalization ===

#[rstest]
#[case("article")]
#[case("Article")]
#[case("ARTICLE")]
#[case("@article")]
#[case("@ARTICLE")]
#[case("@Article")]
fn test_article_spellings_resolve(#[case] token: &str) {
    let schema = lookup(token).expect("article should resolve");
    assert_eq!(schema.token, "article");
    assert!(std::ptr::eq(schema, lookup("article").unwrap()));
}

#[rstest]
#[case("@@article")]
#[case("notaREALtype")]
#[case("articles")]
#[case("artic")]
#[case("mastersthesis")]
#[case("")]
fn test_unrecognized_tokens(#[case] token: &str) {
    assert!(lookup(token).is_none());
    assert!(try_lookup(token).is_err());
}

// === Contracts ===

#[rstest]
#[case("string")]
#[case("@STRING")]
#[case("preamble")]
#[case("@Preamble")]
fn test_directives_have_empty_field_lists(#[case] token: &str) {
    let schema = lookup(token).unwrap();
    assert!(schema.required.is_empty());
    assert!(schema.optional.is_empty());
    assert!(schema.is_structural());
}

#[rstest]
#[case("article", &[EntryField::Author, EntryField::Title, EntryField::Journal, EntryField::Year])]
#[case("booklet", &[EntryField::Title])]
#[case("proceedings", &[EntryField::Title, EntryField::Year])]
#[case("unpublished", &[EntryField::Author, EntryField::Title, EntryField::Note])]
fn test_required_fields(#[case] token: &str, #[case] expected: &[EntryField]) {
    assert_eq!(lookup(token).unwrap().required, expected);
}

#[test]
fn test_misc_fields() {
    assert!(lookup("misc").unwrap().required.is_empty());

    let optional: Vec<&str> = lookup("misc")
        .unwrap()
        .optional
        .iter()
        .map(|f| f.as_str())
        .collect();
    assert_eq!(
        optional,
        vec!["author", "title", "howpublished", "month", "year", "note", "key"]
    );
}

#[test]
fn test_conference_mirrors_inproceedings() {
    let conference = lookup("conference").unwrap();
    let inproceedings = lookup("inproceedings").unwrap();
    assert_eq!(conference.required, inproceedings.required);
    assert_eq!(conference.optional, inproceedings.optional);
    assert!(conference.permits(EntryField::Organization));
}

// === Enumeration ===

#[test]
fn test_enumeration_order_and_size() {
    let tokens: Vec<&str> = entry_tokens().collect();
    assert_eq!(tokens.len(), 16);
    assert_eq!(tokens.first(), Some(&"article"));
    assert_eq!(&tokens[tokens.len() - 2..], &["string", "preamble"]);
    assert_eq!(all_entry_types().len(), tokens.len());
}

#[test]
fn test_concurrent_lookups() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                all_entry_types()
                    .iter()
                    .all(|schema| lookup(&format!("@{}", schema.token.to_uppercase())) == Some(schema))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
