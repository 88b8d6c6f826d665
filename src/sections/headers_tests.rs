//! Tests for the header table

use std::collections::BTreeSet;

use super::headers::{HEADER_TABLE, SectionKey, all_synonyms};

#[test]
fn test_table_covers_every_section_once() {
    let keys: Vec<SectionKey> = HEADER_TABLE.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, SectionKey::ALL.to_vec());
}

#[test]
fn test_synonyms_are_lowercase_and_non_empty() {
    for synonym in all_synonyms() {
        assert!(!synonym.is_empty());
        assert_eq!(synonym, synonym.to_ascii_lowercase());
    }
}

#[test]
fn test_synonyms_are_globally_unique() {
    let synonyms: Vec<&str> = all_synonyms().collect();
    let unique: BTreeSet<&str> = synonyms.iter().copied().collect();
    assert_eq!(synonyms.len(), unique.len());
}

#[test]
fn test_more_specific_synonyms_come_first() {
    // If two synonyms of one key overlap textually, the longer one must be
    // listed first or it could never win.
    for (_, synonyms) in HEADER_TABLE {
        for (i, earlier) in synonyms.iter().enumerate() {
            for later in &synonyms[i + 1..] {
                assert!(
                    !later.contains(earlier) || later.len() <= earlier.len(),
                    "{later:?} is more specific than {earlier:?} but listed after it"
                );
            }
        }
    }
}

#[test]
fn test_display_titles() {
    assert_eq!(SectionKey::Definition.to_string(), "Definition");
    assert_eq!(SectionKey::Related.title(), "Related terms");
    assert!(SectionKey::Management.title().contains("informational only"));
}
