//! Tests for the catalog fuzzy matcher

use super::matcher::CatalogMatcher;

const NAMES: &[&str] = &[
    "anaphylaxis",
    "appendicitis",
    "myocardial infarction",
    "pulmonary embolism",
    "stroke",
];

#[test]
fn test_empty_query_returns_all_indices() {
    let matcher = CatalogMatcher::new();
    let result = matcher.filter("", NAMES);
    assert_eq!(result, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_fuzzy_subsequence_matches() {
    let matcher = CatalogMatcher::new();
    let result = matcher.filter("mcrd", NAMES);
    assert!(result.contains(&2));
}

#[test]
fn test_exact_word_scores_highest() {
    let matcher = CatalogMatcher::new();
    let result = matcher.filter("stroke", NAMES);
    assert_eq!(result.first(), Some(&4));
}

#[test]
fn test_multi_word_query_ands_terms() {
    let matcher = CatalogMatcher::new();
    let result = matcher.filter("pulmonary embolism", NAMES);
    assert_eq!(result, vec![3]);
}

#[test]
fn test_no_matches_returns_empty() {
    let matcher = CatalogMatcher::new();
    let result = matcher.filter("qqq", NAMES);
    assert!(result.is_empty());
}

#[test]
fn test_whitespace_only_query_returns_all() {
    let matcher = CatalogMatcher::new();
    let result = matcher.filter("   ", NAMES);
    assert_eq!(result.len(), NAMES.len());
}
