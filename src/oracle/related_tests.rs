//! Tests for the related-terms lookup (offline pass)

use super::related::{MAX_RELATED, related_terms};
use crate::catalog::{BodySystem, TermCatalog, TermEntry};

fn word_catalog() -> TermCatalog {
    TermCatalog::from_entries(&[
        TermEntry {
            name: "deep vein thrombosis",
            system: BodySystem::Cardiovascular,
            icon: "🫀",
        },
        TermEntry {
            name: "vein graft",
            system: BodySystem::Surgical,
            icon: "🔪",
        },
        TermEntry {
            name: "deep tissue injury",
            system: BodySystem::Musculoskeletal,
            icon: "🦵",
        },
        TermEntry {
            name: "pneumonia",
            system: BodySystem::Respiratory,
            icon: "🫁",
        },
    ])
}

#[test]
fn test_word_overlap_finds_sharing_terms() {
    let related = related_terms("deep vein thrombosis", &word_catalog(), None);
    assert!(related.contains(&"vein graft".to_string()));
    assert!(related.contains(&"deep tissue injury".to_string()));
    assert!(!related.contains(&"pneumonia".to_string()));
}

#[test]
fn test_term_itself_is_excluded() {
    let related = related_terms("deep vein thrombosis", &word_catalog(), None);
    assert!(!related.contains(&"deep vein thrombosis".to_string()));
}

#[test]
fn test_lookup_is_case_insensitive() {
    let related = related_terms("  Deep Vein Thrombosis ", &word_catalog(), None);
    assert!(related.contains(&"vein graft".to_string()));
}

#[test]
fn test_no_overlap_and_no_provider_yields_empty() {
    let related = related_terms("pneumonia", &TermCatalog::builtin(), None);
    assert!(related.is_empty());
}

#[test]
fn test_result_is_capped() {
    let entries: Vec<TermEntry> = [
        "vein one", "vein two", "vein three", "vein four", "vein five", "vein six", "vein seven",
    ]
    .iter()
    .map(|name| TermEntry {
        // Leaked once per test run, not a production path
        name: Box::leak(name.to_string().into_boxed_str()),
        system: BodySystem::Cardiovascular,
        icon: "🫀",
    })
    .collect();

    let catalog = TermCatalog::from_entries(&entries);
    let related = related_terms("vein zero", &catalog, None);
    assert_eq!(related.len(), MAX_RELATED);
}
