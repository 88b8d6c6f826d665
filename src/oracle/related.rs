//! Related-terms lookup
//!
//! A word-overlap pass against the catalog comes first; when that yields
//! too few hits, one short oracle round trip tops the list up. Oracle
//! failures here degrade to the local list, since related terms are a
//! side-pane nicety rather than the main result.

use std::collections::HashSet;

use super::prompt;
use super::provider::OracleProvider;
use crate::catalog::TermCatalog;

/// Maximum related terms returned
pub const MAX_RELATED: usize = 6;

/// Below this many local hits the oracle is consulted
const LOCAL_HIT_TARGET: usize = 4;

/// Find terms related to `term`
///
/// Pass `None` as provider to stay offline (local word-overlap only).
/// Oracle-sourced candidates are kept only when they exist in the catalog,
/// so every returned term is clickable.
pub fn related_terms(
    term: &str,
    catalog: &TermCatalog,
    provider: Option<&OracleProvider>,
) -> Vec<String> {
    let needle = term.trim().to_ascii_lowercase();
    let words: HashSet<&str> = needle.split_whitespace().collect();

    let mut related: Vec<String> = catalog
        .names()
        .filter(|name| *name != needle)
        .filter(|name| name.split_whitespace().any(|word| words.contains(word)))
        .map(str::to_string)
        .collect();

    if related.len() < LOCAL_HIT_TARGET
        && let Some(provider) = provider
    {
        match provider.complete(prompt::RELATED_SYSTEM_PROMPT, &prompt::related_prompt(&needle)) {
            Ok(text) => {
                for candidate in text.replace('\n', " ").split(',') {
                    let candidate = candidate.trim().to_ascii_lowercase();
                    if !candidate.is_empty()
                        && catalog.get(&candidate).is_some()
                        && !related.contains(&candidate)
                    {
                        related.push(candidate);
                    }
                }
            }
            Err(e) => log::debug!("related-terms oracle lookup failed: {e}"),
        }
    }

    related.truncate(MAX_RELATED);
    related
}
