use super::matcher::similarity;
use crate::catalog::{SystemFilter, TermCatalog};

/// Default number of suggestions offered to the user
pub const DEFAULT_LIMIT: usize = 6;

/// Minimum similarity ratio for a fuzzy candidate to qualify
///
/// Deliberately low so typos and partial recall still surface candidates;
/// ranking pushes the weak ones to the bottom and the limit cuts them off.
pub const FUZZY_CUTOFF: f64 = 0.1;

/// Suggest catalog terms for a partial query
///
/// Exact-prefix matches come first in catalog (alphabetical) order, then
/// fuzzy matches by descending similarity, ties in catalog order. The
/// result is deduplicated and truncated to `limit`. An empty or
/// whitespace-only query yields no suggestions.
pub fn suggest<'a>(
    query: &str,
    catalog: &'a TermCatalog,
    filter: &SystemFilter,
    limit: usize,
) -> Vec<&'a str> {
    let query = query.trim().to_ascii_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    // The filter is applied before matching, so scoring never sees
    // excluded candidates.
    let eligible: Vec<&str> = catalog.eligible(filter).map(|entry| entry.name).collect();

    let mut out: Vec<&'a str> = eligible
        .iter()
        .copied()
        .filter(|name| name.starts_with(&query))
        .collect();

    let mut fuzzy: Vec<(&str, f64)> = eligible
        .iter()
        .copied()
        .map(|name| (name, similarity(&query, name)))
        .filter(|(_, score)| *score > FUZZY_CUTOFF)
        .collect();
    // Stable sort keeps catalog order among equal scores
    fuzzy.sort_by(|a, b| b.1.total_cmp(&a.1));

    for (name, _) in fuzzy {
        if !out.contains(&name) {
            out.push(name);
        }
    }

    out.truncate(limit);
    log::debug!("{} suggestions for {:?}", out.len(), query);
    out
}
