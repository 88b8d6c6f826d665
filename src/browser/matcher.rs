use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Fuzzy matcher over catalog term names
pub struct CatalogMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for CatalogMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogMatcher").finish_non_exhaustive()
    }
}

impl Default for CatalogMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Filter term names against a query, best matches first
    ///
    /// Returns indices into `names`. An empty query keeps everything in
    /// catalog order.
    pub fn filter(&self, query: &str, names: &[&str]) -> Vec<usize> {
        if query.is_empty() {
            return (0..names.len()).collect();
        }

        // Split query into terms (space-separated, like fzf)
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return (0..names.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = names
            .iter()
            .enumerate()
            .filter_map(|(idx, name)| {
                // All terms must match (AND logic)
                let mut total_score: i64 = 0;
                for term in &terms {
                    match self.matcher.fuzzy_match(name, term) {
                        Some(score) => total_score += score,
                        None => return None, // Term didn't match, exclude entry
                    }
                }
                Some((idx, total_score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}
