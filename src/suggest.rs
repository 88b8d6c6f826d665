//! Term suggestions
//!
//! As-you-type suggestions over the term catalog: exact-prefix matches
//! first, then fuzzy matches ranked by sequence similarity. Candidates are
//! restricted by the active body-system filter before any matching runs.

mod matcher;
mod suggester;

pub use matcher::similarity;
pub use suggester::{DEFAULT_LIMIT, FUZZY_CUTOFF, suggest};
