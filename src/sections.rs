//! Response sectionizer
//!
//! Best-effort splitting of oracle free text into labeled sections by
//! case-insensitive header detection. The oracle output carries no
//! structural guarantees, so everything here is a textual heuristic: when
//! no recognized header is present the whole response degrades to a
//! single-line fallback, never an error.

mod headers;
mod sectionizer;

pub use headers::SectionKey;
pub use sectionizer::{FALLBACK_MAX_CHARS, MAX_RELATED_CHIPS, SectionMap, sectionize};

#[cfg(test)]
#[path = "sections/headers_tests.rs"]
mod headers_tests;
