//! Static term catalog
//!
//! The fixed table of recognized medical terms, each tagged with a body
//! system and a display glyph. Loaded once at startup and never mutated.

mod entry;
mod table;

pub use entry::{BodySystem, TermEntry};
pub use table::{SystemFilter, TermCatalog};
