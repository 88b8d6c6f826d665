use std::collections::BTreeMap;

use super::headers::{HEADER_TABLE, SectionKey, all_synonyms};

/// Maximum length of the fallback definition, in characters
pub const FALLBACK_MAX_CHARS: usize = 800;

/// Callers display at most this many related-term chips
pub const MAX_RELATED_CHIPS: usize = 8;

/// Sections extracted from one oracle response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: BTreeMap<SectionKey, String>,
    fallback_used: bool,
}

impl SectionMap {
    pub fn get(&self, key: SectionKey) -> Option<&str> {
        self.sections.get(&key).map(String::as_str)
    }

    /// True when no recognized header was found and the map holds only
    /// the first-line fallback definition
    pub fn fallback_used(&self) -> bool {
        self.fallback_used
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Extracted sections in display order
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &str)> {
        self.sections
            .iter()
            .map(|(key, text)| (*key, text.as_str()))
    }

    /// The related section split into a chip list: trimmed, non-empty
    /// fragments separated by commas or newlines
    pub fn related_chips(&self) -> Vec<String> {
        let Some(chunk) = self.get(SectionKey::Related) else {
            return Vec::new();
        };
        chunk
            .replace('\n', ",")
            .split(',')
            .map(str::trim)
            .filter(|chip| !chip.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Split oracle free text into labeled sections
///
/// Headers are detected case-insensitively as `"<synonym>:"`. For a
/// repeated header only the last occurrence counts, and each chunk is cut
/// at the next recognized header so sections never bleed into each other.
/// Text with no recognized headers at all degrades to a fallback map whose
/// only entry is the first line, capped at [`FALLBACK_MAX_CHARS`].
pub fn sectionize(raw: &str) -> SectionMap {
    // ASCII lowering keeps byte offsets identical, so spans found in the
    // working copy can be taken from the original with casing intact.
    let lowered = raw.to_ascii_lowercase();
    let mut sections = BTreeMap::new();

    for (key, synonyms) in HEADER_TABLE {
        for synonym in *synonyms {
            let marker = format!("{synonym}:");
            let Some(found) = lowered.rfind(&marker) else {
                continue;
            };

            let start = found + marker.len();
            let end = match earliest_marker(&lowered[start..]) {
                Some(offset) => start + offset,
                None => lowered.len(),
            };
            sections.insert(*key, raw[start..end].trim().to_string());
            // Most specific synonym wins
            break;
        }
    }

    if sections.is_empty() {
        log::debug!("no section headers found, using first-line fallback");
        let first_line = raw.trim().lines().next().unwrap_or_default();
        let fallback: String = first_line.chars().take(FALLBACK_MAX_CHARS).collect();
        sections.insert(SectionKey::Definition, fallback);
        return SectionMap {
            sections,
            fallback_used: true,
        };
    }

    SectionMap {
        sections,
        fallback_used: false,
    }
}

/// Position of the first recognized header marker in `text`, if any
fn earliest_marker(text: &str) -> Option<usize> {
    all_synonyms()
        .filter_map(|synonym| text.find(&format!("{synonym}:")))
        .min()
}
