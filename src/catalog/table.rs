use std::collections::BTreeSet;
use std::sync::OnceLock;

use super::entry::{BodySystem, TermEntry};

/// Built-in starter dataset of terms, conditions, and procedures
const BUILT_IN: &[TermEntry] = &[
    TermEntry {
        name: "myocardial infarction",
        system: BodySystem::Cardiovascular,
        icon: "🫀",
    },
    TermEntry {
        name: "stroke",
        system: BodySystem::Neurology,
        icon: "🧠",
    },
    TermEntry {
        name: "appendicitis",
        system: BodySystem::Gastrointestinal,
        icon: "🍽️",
    },
    TermEntry {
        name: "deep vein thrombosis",
        system: BodySystem::Cardiovascular,
        icon: "🫀",
    },
    TermEntry {
        name: "pulmonary embolism",
        system: BodySystem::Respiratory,
        icon: "🫁",
    },
    TermEntry {
        name: "fracture",
        system: BodySystem::Musculoskeletal,
        icon: "🦴",
    },
    TermEntry {
        name: "sprain",
        system: BodySystem::Musculoskeletal,
        icon: "🦵",
    },
    TermEntry {
        name: "hypertension",
        system: BodySystem::Cardiovascular,
        icon: "🫀",
    },
    TermEntry {
        name: "diabetes mellitus",
        system: BodySystem::Endocrine,
        icon: "🧪",
    },
    TermEntry {
        name: "pneumonia",
        system: BodySystem::Respiratory,
        icon: "🫁",
    },
    TermEntry {
        name: "anaphylaxis",
        system: BodySystem::AllergyImmunology,
        icon: "🩺",
    },
    TermEntry {
        name: "concussion",
        system: BodySystem::Neurology,
        icon: "🧠",
    },
    TermEntry {
        name: "gallstones",
        system: BodySystem::Gastrointestinal,
        icon: "🍽️",
    },
    TermEntry {
        name: "cholecystectomy",
        system: BodySystem::Surgical,
        icon: "🔪",
    },
];

/// Ordered, immutable set of catalog terms
///
/// Entries are sorted by name at construction, so iteration order is
/// alphabetical and lookups can binary-search.
#[derive(Debug, Clone)]
pub struct TermCatalog {
    entries: Vec<TermEntry>,
}

impl TermCatalog {
    /// Build a catalog from a slice of entries, sorting by name
    pub fn from_entries(entries: &[TermEntry]) -> Self {
        let mut entries = entries.to_vec();
        entries.sort_by(|a, b| a.name.cmp(b.name));
        entries.dedup_by(|a, b| a.name == b.name);
        Self { entries }
    }

    /// The process-wide built-in catalog
    pub fn builtin() -> &'static TermCatalog {
        static CATALOG: OnceLock<TermCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| TermCatalog::from_entries(BUILT_IN))
    }

    /// Entries in alphabetical order
    pub fn entries(&self) -> impl Iterator<Item = &TermEntry> {
        self.entries.iter()
    }

    /// Term names in alphabetical order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by name, case-insensitively
    pub fn get(&self, name: &str) -> Option<&TermEntry> {
        let wanted = name.trim().to_ascii_lowercase();
        self.entries
            .binary_search_by(|entry| entry.name.cmp(wanted.as_str()))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Entries allowed by the given filter, in catalog order
    pub fn eligible<'a>(&'a self, filter: &'a SystemFilter) -> impl Iterator<Item = &'a TermEntry> {
        self.entries.iter().filter(|entry| filter.allows(entry.system))
    }

    /// Per-system entry counts, in label order (for the sidebar)
    pub fn system_counts(&self) -> Vec<(BodySystem, usize)> {
        BodySystem::ALL
            .iter()
            .copied()
            .map(|system| {
                let count = self.entries.iter().filter(|e| e.system == system).count();
                (system, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

/// Set of body systems restricting which catalog entries are eligible
///
/// An empty filter means no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemFilter {
    systems: BTreeSet<BodySystem>,
}

impl SystemFilter {
    /// The unrestricted filter
    pub fn none() -> Self {
        Self::default()
    }

    /// A filter allowing a single body system
    pub fn only(system: BodySystem) -> Self {
        let mut systems = BTreeSet::new();
        systems.insert(system);
        Self { systems }
    }

    pub fn insert(&mut self, system: BodySystem) {
        self.systems.insert(system);
    }

    pub fn clear(&mut self) {
        self.systems.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Whether entries of the given system pass the filter
    pub fn allows(&self, system: BodySystem) -> bool {
        self.systems.is_empty() || self.systems.contains(&system)
    }

    /// Selected systems in label order
    pub fn systems(&self) -> impl Iterator<Item = BodySystem> + '_ {
        self.systems.iter().copied()
    }
}
