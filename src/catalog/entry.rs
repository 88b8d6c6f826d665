use std::fmt;
use std::str::FromStr;

use crate::error::MedtermError;

/// Body-system category assigned to every catalog term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodySystem {
    AllergyImmunology,
    Cardiovascular,
    Endocrine,
    Gastrointestinal,
    Musculoskeletal,
    Neurology,
    Respiratory,
    Surgical,
}

impl BodySystem {
    /// All body systems, in display-label order
    pub const ALL: [BodySystem; 8] = [
        BodySystem::AllergyImmunology,
        BodySystem::Cardiovascular,
        BodySystem::Endocrine,
        BodySystem::Gastrointestinal,
        BodySystem::Musculoskeletal,
        BodySystem::Neurology,
        BodySystem::Respiratory,
        BodySystem::Surgical,
    ];

    /// Human-readable label shown in filters and the sidebar
    pub fn label(&self) -> &'static str {
        match self {
            BodySystem::AllergyImmunology => "Allergy/Immunology",
            BodySystem::Cardiovascular => "Cardiovascular",
            BodySystem::Endocrine => "Endocrine",
            BodySystem::Gastrointestinal => "Gastrointestinal",
            BodySystem::Musculoskeletal => "Musculoskeletal",
            BodySystem::Neurology => "Neurology",
            BodySystem::Respiratory => "Respiratory",
            BodySystem::Surgical => "Surgical",
        }
    }
}

impl fmt::Display for BodySystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BodySystem {
    type Err = MedtermError;

    /// Parse a display label, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BodySystem::ALL
            .iter()
            .copied()
            .find(|system| system.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MedtermError::UnknownSystem(wanted.to_string()))
    }
}

/// One catalog term: lowercase name, body system, display glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermEntry {
    pub name: &'static str,
    pub system: BodySystem,
    pub icon: &'static str,
}
