// Word record: provenance for one ingested word or pronunciation.

use crate::symbol::Symbol;

/// The origin of one path through the automaton.
///
/// A record keeps the surface form, the language code of the profile that
/// produced it, the symbol sequence derived for it and its corpus frequency.
/// The automaton stores records in an arena; terminal states reference them
/// by index, so the same record is never duplicated across states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    surface: String,
    language: String,
    symbols: Vec<Symbol>,
    frequency: u32,
}

impl WordRecord {
    /// Create a record for a surface form and its derived symbol sequence.
    pub fn new(
        surface: impl Into<String>,
        language: impl Into<String>,
        symbols: Vec<Symbol>,
    ) -> Self {
        Self {
            surface: surface.into(),
            language: language.into(),
            symbols,
            frequency: 0,
        }
    }

    /// Attach a corpus frequency count.
    pub fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = frequency;
        self
    }

    /// The original word or pronunciation string.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// The language code this record was parsed under.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The symbol sequence derived for the surface form.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The corpus frequency count (0 when unknown).
    pub fn frequency(&self) -> u32 {
        self.frequency
    }
}
