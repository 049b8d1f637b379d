// Symbol: the atomic unit flowing through the automaton builder.
//
// A symbol is a morpheme spelling or an IPA glyph cluster. Its identity is
// the key string alone; gloss, frequency and morpheme kind are metadata that
// never participate in equality or hashing, so two symbols with the same key
// always label the same transition regardless of where they were allocated.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Role of a morpheme within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphemeKind {
    /// A free-standing stem (e.g. "break").
    Root,
    /// A bound morpheme attached before the stem (e.g. "un-").
    Prefix,
    /// A bound morpheme attached after the stem (e.g. "-able").
    Suffix,
}

/// A single transition label: a morpheme or a phoneme.
///
/// Equality, hashing and ordering are structural over [`key`](Self::key)
/// only. The optional gloss is a display label distinct from the identity
/// key (e.g. key `"er"`, gloss `"agentive"`).
#[derive(Debug, Clone)]
pub struct Symbol {
    key: String,
    gloss: Option<String>,
    frequency: u32,
    kind: Option<MorphemeKind>,
}

impl Symbol {
    /// Create a symbol with the given identity key and no metadata.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            gloss: None,
            frequency: 0,
            kind: None,
        }
    }

    /// Attach a display gloss.
    pub fn with_gloss(mut self, gloss: impl Into<String>) -> Self {
        self.gloss = Some(gloss.into());
        self
    }

    /// Attach a corpus frequency count.
    pub fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Attach a morpheme kind.
    pub fn with_kind(mut self, kind: MorphemeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// The identity key. Two symbols with equal keys are the same label.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The gloss, if one was attached.
    pub fn gloss(&self) -> Option<&str> {
        self.gloss.as_deref()
    }

    /// The display label: the gloss when present, the key otherwise.
    pub fn label(&self) -> &str {
        self.gloss.as_deref().unwrap_or(&self.key)
    }

    /// The corpus frequency count (0 when unknown).
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// The morpheme kind, if known. Phoneme symbols carry `None`.
    pub fn kind(&self) -> Option<MorphemeKind> {
        self.kind
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
