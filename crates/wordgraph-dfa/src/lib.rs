//! Prefix-sharing DFA builder for morpheme and phoneme charts.
//!
//! This crate provides the automaton at the heart of wordgraph: symbol
//! sequences produced by the language parsers are merged into a shared-state
//! graph where common prefixes collapse into shared paths and divergent
//! suffixes branch into distinct states. Suffixes are deliberately never
//! merged, so every accepting state keeps the provenance of the words that
//! end there.
//!
//! # Architecture
//!
//! - [`automaton`] -- arena-backed state table, insertion and path replay
//! - [`query`] -- read-only traversal and serializable chart export

pub mod automaton;
pub mod query;

pub use automaton::{Automaton, RecordId, StateId};
pub use query::ChartData;

/// Error type for automaton construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DfaError {
    /// An empty symbol sequence was passed to `insert` or `path_for`.
    #[error("empty symbol sequence")]
    EmptySequence,

    /// A replayed sequence left the automaton: the state reached after
    /// `position` symbols has no outgoing transition for `symbol`. This is
    /// the normal "word not in this automaton" condition.
    #[error("no transition for symbol {symbol:?} at position {position}")]
    NoSuchPath { position: usize, symbol: String },
}
