//! Language profiles and the parsers that feed the wordgraph automaton.
//!
//! # Architecture
//!
//! - [`profile`] -- explicit language resources (dictionaries, rule tables)
//!   and the [`profile::VocabularySource`] capability for ranked lexicons
//! - [`segment`] -- morpheme segmentation (dictionary-first, affix peeling)
//! - [`transcribe`] -- IPA transcription (dictionary-first, maximal-munch
//!   grapheme-to-phoneme rules)
//! - [`loader`] -- bulk loading of ranked vocabularies into an automaton
//! - [`english`] -- a compact built-in English profile
//!
//! All parsing is a pure function of (word, profile): resources are passed
//! in explicitly so multiple language profiles coexist and can be tested in
//! isolation.

pub mod english;
pub mod loader;
pub mod profile;
pub mod segment;
pub mod transcribe;

/// Error type for word parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input word was empty (or whitespace only). Caller error.
    #[error("empty input word")]
    EmptyWord,
}
