//! Shared value types for the wordgraph chart builder.
//!
//! - [`symbol`] -- the atomic transition label (a morpheme or IPA glyph cluster)
//! - [`record`] -- provenance records for ingested words and pronunciations

pub mod record;
pub mod symbol;
