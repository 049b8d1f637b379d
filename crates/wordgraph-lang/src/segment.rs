// Morpheme segmentation: dictionary-first, then affix peeling.

use tracing::trace;
use wordgraph_core::symbol::{MorphemeKind, Symbol};

use crate::ParseError;
use crate::profile::{LanguageProfile, MorphemeEntry};

/// Segment a word into an ordered morpheme symbol sequence.
///
/// The word is lowercased, then resolved in three stages:
///
/// 1. an exact whole-word dictionary hit yields a single symbol;
/// 2. otherwise known prefixes are peeled from the front and known suffixes
///    from the back, longest match first, until no affix applies (affixes
///    shorter than two characters never peel);
/// 3. the residual stem stays one symbol: a dictionary root when known, an
///    opaque symbol otherwise.
///
/// A word with no dictionary coverage at all degrades to one opaque symbol;
/// only an empty input is an error.
pub fn segment_morphemes(
    word: &str,
    profile: &LanguageProfile,
) -> Result<Vec<Symbol>, ParseError> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Err(ParseError::EmptyWord);
    }

    if let Some(entry) = profile.best_morpheme(&word, None) {
        return Ok(vec![symbol_for(&word, entry)]);
    }

    let mut front: Vec<Symbol> = Vec::new();
    let mut back: Vec<Symbol> = Vec::new();
    let mut rest = word.as_str();

    while let Some((fragment, entry)) = profile.longest_affix(rest, MorphemeKind::Prefix) {
        trace!(fragment, rest, "peeled prefix");
        front.push(symbol_for(fragment, entry));
        rest = &rest[fragment.len()..];
        // The remainder may itself be a known morpheme; stop peeling so it
        // survives as the stem.
        if profile.best_morpheme(rest, None).is_some() {
            break;
        }
    }

    while let Some((fragment, entry)) = profile.longest_affix(rest, MorphemeKind::Suffix) {
        trace!(fragment, rest, "peeled suffix");
        back.push(symbol_for(fragment, entry));
        rest = &rest[..rest.len() - fragment.len()];
        if profile.best_morpheme(rest, None).is_some() {
            break;
        }
    }

    let mut symbols = front;
    if !rest.is_empty() {
        match profile.best_morpheme(rest, None) {
            Some(entry) => symbols.push(symbol_for(rest, entry)),
            None => symbols.push(Symbol::new(rest)),
        }
    }
    symbols.extend(back.into_iter().rev());
    Ok(symbols)
}

/// Build the symbol for a matched fragment, carrying the entry's metadata.
fn symbol_for(fragment: &str, entry: &MorphemeEntry) -> Symbol {
    let mut symbol = Symbol::new(fragment)
        .with_kind(entry.kind)
        .with_frequency(entry.frequency);
    if let Some(gloss) = &entry.gloss {
        symbol = symbol.with_gloss(gloss.clone());
    }
    symbol
}
