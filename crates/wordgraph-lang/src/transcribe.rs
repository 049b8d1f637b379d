// IPA transcription: pronunciation dictionary first, then grapheme rules.

use tracing::trace;
use wordgraph_core::symbol::Symbol;

use crate::ParseError;
use crate::profile::LanguageProfile;

/// Transcribe a word into an ordered phoneme symbol sequence.
///
/// An exact pronunciation-dictionary hit wins; otherwise the profile's
/// grapheme-to-phoneme rules are applied left to right with maximal-munch
/// matching of multi-letter graphemes. A letter no rule covers passes
/// through as an opaque single-character symbol; a profile with no rules at
/// all degrades the whole word to one opaque symbol. Only an empty input is
/// an error.
pub fn transcribe_ipa(word: &str, profile: &LanguageProfile) -> Result<Vec<Symbol>, ParseError> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Err(ParseError::EmptyWord);
    }

    if let Some(glyphs) = profile.pronunciation(&word) {
        return Ok(glyphs.iter().map(Symbol::new).collect());
    }

    if !profile.has_g2p_rules() {
        return Ok(vec![Symbol::new(word)]);
    }

    let mut symbols = Vec::new();
    let mut rest = word.as_str();
    while !rest.is_empty() {
        match profile.longest_grapheme(rest) {
            Some(rule) => {
                trace!(grapheme = %rule.grapheme, phoneme = %rule.phoneme, "g2p");
                symbols.push(Symbol::new(&rule.phoneme));
                rest = &rest[rule.grapheme.len()..];
            }
            None => {
                // No rule covers this letter; pass it through untranscribed.
                let ch = rest.chars().next().unwrap_or_default();
                symbols.push(Symbol::new(ch.to_string()));
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    Ok(symbols)
}

/// Split a raw IPA string into glyph clusters.
///
/// Combining marks, length marks and other attached modifiers stay with
/// their base character; a stress mark opens the following cluster. Used
/// when a pronunciation lexicon stores unsegmented IPA strings.
pub fn split_ipa_glyphs(ipa: &str) -> Vec<String> {
    let mut clusters: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut has_base = false;

    for ch in ipa.chars() {
        if is_stress_mark(ch) {
            if !current.is_empty() {
                clusters.push(std::mem::take(&mut current));
            }
            current.push(ch);
            has_base = false;
        } else if is_attached_mark(ch) && !current.is_empty() {
            current.push(ch);
        } else {
            if has_base {
                clusters.push(std::mem::take(&mut current));
            }
            current.push(ch);
            has_base = true;
        }
    }
    if !current.is_empty() {
        clusters.push(current);
    }
    clusters
}

/// Primary and secondary stress marks.
fn is_stress_mark(ch: char) -> bool {
    matches!(ch, 'ˈ' | 'ˌ')
}

/// Marks that attach to the preceding base character: Unicode combining
/// diacritics, IPA length marks and superscript modifier letters.
fn is_attached_mark(ch: char) -> bool {
    matches!(ch,
        '\u{0300}'..='\u{036F}'          // combining diacritics incl. tie bars
        | '\u{1DC0}'..='\u{1DFF}'        // combining diacritics supplement
        | 'ː' | 'ˑ'                      // length marks
        | 'ʰ' | 'ʷ' | 'ʲ' | 'ˠ' | 'ˤ'   // secondary articulation
        | '˞'                            // rhoticity
    )
}
