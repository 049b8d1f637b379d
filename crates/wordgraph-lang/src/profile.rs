// Language resources: explicit dictionaries and rule tables.
//
// A profile bundles everything the parsers need for one language. Profiles
// are plain values passed into every call, never ambient process state, so
// several languages can coexist in one session and tests can build tiny
// synthetic profiles.

use std::collections::HashMap;

use wordgraph_core::symbol::MorphemeKind;

/// One dictionary entry for a word fragment.
///
/// A fragment may carry several entries (homographs, e.g. agentive "-er"
/// vs. comparative "-er"); lookups disambiguate by frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphemeEntry {
    pub kind: MorphemeKind,
    pub frequency: u32,
    pub gloss: Option<String>,
}

impl MorphemeEntry {
    pub fn new(kind: MorphemeKind, frequency: u32) -> Self {
        Self {
            kind,
            frequency,
            gloss: None,
        }
    }

    pub fn with_gloss(mut self, gloss: impl Into<String>) -> Self {
        self.gloss = Some(gloss.into());
        self
    }
}

/// One grapheme-to-phoneme rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct G2pRule {
    pub grapheme: String,
    pub phoneme: String,
}

/// The resource set for one language.
#[derive(Debug, Clone, Default)]
pub struct LanguageProfile {
    code: String,
    morphemes: HashMap<String, Vec<MorphemeEntry>>,
    /// Ordered: earlier rules win ties between equally long graphemes.
    g2p: Vec<G2pRule>,
    pronunciations: HashMap<String, Vec<String>>,
}

impl LanguageProfile {
    /// Create an empty profile for a language code (e.g. `"en"`).
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// The language code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Register a morpheme entry for a word fragment.
    pub fn with_morpheme(mut self, fragment: impl Into<String>, entry: MorphemeEntry) -> Self {
        self.morphemes.entry(fragment.into()).or_default().push(entry);
        self
    }

    /// Append a grapheme-to-phoneme rule. Order matters: earlier rules win
    /// ties between equally long graphemes.
    pub fn with_g2p_rule(
        mut self,
        grapheme: impl Into<String>,
        phoneme: impl Into<String>,
    ) -> Self {
        self.g2p.push(G2pRule {
            grapheme: grapheme.into(),
            phoneme: phoneme.into(),
        });
        self
    }

    /// Register the IPA symbol sequence for a whole word.
    pub fn with_pronunciation<S: Into<String>>(
        mut self,
        word: impl Into<String>,
        symbols: Vec<S>,
    ) -> Self {
        self.pronunciations
            .insert(word.into(), symbols.into_iter().map(Into::into).collect());
        self
    }

    /// All entries recorded for a fragment (empty when unknown).
    pub fn morpheme_entries(&self, fragment: &str) -> &[MorphemeEntry] {
        self.morphemes
            .get(fragment)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The best entry for a fragment, optionally restricted to one kind.
    ///
    /// Homographs are disambiguated by highest frequency; remaining ties
    /// keep the first-registered entry, so lookups are deterministic for a
    /// fixed profile construction order.
    pub fn best_morpheme(
        &self,
        fragment: &str,
        kind: Option<MorphemeKind>,
    ) -> Option<&MorphemeEntry> {
        self.morpheme_entries(fragment)
            .iter()
            .filter(|entry| kind.is_none_or(|k| entry.kind == k))
            .max_by(|a, b| {
                a.frequency
                    .cmp(&b.frequency)
                    // max_by keeps the later of equal elements; reverse the
                    // secondary comparison so the first-registered one wins.
                    .then(std::cmp::Ordering::Greater)
            })
    }

    /// The longest affix of the given kind at the start (for prefixes) or
    /// end (for suffixes) of `rest`, at least two characters long and
    /// strictly shorter than `rest`. Returns the matched fragment and its
    /// best entry.
    pub fn longest_affix(
        &self,
        rest: &str,
        kind: MorphemeKind,
    ) -> Option<(&str, &MorphemeEntry)> {
        let rest_chars = rest.chars().count();
        let mut best: Option<(&str, usize, &MorphemeEntry)> = None;

        for fragment in self.morphemes.keys() {
            let matches = match kind {
                MorphemeKind::Prefix => rest.starts_with(fragment.as_str()),
                MorphemeKind::Suffix => rest.ends_with(fragment.as_str()),
                MorphemeKind::Root => false,
            };
            if !matches {
                continue;
            }
            let len = fragment.chars().count();
            if len < 2 || len >= rest_chars {
                continue;
            }
            let Some(entry) = self.best_morpheme(fragment, Some(kind)) else {
                continue;
            };
            if best.is_none_or(|(_, best_len, _)| len > best_len) {
                best = Some((fragment.as_str(), len, entry));
            }
        }
        best.map(|(fragment, _, entry)| (fragment, entry))
    }

    /// The longest grapheme rule matching the start of `rest` (maximal
    /// munch). Among equally long graphemes the earliest rule wins.
    pub fn longest_grapheme(&self, rest: &str) -> Option<&G2pRule> {
        let mut best: Option<(&G2pRule, usize)> = None;
        for rule in &self.g2p {
            if !rest.starts_with(rule.grapheme.as_str()) {
                continue;
            }
            let len = rule.grapheme.chars().count();
            if best.is_none_or(|(_, best_len)| len > best_len) {
                best = Some((rule, len));
            }
        }
        best.map(|(rule, _)| rule)
    }

    /// Exact pronunciation-dictionary lookup.
    pub fn pronunciation(&self, word: &str) -> Option<&[String]> {
        self.pronunciations.get(word).map(Vec::as_slice)
    }

    /// Whether the profile carries any grapheme-to-phoneme rules.
    pub fn has_g2p_rules(&self) -> bool {
        !self.g2p.is_empty()
    }
}

/// A ranked lexicon: (word, frequency) pairs in descending frequency order.
///
/// This is the seam between the bulk loader and whatever corpus backs it; a
/// plain `Vec` implements it so tests can supply a small synthetic source.
pub trait VocabularySource {
    fn ranked_words(&self) -> Vec<(String, u32)>;
}

impl VocabularySource for Vec<(String, u32)> {
    fn ranked_words(&self) -> Vec<(String, u32)> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> LanguageProfile {
        LanguageProfile::new("xx")
            .with_morpheme("un", MorphemeEntry::new(MorphemeKind::Prefix, 900))
            .with_morpheme("under", MorphemeEntry::new(MorphemeKind::Prefix, 300))
            .with_morpheme(
                "er",
                MorphemeEntry::new(MorphemeKind::Suffix, 5000).with_gloss("agentive"),
            )
            .with_morpheme(
                "er",
                MorphemeEntry::new(MorphemeKind::Suffix, 3000).with_gloss("comparative"),
            )
            .with_morpheme("do", MorphemeEntry::new(MorphemeKind::Root, 800))
            .with_g2p_rule("ch", "tʃ")
            .with_g2p_rule("c", "k")
            .with_g2p_rule("h", "h")
            .with_pronunciation("cat", vec!["k", "æ", "t"])
    }

    #[test]
    fn best_morpheme_prefers_highest_frequency() {
        let p = profile();
        let best = p.best_morpheme("er", None).unwrap();
        assert_eq!(best.gloss.as_deref(), Some("agentive"));
    }

    #[test]
    fn best_morpheme_ties_keep_first_registered() {
        let p = LanguageProfile::new("xx")
            .with_morpheme(
                "er",
                MorphemeEntry::new(MorphemeKind::Suffix, 10).with_gloss("first"),
            )
            .with_morpheme(
                "er",
                MorphemeEntry::new(MorphemeKind::Suffix, 10).with_gloss("second"),
            );
        let best = p.best_morpheme("er", None).unwrap();
        assert_eq!(best.gloss.as_deref(), Some("first"));
    }

    #[test]
    fn best_morpheme_respects_kind_filter() {
        let p = profile();
        assert!(p.best_morpheme("do", Some(MorphemeKind::Root)).is_some());
        assert!(p.best_morpheme("do", Some(MorphemeKind::Prefix)).is_none());
        assert!(p.best_morpheme("zzz", None).is_none());
    }

    #[test]
    fn longest_affix_is_maximal_munch() {
        let p = profile();
        let (fragment, _) = p.longest_affix("understand", MorphemeKind::Prefix).unwrap();
        assert_eq!(fragment, "under");
    }

    #[test]
    fn longest_affix_never_consumes_whole_word() {
        let p = profile();
        // "under" itself: the 5-char prefix would consume everything, so
        // only "un" qualifies.
        let (fragment, _) = p.longest_affix("under", MorphemeKind::Prefix).unwrap();
        assert_eq!(fragment, "un");
    }

    #[test]
    fn longest_affix_requires_two_chars() {
        let p = LanguageProfile::new("xx")
            .with_morpheme("a", MorphemeEntry::new(MorphemeKind::Prefix, 10));
        assert!(p.longest_affix("atypical", MorphemeKind::Prefix).is_none());
    }

    #[test]
    fn longest_grapheme_is_maximal_munch() {
        let p = profile();
        assert_eq!(p.longest_grapheme("chat").unwrap().phoneme, "tʃ");
        assert_eq!(p.longest_grapheme("cat").unwrap().phoneme, "k");
        assert!(p.longest_grapheme("xyz").is_none());
    }

    #[test]
    fn pronunciation_lookup() {
        let p = profile();
        assert_eq!(
            p.pronunciation("cat").unwrap(),
            &["k".to_string(), "æ".to_string(), "t".to_string()]
        );
        assert!(p.pronunciation("dog").is_none());
    }

    #[test]
    fn vec_is_a_vocabulary_source() {
        let source: Vec<(String, u32)> =
            vec![("the".to_string(), 100), ("cat".to_string(), 50)];
        let ranked = source.ranked_words();
        assert_eq!(ranked[0].0, "the");
        assert_eq!(ranked.len(), 2);
    }
}
