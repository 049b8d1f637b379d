// Built-in English profile: affix tables, common roots, grapheme rules and
// a small pronunciation lexicon.
//
// This is deliberately compact reference data, enough for charts of common
// English vocabulary; a real deployment swaps in profiles built from a full
// lexicon. Frequencies are rounded per-million corpus counts.

use wordgraph_core::symbol::MorphemeKind;

use crate::profile::{LanguageProfile, MorphemeEntry};

/// Productive English prefixes.
const PREFIXES: &[(&str, u32)] = &[
    ("un", 9024),
    ("re", 7632),
    ("in", 5113),
    ("dis", 3400),
    ("de", 2980),
    ("non", 2801),
    ("over", 2412),
    ("pre", 2210),
    ("mis", 1933),
    ("sub", 1512),
    ("en", 1100),
    ("out", 940),
    ("inter", 905),
    ("anti", 860),
    ("under", 780),
    ("super", 710),
    ("trans", 640),
    ("fore", 512),
    ("semi", 380),
    ("mid", 300),
];

/// Productive English suffixes.
const SUFFIXES: &[(&str, u32)] = &[
    ("ing", 9810),
    ("ed", 9304),
    ("ly", 6120),
    ("tion", 4120),
    ("es", 3120),
    ("able", 2906),
    ("ment", 2480),
    ("al", 2205),
    ("ness", 2114),
    ("ity", 1850),
    ("less", 1410),
    ("ful", 1300),
    ("ous", 1120),
    ("ive", 1030),
    ("sion", 980),
    ("est", 920),
    ("or", 760),
    ("en", 640),
    ("ible", 612),
    ("ize", 540),
    ("ish", 470),
];

/// Common roots with part-of-speech glosses (Penn Treebank tags).
const ROOTS: &[(&str, &str, u32)] = &[
    ("do", "VB", 8400),
    ("make", "VB", 3900),
    ("work", "NN", 2900),
    ("play", "VB", 1700),
    ("read", "VB", 1510),
    ("water", "NN", 1400),
    ("write", "VB", 1320),
    ("break", "VB", 1260),
    ("help", "VB", 1150),
    ("light", "NN", 980),
    ("friend", "NN", 990),
    ("hope", "NN", 820),
    ("tie", "VB", 310),
];

/// Grapheme-to-phoneme rules, longest graphemes first. Vowel digraphs map
/// to their most common reading; this is a fallback behind the
/// pronunciation lexicon, not a full English G2P system.
const G2P_RULES: &[(&str, &str)] = &[
    ("tch", "tʃ"),
    ("igh", "aɪ"),
    ("ch", "tʃ"),
    ("sh", "ʃ"),
    ("th", "θ"),
    ("ph", "f"),
    ("wh", "w"),
    ("ck", "k"),
    ("ng", "ŋ"),
    ("qu", "kw"),
    ("ee", "iː"),
    ("ea", "iː"),
    ("oo", "uː"),
    ("ou", "aʊ"),
    ("ow", "aʊ"),
    ("oa", "oʊ"),
    ("ai", "eɪ"),
    ("ay", "eɪ"),
    ("oi", "ɔɪ"),
    ("oy", "ɔɪ"),
    ("au", "ɔː"),
    ("aw", "ɔː"),
    ("ar", "ɑː"),
    ("or", "ɔː"),
    ("er", "ə"),
    ("a", "æ"),
    ("b", "b"),
    ("c", "k"),
    ("d", "d"),
    ("e", "ɛ"),
    ("f", "f"),
    ("g", "ɡ"),
    ("h", "h"),
    ("i", "ɪ"),
    ("j", "dʒ"),
    ("k", "k"),
    ("l", "l"),
    ("m", "m"),
    ("n", "n"),
    ("o", "ɒ"),
    ("p", "p"),
    ("r", "r"),
    ("s", "s"),
    ("t", "t"),
    ("u", "ʌ"),
    ("v", "v"),
    ("w", "w"),
    ("x", "ks"),
    ("y", "j"),
    ("z", "z"),
];

/// Irregular words whose rule-based reading would be wrong.
const PRONUNCIATIONS: &[(&str, &[&str])] = &[
    ("cat", &["k", "æ", "t"]),
    ("the", &["ð", "ə"]),
    ("of", &["ʌ", "v"]),
    ("one", &["w", "ʌ", "n"]),
    ("two", &["t", "uː"]),
    ("do", &["d", "uː"]),
    ("was", &["w", "ɒ", "z"]),
];

/// Build the built-in English profile.
pub fn english_profile() -> LanguageProfile {
    let mut profile = LanguageProfile::new("en");

    for &(fragment, frequency) in PREFIXES {
        profile = profile.with_morpheme(
            fragment,
            MorphemeEntry::new(MorphemeKind::Prefix, frequency),
        );
    }
    for &(fragment, frequency) in SUFFIXES {
        profile = profile.with_morpheme(
            fragment,
            MorphemeEntry::new(MorphemeKind::Suffix, frequency),
        );
    }
    // Homograph pair: agentive "-er" (painter) vs. comparative "-er"
    // (faster). Frequency decides which reading a segmentation reports.
    profile = profile
        .with_morpheme(
            "er",
            MorphemeEntry::new(MorphemeKind::Suffix, 5400).with_gloss("agentive"),
        )
        .with_morpheme(
            "er",
            MorphemeEntry::new(MorphemeKind::Suffix, 3600).with_gloss("comparative"),
        );

    for &(fragment, pos, frequency) in ROOTS {
        profile = profile.with_morpheme(
            fragment,
            MorphemeEntry::new(MorphemeKind::Root, frequency).with_gloss(pos),
        );
    }
    for &(grapheme, phoneme) in G2P_RULES {
        profile = profile.with_g2p_rule(grapheme, phoneme);
    }
    for &(word, glyphs) in PRONUNCIATIONS {
        profile = profile.with_pronunciation(word, glyphs.to_vec());
    }
    profile
}
