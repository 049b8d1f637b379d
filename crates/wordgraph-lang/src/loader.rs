// Bulk loading of ranked vocabularies into an automaton.

use tracing::{info, warn};
use wordgraph_core::record::WordRecord;
use wordgraph_dfa::Automaton;

use crate::profile::{LanguageProfile, VocabularySource};
use crate::{segment, transcribe};

/// Which parser produces the symbol sequence for each word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Morpheme segmentation ([`segment::segment_morphemes`]).
    Morphemes,
    /// IPA transcription ([`transcribe::transcribe_ipa`]).
    Ipa,
}

/// One vocabulary entry the loader had to skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadDiagnostic {
    pub word: String,
    pub reason: String,
}

/// Outcome of one bulk load.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Words successfully parsed and inserted.
    pub inserted: usize,
    /// Words skipped, with the reason. The load never aborts on a bad entry.
    pub skipped: Vec<LoadDiagnostic>,
}

/// Feed the `top_n` most frequent words of a vocabulary source through the
/// parser selected by `kind` and insert each resulting sequence.
///
/// Re-running with overlapping vocabulary is idempotent: identical
/// sequences collapse onto existing paths and add no states. A word whose
/// parse fails is recorded in the report and skipped; the rest of the load
/// proceeds.
pub fn load_common(
    automaton: &mut Automaton,
    profile: &LanguageProfile,
    source: &dyn VocabularySource,
    top_n: usize,
    kind: SequenceKind,
) -> LoadReport {
    let mut report = LoadReport::default();

    for (word, frequency) in source.ranked_words().into_iter().take(top_n) {
        let parsed = match kind {
            SequenceKind::Morphemes => segment::segment_morphemes(&word, profile),
            SequenceKind::Ipa => transcribe::transcribe_ipa(&word, profile),
        };
        let symbols = match parsed {
            Ok(symbols) => symbols,
            Err(err) => {
                warn!(word = %word, %err, "skipping unparseable vocabulary entry");
                report.skipped.push(LoadDiagnostic {
                    word,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let record =
            WordRecord::new(&word, profile.code(), symbols.clone()).with_frequency(frequency);
        match automaton.insert(&symbols, record) {
            Ok(_) => report.inserted += 1,
            Err(err) => {
                warn!(word = %word, %err, "skipping entry rejected by the automaton");
                report.skipped.push(LoadDiagnostic {
                    word,
                    reason: err.to_string(),
                });
            }
        }
    }

    info!(
        inserted = report.inserted,
        skipped = report.skipped.len(),
        language = profile.code(),
        "bulk load finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::english::english_profile;

    fn vocab(words: &[(&str, u32)]) -> Vec<(String, u32)> {
        words.iter().map(|&(w, f)| (w.to_string(), f)).collect()
    }

    #[test]
    fn loads_top_n_words() {
        let mut automaton = Automaton::new();
        let p = english_profile();
        let source = vocab(&[("undoable", 90), ("redo", 80), ("untie", 70)]);

        let report = load_common(&mut automaton, &p, &source, 2, SequenceKind::Morphemes);
        assert_eq!(report.inserted, 2);
        assert!(report.skipped.is_empty());
        // "untie" was beyond top_n.
        assert_eq!(automaton.records().count(), 2);
    }

    #[test]
    fn partial_failure_skips_and_continues() {
        let mut automaton = Automaton::new();
        let p = english_profile();
        let mut words: Vec<(String, u32)> = (0..10)
            .map(|i| (format!("word{i}"), 100 - i as u32))
            .collect();
        words.insert(5, (String::new(), 50));

        let report = load_common(&mut automaton, &p, &words, 11, SequenceKind::Morphemes);
        assert_eq!(report.inserted, 10);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].word, "");
        assert_eq!(report.skipped[0].reason, "empty input word");
        assert_eq!(automaton.records().count(), 10);
    }

    #[test]
    fn overlapping_reload_is_idempotent_on_structure() {
        let mut automaton = Automaton::new();
        let p = english_profile();
        let source = vocab(&[("unbreakable", 90), ("undoable", 80)]);

        load_common(&mut automaton, &p, &source, 10, SequenceKind::Morphemes);
        let states = automaton.state_count();
        let transitions = automaton.transition_count();

        load_common(&mut automaton, &p, &source, 10, SequenceKind::Morphemes);
        assert_eq!(automaton.state_count(), states);
        assert_eq!(automaton.transition_count(), transitions);
    }

    #[test]
    fn ipa_load_uses_transcription() {
        let mut automaton = Automaton::new();
        let p = english_profile();
        let source = vocab(&[("cat", 90)]);

        let report = load_common(&mut automaton, &p, &source, 10, SequenceKind::Ipa);
        assert_eq!(report.inserted, 1);

        let record = automaton.records().next().unwrap();
        let keys: Vec<&str> = record.symbols().iter().map(|s| s.key()).collect();
        assert_eq!(keys, vec!["k", "æ", "t"]);
    }

    #[test]
    fn records_carry_language_and_frequency() {
        let mut automaton = Automaton::new();
        let p = english_profile();
        let source = vocab(&[("break", 123)]);

        load_common(&mut automaton, &p, &source, 10, SequenceKind::Morphemes);
        let record = automaton.records().next().unwrap();
        assert_eq!(record.language(), "en");
        assert_eq!(record.frequency(), 123);
        assert_eq!(record.surface(), "break");
    }
}
