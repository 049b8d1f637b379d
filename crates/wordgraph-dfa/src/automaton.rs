// Arena-backed deterministic automaton with prefix sharing.
//
// States live in a dense Vec and are addressed by integer ids assigned at
// creation and never reused. The structure is acyclic by construction:
// insertion only ever walks forward from the root along a finite sequence,
// so no back-edges can appear.

use hashbrown::HashMap;
use tracing::{debug, trace};
use wordgraph_core::record::WordRecord;
use wordgraph_core::symbol::Symbol;

use crate::DfaError;

/// Dense index of a state in the automaton's state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    /// The root state: present in every automaton, non-accepting at creation.
    pub const ROOT: StateId = StateId(0);

    /// The raw index into the state table.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Dense index of a word record in the automaton's record arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(usize);

impl RecordId {
    /// The raw index into the record arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of the automaton.
#[derive(Debug, Default)]
struct State {
    /// True once at least one ingested sequence ends here.
    accepting: bool,
    /// Outgoing transitions, at most one per distinct symbol.
    transitions: HashMap<Symbol, StateId>,
    /// Records of the words/pronunciations that terminate at this state.
    records: Vec<RecordId>,
}

/// A deterministic automaton built by merging symbol sequences.
///
/// Created empty except for the root state (id 0). Grows monotonically:
/// states and transitions are added by [`insert`](Self::insert) and never
/// removed within a session.
#[derive(Debug)]
pub struct Automaton {
    states: Vec<State>,
    records: Vec<WordRecord>,
    transition_count: usize,
}

impl Automaton {
    /// Create an automaton holding only the non-accepting root state.
    pub fn new() -> Self {
        Self {
            states: vec![State::default()],
            records: Vec::new(),
            transition_count: 0,
        }
    }

    /// The root state.
    pub fn root(&self) -> StateId {
        StateId::ROOT
    }

    /// Insert a symbol sequence, merging it into the existing graph.
    ///
    /// Walks from the root; for each symbol an existing transition is
    /// followed when present, otherwise a fresh state is created. Shared
    /// prefixes therefore collapse onto the same path and only the unique
    /// suffix allocates new states. The final state is marked accepting and
    /// `record` is attached to it.
    ///
    /// Returns the terminal state. Fails only when `symbols` is empty.
    pub fn insert(
        &mut self,
        symbols: &[Symbol],
        record: WordRecord,
    ) -> Result<StateId, DfaError> {
        if symbols.is_empty() {
            return Err(DfaError::EmptySequence);
        }

        let mut current = StateId::ROOT;
        for symbol in symbols {
            current = match self.states[current.0].transitions.get(symbol) {
                Some(&next) => {
                    trace!(from = current.0, to = next.0, symbol = symbol.key(), "reuse");
                    next
                }
                None => {
                    let next = StateId(self.states.len());
                    self.states.push(State::default());
                    self.states[current.0]
                        .transitions
                        .insert(symbol.clone(), next);
                    self.transition_count += 1;
                    trace!(from = current.0, to = next.0, symbol = symbol.key(), "new state");
                    next
                }
            };
        }

        let record_id = RecordId(self.records.len());
        self.records.push(record);
        let terminal = &mut self.states[current.0];
        terminal.accepting = true;
        terminal.records.push(record_id);
        debug!(
            terminal = current.0,
            states = self.states.len(),
            "inserted sequence of {} symbols",
            symbols.len()
        );
        Ok(current)
    }

    /// Replay a symbol sequence from the root and return every visited
    /// state, root included (so the result has `symbols.len() + 1` entries).
    ///
    /// Fails with [`DfaError::NoSuchPath`] at the first symbol that has no
    /// outgoing transition, and with [`DfaError::EmptySequence`] on empty
    /// input.
    pub fn path_for(&self, symbols: &[Symbol]) -> Result<Vec<StateId>, DfaError> {
        if symbols.is_empty() {
            return Err(DfaError::EmptySequence);
        }

        let mut path = Vec::with_capacity(symbols.len() + 1);
        let mut current = StateId::ROOT;
        path.push(current);
        for (position, symbol) in symbols.iter().enumerate() {
            match self.states[current.0].transitions.get(symbol) {
                Some(&next) => {
                    current = next;
                    path.push(current);
                }
                None => {
                    return Err(DfaError::NoSuchPath {
                        position,
                        symbol: symbol.key().to_string(),
                    });
                }
            }
        }
        Ok(path)
    }

    /// Re-insert every word record of `other` into this automaton.
    ///
    /// This is the sequential merge step for workers that built independent
    /// automatons: prefix sharing deduplicates everything the two graphs
    /// have in common. Returns the number of records merged.
    pub fn merge_from(&mut self, other: &Automaton) -> Result<usize, DfaError> {
        for record in &other.records {
            let symbols: Vec<Symbol> = record.symbols().to_vec();
            self.insert(&symbols, record.clone())?;
        }
        Ok(other.records.len())
    }

    /// Read-only view of the outgoing transitions of a state.
    ///
    /// Panics if `state` does not belong to this automaton.
    pub fn transitions_from(&self, state: StateId) -> &HashMap<Symbol, StateId> {
        &self.states[state.0].transitions
    }

    /// Whether at least one ingested sequence ends at this state.
    ///
    /// Panics if `state` does not belong to this automaton.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.states[state.0].accepting
    }

    /// Ids of the records attached to a state.
    ///
    /// Panics if `state` does not belong to this automaton.
    pub fn records_at(&self, state: StateId) -> &[RecordId] {
        &self.states[state.0].records
    }

    /// Look up a record by id.
    pub fn record(&self, id: RecordId) -> Option<&WordRecord> {
        self.records.get(id.0)
    }

    /// All records, in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &WordRecord> {
        self.records.iter()
    }

    /// Number of states, root included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of transitions across all states.
    pub fn transition_count(&self) -> usize {
        self.transition_count
    }

    /// Iterate over all state ids in creation order.
    pub fn state_ids(&self) -> impl Iterator<Item = StateId> {
        (0..self.states.len()).map(StateId)
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syms(keys: &[&str]) -> Vec<Symbol> {
        keys.iter().copied().map(Symbol::new).collect()
    }

    fn rec(word: &str, keys: &[&str]) -> WordRecord {
        WordRecord::new(word, "en", syms(keys))
    }

    #[test]
    fn new_automaton_has_only_root() {
        let a = Automaton::new();
        assert_eq!(a.state_count(), 1);
        assert_eq!(a.transition_count(), 0);
        assert!(!a.is_accepting(a.root()));
    }

    #[test]
    fn insert_builds_linear_chain() {
        let mut a = Automaton::new();
        let seq = syms(&["un", "break", "able"]);
        let terminal = a.insert(&seq, rec("unbreakable", &["un", "break", "able"])).unwrap();

        assert_eq!(a.state_count(), 4); // root + 3
        assert_eq!(a.transition_count(), 3);
        assert!(a.is_accepting(terminal));
        assert!(!a.is_accepting(a.root()));
    }

    #[test]
    fn insert_empty_sequence_fails() {
        let mut a = Automaton::new();
        let err = a.insert(&[], rec("", &[])).unwrap_err();
        assert_eq!(err, DfaError::EmptySequence);
        assert_eq!(a.state_count(), 1);
    }

    #[test]
    fn shared_prefix_collapses() {
        let mut a = Automaton::new();
        let able = syms(&["un", "do", "able"]);
        let ing = syms(&["un", "do", "ing"]);
        a.insert(&able, rec("undoable", &["un", "do", "able"])).unwrap();
        a.insert(&ing, rec("undoing", &["un", "do", "ing"])).unwrap();

        // root -> un -> do shared, then one state each for able/ing.
        assert_eq!(a.state_count(), 5);
        assert_eq!(a.transition_count(), 4);

        let path_able = a.path_for(&able).unwrap();
        let path_ing = a.path_for(&ing).unwrap();
        assert_eq!(path_able[..3], path_ing[..3]);
        assert_ne!(path_able[3], path_ing[3]);
    }

    #[test]
    fn reinserting_same_sequence_is_idempotent() {
        let mut a = Automaton::new();
        let seq = syms(&["k", "æ", "t"]);
        a.insert(&seq, rec("cat", &["k", "æ", "t"])).unwrap();
        let states = a.state_count();
        let transitions = a.transition_count();

        a.insert(&seq, rec("cat", &["k", "æ", "t"])).unwrap();
        assert_eq!(a.state_count(), states);
        assert_eq!(a.transition_count(), transitions);
    }

    #[test]
    fn determinism_one_transition_per_symbol() {
        let mut a = Automaton::new();
        a.insert(&syms(&["un", "do"]), rec("undo", &["un", "do"])).unwrap();
        a.insert(&syms(&["un", "tie"]), rec("untie", &["un", "tie"])).unwrap();
        a.insert(&syms(&["un", "do", "ing"]), rec("undoing", &["un", "do", "ing"]))
            .unwrap();

        for state in a.state_ids() {
            let transitions = a.transitions_from(state);
            let mut keys: Vec<&str> = transitions.keys().map(Symbol::key).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), transitions.len());
        }
    }

    #[test]
    fn round_trip_path_ends_accepting_with_record() {
        let mut a = Automaton::new();
        let seq = syms(&["un", "break", "able"]);
        a.insert(&seq, rec("unbreakable", &["un", "break", "able"])).unwrap();

        let path = a.path_for(&seq).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], a.root());
        let terminal = *path.last().unwrap();
        assert!(a.is_accepting(terminal));

        let records = a.records_at(terminal);
        assert_eq!(records.len(), 1);
        assert_eq!(a.record(records[0]).unwrap().surface(), "unbreakable");
    }

    #[test]
    fn path_for_missing_sequence_fails() {
        let mut a = Automaton::new();
        a.insert(&syms(&["un", "do"]), rec("undo", &["un", "do"])).unwrap();

        let err = a.path_for(&syms(&["un", "tie"])).unwrap_err();
        assert_eq!(
            err,
            DfaError::NoSuchPath {
                position: 1,
                symbol: "tie".to_string(),
            }
        );
    }

    #[test]
    fn path_for_empty_sequence_fails() {
        let a = Automaton::new();
        assert_eq!(a.path_for(&[]).unwrap_err(), DfaError::EmptySequence);
    }

    #[test]
    fn prefix_of_inserted_word_is_not_accepting() {
        let mut a = Automaton::new();
        a.insert(&syms(&["un", "do", "ing"]), rec("undoing", &["un", "do", "ing"]))
            .unwrap();

        let path = a.path_for(&syms(&["un", "do"])).unwrap();
        assert!(!a.is_accepting(*path.last().unwrap()));
    }

    #[test]
    fn two_words_ending_at_same_state_share_records() {
        let mut a = Automaton::new();
        let seq = syms(&["do"]);
        a.insert(&seq, rec("do", &["do"])).unwrap();
        a.insert(&seq, rec("do", &["do"]).with_frequency(5)).unwrap();

        let terminal = *a.path_for(&seq).unwrap().last().unwrap();
        assert_eq!(a.records_at(terminal).len(), 2);
    }

    #[test]
    fn merge_from_deduplicates_shared_paths() {
        let mut left = Automaton::new();
        left.insert(&syms(&["un", "do"]), rec("undo", &["un", "do"])).unwrap();

        let mut right = Automaton::new();
        right
            .insert(&syms(&["un", "tie"]), rec("untie", &["un", "tie"]))
            .unwrap();
        right.insert(&syms(&["un", "do"]), rec("undo", &["un", "do"])).unwrap();

        let merged = left.merge_from(&right).unwrap();
        assert_eq!(merged, 2);

        // "un" and "do" states are shared; only "tie" is new.
        assert_eq!(left.state_count(), 4);
        assert!(left.path_for(&syms(&["un", "tie"])).is_ok());
        assert!(left.path_for(&syms(&["un", "do"])).is_ok());
    }

    #[test]
    fn merge_matches_direct_insertion() {
        let words: [(&str, &[&str]); 3] = [
            ("undo", &["un", "do"]),
            ("undoable", &["un", "do", "able"]),
            ("redo", &["re", "do"]),
        ];

        let mut direct = Automaton::new();
        for (word, keys) in &words {
            direct.insert(&syms(keys), rec(word, keys)).unwrap();
        }

        let mut left = Automaton::new();
        left.insert(&syms(words[0].1), rec(words[0].0, words[0].1)).unwrap();
        let mut right = Automaton::new();
        right.insert(&syms(words[1].1), rec(words[1].0, words[1].1)).unwrap();
        right.insert(&syms(words[2].1), rec(words[2].0, words[2].1)).unwrap();
        left.merge_from(&right).unwrap();

        assert_eq!(left.state_count(), direct.state_count());
        assert_eq!(left.transition_count(), direct.transition_count());
    }

    #[test]
    fn state_ids_are_dense_and_creation_ordered() {
        let mut a = Automaton::new();
        a.insert(&syms(&["a", "b"]), rec("ab", &["a", "b"])).unwrap();
        let ids: Vec<usize> = a.state_ids().map(StateId::index).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
