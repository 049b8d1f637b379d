// Read-only traversal and export facade consumed by chart renderers.
//
// Everything here is deterministic for a fixed insertion order: reachability
// is breadth-first with successors visited in creation order, and transition
// listings are sorted by symbol key, so two automatons built from the same
// input produce byte-identical exports.

use std::collections::VecDeque;

use serde::Serialize;
use wordgraph_core::record::WordRecord;
use wordgraph_core::symbol::Symbol;

use crate::automaton::{Automaton, StateId};

/// Enumerate all states reachable from the root, breadth-first.
///
/// Successors of each state are expanded in creation order (ascending id),
/// which makes the result stable across runs with the same insertion order.
/// Every state of an automaton built purely through `insert` is reachable,
/// so this normally returns all states.
pub fn reachable_states(automaton: &Automaton) -> Vec<StateId> {
    let mut visited = vec![false; automaton.state_count()];
    let mut order = Vec::with_capacity(automaton.state_count());
    let mut queue = VecDeque::new();

    visited[automaton.root().index()] = true;
    queue.push_back(automaton.root());

    while let Some(state) = queue.pop_front() {
        order.push(state);
        let mut successors: Vec<StateId> = automaton
            .transitions_from(state)
            .values()
            .copied()
            .collect();
        successors.sort_unstable();
        for next in successors {
            if !visited[next.index()] {
                visited[next.index()] = true;
                queue.push_back(next);
            }
        }
    }
    order
}

/// Outgoing transitions of a state, sorted by symbol key.
pub fn sorted_transitions(automaton: &Automaton, state: StateId) -> Vec<(&Symbol, StateId)> {
    let mut transitions: Vec<(&Symbol, StateId)> = automaton
        .transitions_from(state)
        .iter()
        .map(|(symbol, &target)| (symbol, target))
        .collect();
    transitions.sort_unstable_by(|(a, _), (b, _)| a.key().cmp(b.key()));
    transitions
}

/// Resolve the records attached to a state.
pub fn records_for<'a>(automaton: &'a Automaton, state: StateId) -> Vec<&'a WordRecord> {
    automaton
        .records_at(state)
        .iter()
        .filter_map(|&id| automaton.record(id))
        .collect()
}

/// One state in an exported chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartState {
    pub id: usize,
    pub accepting: bool,
    /// Indices into [`ChartData::records`].
    pub records: Vec<usize>,
}

/// One labeled edge in an exported chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartTransition {
    pub from: usize,
    pub symbol: String,
    pub label: String,
    pub to: usize,
}

/// Provenance entry in an exported chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartRecord {
    pub surface: String,
    pub language: String,
    pub frequency: u32,
}

/// The full (states, transitions, records) triple handed to a renderer.
///
/// States appear in stable breadth-first order; each state's transitions are
/// sorted by symbol key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub states: Vec<ChartState>,
    pub transitions: Vec<ChartTransition>,
    pub records: Vec<ChartRecord>,
}

/// Export the automaton as a serializable chart snapshot.
pub fn export(automaton: &Automaton) -> ChartData {
    let mut states = Vec::with_capacity(automaton.state_count());
    let mut transitions = Vec::new();

    for state in reachable_states(automaton) {
        states.push(ChartState {
            id: state.index(),
            accepting: automaton.is_accepting(state),
            records: automaton
                .records_at(state)
                .iter()
                .map(|id| id.index())
                .collect(),
        });
        for (symbol, target) in sorted_transitions(automaton, state) {
            transitions.push(ChartTransition {
                from: state.index(),
                symbol: symbol.key().to_string(),
                label: symbol.label().to_string(),
                to: target.index(),
            });
        }
    }

    let records = automaton
        .records()
        .map(|record| ChartRecord {
            surface: record.surface().to_string(),
            language: record.language().to_string(),
            frequency: record.frequency(),
        })
        .collect();

    ChartData {
        states,
        transitions,
        records,
    }
}
