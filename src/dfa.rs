//
//   Copyright 2016 Andrew Hunter
//
//   Licensed under the Apache License, Version 2.0 (the "License");
//   you may not use this file except in compliance with the License.
//   You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
//
//   Unless required by applicable law or agreed to in writing, software
//   distributed under the License is distributed on an "AS IS" BASIS,
//   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//   See the License for the specific language governing permissions and
//   limitations under the License.
//

//!
//! # DFA
//!
//! A DFA is a deterministic finite automaton: every state has exactly one transition for every symbol in the alphabet.
//! That makes testing a string for membership a simple walk through the transition table.
//!
//! Operations that restructure the automaton (minimization in particular) lift it to an `Nfa`, transform it there, and
//! then turn it back into a DFA using subset construction. State names in the result of these operations are
//! generated, and have no relationship to the names used in the original automaton.
//!
//! A DFA can be created directly from a transition table or by using a `DfaBuilder`:
//!
//! ```
//! # use finite_automata::*;
//! let mut builder = DfaBuilder::new(Alphabet::from("ab"));
//! builder.set_initial("s0");
//! builder.transition("s0", 'a', "s1");
//! builder.transition("s0", 'b', "s0");
//! builder.transition("s1", 'a', "s1");
//! builder.transition("s1", 'b', "s1");
//! builder.accept("s1");
//!
//! let dfa = builder.build().unwrap();
//! assert!(dfa.process("bba".chars()) == Ok(true));
//! assert!(dfa.find_passing() == Some(vec!['a']));
//! ```
//!

use std::collections::BTreeMap;
use std::collections::VecDeque;
use std::fmt::Debug;

use log::{debug, trace};

use super::alphabet::*;
use super::error::*;
use super::nfa::*;
use super::state_machine::*;
use super::state_set::*;

///
/// The transition table of a DFA: for each state, the state to move to on each symbol
///
pub type DfaTable<Symbol> = BTreeMap<StateId, BTreeMap<Symbol, StateId>>;

///
/// A deterministic finite automaton with a total transition function
///
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Dfa<Symbol> {
    /// The symbols this automaton reads
    alphabet: Alphabet<Symbol>,

    /// Every state in the automaton (the keys of the transition table)
    states: StateSet,

    /// Transitions for each state
    transitions: DfaTable<Symbol>,

    /// The state the automaton starts in
    initial: StateId,

    /// The accepting states
    accepting: StateSet,

    /// True if this automaton was produced by minimization
    minimized: bool,
}

impl<Symbol: Ord + Clone + Debug> Dfa<Symbol> {
    ///
    /// Creates a new DFA from its transition table
    ///
    /// The states of the DFA are the keys of the transition table. Every state must have a transition for every
    /// symbol in the alphabet, and every state that is mentioned (as a target, the initial state or an accepting
    /// state) must be declared. Fails with `MalformedDfa` if this isn't the case.
    ///
    pub fn new<Initial: Into<StateId>, Accepting: IntoIterator<Item = StateId>>(alphabet: Alphabet<Symbol>, transitions: DfaTable<Symbol>, initial: Initial, accepting: Accepting) -> AutomatonResult<Dfa<Symbol>> {
        let states: StateSet    = transitions.keys().cloned().collect();
        let initial             = initial.into();
        let accepting           = deduped(accepting);

        if !states.contains(&initial) {
            return Err(AutomatonError::MalformedDfa(format!("initial state {} is not declared", initial)));
        }

        if let Some(undeclared) = accepting.iter().find(|state| !states.contains(*state)) {
            return Err(AutomatonError::MalformedDfa(format!("accepting state {} is not declared", undeclared)));
        }

        for (state, row) in transitions.iter() {
            if let Some(symbol) = row.keys().find(|symbol| !alphabet.contains(*symbol)) {
                return Err(AutomatonError::MalformedDfa(format!("state {} has a transition for {:?}, which is not in the alphabet", state, symbol)));
            }

            if let Some(symbol) = alphabet.iter().find(|symbol| !row.contains_key(*symbol)) {
                return Err(AutomatonError::MalformedDfa(format!("state {} has no transition for {:?}", state, symbol)));
            }

            if let Some(target) = row.values().find(|target| !states.contains(*target)) {
                return Err(AutomatonError::MalformedDfa(format!("state {} has a transition to undeclared state {}", state, target)));
            }
        }

        Ok(Dfa {
            alphabet:       alphabet,
            states:         states,
            transitions:    transitions,
            initial:        initial,
            accepting:      accepting,
            minimized:      false
        })
    }

    ///
    /// Creates a DFA from parts that are already known to be consistent
    ///
    pub(crate) fn from_parts(alphabet: Alphabet<Symbol>, transitions: DfaTable<Symbol>, initial: StateId, accepting: StateSet) -> Dfa<Symbol> {
        let states = transitions.keys().cloned().collect();

        Dfa { alphabet: alphabet, states: states, transitions: transitions, initial: initial, accepting: accepting, minimized: false }
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet<Symbol> {
        &self.alphabet
    }

    ///
    /// The states of this automaton, in canonical order
    ///
    #[inline]
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    #[inline]
    pub fn initial(&self) -> &StateId {
        &self.initial
    }

    #[inline]
    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    #[inline]
    pub fn is_accepting(&self, state: &StateId) -> bool {
        self.accepting.contains(state)
    }

    ///
    /// The complete transition table for this automaton
    ///
    #[inline]
    pub fn transitions(&self) -> &DfaTable<Symbol> {
        &self.transitions
    }

    ///
    /// Retrieves the state reached from `state` on reading `symbol`
    ///
    pub fn transition(&self, state: &StateId, symbol: &Symbol) -> Option<&StateId> {
        self.transitions.get(state).and_then(|row| row.get(symbol))
    }

    #[inline]
    pub fn count_states(&self) -> usize {
        self.states.len()
    }

    ///
    /// True if this automaton was generated by `minimized()`
    ///
    /// This records where the automaton came from rather than checking that it's minimal: callers can use it to avoid
    /// minimizing the same automaton twice.
    ///
    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    ///
    /// True if this automaton accepts the specified string of symbols
    ///
    pub fn process<Symbols: IntoIterator<Item = Symbol>>(&self, input: Symbols) -> AutomatonResult<bool> {
        let mut state = &self.initial;

        for symbol in input {
            self.alphabet.check(&symbol)?;

            let row = self.transitions.get(state)
                .ok_or_else(|| AutomatonError::InvalidState(state.to_string()))?;
            state = row.get(&symbol)
                .ok_or_else(|| AutomatonError::UndefinedTransition { state: state.to_string(), symbol: format!("{:?}", symbol) })?;
        }

        Ok(self.accepting.contains(state))
    }

    ///
    /// Returns an equivalent DFA with any states that can't be reached from the initial state removed
    ///
    pub fn without_unreachables(&self) -> Dfa<Symbol> {
        let mut reached     = StateSet::new();
        let mut processing  = VecDeque::new();

        reached.insert(self.initial.clone());
        processing.push_back(&self.initial);

        while let Some(state) = processing.pop_front() {
            if let Some(row) = self.transitions.get(state) {
                for symbol in self.alphabet.iter() {
                    if let Some(next) = row.get(symbol) {
                        if reached.insert(next.clone()) {
                            processing.push_back(next);
                        }
                    }
                }
            }
        }

        trace!("without_unreachables: {} of {} states are reachable", reached.len(), self.states.len());

        let transitions = self.transitions.iter()
            .filter(|(state, _)| reached.contains(*state))
            .map(|(state, row)| (state.clone(), row.clone()))
            .collect();
        let accepting = self.accepting.intersection(&reached).cloned().collect();

        Dfa {
            alphabet:       self.alphabet.clone(),
            states:         reached,
            transitions:    transitions,
            initial:        self.initial.clone(),
            accepting:      accepting,
            minimized:      self.minimized
        }
    }

    ///
    /// Returns one of the shortest strings accepted by this automaton, or `None` if it accepts nothing
    ///
    /// The search is breadth-first, trying symbols in alphabet order. Where there are several shortest strings, the
    /// one returned is the one that comes first when symbols are ranked by their position in the alphabet (so with the
    /// alphabet `"ba"`, `"b"` is preferred over `"a"`). If the initial state is accepting, the result is the empty
    /// string.
    ///
    pub fn find_passing(&self) -> Option<Vec<Symbol>> {
        if self.accepting.contains(&self.initial) {
            return Some(vec![]);
        }

        let mut reached: BTreeMap<&StateId, Vec<Symbol>>    = BTreeMap::new();
        let mut processing                                  = VecDeque::new();

        reached.insert(&self.initial, vec![]);
        processing.push_back(&self.initial);

        while let Some(state) = processing.pop_front() {
            let row = match self.transitions.get(state) {
                Some(row)   => row,
                None        => continue
            };

            for symbol in self.alphabet.iter() {
                let next = match row.get(symbol) {
                    Some(next)  => next,
                    None        => continue
                };

                if reached.contains_key(next) {
                    continue;
                }

                let mut path = reached.get(state).cloned().unwrap_or_default();
                path.push(symbol.clone());

                if self.accepting.contains(next) {
                    trace!("find_passing: accepting state {} reached after {} symbols", next, path.len());
                    return Some(path);
                }

                reached.insert(next, path);
                processing.push_back(next);
            }
        }

        None
    }

    ///
    /// Returns the NFA that is equivalent to this DFA
    ///
    /// The NFA has the same states as this automaton, a single initial state and no epsilon transitions.
    ///
    pub fn to_nfa(&self) -> Nfa<Symbol> {
        let transitions = self.transitions.iter()
            .map(|(state, row)| {
                let nfa_row = row.iter()
                    .map(|(symbol, target)| (Input::Symbol(symbol.clone()), deduped(vec![target.clone()])))
                    .collect();
                (state.clone(), nfa_row)
            })
            .collect();

        Nfa::from_parts(self.alphabet.clone(), transitions, deduped(vec![self.initial.clone()]), self.accepting.clone())
    }

    ///
    /// Returns the minimal DFA that accepts the same language as this one
    ///
    /// This uses Brzozowski's algorithm: the automaton is reversed and determinized twice. Determinizing the reversed
    /// automaton produces a DFA where no two states accept the same set of suffixes, so doing this for both directions
    /// leaves an automaton with no redundant states.
    ///
    pub fn minimized(&self) -> Dfa<Symbol> {
        let mut result = self.to_nfa().reversed().to_dfa()
            .to_nfa().reversed().to_dfa();
        result.minimized = true;

        debug!("minimized: {} states reduced to {}", self.count_states(), result.count_states());

        result
    }
}

impl<Symbol: Ord + Clone + Debug> StateMachine<Symbol> for Dfa<Symbol> {
    fn alphabet(&self) -> &Alphabet<Symbol> {
        Dfa::alphabet(self)
    }

    fn count_states(&self) -> usize {
        Dfa::count_states(self)
    }

    fn process<Symbols: IntoIterator<Item = Symbol>>(&self, input: Symbols) -> AutomatonResult<bool> {
        Dfa::process(self, input)
    }

    fn minimized(&self) -> Dfa<Symbol> {
        Dfa::minimized(self)
    }
}
