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
//! # NFA
//!
//! An NFA is a state machine where each state can have transitions to more than one target state for a symbol - this
//! allows it to be in more than one state at once, which is the property that makes it non-deterministic. It can also
//! have 'epsilon' transitions, which are followed without reading any input, and more than one initial state.
//!
//! NFAs are the more general representation, so the structural operations are defined here: subset construction
//! (`to_dfa`) and reversal (`reversed`). Any missing entry in the transition table stands for the empty set.
//!
//! ```
//! # use finite_automata::*;
//! // Strings ending in 'ab'
//! let mut builder = NfaBuilder::new(Alphabet::from("ab"));
//! builder.add_initial("q0");
//! builder.add_transition("q0", 'a', "q0");
//! builder.add_transition("q0", 'b', "q0");
//! builder.add_transition("q0", 'a', "q1");
//! builder.add_transition("q1", 'b', "q2");
//! builder.accept("q2");
//!
//! let nfa = builder.build().unwrap();
//! assert!(nfa.to_dfa().process("aab".chars()) == Ok(true));
//! assert!(nfa.process("aba".chars()) == Ok(false));
//! ```
//!

use std::collections::BTreeMap;
use std::fmt::Debug;

use super::alphabet::*;
use super::dfa::*;
use super::dfa_compiler::*;
use super::error::*;
use super::state_machine::*;
use super::state_set::*;

///
/// The transition table of an NFA: for each state, the set of states that can follow on each symbol or epsilon
///
pub type NfaTable<Symbol> = BTreeMap<StateId, BTreeMap<Input<Symbol>, StateSet>>;

///
/// A non-deterministic finite automaton with epsilon transitions and multiple initial states
///
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Nfa<Symbol> {
    /// The symbols this automaton reads
    alphabet: Alphabet<Symbol>,

    /// Every state in the automaton (the keys of the transition table)
    states: StateSet,

    /// Transitions for each state
    transitions: NfaTable<Symbol>,

    /// The states the automaton starts in
    initial: StateSet,

    /// The accepting states
    accepting: StateSet,
}

impl<Symbol: Ord + Clone + Debug> Nfa<Symbol> {
    ///
    /// Creates a new NFA from its transition table
    ///
    /// The states of the NFA are the keys of the transition table. The table doesn't need to have an entry for every
    /// symbol, but every state that is mentioned must be declared and every label must be epsilon or a symbol from the
    /// alphabet. Fails with `MalformedNfa` if this isn't the case.
    ///
    pub fn new<Initial: IntoIterator<Item = StateId>, Accepting: IntoIterator<Item = StateId>>(alphabet: Alphabet<Symbol>, transitions: NfaTable<Symbol>, initial: Initial, accepting: Accepting) -> AutomatonResult<Nfa<Symbol>> {
        let states: StateSet    = transitions.keys().cloned().collect();
        let initial             = deduped(initial);
        let accepting           = deduped(accepting);

        if let Some(undeclared) = initial.iter().find(|state| !states.contains(*state)) {
            return Err(AutomatonError::MalformedNfa(format!("initial state {} is not declared", undeclared)));
        }

        if let Some(undeclared) = accepting.iter().find(|state| !states.contains(*state)) {
            return Err(AutomatonError::MalformedNfa(format!("accepting state {} is not declared", undeclared)));
        }

        for (state, row) in transitions.iter() {
            for (input, targets) in row.iter() {
                if let Input::Symbol(ref symbol) = *input {
                    if !alphabet.contains(symbol) {
                        return Err(AutomatonError::MalformedNfa(format!("state {} has a transition for {:?}, which is not in the alphabet", state, symbol)));
                    }
                }

                if let Some(target) = targets.iter().find(|target| !states.contains(*target)) {
                    return Err(AutomatonError::MalformedNfa(format!("state {} has a transition to undeclared state {}", state, target)));
                }
            }
        }

        Ok(Nfa::from_parts(alphabet, transitions, initial, accepting))
    }

    ///
    /// Creates an NFA from parts that are already known to be consistent
    ///
    pub(crate) fn from_parts(alphabet: Alphabet<Symbol>, transitions: NfaTable<Symbol>, initial: StateSet, accepting: StateSet) -> Nfa<Symbol> {
        let states = transitions.keys().cloned().collect();

        Nfa { alphabet: alphabet, states: states, transitions: transitions, initial: initial, accepting: accepting }
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
    pub fn initial(&self) -> &StateSet {
        &self.initial
    }

    #[inline]
    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    #[inline]
    pub fn transitions(&self) -> &NfaTable<Symbol> {
        &self.transitions
    }

    ///
    /// Retrieves the states that follow `state` for a particular input (`None` stands for the empty set)
    ///
    pub fn targets(&self, state: &StateId, input: &Input<Symbol>) -> Option<&StateSet> {
        self.transitions.get(state).and_then(|row| row.get(input))
    }

    #[inline]
    pub fn count_states(&self) -> usize {
        self.states.len()
    }

    ///
    /// Returns the set of states that can be reached from the specified states by following zero or more epsilon
    /// transitions
    ///
    /// Fails with `InvalidState` if any of the states are not part of this automaton.
    ///
    pub fn epsilon_closure(&self, states: &StateSet) -> AutomatonResult<StateSet> {
        self.check_states(states)?;
        Ok(self.closure(states.iter().cloned()))
    }

    ///
    /// Runs the automaton for one step from a set of states
    ///
    /// The states should already be epsilon-closed. The result is the epsilon closure of every state reachable on
    /// `input` from one of the states. Fails with `InvalidSymbol` if `input` is epsilon or isn't in the alphabet.
    ///
    pub fn step(&self, states: &StateSet, input: &Input<Symbol>) -> AutomatonResult<StateSet> {
        let symbol = match *input {
            Input::Epsilon              => return Err(AutomatonError::InvalidSymbol("epsilon".to_string())),
            Input::Symbol(ref symbol)   => symbol
        };

        self.alphabet.check(symbol)?;
        self.check_states(states)?;

        Ok(self.advance(states, symbol))
    }

    ///
    /// True if this automaton accepts the specified string of symbols
    ///
    pub fn process<Symbols: IntoIterator<Item = Symbol>>(&self, input: Symbols) -> AutomatonResult<bool> {
        let mut states = self.closure(self.initial.iter().cloned());

        for symbol in input {
            self.alphabet.check(&symbol)?;
            states = self.advance(&states, &symbol);
        }

        Ok(!states.is_disjoint(&self.accepting))
    }

    ///
    /// Returns a DFA that accepts the same language as this NFA
    ///
    /// State names in the DFA are generated from the sets of states they represent, see `StateIndex`.
    ///
    pub fn to_dfa(&self) -> Dfa<Symbol> {
        DfaCompiler::build(self)
    }

    ///
    /// As for `to_dfa`, but fails with `TooComplexToDeterminize` if the DFA would have more than `max_states` states
    ///
    pub fn to_dfa_with_limit(&self, max_states: usize) -> AutomatonResult<Dfa<Symbol>> {
        DfaCompiler::with_limit(self, max_states).compile()
    }

    ///
    /// Returns the NFA generated by reversing every transition and swapping the initial and accepting states
    ///
    /// The result accepts exactly the strings whose reverse is accepted by this automaton.
    ///
    pub fn reversed(&self) -> Nfa<Symbol> {
        let mut transitions: NfaTable<Symbol> = self.states.iter()
            .map(|state| (state.clone(), BTreeMap::new()))
            .collect();

        for (source, row) in self.transitions.iter() {
            for (input, targets) in row.iter() {
                for target in targets.iter() {
                    if let Some(reversed_row) = transitions.get_mut(target) {
                        reversed_row.entry(input.clone())
                            .or_insert_with(StateSet::new)
                            .insert(source.clone());
                    }
                }
            }
        }

        Nfa::from_parts(self.alphabet.clone(), transitions, self.accepting.clone(), self.initial.clone())
    }

    ///
    /// Returns the minimal DFA that accepts the same language as this NFA
    ///
    pub fn minimized(&self) -> Dfa<Symbol> {
        self.to_dfa().minimized()
    }

    ///
    /// Epsilon closure of some states that are known to be part of this automaton
    ///
    pub(crate) fn closure<States: IntoIterator<Item = StateId>>(&self, states: States) -> StateSet {
        let epsilon     = Input::Epsilon;
        let mut result  = StateSet::new();
        let mut stack: Vec<StateId> = states.into_iter().collect();

        while let Some(state) = stack.pop() {
            if !result.contains(&state) {
                if let Some(targets) = self.targets(&state, &epsilon) {
                    stack.extend(targets.iter().cloned());
                }

                result.insert(state);
            }
        }

        result
    }

    ///
    /// One step of the automaton from an epsilon-closed set of states, on a symbol known to be in the alphabet
    ///
    pub(crate) fn advance(&self, states: &StateSet, symbol: &Symbol) -> StateSet {
        let input   = Input::Symbol(symbol.clone());
        let moved   = states.iter()
            .filter_map(|state| self.targets(state, &input))
            .flat_map(|targets| targets.iter().cloned());

        self.closure(moved)
    }

    fn check_states(&self, states: &StateSet) -> AutomatonResult<()> {
        match states.iter().find(|state| !self.states.contains(*state)) {
            Some(undeclared)    => Err(AutomatonError::InvalidState(undeclared.to_string())),
            None                => Ok(())
        }
    }
}

impl<Symbol: Ord + Clone + Debug> StateMachine<Symbol> for Nfa<Symbol> {
    fn alphabet(&self) -> &Alphabet<Symbol> {
        Nfa::alphabet(self)
    }

    fn count_states(&self) -> usize {
        Nfa::count_states(self)
    }

    fn process<Symbols: IntoIterator<Item = Symbol>>(&self, input: Symbols) -> AutomatonResult<bool> {
        Nfa::process(self, input)
    }

    fn minimized(&self) -> Dfa<Symbol> {
        Nfa::minimized(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::nfa_builder::*;

    use pretty_assertions::assert_eq;

    fn set(names: &[&str]) -> StateSet {
        deduped(names.iter().map(|name| StateId::from(*name)))
    }

    fn all_strings(alphabet: &[char], max_length: usize) -> Vec<Vec<char>> {
        let mut result: Vec<Vec<char>>  = vec![vec![]];
        let mut current: Vec<Vec<char>> = vec![vec![]];

        for _ in 0..max_length {
            let mut next = vec![];
            for prefix in current.iter() {
                for symbol in alphabet.iter() {
                    let mut string: Vec<char> = prefix.clone();
                    string.push(*symbol);
                    next.push(string);
                }
            }

            result.extend(next.iter().cloned());
            current = next;
        }

        result
    }

    ///
    /// Strings ending in 'ab'
    ///
    fn ends_in_ab() -> Nfa<char> {
        let mut builder = NfaBuilder::new(Alphabet::from("ab"));

        builder.add_initial("q0");
        builder.add_transition("q0", 'a', "q0");
        builder.add_transition("q0", 'b', "q0");
        builder.add_transition("q0", 'a', "q1");
        builder.add_transition("q1", 'b', "q2");
        builder.accept("q2");

        builder.build().unwrap()
    }

    ///
    /// Strings matching a*b*, using an epsilon transition between the two loops
    ///
    fn a_star_b_star() -> Nfa<char> {
        let mut builder = NfaBuilder::new(Alphabet::from("ab"));

        builder.add_initial("as");
        builder.add_transition("as", 'a', "as");
        builder.add_epsilon("as", "bs");
        builder.add_transition("bs", 'b', "bs");
        builder.accept("bs");

        builder.build().unwrap()
    }

    ///
    /// Strings that are either all 'a's or all 'b's (with at least one symbol), using two initial states
    ///
    fn all_same_symbol() -> Nfa<char> {
        let mut builder = NfaBuilder::new(Alphabet::from("ab"));

        builder.add_initial("a0");
        builder.add_initial("b0");
        builder.add_transition("a0", 'a', "a1");
        builder.add_transition("a1", 'a', "a1");
        builder.add_transition("b0", 'b', "b1");
        builder.add_transition("b1", 'b', "b1");
        builder.accept("a1");
        builder.accept("b1");

        builder.build().unwrap()
    }

    ///
    /// A chain and a cycle of epsilon transitions
    ///
    fn epsilon_chain() -> Nfa<char> {
        let mut builder = NfaBuilder::new(Alphabet::from("a"));

        builder.add_initial("e0");
        builder.add_epsilon("e0", "e1");
        builder.add_epsilon("e1", "e2");
        builder.add_epsilon("e2", "e1");
        builder.add_transition("e2", 'a', "e3");
        builder.add_epsilon("e3", "e0");
        builder.create_state("e4");
        builder.accept("e3");

        builder.build().unwrap()
    }

    fn test_automata() -> Vec<Nfa<char>> {
        vec![ends_in_ab(), a_star_b_star(), all_same_symbol()]
    }

    #[test]
    fn process_ends_in_ab() {
        let nfa = ends_in_ab();

        assert!(nfa.process("aab".chars()) == Ok(true));
        assert!(nfa.process("ab".chars()) == Ok(true));
        assert!(nfa.process("aba".chars()) == Ok(false));
        assert!(nfa.process("".chars()) == Ok(false));
    }

    #[test]
    fn process_follows_epsilon_transitions() {
        let nfa = a_star_b_star();

        assert!(nfa.process("".chars()) == Ok(true));
        assert!(nfa.process("aabb".chars()) == Ok(true));
        assert!(nfa.process("bbb".chars()) == Ok(true));
        assert!(nfa.process("aba".chars()) == Ok(false));
    }

    #[test]
    fn process_starts_in_every_initial_state() {
        let nfa = all_same_symbol();

        assert!(nfa.process("aaa".chars()) == Ok(true));
        assert!(nfa.process("bb".chars()) == Ok(true));
        assert!(nfa.process("ab".chars()) == Ok(false));
        assert!(nfa.process("".chars()) == Ok(false));
    }

    #[test]
    fn process_rejects_symbols_outside_alphabet() {
        assert!(ends_in_ab().process("abc".chars()) == Err(AutomatonError::InvalidSymbol("'c'".to_string())));
    }

    #[test]
    fn epsilon_closure_follows_chains_and_cycles() {
        let nfa = epsilon_chain();

        assert_eq!(nfa.epsilon_closure(&set(&["e0"])), Ok(set(&["e0", "e1", "e2"])));
        assert_eq!(nfa.epsilon_closure(&set(&["e3"])), Ok(set(&["e0", "e1", "e2", "e3"])));
        assert_eq!(nfa.epsilon_closure(&set(&["e4"])), Ok(set(&["e4"])));
        assert_eq!(nfa.epsilon_closure(&StateSet::new()), Ok(StateSet::new()));
    }

    #[test]
    fn epsilon_closure_is_idempotent() {
        let nfa = epsilon_chain();

        for state in nfa.states().iter() {
            let once    = nfa.epsilon_closure(&set(&[state.as_str()])).unwrap();
            let twice   = nfa.epsilon_closure(&once).unwrap();

            assert_eq!(once, twice);
        }
    }

    #[test]
    fn epsilon_closure_rejects_unknown_states() {
        let nfa = epsilon_chain();

        assert_eq!(nfa.epsilon_closure(&set(&["e0", "nowhere"])), Err(AutomatonError::InvalidState("nowhere".to_string())));
    }

    #[test]
    fn step_moves_and_closes() {
        let nfa     = epsilon_chain();
        let start   = nfa.epsilon_closure(nfa.initial()).unwrap();

        assert_eq!(nfa.step(&start, &Input::Symbol('a')), Ok(set(&["e0", "e1", "e2", "e3"])));
    }

    #[test]
    fn step_with_no_transitions_is_empty() {
        let nfa = ends_in_ab();

        assert_eq!(nfa.step(&set(&["q2"]), &Input::Symbol('a')), Ok(StateSet::new()));
    }

    #[test]
    fn step_rejects_epsilon() {
        let nfa = ends_in_ab();

        assert_eq!(nfa.step(&set(&["q0"]), &Input::Epsilon), Err(AutomatonError::InvalidSymbol("epsilon".to_string())));
    }

    #[test]
    fn step_rejects_symbols_outside_alphabet() {
        let nfa = ends_in_ab();

        assert_eq!(nfa.step(&set(&["q0"]), &Input::Symbol('z')), Err(AutomatonError::InvalidSymbol("'z'".to_string())));
    }

    #[test]
    fn new_rejects_undeclared_states() {
        let mut table: NfaTable<char> = NfaTable::new();
        table.insert(StateId::from("q0"), vec![(Input::Symbol('a'), set(&["q1"]))].into_iter().collect());

        let result = Nfa::new(Alphabet::from("a"), table.clone(), vec![StateId::from("q0")], vec![]);
        assert!(result.unwrap_err().is_malformed());

        table.insert(StateId::from("q1"), BTreeMap::new());
        let result = Nfa::new(Alphabet::from("a"), table.clone(), vec![StateId::from("q0")], vec![StateId::from("q1")]);
        assert!(result.is_ok());

        let result = Nfa::new(Alphabet::from("a"), table.clone(), vec![StateId::from("q7")], vec![]);
        assert_eq!(result, Err(AutomatonError::MalformedNfa("initial state q7 is not declared".to_string())));

        let result = Nfa::new(Alphabet::from("a"), table, vec![StateId::from("q0")], vec![StateId::from("q7")]);
        assert!(result.unwrap_err().is_malformed());
    }

    #[test]
    fn new_rejects_symbols_outside_alphabet() {
        let mut table: NfaTable<char> = NfaTable::new();
        table.insert(StateId::from("q0"), vec![(Input::Symbol('x'), set(&["q0"]))].into_iter().collect());

        let result = Nfa::new(Alphabet::from("a"), table, vec![StateId::from("q0")], vec![]);

        assert!(result.unwrap_err().is_malformed());
    }

    #[test]
    fn to_dfa_agrees_on_scenario() {
        let dfa = ends_in_ab().to_dfa();

        assert!(dfa.process("aab".chars()) == Ok(true));
        assert!(dfa.process("aba".chars()) == Ok(false));
    }

    #[test]
    fn to_dfa_agrees_with_nfa() {
        for nfa in test_automata() {
            let dfa = nfa.to_dfa();

            for string in all_strings(&['a', 'b'], 6) {
                assert_eq!(nfa.process(string.iter().cloned()), dfa.process(string.iter().cloned()), "disagree on {:?}", string);
            }
        }
    }

    #[test]
    fn minimized_agrees_with_nfa() {
        for nfa in test_automata() {
            let minimal = nfa.minimized();

            assert!(minimal.is_minimized());
            for string in all_strings(&['a', 'b'], 6) {
                assert_eq!(nfa.process(string.iter().cloned()), minimal.process(string.iter().cloned()), "disagree on {:?}", string);
            }
        }
    }

    #[test]
    fn minimized_state_counts() {
        // a*b* needs states for 'reading as', 'reading bs' and 'failed'
        assert!(a_star_b_star().minimized().count_states() == 3);

        // ends in ab needs states for 'no progress', 'seen a' and 'seen ab'
        assert!(ends_in_ab().minimized().count_states() == 3);
    }

    #[test]
    fn reversed_swaps_initial_and_accepting() {
        let nfa         = ends_in_ab();
        let reversed    = nfa.reversed();

        assert_eq!(reversed.initial(), nfa.accepting());
        assert_eq!(reversed.accepting(), nfa.initial());
        assert_eq!(reversed.states(), nfa.states());
        assert_eq!(reversed.targets(&StateId::from("q2"), &Input::Symbol('b')), Some(&set(&["q1"])));
        assert_eq!(reversed.targets(&StateId::from("q0"), &Input::Symbol('a')), Some(&set(&["q0"])));
    }

    #[test]
    fn reversed_reverses_epsilon_transitions() {
        let reversed = a_star_b_star().reversed();

        assert_eq!(reversed.targets(&StateId::from("bs"), &Input::Epsilon), Some(&set(&["as"])));
        assert_eq!(reversed.targets(&StateId::from("as"), &Input::Epsilon), None);
    }

    #[test]
    fn reversed_accepts_reversed_strings() {
        for nfa in test_automata() {
            let reversed = nfa.reversed();

            for string in all_strings(&['a', 'b'], 6) {
                let backwards: Vec<char> = string.iter().rev().cloned().collect();

                assert_eq!(nfa.process(string.iter().cloned()), reversed.process(backwards), "disagree on {:?}", string);
            }
        }
    }

    #[test]
    fn reversing_twice_gives_same_automaton() {
        let nfa = all_same_symbol();

        assert_eq!(nfa.reversed().reversed(), nfa);
    }

    #[test]
    fn operations_leave_original_unchanged() {
        let nfa         = a_star_b_star();
        let original    = nfa.clone();

        assert_eq!(nfa.to_dfa(), nfa.to_dfa());
        assert_eq!(nfa.reversed(), nfa.reversed());
        assert_eq!(nfa.minimized(), nfa.minimized());
        nfa.process("ab".chars()).unwrap();

        assert_eq!(nfa, original);
    }
}
