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
//! # NFA builder
//!
//! Builds up the transition table of an NFA. Any state mentioned in a call to the builder is declared, so the only
//! thing that `build()` can reject is a symbol that isn't in the alphabet.
//!

use std::collections::BTreeMap;
use std::fmt::Debug;

use super::alphabet::*;
use super::error::*;
use super::nfa::*;
use super::state_set::*;

///
/// Builds an NFA one transition at a time
///
pub struct NfaBuilder<Symbol> {
    alphabet: Alphabet<Symbol>,
    transitions: NfaTable<Symbol>,
    initial: StateSet,
    accepting: StateSet,
}

impl<Symbol: Ord + Clone + Debug> NfaBuilder<Symbol> {
    pub fn new(alphabet: Alphabet<Symbol>) -> NfaBuilder<Symbol> {
        NfaBuilder { alphabet: alphabet, transitions: BTreeMap::new(), initial: StateSet::new(), accepting: StateSet::new() }
    }

    ///
    /// Ensures that a state with the specified ID exists in this state machine
    ///
    pub fn create_state<State: Into<StateId>>(&mut self, state: State) {
        self.transitions.entry(state.into()).or_insert_with(BTreeMap::new);
    }

    ///
    /// Adds a transition from a particular state to another on seeing a symbol
    ///
    /// A state can have any number of transitions for the same symbol.
    ///
    pub fn add_transition<Source: Into<StateId>, Target: Into<StateId>>(&mut self, state: Source, for_symbol: Symbol, new_state: Target) {
        self.add_input(state.into(), Input::Symbol(for_symbol), new_state.into());
    }

    ///
    /// Adds an epsilon transition, so that whenever the automaton is in `state` it is also in `new_state`
    ///
    pub fn add_epsilon<Source: Into<StateId>, Target: Into<StateId>>(&mut self, state: Source, new_state: Target) {
        self.add_input(state.into(), Input::Epsilon, new_state.into());
    }

    ///
    /// Adds a state to the set of states the automaton starts in
    ///
    pub fn add_initial<State: Into<StateId>>(&mut self, state: State) {
        let state = state.into();

        self.create_state(state.clone());
        self.initial.insert(state);
    }

    ///
    /// Marks a state as accepting
    ///
    pub fn accept<State: Into<StateId>>(&mut self, state: State) {
        let state = state.into();

        self.create_state(state.clone());
        self.accepting.insert(state);
    }

    ///
    /// Finishes building the NFA
    ///
    pub fn build(self) -> AutomatonResult<Nfa<Symbol>> {
        Nfa::new(self.alphabet, self.transitions, self.initial, self.accepting)
    }

    fn add_input(&mut self, state: StateId, input: Input<Symbol>, new_state: StateId) {
        self.create_state(new_state.clone());
        self.transitions.entry(state)
            .or_insert_with(BTreeMap::new)
            .entry(input)
            .or_insert_with(StateSet::new)
            .insert(new_state);
    }
}
