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
//! # DFA builder
//!
//! The DFA builder assembles the transition table for a DFA one transition at a time. Nothing is checked until
//! `build()` is called, at which point the table must be total.
//!

use std::collections::BTreeMap;
use std::fmt::Debug;

use super::alphabet::*;
use super::dfa::*;
use super::error::*;
use super::state_set::*;

///
/// Builds a DFA state by state
///
pub struct DfaBuilder<Symbol> {
    alphabet: Alphabet<Symbol>,
    transitions: DfaTable<Symbol>,
    initial: Option<StateId>,
    accepting: StateSet,
}

impl<Symbol: Ord + Clone + Debug> DfaBuilder<Symbol> {
    pub fn new(alphabet: Alphabet<Symbol>) -> DfaBuilder<Symbol> {
        DfaBuilder { alphabet: alphabet, transitions: BTreeMap::new(), initial: None, accepting: StateSet::new() }
    }

    ///
    /// Ensures that a state with the specified ID exists in this state machine
    ///
    pub fn create_state<State: Into<StateId>>(&mut self, state: State) {
        self.transitions.entry(state.into()).or_insert_with(BTreeMap::new);
    }

    ///
    /// Sets the state to move to from `state` on reading `symbol`
    ///
    /// Any existing transition for the same state and symbol is replaced.
    ///
    pub fn transition<Source: Into<StateId>, Target: Into<StateId>>(&mut self, state: Source, symbol: Symbol, target_state: Target) {
        let target_state = target_state.into();

        self.create_state(target_state.clone());
        self.transitions.entry(state.into())
            .or_insert_with(BTreeMap::new)
            .insert(symbol, target_state);
    }

    ///
    /// Sets the state that the DFA starts in
    ///
    pub fn set_initial<State: Into<StateId>>(&mut self, state: State) {
        let state = state.into();

        self.create_state(state.clone());
        self.initial = Some(state);
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
    /// Finishes building the DFA
    ///
    /// Fails with `MalformedDfa` if no initial state was set or if any state is missing a transition.
    ///
    pub fn build(self) -> AutomatonResult<Dfa<Symbol>> {
        let initial = self.initial
            .ok_or_else(|| AutomatonError::MalformedDfa("no initial state".to_string()))?;

        Dfa::new(self.alphabet, self.transitions, initial, self.accepting)
    }
}
