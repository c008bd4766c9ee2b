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
//! # DFA compiler
//!
//! The DFA compiler converts NFAs into DFAs using subset construction. Each state of the DFA stands for the set of NFA
//! states that the NFA could be in at once. Starting from the epsilon closure of the NFA's initial states, the compiler
//! works through every set it discovers and computes its successor for each symbol in the alphabet.
//!
//! The DFA is total: if no NFA state has a transition for a symbol, the successor is the empty set, which becomes a
//! 'dead' state that loops back to itself.
//!
//! The number of sets that can be discovered is exponential in the number of NFA states. Callers that need to bound
//! the work can set a limit on the number of DFA states.
//!

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt::Debug;

use log::debug;

use super::dfa::*;
use super::error::*;
use super::nfa::*;
use super::state_set::*;

///
/// A reasonable limit on the number of states to generate when determinizing an NFA of unknown complexity
///
pub const DEFAULT_DETERMINIZE_WORK_LIMIT: usize = 10000;

///
/// Builds a deterministic finite automaton from an NFA
///
pub struct DfaCompiler<'a, Symbol: 'a> {
    /// State machine that is to be compiled
    nfa: &'a Nfa<Symbol>,

    /// Used to name the sets of states that become DFA states
    index: StateIndex,

    /// Maximum number of DFA states to generate
    max_states: Option<usize>,
}

impl<'a, Symbol: Ord + Clone + Debug> DfaCompiler<'a, Symbol> {
    ///
    /// Builds the DFA for an NFA with no limit on its size
    ///
    pub fn build(nfa: &'a Nfa<Symbol>) -> Dfa<Symbol> {
        let compiler = DfaCompiler::new(nfa);

        match compiler.explore(|_| Ok::<(), Infallible>(())) {
            Ok(dfa)     => dfa,
            Err(never)  => match never { }
        }
    }

    ///
    /// Creates a new DFA compiler for an NFA
    ///
    pub fn new(nfa: &'a Nfa<Symbol>) -> Self {
        DfaCompiler { nfa: nfa, index: StateIndex::new(nfa.states()), max_states: None }
    }

    ///
    /// Creates a new DFA compiler that will give up once more than `max_states` states have been discovered
    ///
    pub fn with_limit(nfa: &'a Nfa<Symbol>, max_states: usize) -> Self {
        DfaCompiler { nfa: nfa, index: StateIndex::new(nfa.states()), max_states: Some(max_states) }
    }

    ///
    /// Compiles the NFA into a DFA
    ///
    /// Fails with `TooComplexToDeterminize` if a limit was set and the DFA would exceed it.
    ///
    pub fn compile(self) -> AutomatonResult<Dfa<Symbol>> {
        let max_states = self.max_states;

        self.explore(|discovered| {
            match max_states {
                Some(limit) if discovered > limit   => Err(AutomatonError::TooComplexToDeterminize { limit: limit }),
                _                                   => Ok(())
            }
        })
    }

    ///
    /// Runs subset construction, calling `admit` with the number of sets discovered each time a new set is found
    ///
    fn explore<Error, Admit: FnMut(usize) -> Result<(), Error>>(self, mut admit: Admit) -> Result<Dfa<Symbol>, Error> {
        let nfa             = self.nfa;
        let alphabet        = nfa.alphabet();

        let initial_set     = nfa.closure(nfa.initial().iter().cloned());
        let initial_name    = self.index.canonical_name(&initial_set);

        let mut transitions: DfaTable<Symbol>   = BTreeMap::new();
        let mut accepting                       = StateSet::new();
        let mut seen                            = StateSet::new();
        let mut processing                      = vec![(initial_name.clone(), initial_set)];

        seen.insert(initial_name.clone());
        admit(seen.len())?;

        while let Some((name, states)) = processing.pop() {
            if !states.is_disjoint(nfa.accepting()) {
                accepting.insert(name.clone());
            }

            let mut row = BTreeMap::new();

            for symbol in alphabet.iter() {
                let next        = nfa.advance(&states, symbol);
                let next_name   = self.index.canonical_name(&next);

                if seen.insert(next_name.clone()) {
                    admit(seen.len())?;
                    processing.push((next_name.clone(), next));
                }

                row.insert(symbol.clone(), next_name);
            }

            transitions.insert(name, row);
        }

        debug!("subset construction: {} NFA states became {} DFA states", nfa.count_states(), transitions.len());

        Ok(Dfa::from_parts(alphabet.clone(), transitions, initial_name, accepting))
    }
}
