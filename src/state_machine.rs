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
//! # State machine
//!
//! The `StateMachine` trait is implemented by anything that represents a finite state automaton over an alphabet. Both
//! `Dfa` and `Nfa` implement it, so code that only needs to test membership or minimize can work with either.
//!
//! Automata are immutable: every operation here leaves the state machine it was called on untouched.
//!

use super::alphabet::*;
use super::dfa::*;
use super::error::*;

///
/// Trait implemented by objects that represent a finite state automaton
///
pub trait StateMachine<Symbol> {
    ///
    /// The alphabet that this state machine reads
    ///
    fn alphabet(&self) -> &Alphabet<Symbol>;

    ///
    /// Returns the number of states in this state machine
    ///
    fn count_states(&self) -> usize;

    ///
    /// True if the language of this state machine contains the specified string of symbols
    ///
    /// Fails with `InvalidSymbol` if the string contains a symbol that's not in the alphabet.
    ///
    fn process<Symbols: IntoIterator<Item = Symbol>>(&self, input: Symbols) -> AutomatonResult<bool>;

    ///
    /// Returns the minimal DFA that accepts the same language as this state machine
    ///
    fn minimized(&self) -> Dfa<Symbol>;
}
