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
//! # Errors
//!
//! Construction of an automaton validates its transition table, so a malformed automaton is never observable. Queries
//! fail when they are handed symbols or states the automaton doesn't know about.
//!

use thiserror::Error;

///
/// Errors that can occur while building or querying an automaton
///
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// The transition table, initial state or accepting states of a DFA were inconsistent
    #[error("Malformed DFA: {0}")]
    MalformedDfa(String),

    /// The transition table, initial states or accepting states of an NFA were inconsistent
    #[error("Malformed NFA: {0}")]
    MalformedNfa(String),

    /// A symbol was not part of the alphabet (or was the epsilon pseudo-symbol where a real symbol is needed)
    #[error("Invalid symbol: {0} is not in the alphabet")]
    InvalidSymbol(String),

    /// A state was not declared by the automaton
    #[error("Invalid state: {0} is not a state of this automaton")]
    InvalidState(String),

    /// A state that should have a transition for every symbol was missing one
    #[error("Undefined transition: state {state} has no transition for {symbol}")]
    UndefinedTransition { state: String, symbol: String },

    /// Subset construction discovered more states than it was allowed to
    #[error("Too complex to determinize: more than {limit} states would be generated")]
    TooComplexToDeterminize { limit: usize },
}

impl AutomatonError {
    ///
    /// True if this error was raised while constructing an automaton
    ///
    pub fn is_malformed(&self) -> bool {
        matches!(self, AutomatonError::MalformedDfa(_) | AutomatonError::MalformedNfa(_))
    }
}

///
/// Result of an operation on an automaton
///
pub type AutomatonResult<T> = Result<T, AutomatonError>;
