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
//! # Finite automata
//!
//! A library for working with deterministic and non-deterministic finite-state automata over a finite alphabet. It
//! provides the classical operations on them: membership testing, epsilon closure, subset construction, reversal,
//! removal of unreachable states, minimization and finding a shortest accepted string.
//!
//! Automata are immutable values. Every operation returns a new automaton and leaves the one it was called on
//! untouched, so operations can be chained freely:
//!
//! ```
//! # use finite_automata::*;
//! let mut builder = NfaBuilder::new(Alphabet::from("ab"));
//! builder.add_initial("q0");
//! builder.add_transition("q0", 'a', "q1");
//! builder.add_transition("q1", 'b', "q1");
//! builder.accept("q1");
//!
//! let nfa     = builder.build().unwrap();
//! let minimal = nfa.reversed().to_dfa().minimized();
//!
//! assert!(minimal.process("bba".chars()) == Ok(true));
//! assert!(minimal.find_passing() == Some(vec!['a']));
//! ```
//!

pub use self::error::*;
pub use self::state_set::*;
pub use self::alphabet::*;
pub use self::state_machine::*;
pub use self::dfa::*;
pub use self::nfa::*;
pub use self::dfa_compiler::*;
pub use self::dfa_builder::*;
pub use self::nfa_builder::*;

pub mod error;
pub mod state_set;
pub mod alphabet;
pub mod state_machine;
pub mod dfa;
pub mod nfa;
pub mod dfa_compiler;
pub mod dfa_builder;
pub mod nfa_builder;
