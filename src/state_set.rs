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
//! # State sets
//!
//! Operations like subset construction work on sets of states rather than on individual states. A `StateSet` is kept
//! in a canonical (sorted, deduplicated) form so two sets with the same members always compare equal, no matter what
//! order their members were discovered in.
//!
//! When a set of states becomes a single state of a derived automaton it needs a name. `StateIndex` derives that name
//! from the content of the set: each member is replaced by its position in the sorted list of the automaton's states
//! and the positions are joined with spaces. The empty set is named by the empty string.
//!

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

///
/// Identifies a state in an automaton
///
/// Identifiers are only unique within a single automaton: operations that build a new automaton are free to rename
/// every state.
///
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StateId(String);

impl StateId {
    ///
    /// Creates a state identifier with the specified name
    ///
    pub fn new<Name: Into<String>>(name: Name) -> StateId {
        StateId(name.into())
    }

    ///
    /// The name of this state
    ///
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'a> From<&'a str> for StateId {
    fn from(name: &'a str) -> StateId {
        StateId::new(name)
    }
}

impl From<String> for StateId {
    fn from(name: String) -> StateId {
        StateId(name)
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// A set of states in canonical order
///
pub type StateSet = BTreeSet<StateId>;

///
/// Collects some states into a canonical state set, removing any duplicates
///
pub fn deduped<States: IntoIterator<Item = StateId>>(states: States) -> StateSet {
    states.into_iter().collect()
}

///
/// Assigns every state of an automaton a stable position, used to generate content-derived names for sets of states
///
#[derive(Clone, Debug)]
pub struct StateIndex {
    /// Position of each state in the sorted list of states
    positions: BTreeMap<StateId, usize>,
}

impl StateIndex {
    ///
    /// Creates an index for the specified states
    ///
    pub fn new(states: &StateSet) -> StateIndex {
        let positions = states.iter()
            .enumerate()
            .map(|(position, state)| (state.clone(), position))
            .collect();

        StateIndex { positions: positions }
    }

    ///
    /// Retrieves the position of a state, if it's part of this index
    ///
    #[inline]
    pub fn position(&self, state: &StateId) -> Option<usize> {
        self.positions.get(state).cloned()
    }

    ///
    /// Generates the canonical name for a set of indexed states
    ///
    /// States that aren't part of the index don't contribute to the name. Callers only name sets drawn from the
    /// automaton the index was built for, where every member is indexed.
    ///
    pub fn canonical_name(&self, states: &StateSet) -> StateId {
        let mut indexes: Vec<usize> = states.iter()
            .filter_map(|state| self.position(state))
            .collect();
        indexes.sort_unstable();

        let names: Vec<String> = indexes.iter().map(|index| index.to_string()).collect();
        StateId(names.join(" "))
    }
}
