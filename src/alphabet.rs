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
//! # Alphabet
//!
//! The alphabet is the finite set of symbols that an automaton reads. Symbols keep the order they were declared in,
//! which is the order that operations such as `find_passing` enumerate them in. Cloning an alphabet shares its
//! storage, so every automaton derived from another refers to the same set of symbols.
//!

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::rc::*;

use super::error::*;

#[derive(PartialEq, Eq, Debug)]
struct AlphabetSymbols<Symbol> {
    /// Symbols in declaration order
    ordered: Vec<Symbol>,

    /// The same symbols, for membership tests
    members: BTreeSet<Symbol>,
}

///
/// An ordered, deduplicated set of symbols
///
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Alphabet<Symbol> {
    symbols: Rc<AlphabetSymbols<Symbol>>,
}

impl<Symbol: Ord + Clone> Alphabet<Symbol> {
    ///
    /// Creates an alphabet from a list of symbols
    ///
    /// If a symbol appears more than once, only its first occurrence is kept.
    ///
    pub fn new<Symbols: IntoIterator<Item = Symbol>>(symbols: Symbols) -> Alphabet<Symbol> {
        let mut ordered = vec![];
        let mut members = BTreeSet::new();

        for symbol in symbols {
            if members.insert(symbol.clone()) {
                ordered.push(symbol);
            }
        }

        Alphabet { symbols: Rc::new(AlphabetSymbols { ordered: ordered, members: members }) }
    }

    ///
    /// True if the symbol is part of this alphabet
    ///
    #[inline]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.members.contains(symbol)
    }

    ///
    /// The symbols in this alphabet, in declaration order
    ///
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols.ordered
    }

    ///
    /// Iterates over the symbols in this alphabet in declaration order
    ///
    pub fn iter(&self) -> ::std::slice::Iter<Symbol> {
        self.symbols.ordered.iter()
    }

    ///
    /// Number of symbols in this alphabet
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.ordered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.ordered.is_empty()
    }

    ///
    /// True if this alphabet and another one refer to the same storage
    ///
    pub fn is_shared_with(&self, other: &Alphabet<Symbol>) -> bool {
        Rc::ptr_eq(&self.symbols, &other.symbols)
    }
}

impl<Symbol: Ord + Clone + Debug> Alphabet<Symbol> {
    ///
    /// Returns an `InvalidSymbol` error if the symbol is not in the alphabet
    ///
    pub fn check(&self, symbol: &Symbol) -> AutomatonResult<()> {
        if self.contains(symbol) {
            Ok(())
        } else {
            Err(AutomatonError::InvalidSymbol(format!("{:?}", symbol)))
        }
    }
}

impl<'a> From<&'a str> for Alphabet<char> {
    fn from(symbols: &'a str) -> Alphabet<char> {
        Alphabet::new(symbols.chars())
    }
}

///
/// Label of a transition in an NFA: either a symbol from the alphabet or the epsilon pseudo-symbol
///
/// Epsilon transitions are followed without reading any input.
///
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Input<Symbol> {
    Epsilon,
    Symbol(Symbol),
}

impl<Symbol> From<Symbol> for Input<Symbol> {
    fn from(symbol: Symbol) -> Input<Symbol> {
        Input::Symbol(symbol)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keeps_declaration_order() {
        let alphabet = Alphabet::new(vec!['c', 'a', 'b']);

        assert!(alphabet.symbols() == &['c', 'a', 'b']);
    }

    #[test]
    fn drops_duplicate_symbols() {
        let alphabet = Alphabet::from("abca");

        assert!(alphabet.len() == 3);
        assert!(alphabet.symbols() == &['a', 'b', 'c']);
    }

    #[test]
    fn can_test_membership() {
        let alphabet = Alphabet::from("ab");

        assert!(alphabet.contains(&'a'));
        assert!(!alphabet.contains(&'z'));
        assert!(alphabet.check(&'b').is_ok());
        assert!(alphabet.check(&'z') == Err(AutomatonError::InvalidSymbol("'z'".to_string())));
    }

    #[test]
    fn clones_share_storage() {
        let alphabet    = Alphabet::from("ab");
        let copy        = alphabet.clone();
        let separate    = Alphabet::from("ab");

        assert!(alphabet.is_shared_with(&copy));
        assert!(!alphabet.is_shared_with(&separate));
        assert!(alphabet == separate);
    }

    #[test]
    fn epsilon_sorts_before_symbols() {
        assert!(Input::Epsilon < Input::Symbol('a'));
        assert!(Input::from('a') == Input::Symbol('a'));
    }

    #[test]
    fn can_use_token_symbols() {
        let alphabet = Alphabet::new(vec!["if", "then", "else", "if"]);

        assert!(alphabet.len() == 3);
        assert!(alphabet.contains(&"then"));
    }
}
