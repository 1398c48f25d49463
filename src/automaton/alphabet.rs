use indexmap::IndexSet;
use itertools::Itertools;

use crate::{Show, Symbol};

/// An ordered collection of symbols. Symbols are iterated in the order in which they were first
/// inserted and this order never changes, which gives the equivalence analysis a fixed column order.
///
/// # Example
/// ```
/// use automaton_minimizer::prelude::*;
///
/// let alphabet = Alphabet::from_iter(['b', 'a', 'b']);
/// assert_eq!(alphabet.size(), 2);
/// assert_eq!(alphabet.universe().collect::<Vec<_>>(), vec![&'b', &'a']);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet<S: Symbol>(IndexSet<S>);

impl<S: Symbol> Default for Alphabet<S> {
    fn default() -> Self {
        Self(IndexSet::new())
    }
}

impl Alphabet<char> {
    /// Creates a new alphabet of the given size. The symbols are just the first `size` letters
    /// of the alphabet, i.e. 'a' to 'z'.
    pub fn of_size(size: usize) -> Self {
        assert!(size <= 26, "Alphabet is too large");
        Self((0..size).map(|i| (b'a' + i as u8) as char).collect())
    }
}

impl<S: Symbol> Alphabet<S> {
    /// Creates an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `symbol` at the end of the alphabet, unless it is already present. Returns true if the
    /// symbol was not present before.
    pub fn insert(&mut self, symbol: S) -> bool {
        self.0.insert(symbol)
    }

    /// Returns true if the given symbol is present in the alphabet.
    pub fn contains(&self, symbol: &S) -> bool {
        self.0.contains(symbol)
    }

    /// Returns the position of `symbol` in the alphabet, if it is present.
    pub fn position(&self, symbol: &S) -> Option<usize> {
        self.0.get_index_of(symbol)
    }

    /// Returns the symbol at the given position.
    pub fn get(&self, position: usize) -> Option<&S> {
        self.0.get_index(position)
    }

    /// Iterates over all symbols in their fixed order.
    pub fn universe(&self) -> impl Iterator<Item = &S> + '_ {
        self.0.iter()
    }

    /// Returns the number of symbols in the alphabet.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the alphabet contains no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Symbol> FromIterator<S> for Alphabet<S> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<S: Symbol> Show for Alphabet<S> {
    fn show(&self) -> String {
        format!("{{{}}}", self.universe().map(|sym| sym.show()).join(", "))
    }
}
