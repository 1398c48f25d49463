//! Library for shrinking deterministic finite automata whose states carry an opaque behavior type.
//!
//! An [`Automaton`] consists of an ordered sequence of states, a collection of symbol-labeled transitions
//! between them, an [`Alphabet`] and a designated initial state. Every state is assigned precisely one
//! behavior type, which can be any type implementing [`Color`]. Two states behave the same if, for every
//! finite sequence of symbols, the sequences of behavior types visited from either state coincide. A
//! transition that is missing for some state and symbol is treated as a self-loop on that state when
//! behaviors are compared, so a state without any outgoing transitions simply keeps emitting its own
//! behavior type.
//!
//! The main entry point is [`minimization::minimize`] (also available as [`Automaton::minimize`]), which
//! removes unreachable states, computes which pairs of states are distinguishable by means of the classical
//! table-filling algorithm and finally collapses every class of equivalent states into a single
//! representative. Independently of that, [`minimization::strip_loops`] removes all self-loops.
//!
//! Automata are stored in an arena, states and transitions are addressed by [`StateId`] and
//! [`TransitionId`] respectively. They can be grown state by state and transition by transition or, more
//! conveniently, through an [`AutomatonBuilder`]:
//! ```
//! use automaton_minimizer::prelude::*;
//!
//! let mut automaton = AutomatonBuilder::default()
//!     .with_behaviors([false, false, true])
//!     .with_transitions([(0, 'a', 1), (1, 'a', 2), (0, 'b', 2)])
//!     .into_automaton(0);
//! automaton.minimize().unwrap();
//! assert_eq!(automaton.size(), 3);
//! ```
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use automaton_minimizer::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::minimization::{
        analyze, merge, minimize, prune, strip_loops, Distinguishability, Minimizer,
    };
    pub use super::{
        automaton::{
            Alphabet, Automaton, AutomatonBuilder, DefaultIdType, MinimalRepresentative, State,
            StateId, Transition, TransitionId,
        },
        dot::Dottable,
        error::{MinimizeError, Result},
        math, Color, Show, Symbol,
    };
}

/// This module contains some definitions of mathematical objects which are used throughout the crate and
/// do not really fit to the top level.
pub mod math;

/// Defines the errors that can occur when working with automata.
pub mod error;
pub use error::{MinimizeError, Result};

/// Defines the arena-backed automaton together with its states, transitions and alphabet.
pub mod automaton;
pub use automaton::{Alphabet, Automaton, AutomatonBuilder, State, StateId, Transition, TransitionId};

/// Contains the minimization pipeline.
pub mod minimization;

/// Graphviz output for automata.
pub mod dot;

/// Implements the generation of random automata and words.
#[cfg(feature = "random")]
pub mod random;

use std::{fmt::Debug, hash::Hash};

/// A color is simply a type that can be used as the behavior type of a state. The only thing the
/// minimization needs is to compare behavior types for equality.
pub trait Color: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Color for T {}

/// A symbol labels transitions. Symbols are hashed to keep the alphabet ordered and free of duplicates
/// and shown when reporting errors.
pub trait Symbol: Clone + Eq + Hash + Debug + Show {}

impl<T: Clone + Eq + Hash + Debug + Show> Symbol for T {}

/// Helper trait which can be used to display states, transitions and such.
pub trait Show {
    /// Returns a human readable representation of `self`, for a state index that should be
    /// for example q0, q1, q2, ... and for a symbol 'a' it should be just a.
    /// Just use something that makes sense. This is mainly used for debugging purposes.
    fn show(&self) -> String;
}

macro_rules! show_via_to_string {
    ($($t:ty),*) => {
        $(
            impl Show for $t {
                fn show(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

show_via_to_string!(
    char, String, str, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

impl Show for () {
    fn show(&self) -> String {
        "-".into()
    }
}

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }
}

impl<S: Show> Show for Option<S> {
    fn show(&self) -> String {
        match self {
            None => "".to_string(),
            Some(x) => x.show(),
        }
    }
}

impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        format!(
            "\"{}\"",
            itertools::Itertools::join(&mut self.iter().map(|x| x.show()), "")
        )
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        self.as_slice().show()
    }
}

impl<S: Show, T: Show> Show for (S, T) {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}

impl<S: Show + ?Sized> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    /// The six state example from the wikipedia article on DFA minimization. States 1 and 0 are
    /// equivalent, as are 2, 3 and 4.
    pub fn wiki_automaton() -> Automaton<char, bool> {
        AutomatonBuilder::default()
            .with_behaviors([false, false, true, true, true, false])
            .with_transitions([
                (0, 'a', 1),
                (0, 'b', 2),
                (1, 'a', 0),
                (1, 'b', 3),
                (2, 'a', 4),
                (2, 'b', 5),
                (3, 'a', 4),
                (3, 'b', 5),
                (4, 'a', 4),
                (4, 'b', 5),
                (5, 'a', 5),
                (5, 'b', 5),
            ])
            .into_automaton(0)
    }

    /// The chain A -> B -> C -> D on `x` where D loops on itself and all states share a behavior.
    pub fn chain_automaton() -> Automaton<char, &'static str> {
        AutomatonBuilder::default()
            .default_behavior("idle")
            .with_transitions([(0, 'x', 1), (1, 'x', 2), (2, 'x', 3), (3, 'x', 3)])
            .into_automaton(0)
    }

    #[test]
    fn minimization_through_the_prelude() {
        let mut automaton = chain_automaton();
        automaton.minimize().unwrap();
        assert_eq!(automaton.size(), 1);

        let mut wiki = wiki_automaton();
        Minimizer::default().strip_loops(true).run(&mut wiki).unwrap();
        assert_eq!(wiki.state_ids().count(), 3);
    }

    #[test]
    fn show_implementations() {
        assert_eq!(true.show(), "+");
        assert_eq!(vec!['a', 'b'].show(), "\"ab\"");
        assert_eq!(('a', 3usize).show(), "(a, 3)");
        assert_eq!(None::<u8>.show(), "");
    }
}
