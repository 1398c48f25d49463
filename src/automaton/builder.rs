use crate::{Color, Symbol};

use super::{Alphabet, Automaton, DefaultIdType, StateId};

/// Helper struct for the construction of automata. It stores a list of transitions, a list of behavior
/// types and a default behavior type. States are referred to by their position, i.e. by `0..n`, and are
/// created in that order, so the state referred to as `i` obtains the [`StateId`] `i`.
///
/// # Example
///
/// We want to create an automaton with two states 0 and 1 over the alphabet `['a', 'b']`. We want to add the
/// following transitions:
/// - From state 0 to state 0 on symbol 'a'
/// - From state 0 to state 1 on symbol 'b'
/// - From state 1 to state 0 on symbol 'b'
///
/// Further, state 0 should be initial with behavior `true` and state 1 should have behavior `false`.
/// ```
/// use automaton_minimizer::prelude::*;
///
/// let automaton = AutomatonBuilder::default()
///     .with_behaviors([true, false]) // behaviors given in the order of the states
///     .with_transitions([(0, 'a', 0), (0, 'b', 1), (1, 'b', 0)])
///     .into_automaton(0); // 0 is the initial state
/// assert_eq!(automaton.size(), 2);
/// assert_eq!(automaton.initial(), Some(StateId::new(0)));
/// ```
#[derive(Clone, Debug)]
pub struct AutomatonBuilder<S = char, B = bool> {
    symbols: Vec<S>,
    transitions: Vec<(DefaultIdType, S, DefaultIdType)>,
    default: Option<B>,
    behaviors: Vec<(DefaultIdType, B)>,
}

impl<S, B> Default for AutomatonBuilder<S, B> {
    fn default() -> Self {
        Self {
            symbols: vec![],
            transitions: vec![],
            default: None,
            behaviors: vec![],
        }
    }
}

impl<S: Symbol, B: Color> AutomatonBuilder<S, B> {
    /// Sets the default behavior type for states that have no behavior specified.
    pub fn default_behavior(mut self, behavior: B) -> Self {
        self.default = Some(behavior);
        self
    }

    /// By default, the only alphabet symbols in the automaton that is built are the ones that
    /// appear on at least one transition. This method can be used to force additional alphabet
    /// symbols to appear. Symbols given here precede those that only occur on transitions.
    pub fn with_alphabet_symbols<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.symbols.extend(symbols);
        self
    }

    /// Adds a list of behavior types to `self`. The behaviors are assigned to the states in the order
    /// in which they are given.
    pub fn with_behaviors<I: IntoIterator<Item = B>>(self, iter: I) -> Self {
        iter.into_iter()
            .enumerate()
            .fold(self, |acc, (i, b)| acc.behavior(i as DefaultIdType, b))
    }

    /// Assigns the given `behavior` to the state with the given index `idx`.
    pub fn behavior(mut self, idx: DefaultIdType, behavior: B) -> Self {
        assert!(
            self.behaviors.iter().all(|(q, _)| *q != idx),
            "state {idx} already has a behavior"
        );
        self.behaviors.push((idx, behavior));
        self
    }

    /// Adds a list of transitions to `self`. The transitions are added in the order in which they are given.
    pub fn with_transitions<I>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (DefaultIdType, S, DefaultIdType)>,
    {
        self.transitions.extend(iter);
        self
    }

    /// Creates the [`Automaton`] described by `self` and makes the state `initial` its initial state.
    /// The number of states is one more than the largest index that is mentioned in a transition, a
    /// behavior or as initial state.
    ///
    /// Panics if a state has no behavior and no default behavior was set.
    pub fn into_automaton(self, initial: DefaultIdType) -> Automaton<S, B> {
        let num_states = self
            .transitions
            .iter()
            .flat_map(|(q, _, p)| [*q, *p])
            .chain(self.behaviors.iter().map(|(q, _)| *q))
            .chain(std::iter::once(initial))
            .max()
            .map_or(0, |max| max as usize + 1);

        let mut automaton = Automaton::for_alphabet(Alphabet::from_iter(self.symbols));
        for i in 0..num_states {
            let i = i as DefaultIdType;
            let behavior = self
                .behaviors
                .iter()
                .find_map(|(q, b)| if *q == i { Some(b.clone()) } else { None })
                .or_else(|| self.default.clone())
                .unwrap_or_else(|| {
                    panic!("Default is needed as some states (specifically {i}) have no behavior")
                });
            let id = automaton.add_state(behavior);
            debug_assert_eq!(id, StateId::new(i));
        }

        for (q, sym, p) in self.transitions {
            automaton.add_transition(StateId::new(q), sym, StateId::new(p));
        }
        automaton.set_initial(StateId::new(initial));
        automaton
    }
}
