use std::collections::VecDeque;

use crate::{math::Set, Color, Symbol};

use super::{Automaton, StateId};

/// Type alias for a minimal representative of a state which is its length-lexicographically minimal
/// access sequence and its state id.
pub type MinimalRepresentative<S> = (Vec<S>, StateId);

/// Iterator over the minimal representatives of the states of an [`Automaton`] that are reachable from
/// a given state. A minimal representative for a state `q` is the length-lexicographically minimal word
/// (with respect to the order of the alphabet) with which `q` can be reached from the origin by following
/// transitions.
#[derive(Debug, Clone)]
pub struct MinimalRepresentatives<'a, S: Symbol, B: Color> {
    automaton: &'a Automaton<S, B>,
    seen: Set<StateId>,
    queue: VecDeque<MinimalRepresentative<S>>,
}

impl<'a, S: Symbol, B: Color> MinimalRepresentatives<'a, S, B> {
    /// Creates a new iterator starting in `origin`.
    pub fn new(automaton: &'a Automaton<S, B>, origin: StateId) -> Self {
        let seen = Set::from_iter([origin]);
        let queue = [(vec![], origin)].into_iter().collect();
        Self {
            automaton,
            seen,
            queue,
        }
    }
}

impl<'a, S: Symbol, B: Color> Iterator for MinimalRepresentatives<'a, S, B> {
    type Item = MinimalRepresentative<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let (access, q) = self.queue.pop_front()?;
        for sym in self.automaton.alphabet().universe() {
            for p in self.automaton.successors(q, sym) {
                if self.seen.insert(p) {
                    let mut new_access = access.clone();
                    new_access.push(sym.clone());
                    self.queue.push_back((new_access, p));
                }
            }
        }
        Some((access, q))
    }
}

/// Iterates over the ids of all states that are reachable from a given state by following outgoing
/// transitions, in breadth-first order. Unlike [`MinimalRepresentatives`], no access words are built.
#[derive(Debug, Clone)]
pub struct ReachableStateIds<'a, S: Symbol, B: Color> {
    automaton: &'a Automaton<S, B>,
    seen: Set<StateId>,
    queue: VecDeque<StateId>,
}

impl<'a, S: Symbol, B: Color> ReachableStateIds<'a, S, B> {
    /// Creates a new iterator starting in `origin`. If `origin` does not exist, the iterator is empty.
    pub fn new(automaton: &'a Automaton<S, B>, origin: StateId) -> Self {
        let queue = automaton.position(origin).map(|_| origin).into_iter().collect();
        Self {
            automaton,
            seen: Set::from_iter([origin]),
            queue,
        }
    }
}

impl<'a, S: Symbol, B: Color> Iterator for ReachableStateIds<'a, S, B> {
    type Item = StateId;

    fn next(&mut self) -> Option<Self::Item> {
        let q = self.queue.pop_front()?;
        if let Some(it) = self.automaton.transitions_from(q) {
            for transition in it {
                let p = transition.destination();
                if self.seen.insert(p) {
                    self.queue.push_back(p);
                }
            }
        }
        Some(q)
    }
}

impl<S: Symbol, B: Color> Automaton<S, B> {
    /// Returns an iterator over the ids of all states reachable from `origin`, including `origin`.
    pub fn reachable_state_ids_from(&self, origin: StateId) -> ReachableStateIds<'_, S, B> {
        ReachableStateIds::new(self, origin)
    }

    /// Returns an iterator over the ids of all states reachable from the initial state. The iterator
    /// is empty if there is no initial state.
    pub fn reachable_state_ids(&self) -> ReachableStateIds<'_, S, B> {
        match self.initial {
            Some(initial) => ReachableStateIds::new(self, initial),
            None => ReachableStateIds {
                automaton: self,
                seen: Set::default(),
                queue: VecDeque::new(),
            },
        }
    }

    /// Returns an iterator over the minimal representatives of all states reachable from `origin`.
    pub fn minimal_representatives_from(&self, origin: StateId) -> MinimalRepresentatives<'_, S, B> {
        MinimalRepresentatives::new(self, origin)
    }

    /// Returns true if every state is reachable from the initial state.
    pub fn is_accessible(&self) -> bool {
        self.reachable_state_ids().count() == self.size()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::prelude::*;

    #[test]
    fn reachable_states() {
        let automaton = AutomatonBuilder::default()
            .with_behaviors([false, false, true, false])
            .with_transitions([
                (0, 'a', 1),
                (0, 'b', 0),
                (1, 'a', 2),
                (1, 'b', 0),
                (2, 'a', 2),
                (2, 'b', 2),
                (3, 'a', 0),
            ])
            .into_automaton(0);
        let q = StateId::new;

        assert_eq!(
            automaton
                .minimal_representatives_from(q(0))
                .collect::<Vec<_>>(),
            vec![(vec![], q(0)), (vec!['a'], q(1)), (vec!['a', 'a'], q(2))]
        );
        assert_eq!(
            automaton.reachable_state_ids().collect_vec(),
            vec![q(0), q(1), q(2)]
        );
        assert_eq!(
            automaton.reachable_state_ids_from(q(3)).collect_vec(),
            vec![q(3), q(0), q(1), q(2)]
        );
        assert_eq!(automaton.reachable_state_ids_from(q(2)).collect_vec(), vec![q(2)]);
        assert_eq!(automaton.reachable_state_ids_from(q(9)).count(), 0);
        assert!(!automaton.is_accessible());
    }
}
