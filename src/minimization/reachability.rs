use tracing::{debug, trace};

use crate::{math::Set, Automaton, Color, Symbol};

/// Removes all states that cannot be reached from the initial state, together with the transitions
/// leaving them. The order of the remaining states is preserved.
///
/// Only transitions whose origin is unreachable are removed. A transition with a reachable origin
/// cannot lead into an unreachable state, as the set of reachable states is closed under successors.
///
/// Panics if the automaton has states but no initial state. An automaton without states is left as is.
pub fn prune<S: Symbol, B: Color>(automaton: &mut Automaton<S, B>) {
    if automaton.is_empty() {
        return;
    }
    let initial = automaton
        .initial()
        .expect("pruning requires the automaton to have an initial state");

    let reachable: Set<_> = automaton.reachable_state_ids_from(initial).collect();
    trace!(
        "{} of {} states are reachable from {initial}",
        reachable.len(),
        automaton.size()
    );
    if reachable.len() == automaton.size() {
        return;
    }

    let removed = automaton.retain_states(|q| reachable.contains(&q.id()));
    debug!("pruned {removed} unreachable states");
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn removes_unreachable_states_and_their_transitions() {
        let mut automaton = AutomatonBuilder::default()
            .with_behaviors([0, 1, 2, 3, 4])
            .with_transitions([
                (0, 'a', 2),
                (2, 'b', 0),
                (1, 'a', 0),
                (1, 'b', 3),
                (3, 'a', 1),
                (4, 'a', 4),
            ])
            .into_automaton(0);
        prune(&mut automaton);

        assert_eq!(
            automaton.state_ids().collect::<Vec<_>>(),
            vec![StateId::new(0), StateId::new(2)]
        );
        assert_eq!(automaton.transition_count(), 2);
        assert_eq!(automaton.position(StateId::new(2)), Some(1));
        assert!(automaton.is_accessible());
        assert_eq!(automaton.alphabet().size(), 2);
    }

    #[test]
    fn accessible_automaton_is_untouched() {
        let mut automaton = crate::tests::wiki_automaton();
        let before = automaton.transitions().cloned().collect::<Vec<_>>();
        prune(&mut automaton);
        assert_eq!(automaton.size(), 6);
        assert_eq!(automaton.transitions().cloned().collect::<Vec<_>>(), before);
    }

    #[test]
    fn initial_state_can_be_moved_before_pruning() {
        let mut automaton = crate::tests::chain_automaton();
        automaton.set_initial(StateId::new(2));
        prune(&mut automaton);
        assert_eq!(
            automaton.state_ids().collect::<Vec<_>>(),
            vec![StateId::new(2), StateId::new(3)]
        );
        assert_eq!(automaton.initial(), Some(StateId::new(2)));
    }

    #[test]
    fn empty_automaton() {
        let mut automaton: Automaton<char, bool> = Automaton::new();
        prune(&mut automaton);
        assert!(automaton.is_empty());
    }

    #[cfg(feature = "random")]
    #[test_log::test]
    fn pruned_random_automata_are_accessible() {
        for _ in 0..50 {
            let mut automaton = crate::random::generate_random_automaton_sized(2, 10, 2, 0.4);
            let reachable = automaton.reachable_state_ids().count();
            prune(&mut automaton);

            assert_eq!(automaton.size(), reachable);
            assert!(automaton.is_accessible());
            assert!(automaton
                .transitions()
                .all(|t| automaton.position(t.destination()).is_some()));
        }
    }

    #[test]
    #[should_panic]
    fn missing_initial_state_panics() {
        let mut automaton: Automaton<char, bool> = Automaton::new();
        automaton.add_state(true);
        prune(&mut automaton);
    }
}
