use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    automaton::StateId,
    math::{DisjointSets, Map},
    Automaton, Color, Symbol,
};

use super::Distinguishability;

/// Collapses every class of equivalent states of `automaton` into a single state, where equivalence
/// is given by `relation`, which must have been computed for the current state order.
///
/// Pairs are visited with the kept position `i` ascending and, for each of them, the removed position
/// `j < i` ascending. Whenever `i` and `j` are not distinguishable and `j` has not been merged yet, `j`
/// is merged into `i`. So out of two equivalent states the one that comes first is removed, which means
/// every class survives as its last member. Merging a state
/// - removes all transitions leaving it,
/// - redirects all transitions leading into it to the state that it was merged into and
/// - moves the initial flag to that state if it was initial.
///
/// The remaining states keep their relative order.
pub fn merge<S: Symbol, B: Color>(automaton: &mut Automaton<S, B>, relation: &Distinguishability) {
    debug_assert!(
        automaton.state_ids().eq(relation.order().iter().copied()),
        "relation was computed for a different state order"
    );
    let n = relation.size();
    let mut sets = DisjointSets::new(n);
    for i in 0..n {
        for j in 0..i {
            if sets.is_representative(j) && !relation.is_distinguishable(i, j) {
                trace!(
                    "merging {} into {}",
                    relation.order()[j],
                    relation.order()[i]
                );
                sets.merge_into(j, i);
            }
        }
    }

    let replacements: Map<StateId, StateId> = (0..n)
        .filter_map(|j| {
            let kept = sets.find(j);
            (kept != j).then(|| (relation.order()[j], relation.order()[kept]))
        })
        .collect();
    if replacements.is_empty() {
        trace!("all {n} states are pairwise distinguishable");
        return;
    }

    if let Some(kept) = automaton
        .initial()
        .and_then(|initial| replacements.get(&initial))
    {
        trace!("initial state moves to {kept}");
        automaton.set_initial(*kept);
    }

    let removed_transitions =
        automaton.remove_transitions_where(|t| replacements.contains_key(&t.origin()));

    let redirections = automaton
        .transitions()
        .filter_map(|t| {
            replacements
                .get(&t.destination())
                .map(|kept| (t.id(), *kept))
        })
        .collect_vec();
    for (id, kept) in &redirections {
        automaton.redirect_transition(*id, *kept);
    }

    let removed_states = automaton.retain_states(|q| !replacements.contains_key(&q.id()));
    debug!(
        "merged {removed_states} states, removed {removed_transitions} and redirected {} transitions",
        redirections.len()
    );
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn merged<S: Symbol, B: Color>(mut automaton: Automaton<S, B>) -> Automaton<S, B> {
        let relation = analyze(&automaton).unwrap();
        merge(&mut automaton, &relation);
        automaton
    }

    #[test]
    fn later_state_survives_and_becomes_initial() {
        let automaton = merged(
            AutomatonBuilder::default()
                .default_behavior("waiting")
                .with_transitions([(0, 'a', 1)])
                .into_automaton(0),
        );
        assert_eq!(automaton.state_ids().collect::<Vec<_>>(), vec![StateId::new(1)]);
        assert_eq!(automaton.initial(), Some(StateId::new(1)));
        assert!(automaton.state(StateId::new(1)).unwrap().is_initial());
        assert_eq!(automaton.transition_count(), 0);
    }

    #[test]
    fn transitions_into_merged_states_are_redirected() {
        let automaton = merged(
            AutomatonBuilder::default()
                .with_behaviors(["source", "sink", "sink"])
                .with_transitions([(0, 'a', 1), (0, 'b', 2)])
                .into_automaton(0),
        );
        let (q0, q2) = (StateId::new(0), StateId::new(2));
        assert_eq!(automaton.state_ids().collect::<Vec<_>>(), vec![q0, q2]);
        assert_eq!(automaton.initial(), Some(q0));
        assert_eq!(automaton.next_state(q0, &'a'), Ok(Some(q2)));
        assert_eq!(automaton.next_state(q0, &'b'), Ok(Some(q2)));
        assert_eq!(automaton.state(q0).unwrap().outgoing().len(), 2);
    }

    #[test]
    fn classes_survive_as_their_last_member() {
        let automaton = merged(crate::tests::wiki_automaton());
        let q = StateId::new;
        assert_eq!(automaton.state_ids().collect::<Vec<_>>(), vec![q(1), q(4), q(5)]);
        assert_eq!(automaton.initial(), Some(q(1)));
        assert_eq!(automaton.next_state(q(1), &'a'), Ok(Some(q(1))));
        assert_eq!(automaton.next_state(q(1), &'b'), Ok(Some(q(4))));
        assert_eq!(automaton.next_state(q(4), &'a'), Ok(Some(q(4))));
        assert_eq!(automaton.next_state(q(4), &'b'), Ok(Some(q(5))));
        assert_eq!(automaton.next_state(q(5), &'a'), Ok(Some(q(5))));
        assert_eq!(automaton.transition_count(), 6);
    }

    #[test]
    fn distinguishable_states_are_kept() {
        let original = AutomatonBuilder::default()
            .with_behaviors([1, 2, 3])
            .with_transitions([(0, 'a', 1), (1, 'a', 2), (2, 'a', 0)])
            .into_automaton(0);
        let automaton = merged(original.clone());
        assert_eq!(automaton.size(), 3);
        assert_eq!(
            automaton.transitions().cloned().collect::<Vec<_>>(),
            original.transitions().cloned().collect::<Vec<_>>()
        );
    }
}
