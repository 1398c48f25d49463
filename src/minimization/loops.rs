use tracing::debug;

use crate::{Automaton, Color, Symbol};

/// Removes every transition whose origin and destination coincide. The alphabet is not modified,
/// even if a symbol no longer labels any transition.
///
/// As a missing transition is treated like a self-loop when behaviors are compared, stripping loops
/// never changes which states are equivalent.
pub fn strip_loops<S: Symbol, B: Color>(automaton: &mut Automaton<S, B>) {
    let removed = automaton.remove_transitions_where(|t| t.is_loop());
    debug!("stripped {removed} self-loops");
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn chain_loses_its_final_loop() {
        let mut automaton = crate::tests::chain_automaton();
        let d = StateId::new(3);
        strip_loops(&mut automaton);

        assert_eq!(automaton.transition_count(), 3);
        assert_eq!(automaton.transitions_from(d).unwrap().count(), 0);
        assert!(automaton.state(d).unwrap().outgoing().is_empty());
        assert_eq!(automaton.alphabet().size(), 1);
    }

    #[test]
    fn stripping_is_idempotent() {
        let mut automaton = crate::tests::wiki_automaton();
        strip_loops(&mut automaton);
        assert!(automaton.transitions().all(|t| !t.is_loop()));
        let once = automaton.transitions().cloned().collect::<Vec<_>>();

        strip_loops(&mut automaton);
        assert_eq!(automaton.transitions().cloned().collect::<Vec<_>>(), once);
        assert_eq!(automaton.transition_count(), 9);
        assert_eq!(automaton.alphabet().size(), 2);
    }
}
