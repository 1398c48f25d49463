use crate::{error::Result, Color, Symbol};

use super::{Automaton, StateId};

impl<S: Symbol, B: Color> Automaton<S, B> {
    /// Returns the state that is reached when reading `word` from `origin`. A symbol for which the
    /// current state has no transition leaves the state unchanged. Returns `Ok(None)` if `origin` does
    /// not exist and fails if a successor on the way is ambiguous.
    pub fn reached_state_from<'a, W>(&self, origin: StateId, word: W) -> Result<Option<StateId>>
    where
        W: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        if self.position(origin).is_none() {
            return Ok(None);
        }
        let mut current = origin;
        for symbol in word {
            current = self.next_state(current, symbol)?.unwrap_or(current);
        }
        Ok(Some(current))
    }

    /// Computes the sequence of behavior types that is visited when reading `word` from `origin`,
    /// starting with the behavior of `origin` itself. Missing transitions are treated as self-loops,
    /// so the trace always has one entry more than `word` has symbols. Returns `Ok(None)` if `origin`
    /// does not exist.
    ///
    /// # Example
    /// ```
    /// use automaton_minimizer::prelude::*;
    ///
    /// let automaton = AutomatonBuilder::default()
    ///     .with_behaviors(["locked", "open"])
    ///     .with_transitions([(0, "coin", 1), (1, "push", 0)])
    ///     .into_automaton(0);
    /// let trace = automaton
    ///     .behavior_trace_from(StateId::new(0), &["push", "coin", "coin"])
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(trace, vec!["locked", "locked", "open", "open"]);
    /// ```
    pub fn behavior_trace_from<'a, W>(&self, origin: StateId, word: W) -> Result<Option<Vec<B>>>
    where
        W: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        let Some(state) = self.state(origin) else {
            return Ok(None);
        };
        let mut trace = vec![state.behavior.clone()];
        let mut current = origin;
        for symbol in word {
            current = self.next_state(current, symbol)?.unwrap_or(current);
            trace.push(
                self.behavior(current)
                    .expect("successor of an existing state must exist")
                    .clone(),
            );
        }
        Ok(Some(trace))
    }

    /// Works like [`Automaton::behavior_trace_from`], but starts in the initial state. Returns `Ok(None)`
    /// if no initial state has been set.
    pub fn behavior_trace<'a, W>(&self, word: W) -> Result<Option<Vec<B>>>
    where
        W: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        match self.initial {
            Some(initial) => self.behavior_trace_from(initial, word),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn missing_transitions_stay_in_place() {
        let automaton = crate::tests::chain_automaton();
        let mut stripped = automaton.clone();
        stripped.remove_transitions_where(|t| t.is_loop());

        let word = vec!['x'; 5];
        assert_eq!(
            automaton.reached_state_from(StateId::new(0), &word),
            Ok(Some(StateId::new(3)))
        );
        assert_eq!(
            stripped.reached_state_from(StateId::new(0), &word),
            Ok(Some(StateId::new(3)))
        );
        assert_eq!(
            automaton.behavior_trace(&word).unwrap(),
            stripped.behavior_trace(&word).unwrap()
        );
        assert_eq!(automaton.behavior_trace(&word).unwrap().unwrap().len(), 6);
    }

    #[test]
    fn unknown_origin() {
        let automaton = crate::tests::wiki_automaton();
        assert_eq!(automaton.reached_state_from(StateId::new(42), &['a']), Ok(None));
        assert_eq!(automaton.behavior_trace_from(StateId::new(42), &['a']), Ok(None));
        assert_eq!(
            automaton.behavior_trace(&['b', 'a']),
            Ok(Some(vec![false, true, true]))
        );
    }

    #[test]
    fn ambiguous_successor_fails() {
        let automaton = AutomatonBuilder::default()
            .with_behaviors([1, 2, 3])
            .with_transitions([(0, 'a', 1), (0, 'a', 2)])
            .into_automaton(0);
        assert!(automaton.behavior_trace(&['a']).is_err());
        assert_eq!(automaton.behavior_trace(&[]), Ok(Some(vec![1])));
    }
}
