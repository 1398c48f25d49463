use itertools::Itertools;
use tracing::trace;

use crate::{
    error::{MinimizeError, Result},
    math::Map,
    Color, Show, Symbol,
};

mod id;
pub use id::{DefaultIdType, StateId, TransitionId};

mod alphabet;
pub use alphabet::Alphabet;

mod state;
pub use state::State;

mod transition;
pub use transition::Transition;

mod builder;
pub use builder::AutomatonBuilder;

mod reachable;
pub use reachable::{MinimalRepresentative, MinimalRepresentatives, ReachableStateIds};

mod run;

/// An automaton whose states are classified by a behavior type `B` and whose transitions are labeled
/// with symbols of type `S`.
///
/// States are kept in an ordered sequence. The order is the one in which states were added, removing
/// states keeps the relative order of the remaining ones. Transitions live in an arena and are addressed
/// by their [`TransitionId`], every [`State`] knows the ids of the transitions leaving it. Both views are
/// only ever modified together, through the methods of this type.
///
/// Nothing prevents the construction of an automaton with two transitions leaving the same state on the
/// same symbol towards different states. Such an automaton is not deterministic, which is reported as a
/// [`MinimizeError::NonDeterministic`] as soon as the successor for that state and symbol is resolved,
/// see [`Automaton::next_state`].
///
/// # Example
/// ```
/// use automaton_minimizer::prelude::*;
///
/// let mut automaton = Automaton::new();
/// let q0 = automaton.add_state("idle");
/// let q1 = automaton.add_state("busy");
/// automaton.add_transition(q0, "start", q1);
/// automaton.add_transition(q1, "stop", q0);
/// automaton.set_initial(q0);
/// assert_eq!(automaton.next_state(q0, &"start"), Ok(Some(q1)));
/// assert_eq!(automaton.next_state(q0, &"stop"), Ok(None));
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: Symbol = char, B: Color = bool> {
    alphabet: Alphabet<S>,
    states: Vec<State<B>>,
    positions: Map<StateId, usize>,
    transitions: Vec<Option<Transition<S>>>,
    live_transitions: usize,
    initial: Option<StateId>,
    next_state_id: DefaultIdType,
}

impl<S: Symbol, B: Color> Default for Automaton<S, B> {
    fn default() -> Self {
        Self::for_alphabet(Alphabet::default())
    }
}

impl<S: Symbol, B: Color> Automaton<S, B> {
    /// Creates an empty automaton with an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty automaton over the given alphabet. Symbols that are used by transitions but
    /// are not yet part of the alphabet are appended to it.
    pub fn for_alphabet(alphabet: Alphabet<S>) -> Self {
        Self {
            alphabet,
            states: vec![],
            positions: Map::default(),
            transitions: vec![],
            live_transitions: 0,
            initial: None,
            next_state_id: 0,
        }
    }

    /// Returns a [`AutomatonBuilder`], which is the most convenient way to set up small automata.
    pub fn builder() -> AutomatonBuilder<S, B> {
        AutomatonBuilder::default()
    }

    /// Returns a reference to the alphabet.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns true if there are no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the number of transitions.
    pub fn transition_count(&self) -> usize {
        self.live_transitions
    }

    /// Adds a new state with the given behavior type at the end of the state sequence and returns its id.
    pub fn add_state(&mut self, behavior: B) -> StateId {
        let id = StateId(self.next_state_id);
        self.next_state_id += 1;
        self.positions.insert(id, self.states.len());
        self.states.push(State::new(id, behavior));
        id
    }

    /// Adds a transition from `origin` on `symbol` to `destination`. The symbol is appended to the
    /// alphabet if it is not yet present. Returns `None` if one of the states does not exist.
    ///
    /// Adding a second transition for the same origin and symbol is allowed, it makes the automaton
    /// non-deterministic if the destinations differ.
    pub fn add_transition(
        &mut self,
        origin: StateId,
        symbol: S,
        destination: StateId,
    ) -> Option<TransitionId> {
        let position = self.position(origin)?;
        self.position(destination)?;

        self.alphabet.insert(symbol.clone());
        let id = TransitionId::from_usize(self.transitions.len());
        self.transitions.push(Some(Transition {
            id,
            origin,
            symbol,
            destination,
        }));
        self.states[position].outgoing.push(id);
        self.live_transitions += 1;
        Some(id)
    }

    /// Makes `state` the initial state, the flag is removed from the previous initial state.
    /// Returns false (and changes nothing) if the state does not exist.
    pub fn set_initial(&mut self, state: StateId) -> bool {
        let Some(position) = self.position(state) else {
            tracing::error!("cannot make {state} initial as it does not exist");
            return false;
        };
        if let Some(previous) = self.initial.and_then(|q| self.position(q)) {
            self.states[previous].initial = false;
        }
        self.states[position].initial = true;
        self.initial = Some(state);
        true
    }

    /// Returns the id of the initial state, if one has been set.
    pub fn initial(&self) -> Option<StateId> {
        self.initial
    }

    /// Returns the position of the state with the given id in the state sequence.
    pub fn position(&self, state: StateId) -> Option<usize> {
        self.positions.get(&state).copied()
    }

    /// Returns the state with the given id.
    pub fn state(&self, state: StateId) -> Option<&State<B>> {
        self.position(state).map(|pos| &self.states[pos])
    }

    /// Returns the state at the given position of the state sequence.
    pub fn state_at(&self, position: usize) -> Option<&State<B>> {
        self.states.get(position)
    }

    /// Returns the behavior type of the given state.
    pub fn behavior(&self, state: StateId) -> Option<&B> {
        self.state(state).map(|q| q.behavior())
    }

    /// Iterates over all states in order.
    pub fn states(&self) -> impl Iterator<Item = &State<B>> + '_ {
        self.states.iter()
    }

    /// Iterates over the ids of all states in order.
    pub fn state_ids(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().map(|q| q.id)
    }

    /// Returns the transition with the given id, if it has not been removed.
    pub fn transition(&self, id: TransitionId) -> Option<&Transition<S>> {
        self.transitions.get(id.into_usize())?.as_ref()
    }

    /// Iterates over all transitions, ordered by their id.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition<S>> + '_ {
        self.transitions.iter().flatten()
    }

    /// Iterates over the transitions leaving `state`. Returns `None` if the state does not exist.
    pub fn transitions_from(
        &self,
        state: StateId,
    ) -> Option<impl Iterator<Item = &Transition<S>> + '_> {
        let state = self.state(state)?;
        Some(state.outgoing.iter().map(|id| {
            self.transition(*id)
                .expect("outgoing transitions of a state must be present in the arena")
        }))
    }

    /// Returns all distinct states that can be reached from `state` with a single transition labeled
    /// `symbol`, in the order in which the transitions were added.
    pub fn successors(&self, state: StateId, symbol: &S) -> Vec<StateId> {
        self.transitions_from(state)
            .into_iter()
            .flatten()
            .filter(|t| &t.symbol == symbol)
            .map(|t| t.destination)
            .unique()
            .collect()
    }

    /// Resolves the successor of `state` on `symbol`. Returns `Ok(None)` if there is no transition and
    /// fails with [`MinimizeError::NonDeterministic`] if transitions to more than one state exist.
    pub fn next_state(&self, state: StateId, symbol: &S) -> Result<Option<StateId>> {
        match self.successors(state, symbol).as_slice() {
            [] => Ok(None),
            [next] => Ok(Some(*next)),
            [first, second, ..] => {
                tracing::error!(
                    "{state} has multiple successors on {}: {first} and {second}",
                    symbol.show()
                );
                Err(MinimizeError::NonDeterministic {
                    state,
                    symbol: symbol.show(),
                    first: *first,
                    second: *second,
                })
            }
        }
    }

    /// Returns true if for every state and symbol at most one successor exists.
    pub fn is_deterministic(&self) -> bool {
        self.state_ids().all(|q| {
            self.alphabet
                .universe()
                .all(|sym| self.successors(q, sym).len() <= 1)
        })
    }

    /// Removes the transition with the given id from the arena and from the outgoing transitions of
    /// its origin. Returns the removed transition.
    pub(crate) fn remove_transition(&mut self, id: TransitionId) -> Option<Transition<S>> {
        let transition = self.transitions.get_mut(id.into_usize())?.take()?;
        if let Some(position) = self.position(transition.origin) {
            self.states[position].outgoing.retain(|t| *t != id);
        }
        self.live_transitions -= 1;
        Some(transition)
    }

    /// Removes all transitions matching the given predicate and returns how many were removed.
    pub(crate) fn remove_transitions_where<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&Transition<S>) -> bool,
    {
        let matching = self
            .transitions()
            .filter(|t| f(t))
            .map(|t| t.id)
            .collect_vec();
        for id in &matching {
            self.remove_transition(*id);
        }
        matching.len()
    }

    /// Changes the destination of the given transition. Returns false if the transition or the new
    /// destination do not exist.
    pub(crate) fn redirect_transition(&mut self, id: TransitionId, destination: StateId) -> bool {
        if self.position(destination).is_none() {
            return false;
        }
        match self
            .transitions
            .get_mut(id.into_usize())
            .and_then(|t| t.as_mut())
        {
            Some(transition) => {
                transition.destination = destination;
                true
            }
            None => false,
        }
    }

    /// Keeps only the states for which `f` returns true, preserving their relative order. Transitions
    /// leaving a removed state are removed as well. Transitions leading into a removed state must have
    /// been taken care of by the caller. Returns the number of removed states.
    pub(crate) fn retain_states<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&State<B>) -> bool,
    {
        let (kept, removed): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.states).into_iter().partition(|q| f(q));

        for state in &removed {
            trace!("removing state {} and its {} transitions", state.id, state.outgoing.len());
            for id in &state.outgoing {
                if self.transitions[id.into_usize()].take().is_some() {
                    self.live_transitions -= 1;
                }
            }
        }
        self.states = kept;
        self.positions = self
            .states
            .iter()
            .enumerate()
            .map(|(pos, q)| (q.id, pos))
            .collect();

        if self.initial.is_some_and(|q| !self.positions.contains_key(&q)) {
            tracing::warn!("initial state has been removed");
            self.initial = None;
        }
        debug_assert!(
            self.transitions()
                .all(|t| self.positions.contains_key(&t.destination)),
            "a transition leads into a removed state"
        );
        removed.len()
    }

    /// Returns a string representation of the transition table of the automaton. The initial state
    /// is prefixed with `->`, a cell lists all successors for the symbol or `-` if there are none.
    pub fn transition_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            ["State".to_string(), "Behavior".to_string()]
                .into_iter()
                .chain(self.alphabet.universe().map(|sym| sym.show())),
        );
        for state in &self.states {
            let mut row = vec![
                format!(
                    "{}{}",
                    if state.initial { "->" } else { "" },
                    state.id.show()
                ),
                format!("{:?}", state.behavior),
            ];
            for sym in self.alphabet.universe() {
                let successors = self.successors(state.id, sym);
                if successors.is_empty() {
                    row.push("-".to_string());
                } else {
                    row.push(successors.iter().map(|q| q.show()).join(", "));
                }
            }
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

impl<S: Symbol, B: Color> Show for Automaton<S, B> {
    fn show(&self) -> String {
        self.transition_table()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn states_and_transitions() {
        let mut automaton: Automaton<char, u8> = Automaton::new();
        let q0 = automaton.add_state(0);
        let q1 = automaton.add_state(1);
        assert_eq!(automaton.add_transition(q0, 'a', StateId::new(7)), None);
        let t = automaton.add_transition(q0, 'a', q1).unwrap();

        assert_eq!(automaton.size(), 2);
        assert_eq!(automaton.transition_count(), 1);
        assert_eq!(automaton.alphabet().size(), 1);
        assert_eq!(automaton.state(q0).unwrap().outgoing(), &[t]);
        assert_eq!(automaton.transition(t).unwrap().destination(), q1);
        assert_eq!(automaton.position(q1), Some(1));
        assert_eq!(automaton.behavior(q1), Some(&1));
        assert_eq!(automaton.next_state(q0, &'a'), Ok(Some(q1)));
        assert_eq!(automaton.next_state(q1, &'a'), Ok(None));
    }

    #[test]
    fn initial_flag_moves() {
        let mut automaton: Automaton<char, bool> = Automaton::new();
        let q0 = automaton.add_state(false);
        let q1 = automaton.add_state(true);
        assert!(automaton.set_initial(q0));
        assert!(automaton.set_initial(q1));
        assert!(!automaton.set_initial(StateId::new(5)));
        assert_eq!(automaton.initial(), Some(q1));
        assert!(!automaton.state(q0).unwrap().is_initial());
        assert!(automaton.state(q1).unwrap().is_initial());
    }

    #[test]
    fn duplicate_transitions_are_deterministic() {
        let mut automaton = AutomatonBuilder::default()
            .with_behaviors([true, false])
            .with_transitions([(0, 'a', 1), (0, 'a', 1)])
            .into_automaton(0);
        assert!(automaton.is_deterministic());
        assert_eq!(automaton.next_state(StateId::new(0), &'a'), Ok(Some(StateId::new(1))));

        automaton.add_transition(StateId::new(0), 'a', StateId::new(0));
        assert!(!automaton.is_deterministic());
        let err = automaton.next_state(StateId::new(0), &'a').unwrap_err();
        assert_eq!(
            err,
            MinimizeError::NonDeterministic {
                state: StateId::new(0),
                symbol: "a".to_string(),
                first: StateId::new(1),
                second: StateId::new(0),
            }
        );
        assert!(err.is_non_deterministic());
        assert_eq!(
            err.to_string(),
            "automaton is not deterministic: q0 reaches both q1 and q0 on `a`"
        );
    }

    #[test]
    fn removal_keeps_outgoing_lists_consistent() {
        let mut automaton = AutomatonBuilder::default()
            .default_behavior(())
            .with_transitions([(0, 'a', 1), (0, 'b', 2), (1, 'a', 2), (2, 'a', 0)])
            .into_automaton(0);
        let q0 = StateId::new(0);
        let removed = automaton.remove_transitions_where(|t| t.origin() == q0 && t.symbol() == &'a');
        assert_eq!(removed, 1);
        assert_eq!(automaton.transition_count(), 3);
        assert_eq!(automaton.transitions_from(q0).unwrap().count(), 1);
        for state in automaton.states() {
            for id in state.outgoing() {
                assert_eq!(automaton.transition(*id).unwrap().origin(), state.id());
            }
        }
    }

    #[test]
    fn retaining_states_drops_their_transitions() {
        let mut automaton = AutomatonBuilder::default()
            .default_behavior(())
            .with_transitions([(0, 'a', 1), (2, 'a', 1), (2, 'b', 2)])
            .into_automaton(0);
        let removed = automaton.retain_states(|q| q.id() != StateId::new(2));
        assert_eq!(removed, 1);
        assert_eq!(automaton.size(), 2);
        assert_eq!(automaton.transition_count(), 1);
        assert_eq!(automaton.position(StateId::new(1)), Some(1));
        assert_eq!(automaton.position(StateId::new(2)), None);
        assert!(automaton
            .redirect_transition(TransitionId::new(0), StateId::new(0)));
        assert!(!automaton.redirect_transition(TransitionId::new(1), StateId::new(0)));
        assert_eq!(
            automaton.next_state(StateId::new(0), &'a'),
            Ok(Some(StateId::new(0)))
        );
    }

    #[test]
    fn transition_table_lists_successors() {
        let automaton = crate::tests::wiki_automaton();
        let table = automaton.show();
        assert!(table.contains("->q0"));
        assert!(table.contains("Behavior"));
        assert_eq!(table.lines().filter(|l| l.contains("q5")).count(), 4);
    }
}
