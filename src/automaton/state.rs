use crate::Color;

use super::{StateId, TransitionId};

/// Stores information characterizing a state in an [`super::Automaton`]. It stores the stable id of the
/// state, its behavior type, whether it is the initial state and the ids of the transitions that leave it.
/// The transitions themselves live in the arena of the automaton, which is also the only place where the
/// list of outgoing ids is modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State<B> {
    pub(super) id: StateId,
    pub(super) behavior: B,
    pub(super) initial: bool,
    pub(super) outgoing: Vec<TransitionId>,
}

impl<B: Color> State<B> {
    pub(super) fn new(id: StateId, behavior: B) -> Self {
        Self {
            id,
            behavior,
            initial: false,
            outgoing: vec![],
        }
    }

    /// Returns the stable id of the state.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Returns a reference to the behavior type of the state.
    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Returns true if this is the initial state of its automaton.
    pub fn is_initial(&self) -> bool {
        self.initial
    }

    /// Returns the ids of all transitions leaving the state, in the order in which they were added.
    pub fn outgoing(&self) -> &[TransitionId] {
        &self.outgoing
    }
}
