use crate::{Show, Symbol};

use super::{StateId, TransitionId};

/// A transition leads from an origin state to a destination state and is labeled by a single symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition<S> {
    pub(super) id: TransitionId,
    pub(super) origin: StateId,
    pub(super) symbol: S,
    pub(super) destination: StateId,
}

impl<S: Symbol> Transition<S> {
    /// Returns the id of the transition in the arena of its automaton.
    pub fn id(&self) -> TransitionId {
        self.id
    }

    /// Returns the state in which the transition originates.
    pub fn origin(&self) -> StateId {
        self.origin
    }

    /// Returns the symbol labeling the transition.
    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    /// Returns the state that the transition leads to.
    pub fn destination(&self) -> StateId {
        self.destination
    }

    /// Returns true if origin and destination coincide.
    pub fn is_loop(&self) -> bool {
        self.origin == self.destination
    }
}

impl<S: Symbol> Show for Transition<S> {
    fn show(&self) -> String {
        format!(
            "({}, {}, {})",
            self.origin.show(),
            self.symbol.show(),
            self.destination.show()
        )
    }
}
