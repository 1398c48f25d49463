use std::fmt::{Debug, Display};

use crate::Show;

/// The integer type underlying [`StateId`] and [`TransitionId`].
pub type DefaultIdType = u32;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) DefaultIdType);

        impl $name {
            /// Wraps the given raw value.
            pub fn new(n: DefaultIdType) -> Self {
                Self(n)
            }

            /// Returns the raw value.
            pub fn inner(self) -> DefaultIdType {
                self.0
            }

            /// Returns the raw value as a `usize`.
            pub fn into_usize(self) -> usize {
                self.0 as usize
            }

            pub(crate) fn from_usize(n: usize) -> Self {
                Self(DefaultIdType::try_from(n).expect("id does not fit into the id type"))
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl Show for $name {
            fn show(&self) -> String {
                self.to_string()
            }
        }

        impl From<DefaultIdType> for $name {
            fn from(n: DefaultIdType) -> Self {
                Self(n)
            }
        }
    };
}

arena_id!(
    /// Stable identifier of a state. It is assigned when the state is created and never changes, even
    /// if other states are removed and the position of the state in the automaton shifts.
    StateId,
    "q"
);

arena_id!(
    /// Stable identifier of a transition, pointing into the transition arena of an automaton.
    /// Identifiers of removed transitions are never handed out again.
    TransitionId,
    "t"
);
