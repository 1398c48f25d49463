//! Minimization of automata. The pipeline consists of four steps, each of which is also available on
//! its own:
//! - [`strip_loops`] removes self-loops, it is not part of the default pipeline,
//! - [`prune`] removes states that are not reachable from the initial state,
//! - [`analyze`] computes the [`Distinguishability`] relation with the table-filling algorithm and
//! - [`merge`] collapses classes of equivalent states.
//!
//! [`minimize`] runs pruning, analysis and merging in that order, [`Minimizer`] additionally allows
//! stripping loops from the result.

use tracing::{debug, trace};

use crate::{error::Result, Automaton, Color, Symbol};

mod loops;
pub use loops::strip_loops;

mod reachability;
pub use reachability::prune;

mod equivalence;
pub use equivalence::{analyze, Distinguishability};

mod merge;
pub use merge::merge;

/// Minimizes `automaton` in place: unreachable states are removed and each class of equivalent states
/// is collapsed into a single state. If the original initial state is merged away, its representative
/// becomes the new initial state.
///
/// Fails with [`crate::MinimizeError::NonDeterministic`] if a reachable state has more than one successor
/// for some symbol. In that case unreachable states may already have been removed, but no states have
/// been merged.
///
/// # Example
/// ```
/// use automaton_minimizer::prelude::*;
///
/// let mut automaton = AutomatonBuilder::default()
///     .default_behavior("idle")
///     .with_transitions([(0, 'x', 1), (1, 'x', 2), (2, 'x', 3), (3, 'x', 3)])
///     .into_automaton(0);
/// minimize(&mut automaton).unwrap();
/// assert_eq!(automaton.size(), 1);
/// ```
pub fn minimize<S: Symbol, B: Color>(automaton: &mut Automaton<S, B>) -> Result<()> {
    Minimizer::default().run(automaton)
}

/// Configures the minimization pipeline. By default it behaves exactly like [`minimize`].
///
/// # Example
/// ```
/// use automaton_minimizer::prelude::*;
///
/// let mut automaton = AutomatonBuilder::default()
///     .default_behavior("idle")
///     .with_transitions([(0, 'x', 1), (1, 'x', 1)])
///     .into_automaton(0);
/// Minimizer::default().strip_loops(true).run(&mut automaton).unwrap();
/// assert_eq!(automaton.size(), 1);
/// assert_eq!(automaton.transition_count(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimizer {
    strip_loops: bool,
}

impl Minimizer {
    /// Determines whether self-loops are removed from the minimized automaton. Merging may turn
    /// transitions into self-loops, so loops are stripped after merging.
    pub fn strip_loops(mut self, strip_loops: bool) -> Self {
        self.strip_loops = strip_loops;
        self
    }

    /// Runs the configured pipeline on `automaton`, see [`minimize`].
    pub fn run<S: Symbol, B: Color>(&self, automaton: &mut Automaton<S, B>) -> Result<()> {
        let (states, transitions) = (automaton.size(), automaton.transition_count());
        trace!("minimizing automaton with {states} states and {transitions} transitions");

        prune(automaton);
        let relation = analyze(automaton)?;
        merge(automaton, &relation);
        if self.strip_loops {
            strip_loops(automaton);
        }

        debug!(
            "minimized automaton from {states} to {} states and from {transitions} to {} transitions",
            automaton.size(),
            automaton.transition_count()
        );
        Ok(())
    }
}

impl<S: Symbol, B: Color> Automaton<S, B> {
    /// Minimizes `self` in place, see [`minimize`].
    pub fn minimize(&mut self) -> Result<()> {
        minimize(self)
    }

    /// Removes all self-loops from `self`, see [`strip_loops`].
    pub fn strip_loops(&mut self) {
        strip_loops(self)
    }
}
