use bit_set::BitSet;
use itertools::Itertools;
use owo_colors::OwoColorize;
use tracing::{debug, trace};

use crate::{
    automaton::StateId,
    error::Result,
    math::{Bijection, Partition},
    Automaton, Color, Show, Symbol,
};

/// A symmetric relation over the positions of the states of an automaton, which marks pairs of
/// states that have been shown to behave differently. It is only meaningful for the state order that
/// it was computed for, which is stored alongside.
///
/// Only the lower triangle of the relation is stored. The pair `(i, j)` with `j < i` lives at bit
/// `i * (i - 1) / 2 + j`, queries for `(j, i)` are answered from the same bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Distinguishability {
    order: Vec<StateId>,
    marked: BitSet,
}

impl Distinguishability {
    pub(crate) fn new(order: Vec<StateId>) -> Self {
        let n = order.len();
        Self {
            order,
            marked: BitSet::with_capacity(n * n.saturating_sub(1) / 2),
        }
    }

    fn slot(i: usize, j: usize) -> usize {
        let (hi, lo) = if i > j { (i, j) } else { (j, i) };
        hi * (hi - 1) / 2 + lo
    }

    /// Returns the number of states the relation ranges over.
    pub fn size(&self) -> usize {
        self.order.len()
    }

    /// Returns the ids of the states in the order that positions refer to.
    pub fn order(&self) -> &[StateId] {
        &self.order
    }

    /// Returns true if the states at positions `i` and `j` are distinguishable. A state is never
    /// distinguishable from itself. Panics if a position is out of range.
    pub fn is_distinguishable(&self, i: usize, j: usize) -> bool {
        assert!(
            i < self.size() && j < self.size(),
            "positions ({i}, {j}) out of range, there are only {} states",
            self.size()
        );
        i != j && self.marked.contains(Self::slot(i, j))
    }

    /// Marks the pair `(i, j)`, returns true if it was not marked before.
    pub(crate) fn mark(&mut self, i: usize, j: usize) -> bool {
        debug_assert!(i != j, "cannot distinguish a state from itself");
        self.marked.insert(Self::slot(i, j))
    }

    /// Returns whether the states with the given ids are equivalent, or `None` if one of them is not
    /// covered by the relation.
    pub fn equivalent(&self, p: StateId, q: StateId) -> Option<bool> {
        let i = self.order.iter().position(|x| *x == p)?;
        let j = self.order.iter().position(|x| *x == q)?;
        Some(!self.is_distinguishable(i, j))
    }

    /// Returns the number of unordered pairs that are marked distinguishable.
    pub fn marked_pairs(&self) -> usize {
        self.marked.len()
    }

    /// Groups the states into classes of mutually equivalent states. Classes are ordered by their
    /// first member in state order.
    pub fn classes(&self) -> Partition<StateId> {
        let mut representatives: Vec<usize> = vec![];
        let mut classes: Vec<Vec<StateId>> = vec![];
        for i in 0..self.size() {
            match representatives
                .iter()
                .position(|&r| !self.is_distinguishable(i, r))
            {
                Some(class) => classes[class].push(self.order[i]),
                None => {
                    representatives.push(i);
                    classes.push(vec![self.order[i]]);
                }
            }
        }
        Partition::new(classes)
    }
}

impl Show for Distinguishability {
    fn show(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once(String::new()).chain(
                self.order
                    .iter()
                    .take(self.size().saturating_sub(1))
                    .map(|q| q.show()),
            ),
        );
        for i in 1..self.size() {
            let mut row = vec![self.order[i].show().bold().to_string()];
            row.extend((0..i).map(|j| {
                if self.is_distinguishable(i, j) {
                    "x".to_string()
                } else {
                    "=".dimmed().to_string()
                }
            }));
            row.extend((i..self.size() - 1).map(|_| String::new()));
            builder.push_record(row);
        }
        builder
            .build()
            .with(tabled::settings::Style::ascii())
            .to_string()
    }
}

/// Computes which pairs of states of `automaton` are distinguishable, using the table-filling algorithm.
///
/// Two states are distinguishable right away if their behavior types differ. Afterwards, a pair becomes
/// distinguishable if for some symbol the pair of successors is distinguishable, which is repeated until
/// nothing changes anymore. A state without a transition for some symbol is its own successor for that
/// symbol. Positions refer to the order of the states at the time of the call, so the states must not
/// be reordered or removed before the result is used.
///
/// Fails with [`crate::MinimizeError::NonDeterministic`] if some state has more than one successor for
/// a symbol.
pub fn analyze<S: Symbol, B: Color>(automaton: &Automaton<S, B>) -> Result<Distinguishability> {
    let order = automaton.state_ids().collect_vec();
    let positions: Bijection<StateId, usize> =
        order.iter().enumerate().map(|(i, q)| (*q, i)).collect();
    let n = order.len();
    let mut relation = Distinguishability::new(order);

    let states = automaton.states().collect_vec();
    for i in 0..n {
        for j in 0..i {
            if states[i].behavior() != states[j].behavior() {
                relation.mark(i, j);
            }
        }
    }
    trace!("{} pairs differ in their behavior", relation.marked_pairs());

    let successors = successor_table(automaton, &positions)?;

    let mut pass = 0;
    loop {
        pass += 1;
        let mut marked = 0;
        for i in 0..n {
            for j in 0..i {
                if relation.is_distinguishable(i, j) {
                    continue;
                }
                if successors[i]
                    .iter()
                    .zip(&successors[j])
                    .any(|(&p, &q)| relation.is_distinguishable(p, q))
                {
                    relation.mark(i, j);
                    marked += 1;
                }
            }
        }
        trace!("pass {pass} marked {marked} additional pairs");
        if marked == 0 {
            break;
        }
    }

    debug!(
        "{} of {} pairs are distinguishable after {pass} passes",
        relation.marked_pairs(),
        n * n.saturating_sub(1) / 2
    );
    Ok(relation)
}

/// For every state (by position) the positions of its successors, one per symbol in alphabet order.
fn successor_table<S: Symbol, B: Color>(
    automaton: &Automaton<S, B>,
    positions: &Bijection<StateId, usize>,
) -> Result<Vec<Vec<usize>>> {
    automaton
        .states()
        .enumerate()
        .map(|(i, state)| {
            automaton
                .alphabet()
                .universe()
                .map(|sym| -> Result<usize> {
                    Ok(match automaton.next_state(state.id(), sym)? {
                        Some(next) => *positions
                            .get_by_left(&next)
                            .expect("successor must be a state of the automaton"),
                        None => i,
                    })
                })
                .collect()
        })
        .collect()
}
