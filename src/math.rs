use std::collections::BTreeSet;

/// Hash set used for visited states during searches.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Hash map used to look up the position of a state and the replacement of a merged state.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// Two-way lookup between the [`crate::StateId`] of a state and its position in the state order,
/// as used by the equivalence analysis.
pub type Bijection<L, R> = bimap::BiBTreeMap<L, R>;

/// The classes of mutually equivalent states, as computed by
/// [`crate::minimization::Distinguishability::classes`]. Two partitions are equal if they consist of
/// the same classes, regardless of the order in which the classes are listed.
#[derive(Debug, Clone)]
pub struct Partition<I: Ord>(Vec<BTreeSet<I>>);

impl<I: Ord> std::ops::Deref for Partition<I> {
    type Target = Vec<BTreeSet<I>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, I: Ord> IntoIterator for &'a Partition<I> {
    type Item = &'a BTreeSet<I>;
    type IntoIter = std::slice::Iter<'a, BTreeSet<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<I: Ord> PartialEq for Partition<I> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|class| other.contains(class))
    }
}
impl<I: Ord> Eq for Partition<I> {}

impl<I: Ord> Partition<I> {
    /// Returns the number of classes.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Collects every inner iterator into one class.
    pub fn new<X: IntoIterator<Item = I>, Y: IntoIterator<Item = X>>(classes: Y) -> Self {
        Self(
            classes
                .into_iter()
                .map(|class| class.into_iter().collect())
                .collect(),
        )
    }
}

impl<I: Ord> From<Vec<BTreeSet<I>>> for Partition<I> {
    fn from(value: Vec<BTreeSet<I>>) -> Self {
        Self(value)
    }
}

/// Disjoint sets over the positions `0..n`. Unlike the usual union by rank, [`DisjointSets::merge_into`]
/// always makes the root of the kept element the root of the union, so the representative of a class
/// is determined by the order in which merges happen and not by the shape of the trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Finds the representative of the class containing `x`, halving paths along the way.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Returns true if `x` is the representative of its class.
    pub fn is_representative(&self, x: usize) -> bool {
        self.parent[x] == x
    }

    /// Merges the class of `removed` into the class of `kept`, the representative of `kept` stays
    /// the representative of the union. Returns false if both were already in the same class.
    pub fn merge_into(&mut self, removed: usize, kept: usize) -> bool {
        let (removed, kept) = (self.find(removed), self.find(kept));
        if removed == kept {
            return false;
        }
        self.parent[removed] = kept;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_equality_disregards_order() {
        let first = Partition::new([vec![0, 1], vec![2]]);
        let second = Partition::new([vec![2], vec![1, 0]]);
        assert_eq!(first, second);
        assert_eq!(first.size(), 2);
    }

    #[test]
    fn disjoint_sets_keep_the_requested_root() {
        let mut sets = DisjointSets::new(4);
        assert!(sets.merge_into(0, 1));
        assert!(sets.merge_into(1, 3));
        assert!(!sets.merge_into(0, 3));
        assert_eq!(sets.find(0), 3);
        assert_eq!(sets.find(1), 3);
        assert_eq!(sets.find(2), 2);
        assert!(sets.is_representative(3));
        assert!(!sets.is_representative(1));
    }
}
