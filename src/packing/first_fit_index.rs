//! Max-aggregate search tree for first-fit shelf lookup.
//!
//! Leaves hold the free width of each shelf, in shelf creation order.
//! Every internal node holds the maximum of its two children, so the
//! root is the largest free width anywhere. Leaves not yet backed by a
//! shelf are `None`, which orders below every `Some(_)` and can never
//! satisfy a query.
//!
//! # Algorithm
//! - **Query**: if the root is below `need`, nothing fits. Otherwise walk
//!   down, taking the left child whenever it qualifies. The leaf reached
//!   is the lowest-index shelf with enough room.
//! - **Update**: write the leaf, then recompute ancestors up to the root.
//! - **Push**: when every leaf is taken, double the leaf count and rebuild.
//!
//! # Complexity
//! Query and update are O(log L) for L shelves; push is amortized O(1)
//! plus the O(log L) propagation.
//!
//! # Reference
//! Johnson (1974), "Fast Algorithms for Bin Packing" (tournament tree
//! for First Fit)

/// Max tree over shelf free widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstFitIndex {
    /// 1-based heap layout; `tree[1]` is the root, leaves start at `leaves`.
    tree: Vec<Option<i64>>,
    /// Leaf slots, always a power of two.
    leaves: usize,
    /// Leaves backed by a shelf.
    len: usize,
}

impl Default for FirstFitIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl FirstFitIndex {
    /// Creates an empty index with a single leaf slot.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty index with at least `capacity` leaf slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let leaves = capacity.max(1).next_power_of_two();
        Self {
            tree: vec![None; 2 * leaves],
            leaves,
            len: 0,
        }
    }

    /// Number of leaves in use.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no leaf is in use.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Leaf slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.leaves
    }

    /// Largest value over all leaves.
    #[inline]
    pub fn max(&self) -> Option<i64> {
        self.tree[1]
    }

    /// Value stored at `leaf`, `None` if the leaf is unused.
    pub fn get(&self, leaf: usize) -> Option<i64> {
        if leaf < self.len {
            self.tree[self.leaves + leaf]
        } else {
            None
        }
    }

    /// Appends a leaf with `value` and returns its index.
    pub fn push(&mut self, value: i64) -> usize {
        if self.len == self.leaves {
            self.grow();
        }
        let leaf = self.len;
        self.len += 1;
        self.set(leaf, value);
        leaf
    }

    /// Replaces the value at `leaf` and refreshes its ancestors.
    ///
    /// # Panics
    /// If `leaf` has not been pushed.
    pub fn update(&mut self, leaf: usize, value: i64) {
        assert!(
            leaf < self.len,
            "leaf {leaf} out of range (len {})",
            self.len
        );
        self.set(leaf, value);
    }

    /// Lowest-index leaf whose value is at least `need`.
    pub fn first_fit(&self, need: i64) -> Option<usize> {
        let need = Some(need);
        if self.tree[1] < need {
            return None;
        }

        let mut i = 1;
        while i < self.leaves {
            let left = 2 * i;
            i = if self.tree[left] >= need {
                left
            } else {
                left + 1
            };
        }
        Some(i - self.leaves)
    }

    fn set(&mut self, leaf: usize, value: i64) {
        let mut i = self.leaves + leaf;
        self.tree[i] = Some(value);
        i /= 2;
        while i >= 1 {
            self.tree[i] = self.tree[2 * i].max(self.tree[2 * i + 1]);
            i /= 2;
        }
    }

    fn grow(&mut self) {
        let leaves = self.leaves * 2;
        let mut tree = vec![None; 2 * leaves];
        tree[leaves..leaves + self.len]
            .copy_from_slice(&self.tree[self.leaves..self.leaves + self.len]);
        for i in (1..leaves).rev() {
            tree[i] = tree[2 * i].max(tree[2 * i + 1]);
        }

        log::trace!("first-fit index grown to {leaves} leaves");
        self.tree = tree;
        self.leaves = leaves;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn linear_first_fit(values: &[i64], need: i64) -> Option<usize> {
        values.iter().position(|&v| v >= need)
    }

    #[test]
    fn test_empty_index() {
        let index = FirstFitIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.max(), None);
        assert_eq!(index.first_fit(0), None);
        assert_eq!(index.first_fit(1), None);
    }

    #[test]
    fn test_first_fit_prefers_lowest_index() {
        let mut index = FirstFitIndex::with_capacity(4);
        index.push(1);
        index.push(5);
        index.push(3);
        index.push(5);

        assert_eq!(index.first_fit(1), Some(0));
        assert_eq!(index.first_fit(2), Some(1));
        assert_eq!(index.first_fit(5), Some(1));
        assert_eq!(index.first_fit(6), None);
    }

    #[test]
    fn test_zero_free_width_is_not_unused() {
        let mut index = FirstFitIndex::with_capacity(4);
        index.push(0);
        // A full shelf still answers a zero-width query; unused leaves never do.
        assert_eq!(index.first_fit(0), Some(0));
        assert_eq!(index.get(1), None);
    }

    #[test]
    fn test_update_propagates() {
        let mut index = FirstFitIndex::with_capacity(2);
        index.push(4);
        index.push(2);
        assert_eq!(index.max(), Some(4));

        index.update(0, 1);
        assert_eq!(index.max(), Some(2));
        assert_eq!(index.first_fit(2), Some(1));
        assert_eq!(index.get(0), Some(1));
    }

    #[test]
    #[should_panic]
    fn test_update_unused_leaf_panics() {
        let mut index = FirstFitIndex::with_capacity(4);
        index.push(3);
        index.update(2, 1);
    }

    #[test]
    fn test_growth_keeps_values() {
        let mut index = FirstFitIndex::new();
        for v in 0..37 {
            assert_eq!(index.push(v), v as usize);
        }
        assert_eq!(index.len(), 37);
        assert_eq!(index.capacity(), 64);
        assert_eq!(index.max(), Some(36));
        assert_eq!(index.first_fit(20), Some(20));
        assert_eq!(index.get(36), Some(36));
    }

    #[test]
    fn test_matches_linear_scan() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut index = FirstFitIndex::new();
        let mut values: Vec<i64> = Vec::new();

        for _ in 0..2000 {
            if values.is_empty() || rng.random_bool(0.3) {
                let v = rng.random_range(0..=50);
                index.push(v);
                values.push(v);
            } else {
                let leaf = rng.random_range(0..values.len());
                let v = rng.random_range(0..=50);
                index.update(leaf, v);
                values[leaf] = v;
            }

            let need = rng.random_range(0..=55);
            assert_eq!(index.first_fit(need), linear_first_fit(&values, need));
            assert_eq!(index.max(), values.iter().copied().max());
        }
    }
}
