//! A point-update, range-sum tree over a fixed integer domain.

/// A complete binary tree stored in a flat array, covering the leaves `0..len`.
///
/// The root lives at index 1 and the children of node `i` are `2 * i` and `2 * i + 1`.
/// A node covering `[lo, hi]` splits at `mid = (lo + hi) / 2`: the left child covers
/// `[lo, mid]` and the right child covers `[mid + 1, hi]`. Every node stores the sum of
/// the leaves below it.
///
/// The shape is fixed at construction; only the stored sums change.
#[derive(Clone, Debug)]
pub struct RangeTree {
    len: usize,
    // Index 0 is unused, because `2 * 0 == 0` can't be a child of the root.
    nodes: Vec<i64>,
}

fn left(node: usize) -> usize {
    node * 2
}

fn right(node: usize) -> usize {
    node * 2 + 1
}

#[allow(clippy::len_without_is_empty)]
impl RangeTree {
    /// Creates a tree over `0..len` with every leaf set to zero.
    ///
    /// # Panics
    /// Panics if `len` is zero.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "a range tree needs at least one leaf");
        // A midpoint-split tree over `len` leaves has depth `ceil(log2(len))`, so its
        // node indices stay below `2 * len.next_power_of_two()`.
        RangeTree {
            len,
            nodes: vec![0; 2 * len.next_power_of_two()],
        }
    }

    /// The number of leaves.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Adds `delta` to the leaf at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn update(&mut self, index: usize, delta: i64) {
        assert!(
            index < self.len,
            "update index {index} out of range for {} leaves",
            self.len
        );
        self.update_inner(1, 0, self.len - 1, index, delta);
    }

    fn update_inner(&mut self, node: usize, lo: usize, hi: usize, index: usize, delta: i64) {
        if lo == hi {
            self.nodes[node] += delta;
            return;
        }

        let mid = (lo + hi) / 2;
        if index <= mid {
            self.update_inner(left(node), lo, mid, index, delta);
        } else {
            self.update_inner(right(node), mid + 1, hi, index, delta);
        }
        self.nodes[node] = self.nodes[left(node)] + self.nodes[right(node)];
    }

    /// The sum of the leaves in `[lo, hi]` (inclusive on both ends).
    ///
    /// # Panics
    /// Panics unless `lo <= hi < self.len()`.
    pub fn query(&self, lo: usize, hi: usize) -> i64 {
        assert!(
            lo <= hi && hi < self.len,
            "query range [{lo}, {hi}] invalid for {} leaves",
            self.len
        );
        self.query_inner(1, 0, self.len - 1, lo, hi)
    }

    // Invariant: `[query_lo, query_hi]` is contained in `[lo, hi]`.
    fn query_inner(
        &self,
        node: usize,
        lo: usize,
        hi: usize,
        query_lo: usize,
        query_hi: usize,
    ) -> i64 {
        if lo == query_lo && hi == query_hi {
            return self.nodes[node];
        }

        let mid = (lo + hi) / 2;
        if query_hi <= mid {
            self.query_inner(left(node), lo, mid, query_lo, query_hi)
        } else if query_lo > mid {
            self.query_inner(right(node), mid + 1, hi, query_lo, query_hi)
        } else {
            self.query_inner(left(node), lo, mid, query_lo, mid)
                + self.query_inner(right(node), mid + 1, hi, mid + 1, query_hi)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_leaf() {
        let mut tree = RangeTree::new(1);
        tree.update(0, 1);
        tree.update(0, 1);
        assert_eq!(tree.query(0, 0), 2);
        tree.update(0, -1);
        assert_eq!(tree.query(0, 0), 1);
    }

    #[test]
    fn partial_ranges() {
        let mut tree = RangeTree::new(10);
        tree.update(0, 1);
        tree.update(4, 1);
        tree.update(5, 1);
        tree.update(9, 1);

        assert_eq!(tree.query(0, 9), 4);
        assert_eq!(tree.query(1, 8), 2);
        assert_eq!(tree.query(4, 4), 1);
        assert_eq!(tree.query(5, 5), 1);
        assert_eq!(tree.query(4, 5), 2);
        assert_eq!(tree.query(6, 8), 0);

        tree.update(4, -1);
        assert_eq!(tree.query(0, 9), 3);
        assert_eq!(tree.query(1, 4), 0);
    }

    #[test]
    fn non_power_of_two_lengths_fit() {
        for len in 1..=70 {
            let mut tree = RangeTree::new(len);
            for i in 0..len {
                tree.update(i, 1);
            }
            assert_eq!(tree.query(0, len - 1), len as i64);
            assert_eq!(tree.query(len - 1, len - 1), 1);
        }
    }

    #[test]
    #[should_panic]
    fn update_out_of_range() {
        let mut tree = RangeTree::new(4);
        tree.update(4, 1);
    }

    #[test]
    #[should_panic]
    fn reversed_query() {
        let tree = RangeTree::new(4);
        let _ = tree.query(3, 2);
    }

    fn updates(len: usize) -> impl Strategy<Value = Vec<(usize, i64)>> {
        prop::collection::vec((0..len, -3i64..=3), 0..64)
    }

    proptest! {
        #[test]
        fn matches_naive_sums(
            (len, ops, lo, hi) in (1usize..100).prop_flat_map(|len| {
                (Just(len), updates(len), 0..len, 0..len)
            })
        ) {
            let (lo, hi) = (lo.min(hi), lo.max(hi));
            let mut tree = RangeTree::new(len);
            let mut leaves = vec![0i64; len];
            for &(idx, delta) in &ops {
                tree.update(idx, delta);
                leaves[idx] += delta;
            }

            prop_assert_eq!(tree.query(lo, hi), leaves[lo..=hi].iter().sum::<i64>());
            for (i, &value) in leaves.iter().enumerate() {
                prop_assert_eq!(tree.query(i, i), value);
            }
        }
    }
}
