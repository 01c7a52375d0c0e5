//! Disjoint-set forest used by the spanning tree builder.
//!
//! Nodes are dense `usize` ids in `0..len`. `find` compresses every visited
//! path onto its root and `union` links by rank. When two roots share a rank
//! the root of the first argument survives, so replaying the same unions in
//! the same order always yields the same roots.

use std::cmp::Ordering;

/// Union-find over `0..len` with path compression and union by rank.
///
/// # Examples
/// ```
/// use netspan_core::DisjointSet;
///
/// let mut forest = DisjointSet::new(4);
/// assert_eq!(forest.component_count(), 4);
///
/// forest.union(0, 1);
/// forest.union(2, 3);
/// assert!(forest.same(0, 1));
/// assert!(!forest.same(1, 2));
/// assert_eq!(forest.component_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `size` singleton sets, each node its own root with rank zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
            components: size,
        }
    }

    /// Returns the number of nodes in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the forest has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the root of the set containing `node`, re-pointing every node
    /// on the way directly at that root.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`. Node ids come from the caller's own
    /// edge construction, so an out-of-range id is a logic error.
    pub fn find(&mut self, node: usize) -> usize {
        assert!(
            node < self.parent.len(),
            "node {node} is outside a forest of {} nodes",
            self.parent.len()
        );

        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Panics
    /// Panics when either node is out of range.
    pub fn same(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Merges the sets containing `left` and `right` and returns the root of
    /// the merged set.
    ///
    /// Nothing changes when both nodes already share a root; that root is
    /// returned. Otherwise the lower-rank root is attached below the
    /// higher-rank one. On equal ranks the root of `left` survives and its
    /// rank grows by one.
    ///
    /// # Panics
    /// Panics when either node is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> usize {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return left_root;
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (root, child) = match left_rank.cmp(&right_rank) {
            Ordering::Less => (right_root, left_root),
            Ordering::Greater | Ordering::Equal => (left_root, right_root),
        };

        self.parent[child] = root;
        if left_rank == right_rank {
            self.rank[root] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        root
    }
}
