//! Arena-backed union-find with path compression and union by rank
//!
//! Set members are plain indices into the arena. The generator creates one
//! node per maze cell so cell index and node index coincide, and drops the
//! arena once the run ends.

/// Disjoint-set forest over indices `0..len`
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// Create `size` singleton sets
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Add a new singleton set and return its index
    pub fn make_set(&mut self) -> usize {
        let index = self.parent.len();
        self.parent.push(index);
        self.rank.push(0);
        index
    }

    /// Number of elements across all sets
    pub const fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the forest holds no elements
    pub const fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Canonical representative of the set containing `node`
    ///
    /// Every node on the traversed path is re-pointed directly at the root.
    /// Unknown indices are their own representative.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while let Some(&parent) = self.parent.get(root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = node;
        while current != root {
            let Some(slot) = self.parent.get_mut(current) else {
                break;
            };
            current = std::mem::replace(slot, root);
        }

        root
    }

    /// Merge the sets containing `x` and `y`
    ///
    /// The root of lower rank is attached under the other; on a tie `y`'s root
    /// becomes the parent and its rank grows. Merging a set with itself is a no-op.
    pub fn union(&mut self, x: usize, y: usize) {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return;
        }
        let x_rank = self.rank(x_root).unwrap_or(0);
        let y_rank = self.rank(y_root).unwrap_or(0);

        if x_rank > y_rank {
            self.attach(y_root, x_root);
            return;
        }
        self.attach(x_root, y_root);
        if x_rank == y_rank
            && let Some(rank) = self.rank.get_mut(y_root)
        {
            *rank += 1;
        }
    }

    /// Whether `x` and `y` belong to the same set
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Rank of a node, meaningful for roots
    pub fn rank(&self, node: usize) -> Option<u32> {
        self.rank.get(node).copied()
    }

    fn attach(&mut self, child: usize, parent: usize) {
        if let Some(slot) = self.parent.get_mut(child) {
            *slot = parent;
        }
    }
}
