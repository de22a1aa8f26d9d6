/// A disjoint-set union (union-find) over the node indices `0..n`.
///
/// Each node starts in its own class. `union` merges classes by size and
/// `find` compresses the walked path, so both run in near-constant amortized time.
///
/// # Example
///
/// ```
/// use mst_connector::dsu::DisjointSetUnion;
///
/// let mut dsu = DisjointSetUnion::new(4);
/// assert!(dsu.union(0, 1));
/// assert!(!dsu.union(1, 0));
/// assert!(dsu.connected(0, 1));
/// assert_eq!(dsu.component_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSetUnion {
    /// `parent[i]` is the parent of node `i`; roots point at themselves.
    parent: Vec<usize>,
    /// `size[r]` is the size of the class rooted at `r`. Stale for non-roots.
    size: Vec<usize>,
    components: usize,
}

impl DisjointSetUnion {
    /// Creates `n` singleton classes.
    pub fn new(n: usize) -> DisjointSetUnion {
        DisjointSetUnion {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint classes currently tracked.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Finds the representative of the class containing `x`.
    ///
    /// Every visited node is re-pointed at its grandparent on the way up
    /// (path halving), which flattens the chain for later calls.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the classes containing `a` and `b`.
    ///
    /// # Returns
    ///
    /// `true` if the classes were different and are now merged,
    /// `false` if `a` and `b` were already connected.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        if self.size[root_a] < self.size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];
        self.components -= 1;
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Size of the class containing `x`.
    pub fn size_of(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}
