/// Disjoint-set forest over `0..n` with union by rank and path compression.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {

    /// Creates `n` singleton sets.
    ///
    /// # Panics
    /// * If `n` elements cannot be allocated.
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let rank = vec![0; n];
        UnionFind { parent, rank }
    }

    /// Returns the representative of the set containing `n`. Every node visited on the way
    /// up is re-pointed directly at the root.
    ///
    /// # Panics
    /// * If `n` is not below the number of elements.
    pub fn find(&mut self, mut n: usize) -> usize {
        let mut root = n;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[n] != root {
            let next = self.parent[n];
            self.parent[n] = root;
            n = next;
        }
        root
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// # Returns
    /// * `true` if two different sets were merged, `false` if `a` and `b` were already in
    ///   the same set, in which case nothing changes.
    ///
    /// # Panics
    /// * If `a` or `b` is not below the number of elements.
    pub fn unite(&mut self, a: usize, b: usize) -> bool {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return false;
        }
        if self.rank[a] < self.rank[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        if self.rank[a] == self.rank[b] {
            self.rank[a] += 1;
        }
        true
    }

    pub fn same(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons() {
        let mut union_find = UnionFind::new(4);
        for n in 0..4 {
            assert_eq!(union_find.find(n), n);
        }
        assert!(!union_find.same(0, 1));
    }

    #[test]
    fn unite_is_transitive() {
        let mut union_find = UnionFind::new(6);
        assert!(union_find.unite(0, 1));
        assert!(union_find.unite(2, 3));
        assert!(union_find.unite(1, 3));
        assert!(union_find.same(0, 2));
        assert!(!union_find.same(0, 4));
        assert!(!union_find.same(5, 4));
    }

    #[test]
    fn unite_already_joined() {
        let mut union_find = UnionFind::new(3);
        assert!(union_find.unite(0, 1));
        let (parent, rank) = (union_find.parent.clone(), union_find.rank.clone());
        assert!(!union_find.unite(1, 0));
        assert!(!union_find.unite(2, 2));
        assert_eq!(union_find.parent, parent);
        assert_eq!(union_find.rank, rank);
        assert!(!union_find.same(0, 2));
    }

    #[test]
    fn find_compresses_paths() {
        let mut union_find = UnionFind::new(4);
        union_find.unite(0, 1);
        union_find.unite(2, 3);
        union_find.unite(0, 2);
        let root = union_find.find(3);
        for n in 0..4 {
            union_find.find(n);
            assert_eq!(union_find.parent[n], root);
        }
    }

    #[test]
    fn rank_keeps_taller_root() {
        let mut union_find = UnionFind::new(3);
        union_find.unite(0, 1);
        let root = union_find.find(0);
        union_find.unite(2, 0);
        assert_eq!(union_find.find(2), root);
        assert_eq!(union_find.rank[root], 1);
    }
}
