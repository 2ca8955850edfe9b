//! Bitset adjacency matrix: one [`BitSet`] row per vertex.

use crate::bitset::BitSet;
use crate::error::GraphError;

/// Maximum number of vertices this crate will build a [`BitGraph`] for.
///
/// The original C++ dispatches over a compile-time template ladder of fixed
/// widths up to 1024 machine words; a runtime-width bitset has no such
/// ladder, so this is simply a sanity ceiling against pathological inputs
/// rather than a hard architectural limit.
pub const MAX_VERTICES: usize = 1 << 20;

/// A graph whose adjacency is stored as `n` rows of [`BitSet`].
///
/// Invariant: adjacency is symmetric and the diagonal is always zero.
#[derive(Debug, Clone)]
pub struct BitGraph {
    n: usize,
    rows: Vec<BitSet>,
}

impl BitGraph {
    /// an edgeless graph on `n` vertices
    pub fn new(n: usize) -> Result<Self, GraphError> {
        if n > MAX_VERTICES {
            return Err(GraphError::TooBig { n, max: MAX_VERTICES });
        }
        Ok(BitGraph {
            n,
            rows: vec![BitSet::with_capacity(n.max(1)); n],
        })
    }

    /// number of vertices
    pub fn size(&self) -> usize {
        self.n
    }

    /// set bits `(a,b)` and `(b,a)`; a no-op if already adjacent
    pub fn add_edge(&mut self, a: usize, b: usize) {
        debug_assert!(a != b, "BitGraph::add_edge: no self-loops");
        self.rows[a].set(b);
        self.rows[b].set(a);
    }

    /// are `a` and `b` adjacent?
    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        self.rows[a].test(b)
    }

    /// the neighbourhood of `v`, as a bitset
    pub fn neighbourhood(&self, v: usize) -> &BitSet {
        &self.rows[v]
    }

    /// degree of `v` in this graph
    pub fn degree(&self, v: usize) -> usize {
        self.rows[v].popcount()
    }

    /// `bs &= neighbourhood(v)`, in place, word-parallel — the hot loop.
    #[inline]
    pub fn intersect_with_row(&self, v: usize, bs: &mut BitSet) {
        bs.intersect_with(&self.rows[v]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut g = BitGraph::new(5).unwrap();
        g.add_edge(1, 3);
        assert!(g.adjacent(1, 3));
        assert!(g.adjacent(3, 1));
        assert!(!g.adjacent(1, 2));
    }

    #[test]
    fn test_degree() {
        let mut g = BitGraph::new(4).unwrap();
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(0, 3);
        assert_eq!(g.degree(0), 3);
        assert_eq!(g.degree(1), 1);
    }

    #[test]
    fn test_intersect_with_row() {
        let mut g = BitGraph::new(5).unwrap();
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 2);
        let mut bs = BitSet::with_capacity(5);
        bs.set(1);
        bs.set(2);
        bs.set(3);
        g.intersect_with_row(0, &mut bs);
        assert_eq!(bs.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_too_big_rejected() {
        assert!(BitGraph::new(MAX_VERTICES + 1).is_err());
    }
}
