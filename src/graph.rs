//! A plain graph: vertex count, symmetric adjacency, no self-loops.
//!
//! Build-once / read-many. Populated by one of the [`crate::formats`]
//! loaders, then reordered and transcoded into a [`crate::bitgraph::BitGraph`]
//! for the hot loop.

use std::collections::HashSet;

/// options accepted by the graph-file loaders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    /// accept self-loops instead of rejecting them
    pub allow_loops: bool,
}

/// A graph with an adjacency-list representation.
///
/// Indices start at 0. `add_one_for_output` only affects [`Graph::vertex_name`].
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    adj_list: Vec<Vec<usize>>,
    add_one_for_output: bool,
}

impl Graph {
    /// an edgeless graph on `n` vertices
    pub fn new(n: usize, add_one_for_output: bool) -> Self {
        Graph {
            n,
            adj_list: vec![Vec::new(); n],
            add_one_for_output,
        }
    }

    /// number of vertices
    pub fn size(&self) -> usize {
        self.n
    }

    /// grow (never shrink) the graph to `n` vertices; must be called before
    /// any edge is added
    pub fn resize(&mut self, n: usize) {
        self.n = n;
        self.adj_list.resize(n, Vec::new());
    }

    /// add an edge between `a` and `b` (both directions); idempotent
    pub fn add_edge(&mut self, a: usize, b: usize) {
        if !self.adj_list[a].contains(&b) {
            self.adj_list[a].push(b);
            self.adj_list[b].push(a);
        }
    }

    /// are `a` and `b` adjacent?
    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        self.adj_list[a].contains(&b)
    }

    /// degree of `v`
    pub fn degree(&self, v: usize) -> usize {
        self.adj_list[v].len()
    }

    /// neighbours of `v`, in the order they were added
    pub fn neighbours(&self, v: usize) -> &[usize] {
        &self.adj_list[v]
    }

    /// number of distinct edges
    pub fn num_edges(&self) -> usize {
        self.adj_list.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// format a vertex for human consumption, honouring `add_one_for_output`
    pub fn vertex_name(&self, v: usize) -> String {
        if self.add_one_for_output {
            (v + 1).to_string()
        } else {
            v.to_string()
        }
    }

    /// the complement of this graph (same vertex set, inverted adjacency,
    /// still no self-loops)
    pub fn complement(&self) -> Graph {
        let mut result = Graph::new(self.n, self.add_one_for_output);
        for a in 0..self.n {
            for b in (a + 1)..self.n {
                if !self.adjacent(a, b) {
                    result.add_edge(a, b);
                }
            }
        }
        result
    }

    /// a complete graph on `n` vertices
    pub fn complete(n: usize) -> Graph {
        let mut g = Graph::new(n, false);
        for a in 0..n {
            for b in (a + 1)..n {
                g.add_edge(a, b);
            }
        }
        g
    }

    /// an edgeless graph on `n` vertices
    pub fn empty(n: usize) -> Graph {
        Graph::new(n, false)
    }

    /// a graph built directly from an edge list (used by loaders once the
    /// final vertex count is known)
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Graph {
        let mut g = Graph::new(n, false);
        for (a, b) in edges {
            g.add_edge(a, b);
        }
        g
    }

    /// every member of `members` is pairwise adjacent (the "clique" checker
    /// shared by tests and the CLI's optional verification path)
    pub fn is_clique<'a>(&self, members: impl IntoIterator<Item = &'a usize>) -> bool {
        let v: Vec<usize> = members.into_iter().copied().collect();
        for i in 0..v.len() {
            for j in (i + 1)..v.len() {
                if !self.adjacent(v[i], v[j]) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_idempotent() {
        let mut g = Graph::new(3, false);
        g.add_edge(0, 1);
        g.add_edge(0, 1);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_complement() {
        let g = Graph::complete(4);
        let c = g.complement();
        assert_eq!(c.num_edges(), 0);
    }

    #[test]
    fn test_vertex_name() {
        let g = Graph::new(3, true);
        assert_eq!(g.vertex_name(0), "1");
        let g0 = Graph::new(3, false);
        assert_eq!(g0.vertex_name(0), "0");
    }

    #[test]
    fn test_is_clique() {
        let g = Graph::complete(4);
        let members: HashSet<usize> = [0, 1, 2].iter().copied().collect();
        assert!(g.is_clique(&members));
        let mut g2 = Graph::new(4, false);
        g2.add_edge(0, 1);
        let members2: HashSet<usize> = [0, 1, 2].iter().copied().collect();
        assert!(!g2.is_clique(&members2));
    }
}
