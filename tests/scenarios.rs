//! Concrete scenarios S1-S8 and the cross-cutting invariants: correctness
//! against a brute-force oracle, clique validity, maximality, order and
//! thread invariance, complement symmetry, and self-loop rejection across
//! every loader.

use std::collections::{BTreeSet, HashSet};
use std::io::Write;
use std::time::Duration;

use cco_clique::formats::{self, FORMAT_NAMES};
use cco_clique::graph::{Graph, GraphOptions};
use cco_clique::runner::{solve, SolveParams};

fn k(n: usize) -> Graph {
    let mut g = Graph::new(n, false);
    for a in 0..n {
        for b in (a + 1)..n {
            g.add_edge(a, b);
        }
    }
    g
}

fn cycle(n: usize) -> Graph {
    let mut g = Graph::new(n, false);
    for i in 0..n {
        g.add_edge(i, (i + 1) % n);
    }
    g
}

fn petersen() -> Graph {
    let mut g = Graph::new(10, false);
    for i in 0..5 {
        g.add_edge(i, (i + 1) % 5);
    }
    for i in 0..5 {
        g.add_edge(5 + i, 5 + (i + 2) % 5);
    }
    for i in 0..5 {
        g.add_edge(i, 5 + i);
    }
    g
}

/// deterministic xorshift, test-only: avoids pulling in a random-number
/// crate just to generate a fixture graph
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}

fn dense_random_graph(n: usize, density_pct: u64, seed: u64) -> Graph {
    let mut rng = XorShift(seed);
    let mut g = Graph::new(n, false);
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.next() % 100 < density_pct {
                g.add_edge(a, b);
            }
        }
    }
    g
}

/// test-only exhaustive oracle; not exposed as a public solver.
fn naive_max_clique(g: &Graph) -> usize {
    let n = g.size();
    let mut best = 0;
    for mask in 0u64..(1u64 << n) {
        let members: Vec<usize> = (0..n).filter(|&v| mask & (1 << v) != 0).collect();
        if members.len() <= best {
            continue;
        }
        let set: HashSet<usize> = members.iter().copied().collect();
        if g.is_clique(&set) {
            best = members.len();
        }
    }
    best
}

#[test]
fn s1_k5() {
    let result = solve(&k(5), &SolveParams::default()).unwrap();
    assert_eq!(result.size, 5);
}

#[test]
fn s2_empty5() {
    let result = solve(&Graph::new(5, false), &SolveParams::default()).unwrap();
    assert_eq!(result.size, 1);
}

#[test]
fn s3_c5() {
    let result = solve(&cycle(5), &SolveParams::default()).unwrap();
    assert_eq!(result.size, 2);
}

#[test]
fn s4_disjoint_k3_k4() {
    let mut g = Graph::new(7, false);
    for a in 0..3 {
        for b in (a + 1)..3 {
            g.add_edge(a, b);
        }
    }
    for a in 3..7 {
        for b in (a + 1)..7 {
            g.add_edge(a, b);
        }
    }
    let result = solve(&g, &SolveParams::default()).unwrap();
    assert_eq!(result.size, 4);
    assert!((3..7).collect::<BTreeSet<_>>().is_superset(&result.members));
}

#[test]
fn s5_petersen_is_triangle_free() {
    let result = solve(&petersen(), &SolveParams::default()).unwrap();
    assert_eq!(result.size, 2);
}

#[test]
fn s6_dense_dimacs_fixture() {
    let mut contents = String::from("c dense fixture\np edge 6 15\n");
    for a in 1..=6 {
        for b in (a + 1)..=6 {
            contents.push_str(&format!("e {} {}\n", a, b));
        }
    }
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();

    let g = formats::read_graph("dimacs", file.path(), GraphOptions::default()).unwrap();
    let result = solve(&g, &SolveParams::default()).unwrap();
    assert_eq!(result.size, 6);
}

#[test]
fn s7_timeout_still_yields_a_valid_clique() {
    let g = dense_random_graph(45, 55, 0xC0FFEE);
    let params = SolveParams { timeout: Some(Duration::from_millis(1)), ..SolveParams::default() };
    let result = solve(&g, &params).unwrap();
    assert!(result.size >= 1);
    assert!(g.is_clique(&result.members));
}

#[test]
fn s8_n65_bitset_boundary() {
    // exercises the two-word BitSet path (n > 64)
    let result = solve(&k(65), &SolveParams::default()).unwrap();
    assert_eq!(result.size, 65);
}

#[test]
fn invariant_correctness_vs_naive_on_small_graphs() {
    let graphs = vec![k(5), cycle(5), petersen(), dense_random_graph(12, 40, 42), dense_random_graph(15, 60, 7)];
    for g in graphs {
        let expected = naive_max_clique(&g);
        let result = solve(&g, &SolveParams::default()).unwrap();
        assert_eq!(result.size, expected);
        assert!(g.is_clique(&result.members));
    }
}

#[test]
fn invariant_maximality_on_small_graphs() {
    let g = dense_random_graph(14, 45, 99);
    let result = solve(&g, &SolveParams::default()).unwrap();
    for v in 0..g.size() {
        if result.members.contains(&v) {
            continue;
        }
        let extends = result.members.iter().all(|&m| g.adjacent(v, m));
        assert!(!extends, "vertex {} would extend the returned clique", v);
    }
}

#[test]
fn invariant_order_invariance() {
    let g = dense_random_graph(16, 50, 123);
    let expected = solve(&g, &SolveParams::default()).unwrap().size;
    for order in ["deg", "revdeg", "ex", "revex", "dynex", "mw", "revmw", "mwsi", "none", "rev"] {
        let params = SolveParams { order: order.to_string(), ..SolveParams::default() };
        let result = solve(&g, &params).unwrap();
        assert_eq!(result.size, expected, "order '{}' disagreed", order);
    }
}

#[test]
fn invariant_thread_invariance() {
    let g = dense_random_graph(18, 50, 456);
    let expected = solve(&g, &SolveParams::default()).unwrap().size;
    for n_threads in [1, 2, 4, 8] {
        let params = SolveParams { n_threads, ..SolveParams::default() };
        let result = solve(&g, &params).unwrap();
        assert_eq!(result.size, expected, "n_threads={} disagreed", n_threads);
    }
}

#[test]
fn invariant_complement_symmetry() {
    let g = petersen();
    let complement = g.complement();
    // an independent set in G is a clique in complement(G); Petersen's
    // independence number is 4
    let result = solve(&complement, &SolveParams::default()).unwrap();
    assert_eq!(result.size, 4);
}

#[test]
fn invariant_self_loop_rejected_by_every_loader() {
    for &format in FORMAT_NAMES {
        let rejects = match format {
            "dimacs" => {
                let mut f = tempfile::NamedTempFile::new().unwrap();
                f.write_all(b"p edge 2 1\ne 1 1\n").unwrap();
                formats::read_graph(format, f.path(), GraphOptions::default()).is_err()
            }
            "pairs0" => {
                let mut f = tempfile::NamedTempFile::new().unwrap();
                f.write_all(b"2\n0 0\n").unwrap();
                formats::read_graph(format, f.path(), GraphOptions::default()).is_err()
            }
            "pairs1" => {
                let mut f = tempfile::NamedTempFile::new().unwrap();
                f.write_all(b"2\n1 1\n").unwrap();
                formats::read_graph(format, f.path(), GraphOptions::default()).is_err()
            }
            "net" => {
                let mut f = tempfile::NamedTempFile::new().unwrap();
                f.write_all(b"*Vertices 2\n*Edgeslist\n1 1\n").unwrap();
                formats::read_graph(format, f.path(), GraphOptions::default()).is_err()
            }
            "metis" => {
                let mut f = tempfile::NamedTempFile::new().unwrap();
                f.write_all(b"1 0\n1\n").unwrap();
                formats::read_graph(format, f.path(), GraphOptions::default()).is_err()
            }
            "mivia" => {
                let mut f = tempfile::NamedTempFile::new().unwrap();
                let mut bytes = Vec::new();
                bytes.extend_from_slice(&1u16.to_le_bytes());
                bytes.extend_from_slice(&0u16.to_le_bytes());
                bytes.extend_from_slice(&1u16.to_le_bytes());
                bytes.extend_from_slice(&0u16.to_le_bytes());
                f.write_all(&bytes).unwrap();
                formats::read_graph(format, f.path(), GraphOptions::default()).is_err()
            }
            "lad" => {
                let mut f = tempfile::NamedTempFile::new().unwrap();
                f.write_all(b"1\n1 0\n").unwrap();
                formats::read_graph(format, f.path(), GraphOptions::default()).is_err()
            }
            "lv" => {
                let mut f = tempfile::NamedTempFile::new().unwrap();
                f.write_all(b"1\n1 0\n").unwrap();
                formats::read_graph(format, f.path(), GraphOptions::default()).is_err()
            }
            "adj" => {
                let mut f = tempfile::NamedTempFile::new().unwrap();
                f.write_all(b"[[1]]").unwrap();
                formats::read_graph(format, f.path(), GraphOptions::default()).is_err()
            }
            other => panic!("unhandled format '{}' in self-loop-rejection test", other),
        };
        assert!(rejects, "format '{}' accepted a self-loop without allow_loops", format);
    }
}

#[test]
fn invariant_allow_loops_escape_hatch_except_lv() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(b"p edge 2 1\ne 1 1\n").unwrap();
    let opts = GraphOptions { allow_loops: true };
    assert!(formats::read_graph("dimacs", f.path(), opts).is_ok());

    let mut f_lv = tempfile::NamedTempFile::new().unwrap();
    f_lv.write_all(b"1\n1 0\n").unwrap();
    assert!(formats::read_graph("lv", f_lv.path(), opts).is_err());
}
