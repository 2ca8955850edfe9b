//! Deterministic initial vertex orderings.
//!
//! Every ordering returns a permutation `order: Vec<usize>` where `order[i]`
//! is the original vertex id placed at position `i`. The `BitGraph` is then
//! built directly in this order, so `order[i]`'s row is row `i`.
//!
//! Tie-break convention, unless noted otherwise per ordering: ascending
//! metric, vertex-number-descending tiebreak. This is load-bearing for
//! bound-tightness reproducibility and must not be simplified.

use crate::error::GraphError;
use crate::graph::Graph;

/// names accepted by [`compute`] / `--order`
pub const ORDER_NAMES: &[&str] = &[
    "deg", "revdeg", "ex", "revex", "dynex", "revdynex", "mw", "revmw", "mwsi", "mwssi", "none", "rev",
];

/// compute the permutation named by `name` for `graph`
pub fn compute(name: &str, graph: &Graph) -> Result<Vec<usize>, GraphError> {
    let order = match name {
        "deg" => deg_order(graph, false),
        "revdeg" => reverse(deg_order(graph, false)),
        "ex" => ex_order(graph, false),
        "revex" => reverse(ex_order(graph, false)),
        "dynex" => dynex_order(graph, false),
        "revdynex" => reverse(dynex_order(graph, false)),
        "mw" => min_width_order(graph, false),
        "revmw" => min_width_order(graph, true),
        "mwsi" => mwsi_order(graph, false),
        "mwssi" => mwsi_order(graph, true),
        "none" => (0..graph.size()).collect(),
        "rev" => (0..graph.size()).rev().collect(),
        other => {
            return Err(GraphError::malformed(
                "<ordering>",
                format!("unknown ordering '{}', expected one of {:?}", other, ORDER_NAMES),
            ))
        }
    };
    Ok(order)
}

fn reverse(mut order: Vec<usize>) -> Vec<usize> {
    order.reverse();
    order
}

/// non-decreasing degree, ties broken by vertex number descending
fn deg_order(graph: &Graph, _reverse: bool) -> Vec<usize> {
    let mut vs: Vec<usize> = (0..graph.size()).collect();
    vs.sort_by(|&a, &b| graph.degree(a).cmp(&graph.degree(b)).then(b.cmp(&a)));
    vs
}

fn sum_neighbour_degree(graph: &Graph, v: usize) -> usize {
    graph.neighbours(v).iter().map(|&u| graph.degree(u)).sum()
}

/// degree, ties broken by ascending sum-of-neighbour-degrees, ties broken
/// by vertex number descending
fn ex_order(graph: &Graph, _reverse: bool) -> Vec<usize> {
    let mut vs: Vec<usize> = (0..graph.size()).collect();
    vs.sort_by(|&a, &b| {
        graph
            .degree(a)
            .cmp(&graph.degree(b))
            .then(sum_neighbour_degree(graph, a).cmp(&sum_neighbour_degree(graph, b)))
            .then(b.cmp(&a))
    });
    vs
}

/// like `ex`, but after each placement the remaining degrees are
/// recomputed against the not-yet-placed vertex set before the next sort
fn dynex_order(graph: &Graph, _reverse: bool) -> Vec<usize> {
    let n = graph.size();
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut placed = vec![false; n];
    let mut result = Vec::with_capacity(n);

    let induced_degree = |v: usize, placed: &[bool]| -> usize {
        graph.neighbours(v).iter().filter(|&&u| !placed[u]).count()
    };
    let induced_ex = |v: usize, placed: &[bool]| -> usize {
        graph
            .neighbours(v)
            .iter()
            .filter(|&&u| !placed[u])
            .map(|&u| induced_degree(u, placed))
            .sum()
    };

    while !remaining.is_empty() {
        remaining.sort_by(|&a, &b| {
            induced_degree(a, &placed)
                .cmp(&induced_degree(b, &placed))
                .then(induced_ex(a, &placed).cmp(&induced_ex(b, &placed)))
                .then(b.cmp(&a))
        });
        let v = remaining.remove(0);
        placed[v] = true;
        result.push(v);
    }
    result
}

/// repeatedly pick the not-yet-placed vertex of minimum induced degree,
/// decrementing neighbours' induced degree as vertices are removed; the
/// accumulation order is reversed unless `skip_final_reverse` is set
fn min_width_order(graph: &Graph, skip_final_reverse: bool) -> Vec<usize> {
    let n = graph.size();
    let mut degree: Vec<usize> = (0..n).map(|v| graph.degree(v)).collect();
    let mut removed = vec![false; n];
    let mut removal_order = Vec::with_capacity(n);

    for _ in 0..n {
        let v = (0..n)
            .filter(|&v| !removed[v])
            .min_by(|&a, &b| degree[a].cmp(&degree[b]).then(b.cmp(&a)))
            .expect("at least one unremoved vertex remains");
        removed[v] = true;
        removal_order.push(v);
        for &u in graph.neighbours(v) {
            if !removed[u] {
                degree[u] -= 1;
            }
        }
    }

    if skip_final_reverse {
        removal_order
    } else {
        removal_order.into_iter().rev().collect()
    }
}

/// minimum-width ordering with ex-degree tiebreak; `twin` flips the
/// vertex-number tiebreak direction, and the first quartile is stably
/// re-sorted by original degree descending
fn mwsi_order(graph: &Graph, twin: bool) -> Vec<usize> {
    let n = graph.size();
    let mut degree: Vec<usize> = (0..n).map(|v| graph.degree(v)).collect();
    let original_degree = degree.clone();
    let mut removed = vec![false; n];
    let mut removal_order = Vec::with_capacity(n);

    for _ in 0..n {
        let v = (0..n)
            .filter(|&v| !removed[v])
            .min_by(|&a, &b| {
                let primary = degree[a].cmp(&degree[b]);
                let ex_a: usize = graph.neighbours(a).iter().filter(|&&u| !removed[u]).map(|&u| degree[u]).sum();
                let ex_b: usize = graph.neighbours(b).iter().filter(|&&u| !removed[u]).map(|&u| degree[u]).sum();
                let secondary = ex_a.cmp(&ex_b);
                let tiebreak = if twin { b.cmp(&a) } else { a.cmp(&b) };
                primary.then(secondary).then(tiebreak)
            })
            .expect("at least one unremoved vertex remains");
        removed[v] = true;
        removal_order.push(v);
        for &u in graph.neighbours(v) {
            if !removed[u] {
                degree[u] -= 1;
            }
        }
    }

    let mut order: Vec<usize> = removal_order.into_iter().rev().collect();
    let quartile = order.len() / 4;
    order[..quartile].sort_by(|&a, &b| original_degree[b].cmp(&original_degree[a]));
    order
}
