//! The CCO (Configurable Clique Optimiser) recursive branch-and-bound core.

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};

pub use crate::colourise::CCOPermutations;
use crate::bitgraph::BitGraph;
use crate::bitset::BitSet;
use crate::colourise::colourise;
use crate::incumbent::Incumbent;
use crate::output;
use crate::queue::Queue;

/// optional domination-based pruning applied when a vertex is excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CCOInference {
    /// no inference beyond the colour bound
    None,
    /// lazily computed per-vertex dominator sets, removed from `p` when the
    /// dominating vertex is excluded from the branch
    LazyGlobalDomination,
}

/// per-thread configuration and shared state needed by one call to [`expand`]
pub struct ExpandParams<'a> {
    pub graph: &'a BitGraph,
    pub incumbent: &'a Incumbent,
    pub abort: &'a AtomicBool,
    pub permutation: CCOPermutations,
    pub inference: CCOInference,
    pub stop_after_finding: usize,
    pub print_incumbents: bool,
    pub queue: Option<&'a Queue>,
    pub start: std::time::Instant,
}

/// thread-local accumulators carried through one worker's recursion
#[derive(Debug, Default)]
pub struct ExpandStats {
    pub nodes: u64,
    pub donations: u64,
}

/// thread-local lazy memo for [`CCOInference::LazyGlobalDomination`]:
/// `dominators[v]` is the set of vertices dominated by `v`, computed once
pub struct DominationMemo {
    dominators: Vec<RefCell<Option<BitSet>>>,
}

impl DominationMemo {
    pub fn new(n: usize) -> Self {
        DominationMemo { dominators: (0..n).map(|_| RefCell::new(None)).collect() }
    }

    /// `D(v)`: every `u` such that `N(u) \ N(v) \ {v} = empty`, i.e. `v` dominates `u`
    fn dominated_by(&self, graph: &BitGraph, v: usize) -> BitSet {
        if let Some(cached) = self.dominators[v].borrow().as_ref() {
            return cached.clone();
        }
        let n = graph.size();
        let mut result = BitSet::with_capacity(n);
        let nv = graph.neighbourhood(v);
        for u in 0..n {
            if u == v {
                continue;
            }
            let mut remainder = graph.neighbourhood(u).clone();
            remainder.intersect_with_complement(nv);
            remainder.unset(v);
            if remainder.is_empty() {
                result.set(u);
            }
        }
        *self.dominators[v].borrow_mut() = Some(result.clone());
        result
    }
}

/// recursively extend the clique `c` over candidates `p`, updating `incumbent`
/// in place and returning once `p` is exhausted or the search is aborted
#[allow(clippy::too_many_arguments)]
pub fn expand(
    params: &ExpandParams,
    mut p: BitSet,
    c: &mut Vec<u32>,
    position: &mut Vec<usize>,
    stats: &mut ExpandStats,
    memo: &DominationMemo,
) {
    stats.nodes += 1;
    if params.abort.load(Ordering::Acquire) {
        return;
    }

    let colouring = colourise(params.graph, &p, params.permutation);
    let len = colouring.p_order.len();

    if len == 0 {
        // no candidates left to extend with: `c` itself is a maximal clique
        // (this is also how a singleton seed with no higher neighbours gets
        // offered to the incumbent)
        if c.len() > params.incumbent.get() {
            let improved = params.incumbent.update(c.len(), c);
            if improved && params.print_incumbents {
                output::print_incumbent(params.start.elapsed(), c.len(), position);
            }
        }
        return;
    }

    for i in (0..len).rev() {
        if let Some(slot) = position.last_mut() {
            *slot = i;
        }

        if c.len() + colouring.colours[i] as usize <= params.incumbent.get() {
            return;
        }
        if params.incumbent.get() >= params.stop_after_finding {
            return;
        }

        let v = colouring.p_order[i] as usize;

        let skip = params.inference == CCOInference::LazyGlobalDomination && is_dominated(params.graph, memo, &p, v);

        let mut donated = false;
        if !skip {
            let mut new_p = p.clone();
            params.graph.intersect_with_row(v, &mut new_p);

            if new_p.is_empty() {
                if c.len() + 1 > params.incumbent.get() {
                    c.push(v as u32);
                    if params.incumbent.update(c.len(), c) && params.print_incumbents {
                        output::print_incumbent(params.start.elapsed(), c.len(), position);
                    }
                    c.pop();
                }
            } else {
                donated = maybe_donate(params, &colouring.p_order, i, c, position, stats);
                c.push(v as u32);
                position.push(0);
                expand(params, new_p, c, position, stats, memo);
                position.pop();
                c.pop();
            }
        }

        p.unset(v);

        if params.inference == CCOInference::LazyGlobalDomination {
            let dominated = memo.dominated_by(params.graph, v);
            p.intersect_with_complement(&dominated);
        }

        // the tail `p_order[0..i]` just went to another worker: stop here
        // instead of re-walking it ourselves
        if donated {
            return;
        }
    }
}

/// a vertex `v` is skippable on this iteration if some already-present
/// dominator of `v` is itself still a viable candidate in `p`
fn is_dominated(graph: &BitGraph, memo: &DominationMemo, p: &BitSet, v: usize) -> bool {
    for u in p.iter() {
        if u == v {
            continue;
        }
        if memo.dominated_by(graph, u).test(v) {
            return true;
        }
    }
    false
}

/// split the not-yet-examined tail of the branch order (`p_order[0..i]`,
/// the candidates below the one currently being tried) off to an idle
/// consumer, never donating a tail of exactly one candidate. Returns
/// whether a donation happened, so the caller can stop walking the tail
/// itself and leave it entirely to the donee.
fn maybe_donate(
    params: &ExpandParams,
    p_order: &[u32],
    i: usize,
    c: &[u32],
    position: &[usize],
    stats: &mut ExpandStats,
) -> bool {
    let queue = match params.queue {
        Some(q) => q,
        None => return false,
    };
    if i <= 1 || !queue.want_donations() {
        return false;
    }

    let n = params.graph.size();
    let mut tail = BitSet::with_capacity(n);
    for &v in &p_order[0..i] {
        tail.set(v as usize);
    }

    queue.begin_donation();
    queue.enqueue(crate::queue::Subproblem {
        c: c.to_vec(),
        p: tail,
        position: position.to_vec(),
    });
    queue.end_donation();
    stats.donations += 1;
    true
}
