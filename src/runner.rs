//! Thread pool lifecycle: seeds the work queue from the graph's top-level
//! vertices, spawns workers against a shared incumbent, watches an optional
//! timeout, and merges per-thread results.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

use crate::bitgraph::BitGraph;
use crate::bitset::BitSet;
use crate::cco::{expand, CCOInference, CCOPermutations, DominationMemo, ExpandParams, ExpandStats};
use crate::error::GraphError;
use crate::graph::Graph;
use crate::incumbent::Incumbent;
use crate::ordering;
use crate::queue::{Queue, Subproblem};

/// configuration for one [`solve`] call
#[derive(Debug, Clone)]
pub struct SolveParams {
    /// name of the initial vertex ordering (see [`crate::ordering::ORDER_NAMES`])
    pub order: String,
    /// number of worker threads
    pub n_threads: usize,
    /// wall-clock budget; `None` means run to completion
    pub timeout: Option<Duration>,
    /// starting lower bound; a clique of exactly this size will not be installed
    pub initial_bound: usize,
    /// stop as soon as a clique of this size is found
    pub stop_after_finding: usize,
    /// stream progress lines to stdout as the incumbent improves
    pub print_incumbents: bool,
    /// colour-class permutation policy
    pub permutation: CCOPermutations,
    /// inference applied alongside the colour bound
    pub inference: CCOInference,
}

impl Default for SolveParams {
    fn default() -> Self {
        SolveParams {
            order: "ex".to_string(),
            n_threads: 1,
            timeout: None,
            initial_bound: 0,
            stop_after_finding: usize::MAX,
            print_incumbents: false,
            permutation: CCOPermutations::Defer1,
            inference: CCOInference::None,
        }
    }
}

/// outcome of one [`solve`] call
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// size of the best clique found
    pub size: usize,
    /// its members, in original (pre-ordering) vertex ids
    pub members: BTreeSet<usize>,
    /// total search-tree nodes visited across all threads
    pub nodes: u64,
    /// total donations performed across all threads
    pub donations: u64,
    /// wall-clock time spent in each worker thread
    pub thread_times: Vec<Duration>,
    /// wall-clock time for the whole solve
    pub total_time: Duration,
    /// whether the timeout fired before the search completed exhaustively
    pub aborted: bool,
}

struct TimeoutGate {
    lock: Mutex<bool>,
    cv: Condvar,
}

impl TimeoutGate {
    fn new() -> Self {
        TimeoutGate { lock: Mutex::new(false), cv: Condvar::new() }
    }

    fn signal_done(&self) {
        let mut done = self.lock.lock().expect("timeout gate mutex poisoned");
        *done = true;
        self.cv.notify_all();
    }

    fn wait_for(&self, timeout: Duration) -> bool {
        let guard = self.lock.lock().expect("timeout gate mutex poisoned");
        let (guard, result) = self
            .cv
            .wait_timeout_while(guard, timeout, |done| !*done)
            .expect("timeout gate mutex poisoned");
        drop(guard);
        !result.timed_out()
    }
}

/// run the CCO solver on `graph` with the given `params`
pub fn solve(graph: &Graph, params: &SolveParams) -> Result<SolveResult, GraphError> {
    let n = graph.size();
    let order = ordering::compute(&params.order, graph)?;

    let mut bitgraph = BitGraph::new(n)?;
    for i in 0..n {
        for j in (i + 1)..n {
            if graph.adjacent(order[i], order[j]) {
                bitgraph.add_edge(i, j);
            }
        }
    }

    let incumbent = Incumbent::new(params.initial_bound);
    let abort = AtomicBool::new(false);
    let queue = Queue::new((n * 4).max(16));
    let gate = TimeoutGate::new();

    for v in (0..n).rev() {
        let mut p = BitSet::with_capacity(n);
        for w in (v + 1)..n {
            if bitgraph.adjacent(v, w) {
                p.set(w);
            }
        }
        queue.enqueue_blocking(
            Subproblem { c: vec![v as u32], p, position: vec![v, 0] },
            params.n_threads,
        );
    }
    queue.initial_producer_done();

    let start = Instant::now();
    let mut thread_times = Vec::new();
    let mut total_nodes = 0u64;
    let mut total_donations = 0u64;

    std::thread::scope(|scope| {
        let mut handles = Vec::new();
        for _ in 0..params.n_threads.max(1) {
            let bitgraph = &bitgraph;
            let incumbent = &incumbent;
            let abort = &abort;
            let queue = &queue;
            handles.push(scope.spawn(move || {
                let thread_start = Instant::now();
                let params_ref = ExpandParams {
                    graph: bitgraph,
                    incumbent,
                    abort,
                    permutation: params.permutation,
                    inference: params.inference,
                    stop_after_finding: params.stop_after_finding,
                    print_incumbents: params.print_incumbents,
                    queue: Some(queue),
                    start,
                };
                let memo = DominationMemo::new(n);
                let mut stats = ExpandStats::default();
                while let Some(sub) = queue.dequeue_blocking() {
                    if abort.load(Ordering::Acquire) {
                        break;
                    }
                    let Subproblem { mut c, p, mut position } = sub;
                    expand(&params_ref, p, &mut c, &mut position, &mut stats, &memo);
                }
                (stats, thread_start.elapsed())
            }));
        }

        if let Some(timeout) = params.timeout {
            let gate = &gate;
            let abort = &abort;
            scope.spawn(move || {
                if !gate.wait_for(timeout) {
                    abort.store(true, Ordering::Release);
                }
            });
        }

        for h in handles {
            let (stats, elapsed) = h.join().expect("worker thread panicked");
            total_nodes += stats.nodes;
            total_donations += stats.donations;
            thread_times.push(elapsed);
        }

        gate.signal_done();
    });

    let total_time = start.elapsed();
    let aborted = abort.load(Ordering::Acquire);
    let members: BTreeSet<usize> = incumbent.members().iter().map(|&idx| order[idx as usize]).collect();

    Ok(SolveResult {
        size: incumbent.get(),
        members,
        nodes: total_nodes,
        donations: total_donations,
        thread_times,
        total_time,
        aborted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k5() -> Graph {
        let mut g = Graph::new(5, false);
        for a in 0..5 {
            for b in (a + 1)..5 {
                g.add_edge(a, b);
            }
        }
        g
    }

    fn c5() -> Graph {
        let mut g = Graph::new(5, false);
        for i in 0..5 {
            g.add_edge(i, (i + 1) % 5);
        }
        g
    }

    #[test]
    fn test_solves_k5() {
        let g = k5();
        let result = solve(&g, &SolveParams::default()).unwrap();
        assert_eq!(result.size, 5);
        assert_eq!(result.members.len(), 5);
        assert!(g.is_clique(&result.members.iter().copied().collect()));
        assert!(!result.aborted);
    }

    #[test]
    fn test_solves_c5() {
        let g = c5();
        let result = solve(&g, &SolveParams::default()).unwrap();
        assert_eq!(result.size, 2);
    }

    #[test]
    fn test_thread_count_invariance() {
        let g = c5();
        for n_threads in [1, 2, 4, 8] {
            let params = SolveParams { n_threads, ..SolveParams::default() };
            let result = solve(&g, &params).unwrap();
            assert_eq!(result.size, 2, "mismatch at n_threads={}", n_threads);
        }
    }

    #[test]
    fn test_order_invariance() {
        let g = c5();
        for order in ["deg", "ex", "none", "rev", "mw"] {
            let params = SolveParams { order: order.to_string(), ..SolveParams::default() };
            let result = solve(&g, &params).unwrap();
            assert_eq!(result.size, 2, "mismatch at order={}", order);
        }
    }

    #[test]
    fn test_stop_after_finding() {
        let g = k5();
        let params = SolveParams { stop_after_finding: 3, ..SolveParams::default() };
        let result = solve(&g, &params).unwrap();
        assert!(result.size >= 3);
    }

    #[test]
    fn test_timeout_still_returns_a_clique() {
        let g = k5();
        let params = SolveParams { timeout: Some(Duration::from_millis(50)), ..SolveParams::default() };
        let result = solve(&g, &params).unwrap();
        assert!(result.size >= 1);
    }
}
