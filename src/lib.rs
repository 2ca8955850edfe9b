//! Exact branch-and-bound solver for the maximum clique problem.
//!
//! The core is the CCO (Configurable Clique Optimiser) engine: a bitset
//! graph representation, San Segundo's greedy colour bound, a recursive
//! branch-and-bound search, and a parallel work-stealing runner built on a
//! blocking queue with on-demand work donation.

#![warn(missing_debug_implementations)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]

/// runtime-width bitset: the hot-loop primitive everything else is built on
pub mod bitset;

/// bitset adjacency matrix ("BitGraph") built once from a [`graph::Graph`]
pub mod bitgraph;

/// plain graph type, build-once / read-many
pub mod graph;

/// error types shared by every graph-file loader
pub mod error;

/// graph-file format loaders (DIMACS, pairs, net, METIS, MIVIA, LAD, LV, adj)
pub mod formats;

/// deterministic initial vertex orderings
pub mod ordering;

/// San Segundo bitset colouring and colour-class permutation policies
pub mod colourise;

/// the CCO recursive branch-and-bound core
pub mod cco;

/// lock-free-read / mutex-guarded shared incumbent
pub mod incumbent;

/// bounded blocking work queue with donation support
pub mod queue;

/// thread pool lifecycle, timeout watcher, result merging
pub mod runner;

/// process-wide output mutex for progress logging
pub mod output;

pub use cco::{CCOInference, CCOPermutations};
pub use graph::Graph;
pub use runner::{SolveParams, SolveResult};
