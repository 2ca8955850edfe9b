//! `max_clique`: CLI front-end for the CCO solver.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::builder::PossibleValuesParser;
use clap::Parser;

use cco_clique::cco::{CCOInference, CCOPermutations};
use cco_clique::formats::{self, FORMAT_NAMES};
use cco_clique::graph::GraphOptions;
use cco_clique::ordering::ORDER_NAMES;
use cco_clique::runner::{self, SolveParams};

/// exact maximum-clique solver
#[derive(Parser, Debug)]
#[command(name = "max_clique", version, about)]
struct Args {
    /// graph file format
    #[arg(long, value_parser = PossibleValuesParser::new(FORMAT_NAMES.iter().copied()))]
    format: String,

    /// graph file to read
    file: PathBuf,

    /// wall-clock budget in seconds; omit to run to completion
    #[arg(long)]
    timeout: Option<u64>,

    /// number of worker threads
    #[arg(long)]
    threads: Option<usize>,

    /// initial vertex ordering
    #[arg(long, default_value = "ex", value_parser = PossibleValuesParser::new(ORDER_NAMES.iter().copied()))]
    order: String,

    /// starting lower bound
    #[arg(long, default_value_t = 0)]
    initial_bound: usize,

    /// stop as soon as a clique of this size is found
    #[arg(long)]
    stop_after_finding: Option<usize>,

    /// stream progress lines as the incumbent improves
    #[arg(long)]
    print_incumbents: bool,

    /// colour-class permutation policy
    #[arg(long, default_value = "defer1", value_parser = PossibleValuesParser::new([
        "none", "defer1", "repair-all", "repair-all-defer1", "repair-selected", "repair-selected-defer1",
    ]))]
    permutation: String,

    /// inference applied alongside the colour bound
    #[arg(long, default_value = "none", value_parser = PossibleValuesParser::new(["none", "lazy-global-domination"]))]
    inference: String,

    /// accept self-loops instead of rejecting them
    #[arg(long)]
    allow_loops: bool,
}

fn parse_permutation(name: &str) -> CCOPermutations {
    match name {
        "none" => CCOPermutations::None,
        "defer1" => CCOPermutations::Defer1,
        "repair-all" => CCOPermutations::RepairAll,
        "repair-all-defer1" => CCOPermutations::RepairAllDefer1,
        "repair-selected" => CCOPermutations::RepairSelected,
        "repair-selected-defer1" => CCOPermutations::RepairSelectedDefer1,
        _ => unreachable!("validated by clap's value_parser"),
    }
}

fn parse_inference(name: &str) -> CCOInference {
    match name {
        "none" => CCOInference::None,
        "lazy-global-domination" => CCOInference::LazyGlobalDomination,
        _ => unreachable!("validated by clap's value_parser"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options = GraphOptions { allow_loops: args.allow_loops };
    let graph = formats::read_graph(&args.format, &args.file, options)
        .with_context(|| format!("reading '{}' as {}", args.file.display(), args.format))?;

    log::info!("loaded graph: {} vertices, {} edges", graph.size(), graph.num_edges());

    if graph.size() == 0 {
        bail!("graph '{}' has no vertices", args.file.display());
    }

    let params = SolveParams {
        order: args.order.clone(),
        n_threads: args.threads.unwrap_or_else(num_cpus::get),
        timeout: args.timeout.map(Duration::from_secs),
        initial_bound: args.initial_bound,
        stop_after_finding: args.stop_after_finding.unwrap_or(usize::MAX),
        print_incumbents: args.print_incumbents,
        permutation: parse_permutation(&args.permutation),
        inference: parse_inference(&args.inference),
    };

    log::debug!(
        "solving with order={} threads={} permutation={:?} inference={:?}",
        params.order,
        params.n_threads,
        params.permutation,
        params.inference
    );

    let result = runner::solve(&graph, &params).context("running the solver")?;

    let members: Vec<String> = result.members.iter().map(|&v| graph.vertex_name(v)).collect();
    println!("size {} members {}", result.size, members.join(" "));
    println!("time {} ms", result.total_time.as_millis());
    if result.aborted {
        println!("aborted");
    }

    Ok(())
}
