//! Graph-file format loaders.
//!
//! Each loader is a thin collaborator: it knows how to turn one file format
//! into a [`crate::graph::Graph`] and nothing else. None of them are on the
//! solver's hot path.

pub mod adj;
pub mod dimacs;
pub mod lad;
pub mod lv;
pub mod metis;
pub mod mivia;
pub mod net;
pub mod pairs;

use crate::error::GraphError;
use crate::graph::{Graph, GraphOptions};
use std::path::Path;

/// names accepted by `--format` / [`read_graph`], in the order they appear
/// in the specification
pub const FORMAT_NAMES: &[&str] = &[
    "dimacs", "pairs0", "pairs1", "net", "metis", "mivia", "lad", "lv", "adj",
];

/// dispatch to the loader named by `format`
pub fn read_graph(format: &str, path: &Path, options: GraphOptions) -> Result<Graph, GraphError> {
    match format {
        "dimacs" => dimacs::read(path, options),
        "pairs0" => pairs::read(path, false, options),
        "pairs1" => pairs::read(path, true, options),
        "net" => net::read(path),
        "metis" => metis::read(path, options),
        "mivia" => mivia::read(path, options),
        "lad" => lad::read(path, options),
        "lv" => lv::read(path),
        "adj" => adj::read(path),
        other => Err(GraphError::malformed(
            path.to_string_lossy().as_ref(),
            format!("unknown format '{}', expected one of {:?}", other, FORMAT_NAMES),
        )),
    }
}

/// read a whole file to a string, translating I/O errors into a
/// [`GraphError::Malformed`] naming the file
pub(crate) fn read_to_string(path: &Path) -> Result<String, GraphError> {
    std::fs::read_to_string(path)
        .map_err(|e| GraphError::malformed(&path.to_string_lossy(), e.to_string()))
}

/// read a whole file to bytes, same error treatment as [`read_to_string`]
pub(crate) fn read_to_bytes(path: &Path) -> Result<Vec<u8>, GraphError> {
    std::fs::read(path).map_err(|e| GraphError::malformed(&path.to_string_lossy(), e.to_string()))
}
