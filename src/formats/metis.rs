//! METIS graph format.
//!
//! The header line is `N M [fmt]`; if `fmt` is non-zero the file carries
//! vertex/edge weights which this loader discards. Vertex `i` (1-based, one
//! line per vertex) is followed by a line listing its neighbours.

use std::path::Path;

use crate::error::GraphError;
use crate::formats::read_to_string;
use crate::graph::{Graph, GraphOptions};

/// read a METIS-format graph file
pub fn read(path: &Path, options: GraphOptions) -> Result<Graph, GraphError> {
    let filename = path.to_string_lossy().to_string();
    let contents = read_to_string(path)?;
    let mut lines = contents
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty() && !l.trim_start().starts_with('%'));

    let header = lines
        .next()
        .ok_or_else(|| GraphError::malformed(&filename, "missing header line"))?;
    let mut header_tokens = header.split_whitespace();
    let n: usize = header_tokens
        .next()
        .ok_or_else(|| GraphError::malformed(&filename, "cannot parse header"))?
        .parse()
        .map_err(|_| GraphError::malformed(&filename, format!("cannot parse header '{}'", header)))?;
    let _m: Option<usize> = header_tokens.next().and_then(|t| t.parse().ok());
    let fmt: u32 = header_tokens.next().and_then(|t| t.parse().ok()).unwrap_or(0);
    let has_vertex_weights = fmt == 10 || fmt == 11;
    let has_edge_weights = fmt == 1 || fmt == 11;

    let mut result = Graph::new(n, true);

    let mut vertex = 0usize;
    for line in lines {
        if vertex >= n {
            return Err(GraphError::malformed(&filename, "more adjacency lines than declared vertices"));
        }
        let mut tokens = line.split_whitespace();
        if has_vertex_weights {
            tokens.next();
        }
        let rest: Vec<&str> = tokens.collect();
        let step = if has_edge_weights { 2 } else { 1 };
        let mut i = 0;
        while i < rest.len() {
            let neighbour: i64 = rest[i]
                .parse()
                .map_err(|_| GraphError::malformed(&filename, format!("cannot parse adjacency line '{}'", line)))?;
            let neighbour = neighbour - 1;
            if neighbour < 0 || neighbour as usize >= n {
                return Err(GraphError::malformed(&filename, format!("line '{}' neighbour out of bounds", line)));
            }
            let neighbour = neighbour as usize;
            if neighbour == vertex {
                if !options.allow_loops {
                    return Err(GraphError::malformed(&filename, format!("vertex {} has a self-loop", vertex + 1)));
                }
            } else {
                result.add_edge(vertex, neighbour);
            }
            i += step;
        }
        vertex += 1;
    }

    if vertex != n {
        return Err(GraphError::malformed(
            &filename,
            format!("expected {} adjacency lines, found {}", n, vertex),
        ));
    }

    Ok(result)
}
