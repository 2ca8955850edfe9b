//! LV graph format.
//!
//! Same shape as [`crate::formats::lad`] (a vertex-count line followed by
//! one degree-prefixed adjacency line per vertex) but stricter: self-loops
//! are always rejected, there is no `allow_loops` escape hatch.

use std::path::Path;

use crate::error::GraphError;
use crate::formats::read_to_string;
use crate::graph::Graph;

/// read an LV-format graph file
pub fn read(path: &Path) -> Result<Graph, GraphError> {
    let filename = path.to_string_lossy().to_string();
    let contents = read_to_string(path)?;
    let mut lines = contents.lines().map(|l| l.trim_end_matches('\r'));

    let header = lines
        .next()
        .ok_or_else(|| GraphError::malformed(&filename, "missing vertex-count line"))?;
    let n: usize = header
        .trim()
        .parse()
        .map_err(|_| GraphError::malformed(&filename, format!("cannot parse vertex count '{}'", header)))?;

    let mut result = Graph::new(n, false);

    let mut vertex = 0usize;
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        if vertex >= n {
            return Err(GraphError::malformed(&filename, "more adjacency lines than declared vertices"));
        }
        let mut tokens = line.split_whitespace();
        let degree: usize = tokens
            .next()
            .ok_or_else(|| GraphError::malformed(&filename, format!("cannot parse degree on line '{}'", line)))?
            .parse()
            .map_err(|_| GraphError::malformed(&filename, format!("cannot parse degree on line '{}'", line)))?;

        let mut count = 0;
        for tok in tokens {
            let w: usize = tok
                .parse()
                .map_err(|_| GraphError::malformed(&filename, format!("cannot parse neighbour on line '{}'", line)))?;
            if w >= n {
                return Err(GraphError::malformed(&filename, format!("neighbour {} of vertex {} out of bounds", w, vertex)));
            }
            if w == vertex {
                return Err(GraphError::malformed(&filename, format!("vertex {} has a self-loop", vertex)));
            }
            result.add_edge(vertex, w);
            count += 1;
        }
        if count != degree {
            return Err(GraphError::malformed(
                &filename,
                format!("vertex {} declared degree {} but {} neighbours listed", vertex, degree, count),
            ));
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
