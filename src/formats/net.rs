//! Pajek "net" format.
//!
//! `*Vertices N` gives the vertex count; `*Edgeslist` (or the synonym
//! `*Arcslist`) begins adjacency lists, one line per source vertex.

use std::path::Path;

use crate::error::GraphError;
use crate::formats::read_to_string;
use crate::graph::Graph;

fn strip_comment(line: &str) -> &str {
    line.trim_end_matches('\r')
}

/// read a Pajek "net" format graph file
pub fn read(path: &Path) -> Result<Graph, GraphError> {
    let filename = path.to_string_lossy().to_string();
    let contents = read_to_string(path)?;
    let mut lines = contents.lines().map(strip_comment);

    let mut result: Option<Graph> = None;
    let mut in_edges = false;

    for line in &mut lines {
        if line.is_empty() {
            continue;
        }
        let trimmed = line.trim_start();
        if trimmed.starts_with('%') {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix('*') {
            let rest = rest.trim_start();
            if let Some(count) = rest.strip_prefix("Vertices") {
                let n: usize = count
                    .trim()
                    .split_whitespace()
                    .next()
                    .ok_or_else(|| GraphError::malformed(&filename, format!("cannot parse line '{}'", line)))?
                    .parse()
                    .map_err(|_| GraphError::malformed(&filename, format!("cannot parse line '{}'", line)))?;
                if result.is_some() {
                    return Err(GraphError::malformed(&filename, "multiple '*Vertices' lines encountered"));
                }
                result = Some(Graph::new(n, true));
                continue;
            }
            if rest.starts_with("Edgeslist") || rest.starts_with("Arcslist") {
                in_edges = true;
                break;
            }
            // descriptive/other star sections (e.g. *Vertices labels) are ignored
            continue;
        }
        // a quoted-label description line for a vertex; ignored
    }

    let mut result = result.ok_or_else(|| GraphError::malformed(&filename, "no '*Vertices' line found"))?;

    if !in_edges {
        return Ok(result);
    }

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let f: i64 = tokens
            .next()
            .unwrap()
            .parse()
            .map_err(|_| GraphError::malformed(&filename, format!("cannot parse edge line '{}'", line)))?;
        let f = f - 1;
        if f < 0 || f as usize >= result.size() {
            return Err(GraphError::malformed(&filename, "invalid f value"));
        }
        let f = f as usize;

        for tok in tokens {
            let t: i64 = tok
                .parse()
                .map_err(|_| GraphError::malformed(&filename, format!("cannot parse edge line '{}'", line)))?;
            let t = t - 1;
            if t < 0 || t as usize >= result.size() || t as usize == f {
                return Err(GraphError::malformed(&filename, format!("invalid t value {} ({}, {})", t, f, result.size())));
            }
            result.add_edge(f, t as usize);
        }
    }

    Ok(result)
}
