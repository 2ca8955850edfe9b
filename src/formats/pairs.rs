//! "pairs" format: a vertex count line followed by one edge per line.

use std::path::Path;

use crate::error::GraphError;
use crate::formats::read_to_string;
use crate::graph::{Graph, GraphOptions};

fn split_pair(line: &str) -> Option<(&str, &str)> {
    if let Some(idx) = line.find(',') {
        Some((line[..idx].trim(), line[idx + 1..].trim()))
    } else {
        let mut parts = line.split_whitespace();
        let a = parts.next()?;
        let b = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        Some((a, b))
    }
}

/// read a "pairs" format graph file; `one_indexed` controls whether vertex
/// ids in edge lines are 1-based
pub fn read(path: &Path, one_indexed: bool, options: GraphOptions) -> Result<Graph, GraphError> {
    let filename = path.to_string_lossy().to_string();
    let contents = read_to_string(path)?;
    let mut lines = contents.lines().map(|l| l.trim_end_matches('\r'));

    let header = lines
        .next()
        .ok_or_else(|| GraphError::malformed(&filename, "cannot parse number of vertices"))?;

    let n: usize = header
        .split_whitespace()
        .next()
        .ok_or_else(|| GraphError::malformed(&filename, "cannot parse number of vertices"))?
        .parse()
        .map_err(|_| GraphError::malformed(&filename, format!("cannot parse number of vertices from '{}'", header)))?;

    let mut result = Graph::new(n, one_indexed);

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let (a_s, b_s) = split_pair(line.trim())
            .ok_or_else(|| GraphError::malformed(&filename, format!("cannot parse line '{}'", line)))?;
        let mut a: i64 = a_s
            .parse()
            .map_err(|_| GraphError::malformed(&filename, format!("cannot parse line '{}'", line)))?;
        let mut b: i64 = b_s
            .parse()
            .map_err(|_| GraphError::malformed(&filename, format!("cannot parse line '{}'", line)))?;
        if one_indexed {
            a -= 1;
            b -= 1;
        }
        if a < 0 || b < 0 || a as usize >= result.size() || b as usize >= result.size() {
            return Err(GraphError::malformed(&filename, format!("line '{}' edge index out of bounds", line)));
        }
        let (a, b) = (a as usize, b as usize);
        if a == b {
            if options.allow_loops {
                continue;
            }
            return Err(GraphError::malformed(&filename, format!("line '{}' contains a loop on vertex {}", line, a)));
        }
        result.add_edge(a, b);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_read_zero_indexed() {
        let f = write_fixture("4\n0 1\n1 2\n2,3\n");
        let g = read(f.path(), false, GraphOptions::default()).unwrap();
        assert_eq!(g.size(), 4);
        assert_eq!(g.num_edges(), 3);
    }

    #[test]
    fn test_read_one_indexed() {
        let f = write_fixture("3\n1 2\n");
        let g = read(f.path(), true, GraphOptions::default()).unwrap();
        assert!(g.adjacent(0, 1));
    }

    #[test]
    fn test_header_with_edge_count() {
        let f = write_fixture("4 2\n0 1\n1 2\n");
        let g = read(f.path(), false, GraphOptions::default()).unwrap();
        assert_eq!(g.size(), 4);
    }

    #[test]
    fn test_rejects_self_loop() {
        let f = write_fixture("2\n0 0\n");
        assert!(read(f.path(), false, GraphOptions::default()).is_err());
    }
}
