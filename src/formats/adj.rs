//! "adj" format: a bracketed 0/1 adjacency matrix, e.g. `[[0,1],[1,0]]`.

use std::path::Path;

use crate::error::GraphError;
use crate::formats::read_to_string;
use crate::graph::Graph;

/// read an adj-format (bracketed adjacency matrix) graph file
pub fn read(path: &Path) -> Result<Graph, GraphError> {
    let filename = path.to_string_lossy().to_string();
    let contents = read_to_string(path)?;
    let trimmed = contents.trim();

    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| GraphError::malformed(&filename, "expected outer '[' ... ']'"))?;

    let mut rows: Vec<Vec<u8>> = Vec::new();
    let mut depth = 0i32;
    let mut current = String::new();
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '[' => {
                depth += 1;
                current.clear();
            }
            ']' => {
                depth -= 1;
                if depth < 0 {
                    return Err(GraphError::malformed(&filename, "unbalanced brackets"));
                }
                let row = parse_row(&current, &filename)?;
                rows.push(row);
            }
            ',' if depth == 0 => {}
            _ => {
                if depth >= 1 {
                    current.push(c);
                }
            }
        }
    }
    if depth != 0 {
        return Err(GraphError::malformed(&filename, "unbalanced brackets"));
    }

    let n = rows.len();
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(GraphError::malformed(
                &filename,
                format!("row {} has {} entries, expected {}", i, row.len(), n),
            ));
        }
    }

    let mut result = Graph::new(n, false);
    for i in 0..n {
        for j in 0..n {
            if rows[i][j] != rows[j][i] {
                return Err(GraphError::malformed(&filename, format!("matrix is not symmetric at ({}, {})", i, j)));
            }
        }
    }
    for i in 0..n {
        if rows[i][i] != 0 {
            return Err(GraphError::malformed(&filename, format!("vertex {} has a self-loop", i)));
        }
        for j in (i + 1)..n {
            if rows[i][j] != 0 {
                result.add_edge(i, j);
            }
        }
    }

    Ok(result)
}

fn parse_row(s: &str, filename: &str) -> Result<Vec<u8>, GraphError> {
    s.split(',')
        .filter(|t| !t.trim().is_empty())
        .map(|t| {
            let v: u8 = t
                .trim()
                .parse()
                .map_err(|_| GraphError::malformed(filename, format!("cannot parse matrix entry '{}'", t)))?;
            if v > 1 {
                return Err(GraphError::malformed(filename, format!("matrix entry '{}' is not 0 or 1", t)));
            }
            Ok(v)
        })
        .collect()
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
    fn test_read_basic() {
        let f = write_fixture("[[0,1,1],[1,0,0],[1,0,0]]");
        let g = read(f.path()).unwrap();
        assert_eq!(g.size(), 3);
        assert_eq!(g.num_edges(), 2);
        assert!(g.adjacent(0, 1));
        assert!(g.adjacent(0, 2));
        assert!(!g.adjacent(1, 2));
    }

    #[test]
    fn test_rejects_asymmetric() {
        let f = write_fixture("[[0,1],[0,0]]");
        assert!(read(f.path()).is_err());
    }

    #[test]
    fn test_rejects_self_loop() {
        let f = write_fixture("[[1,0],[0,0]]");
        assert!(read(f.path()).is_err());
    }

    #[test]
    fn test_rejects_non_square() {
        let f = write_fixture("[[0,1,0],[1,0]]");
        assert!(read(f.path()).is_err());
    }
}
