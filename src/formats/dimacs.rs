//! DIMACS graph format.
//!
//! `c ...` lines are comments. Exactly one `p edge N M` or `p col N M` line
//! gives the vertex count. `e u v` lines are 1-based edges.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, multispace0, multispace1};
use nom::combinator::map_res;
use nom::sequence::{preceded, tuple};
use nom::IResult;
use std::path::Path;

use crate::error::GraphError;
use crate::formats::read_to_string;
use crate::graph::{Graph, GraphOptions};

fn uint(s: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse)(s)
}

fn problem_line(s: &str) -> IResult<&str, (usize, usize)> {
    preceded(
        tuple((tag("p"), multispace1, alt((tag("edge"), tag("col"))), multispace1)),
        tuple((uint, preceded(multispace1, uint))),
    )(s)
}

fn edge_line(s: &str) -> IResult<&str, (usize, usize)> {
    preceded(
        tuple((tag("e"), multispace1)),
        tuple((uint, preceded(multispace1, uint))),
    )(s)
}

/// read a DIMACS-format graph file
pub fn read(path: &Path, options: GraphOptions) -> Result<Graph, GraphError> {
    let filename = path.to_string_lossy().to_string();
    let contents = read_to_string(path)?;

    let mut result: Option<Graph> = None;

    for raw_line in contents.lines() {
        let line = raw_line.trim_end_matches('\r');
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('c') && (trimmed.len() == 1 || trimmed.as_bytes()[1].is_ascii_whitespace()) {
            continue;
        }

        if let Ok((rest, (n, _m))) = problem_line(trimmed) {
            if !multispace0::<&str, ()>(rest).map(|(r, _)| r.is_empty()).unwrap_or(false) {
                return Err(GraphError::malformed(&filename, format!("trailing garbage on line '{}'", line)));
            }
            if result.is_some() {
                return Err(GraphError::malformed(&filename, "multiple 'p' lines encountered"));
            }
            result = Some(Graph::new(n, false));
            continue;
        }

        if let Ok((rest, (a, b))) = edge_line(trimmed) {
            if !multispace0::<&str, ()>(rest).map(|(r, _)| r.is_empty()).unwrap_or(false) {
                return Err(GraphError::malformed(&filename, format!("trailing garbage on line '{}'", line)));
            }
            let graph = result
                .as_mut()
                .ok_or_else(|| GraphError::malformed(&filename, "edge line before 'p' line"))?;
            if a == 0 || b == 0 || a > graph.size() || b > graph.size() {
                return Err(GraphError::malformed(&filename, format!("line '{}' edge index out of bounds", line)));
            }
            let (a, b) = (a - 1, b - 1);
            if a == b {
                if options.allow_loops {
                    continue;
                }
                return Err(GraphError::malformed(&filename, format!("line '{}' contains a loop", line)));
            }
            graph.add_edge(a, b);
            continue;
        }

        return Err(GraphError::malformed(&filename, format!("cannot parse line '{}'", line)));
    }

    result.ok_or_else(|| GraphError::malformed(&filename, "no 'p' line found"))
}
