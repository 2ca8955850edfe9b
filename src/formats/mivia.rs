//! MIVIA binary graph format (as used by VFLib-family tools).
//!
//! All integers are little-endian `u16`. Layout: vertex count, then per
//! vertex an attribute block (length-prefixed, discarded) followed by an
//! out-degree and that many 1-based... actually 0-based neighbour ids.

use std::path::Path;

use crate::error::GraphError;
use crate::formats::read_to_bytes;
use crate::graph::{Graph, GraphOptions};

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, pos: 0 }
    }

    fn u16(&mut self, filename: &str) -> Result<u16, GraphError> {
        if self.pos + 2 > self.bytes.len() {
            return Err(GraphError::malformed(filename, "unexpected end of file"));
        }
        let v = u16::from_le_bytes([self.bytes[self.pos], self.bytes[self.pos + 1]]);
        self.pos += 2;
        Ok(v)
    }

    fn skip(&mut self, n: usize, filename: &str) -> Result<(), GraphError> {
        if self.pos + n > self.bytes.len() {
            return Err(GraphError::malformed(filename, "unexpected end of file"));
        }
        self.pos += n;
        Ok(())
    }
}

/// read a MIVIA-format binary graph file
pub fn read(path: &Path, options: GraphOptions) -> Result<Graph, GraphError> {
    let filename = path.to_string_lossy().to_string();
    let bytes = read_to_bytes(path)?;
    let mut cur = Cursor::new(&bytes);

    let n = cur.u16(&filename)? as usize;
    let mut result = Graph::new(n, false);

    for v in 0..n {
        let attr_len = cur.u16(&filename)? as usize;
        cur.skip(attr_len, &filename)?;
        let degree = cur.u16(&filename)? as usize;
        for _ in 0..degree {
            let w = cur.u16(&filename)? as usize;
            if w >= n {
                return Err(GraphError::malformed(&filename, format!("neighbour {} of vertex {} out of bounds", w, v)));
            }
            if w == v {
                if !options.allow_loops {
                    return Err(GraphError::malformed(&filename, format!("vertex {} has a self-loop", v)));
                }
                continue;
            }
            result.add_edge(v, w);
        }
    }

    if cur.pos != bytes.len() {
        return Err(GraphError::malformed(&filename, "trailing bytes after last vertex record"));
    }

    Ok(result)
}
