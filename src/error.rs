use thiserror::Error;

/// errors raised while reading or building a graph
#[derive(Debug, Error)]
pub enum GraphError {
    /// a graph file could not be opened or did not match the expected format
    #[error("Error reading graph file '{file}': {message}")]
    Malformed {
        /// the file that was being read
        file: String,
        /// the first offending token or line, or the underlying I/O message
        message: String,
    },

    /// the graph is larger than this crate's configured maximum bitset width
    #[error("graph has {n} vertices, which exceeds the configured maximum of {max}")]
    TooBig {
        /// number of vertices in the offending graph
        n: usize,
        /// the configured maximum
        max: usize,
    },
}

impl GraphError {
    /// shorthand for the common "couldn't parse this line" case
    pub fn malformed(file: &str, message: impl Into<String>) -> Self {
        GraphError::Malformed {
            file: file.to_string(),
            message: message.into(),
        }
    }
}
