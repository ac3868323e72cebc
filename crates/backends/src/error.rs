use std::path::PathBuf;

/// Failures of a linguistic backend (loading or querying).
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Backing file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// file that failed
        path: PathBuf,
        /// underlying IO error
        #[source]
        source: std::io::Error,
    },
    /// Malformed line in a lexicon or vector file (1-based line number).
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// what was wrong
        reason: String,
    },
    /// The resource loaded but holds no entries.
    #[error("{0} has no entries")]
    Empty(String),
    /// Backend refused or could not serve the request.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}
