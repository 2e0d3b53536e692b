use thiserror::Error;

/// Errors surfaced at the query boundary.
///
/// The selection algorithm itself defines no error taxonomy; it assumes
/// validated input. Everything here belongs to the orchestration layer:
/// either the request asked for a rank the data cannot satisfy, or the
/// data source could not be read at all. The two are deliberately kept
/// distinct so a transient read failure is never reported as "rank out
/// of bounds".
#[derive(Debug, Error)]
pub enum Error {
    /// The requested rank lies outside `1..=len`.
    #[error("rank {rank} is out of bounds for a column of {len} values")]
    RankOutOfBounds { rank: usize, len: usize },

    /// The source was readable but yielded no integer values.
    #[error("the column contains no integer values")]
    EmptyColumn,

    /// The underlying data source was missing, unreadable, or malformed.
    #[error("failed to read integer column: {0}")]
    SourceRead(String),
}

impl Error {
    /// Creates a `SourceRead` error from any displayable reason.
    pub fn source_read(reason: impl Into<String>) -> Self {
        Error::SourceRead(reason.into())
    }
}

/// Result type for query operations
pub type Result<T> = std::result::Result<T, Error>;
