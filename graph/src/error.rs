use thiserror::Error;

/// Errors raised while laying out or rendering a commit graph.
///
/// None of these are recoverable inside a render: they describe input that
/// cannot be drawn, so the whole render is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Commit, parent and child data do not agree with the current rails.
    #[error("layout inconsistency: {0}")]
    LayoutInconsistency(String),

    /// A merge has more parents than the connector art can draw.
    #[error("unsupported merge arity: {0}")]
    UnsupportedMergeArity(String),

    /// A line of `git log` text could not be parsed.
    #[error("malformed log record on line {line}: {detail}")]
    MalformedRecord { line: usize, detail: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;
