/// Errors raised while building or querying alpha lookups.
#[derive(Debug, thiserror::Error)]
pub enum MldaError {
    #[error("document {doc} out of range for {num_docs} documents")]
    DocumentOutOfRange { doc: usize, num_docs: usize },

    #[error("document range {start}..{stop} out of bounds for {num_docs} documents")]
    RangeOutOfBounds {
        start: usize,
        stop: usize,
        num_docs: usize,
    },

    #[error("topic count mismatch: expected {expected}, got {got}")]
    TopicMismatch { expected: usize, got: usize },

    #[error("malformed alpha configuration: {0}")]
    MalformedConfig(String),

    #[error("failed to parse alpha configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read alpha configuration: {0}")]
    Io(#[from] std::io::Error),
}
