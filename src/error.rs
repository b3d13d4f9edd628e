//! Errors

pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Queue errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The queue was constructed with a capacity of zero or less
    #[error("invalid capacity {0}, capacity must be positive")]
    InvalidArgument(i64),

    /// Tried to enqueue into a queue where `len == capacity`
    #[error("full queue")]
    QueueFull,

    /// Tried to dequeue or peek an empty queue
    #[error("empty queue")]
    QueueEmpty,

    /// Serde json error
    #[error("failed to parse queue config: {0}")]
    Config(#[from] serde_json::Error),
}
