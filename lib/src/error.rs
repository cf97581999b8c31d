use thiserror::Error;

/// Errors that stop a whole run.
///
/// Failures of individual probes are not errors at this level, they are
/// reported as [`crate::Outcome::Error`] for the address concerned.
#[derive(Debug, Error)]
pub enum Error {
    /// The worker pool needs at least one worker
    #[error("configuration error: number of workers must be at least 1, got {0}")]
    InvalidPoolSize(usize),
    /// The task queue needs room for at least one address
    #[error("configuration error: queue capacity must be at least 1, got {0}")]
    InvalidQueueCapacity(usize),
    /// The HTTP client could not be set up
    #[error("unable to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Every worker is gone while addresses were still being enqueued
    #[error("no workers left to process {0}")]
    QueueDisconnected(String),
    /// A worker panicked or was cancelled
    #[error("worker terminated abnormally: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl Error {
    /// Whether this error stems from invalid settings rather than a runtime failure
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidPoolSize(_) | Self::InvalidQueueCapacity(_))
    }
}

pub type Result<T = ()> = std::result::Result<T, Error>;
