use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassificationError {
    /// A job is already running on this controller; no second trigger
    /// was sent.
    #[error("a classification job is already running")]
    AlreadyInProgress,
    #[error("classification request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("classification failed with status {status}")]
    Failed { status: u16 },
}

/// Triggers the remote classification job. The service runs the job to
/// completion before answering, so a successful return means the result
/// set is ready to fetch.
pub trait ClassificationRunner {
    fn run_classification(&self) -> Result<(), ClassificationError>;
}
