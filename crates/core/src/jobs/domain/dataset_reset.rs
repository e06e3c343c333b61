use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResetError {
    #[error("reset request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("server rejected reset with status {status}")]
    Rejected { status: u16 },
}

/// Erases every reference image, dataset image and result on the
/// server. Destructive and irreversible; callers gate it behind
/// explicit operator confirmation.
pub trait DatasetReset {
    fn reset(&self) -> Result<(), ResetError>;
}
