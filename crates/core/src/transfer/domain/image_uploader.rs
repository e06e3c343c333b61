use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    /// A dataset submission with no images is a caller bug; it is
    /// refused before any request is built.
    #[error("refusing to upload an empty batch")]
    EmptyBatch,
    #[error("upload request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("server rejected upload with status {status}")]
    Rejected { status: u16 },
}

/// An image staged for upload: the filename the server stores it under
/// plus the raw bytes.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Stages a file from disk under its own filename.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let file_name = path
            .file_name()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("not a file: {}", path.display()),
                )
            })?
            .to_string_lossy()
            .into_owned();
        let bytes = fs::read(path)?;
        Ok(Self { file_name, bytes })
    }
}

/// Write half of the service boundary: sends images into a server-side
/// collection. Implementations report the outcome and nothing more;
/// refreshing displayed state afterwards is the caller's job.
pub trait ImageUploader {
    /// Sends exactly one image tagged as a reference photo.
    fn upload_reference(&self, image: &ImagePayload) -> Result<(), UploadError>;

    /// Sends one or more images as a single batched submission. The
    /// server decides batch atomicity; only a later catalog read shows
    /// which images actually landed.
    fn upload_dataset(&self, images: &[ImagePayload]) -> Result<(), UploadError>;
}
