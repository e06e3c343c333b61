use crate::transfer::domain::image_uploader::{ImagePayload, ImageUploader, UploadError};

/// Submits reference photos and dataset batches. Owns nothing beyond
/// the in-flight request; refreshing displayed state afterwards is the
/// session's job.
pub struct UploadCoordinator {
    uploader: Box<dyn ImageUploader>,
}

impl UploadCoordinator {
    pub fn new(uploader: Box<dyn ImageUploader>) -> Self {
        Self { uploader }
    }

    pub fn upload_reference(&self, image: &ImagePayload) -> Result<(), UploadError> {
        log::info!("uploading reference image {}", image.file_name);
        self.uploader.upload_reference(image)
    }

    /// An empty batch never reaches the network.
    pub fn upload_dataset(&self, images: &[ImagePayload]) -> Result<(), UploadError> {
        if images.is_empty() {
            return Err(UploadError::EmptyBatch);
        }
        log::info!("uploading {} dataset image(s)", images.len());
        self.uploader.upload_dataset(images)
    }
}
