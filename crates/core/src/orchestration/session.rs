use thiserror::Error;

use crate::catalog::domain::image_catalog::{CatalogError, ImageCatalog};
use crate::jobs::domain::classification_runner::{ClassificationError, ClassificationRunner};
use crate::jobs::domain::dataset_reset::{DatasetReset, ResetError};
use crate::orchestration::classification_job_controller::ClassificationJobController;
use crate::orchestration::reset_controller::ResetController;
use crate::orchestration::state::{Busy, Notice, OrchestrationState};
use crate::orchestration::upload_coordinator::UploadCoordinator;
use crate::transfer::domain::image_uploader::{ImagePayload, ImageUploader, UploadError};

#[derive(Debug, Error)]
pub enum SessionError {
    /// Another operation holds the session; retry once it settles.
    /// Rejected up front: no request is sent and no state is touched.
    #[error("an operation is already in progress ({0})")]
    OperationInProgress(Busy),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Classification(#[from] ClassificationError),
    #[error(transparent)]
    Reset(#[from] ResetError),
}

/// One operator's view of the remote service. Owns the orchestration
/// state plus the collaborators that mutate it; entry points serialize
/// operations through the busy flag, rejecting (not queuing) anything
/// requested while one is in flight.
///
/// The guard is local to this session: two clients pointed at the same
/// server can still race each other. Preventing that needs a
/// server-side lock, which is outside this client's hands.
pub struct Session {
    state: OrchestrationState,
    catalog: Box<dyn ImageCatalog>,
    uploads: UploadCoordinator,
    classifier: ClassificationJobController,
    resetter: ResetController,
}

impl Session {
    pub fn new(
        catalog: Box<dyn ImageCatalog>,
        uploader: Box<dyn ImageUploader>,
        runner: Box<dyn ClassificationRunner>,
        reset: Box<dyn DatasetReset>,
    ) -> Self {
        Self {
            state: OrchestrationState::empty(),
            catalog,
            uploads: UploadCoordinator::new(uploader),
            classifier: ClassificationJobController::new(runner),
            resetter: ResetController::new(reset),
        }
    }

    pub fn state(&self) -> &OrchestrationState {
        &self.state
    }

    /// Initial full fetch. The state is replaced only when all three
    /// reads succeed; on any failure the previous contents stay
    /// visible.
    pub fn hydrate(&mut self) -> Result<(), SessionError> {
        if !self.state.is_idle() {
            return Err(SessionError::OperationInProgress(self.state.busy));
        }
        let reference = self.catalog.list_reference()?;
        let dataset = self.catalog.list_dataset()?;
        let results = self.catalog.results()?;
        self.state.replace_all(reference, dataset, results);
        log::debug!(
            "hydrated: {} reference, {} dataset, {} identities",
            self.state.reference.len(),
            self.state.dataset.len(),
            self.state.results.len()
        );
        Ok(())
    }

    /// Uploads one known-person photo, then re-reads the reference
    /// collection so the cache reflects what actually landed.
    pub fn begin_upload_reference(&mut self, image: &ImagePayload) -> Result<(), SessionError> {
        self.acquire(Busy::Uploading)?;
        let outcome = self
            .uploads
            .upload_reference(image)
            .map_err(SessionError::from)
            .and_then(|()| self.refresh_reference());
        self.settle(
            &outcome,
            format!("uploaded {} to reference", image.file_name),
        );
        outcome
    }

    /// Uploads a batch of unclassified photos as one submission, then
    /// re-reads the dataset collection. An empty batch is a caller bug
    /// and is rejected before the busy flag is even taken.
    pub fn begin_upload_dataset(&mut self, images: &[ImagePayload]) -> Result<(), SessionError> {
        if images.is_empty() {
            return Err(SessionError::Upload(UploadError::EmptyBatch));
        }
        self.acquire(Busy::Uploading)?;
        let outcome = self
            .uploads
            .upload_dataset(images)
            .map_err(SessionError::from)
            .and_then(|()| self.refresh_dataset());
        self.settle(
            &outcome,
            format!("uploaded {} image(s) to dataset", images.len()),
        );
        outcome
    }

    /// Runs the remote classification job and, on success, replaces the
    /// result mapping in full. A failed run leaves the last-known-good
    /// results visible.
    pub fn begin_classify(&mut self) -> Result<(), SessionError> {
        self.acquire(Busy::Classifying)?;
        let outcome = self
            .classifier
            .start()
            .map_err(SessionError::from)
            .and_then(|()| self.refresh_results());
        self.settle(&outcome, "classification complete".to_string());
        outcome
    }

    /// Erases everything server-side, then drops the local cache. No
    /// catalog round-trip afterwards: emptiness after a confirmed reset
    /// is part of the service contract.
    pub fn begin_reset(&mut self) -> Result<(), SessionError> {
        self.acquire(Busy::Resetting)?;
        let outcome = self.resetter.reset().map_err(SessionError::from);
        if outcome.is_ok() {
            self.state.clear();
        }
        self.settle(&outcome, "all data erased".to_string());
        outcome
    }

    fn acquire(&mut self, op: Busy) -> Result<(), SessionError> {
        if !self.state.is_idle() {
            return Err(SessionError::OperationInProgress(self.state.busy));
        }
        self.state.busy = op;
        self.state.notice = None;
        Ok(())
    }

    fn settle(&mut self, outcome: &Result<(), SessionError>, success_message: String) {
        self.state.busy = Busy::Idle;
        self.state.notice = Some(match outcome {
            Ok(()) => Notice::success(success_message),
            Err(e) => Notice::error(e.to_string()),
        });
    }

    fn refresh_reference(&mut self) -> Result<(), SessionError> {
        self.state.reference = self.catalog.list_reference()?;
        Ok(())
    }

    fn refresh_dataset(&mut self) -> Result<(), SessionError> {
        self.state.dataset = self.catalog.list_dataset()?;
        Ok(())
    }

    fn refresh_results(&mut self) -> Result<(), SessionError> {
        self.state.results = self.catalog.results()?;
        Ok(())
    }
}
