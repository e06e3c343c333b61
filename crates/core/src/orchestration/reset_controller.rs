use crate::jobs::domain::dataset_reset::{DatasetReset, ResetError};

/// Issues the destructive server-side reset. Confirmation is the
/// caller's responsibility; local state is cleared by the session only
/// after the server confirms.
pub struct ResetController {
    service: Box<dyn DatasetReset>,
}

impl ResetController {
    pub fn new(service: Box<dyn DatasetReset>) -> Self {
        Self { service }
    }

    pub fn reset(&self) -> Result<(), ResetError> {
        log::info!("erasing all server-side data");
        self.service.reset()
    }
}
