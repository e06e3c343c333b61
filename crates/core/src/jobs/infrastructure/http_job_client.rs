use std::time::Duration;

use reqwest::blocking::Client;

use crate::jobs::domain::classification_runner::{ClassificationError, ClassificationRunner};
use crate::jobs::domain::dataset_reset::{DatasetReset, ResetError};
use crate::shared::constants::{CLASSIFY_ENDPOINT, RESET_ENDPOINT};

/// Bodyless POSTs for the two job-like operations. Built without a
/// request timeout: the classification endpoint blocks until the job
/// has run to completion server-side.
pub struct HttpJobClient {
    base_url: String,
    client: Client,
}

impl HttpJobClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn post(&self, endpoint: &'static str) -> Result<u16, reqwest::Error> {
        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("POST {url}");
        let response = self.client.post(&url).send()?;
        Ok(response.status().as_u16())
    }
}

impl ClassificationRunner for HttpJobClient {
    fn run_classification(&self) -> Result<(), ClassificationError> {
        let status = self
            .post(CLASSIFY_ENDPOINT)
            .map_err(|e| ClassificationError::Transport(Box::new(e)))?;
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(ClassificationError::Failed { status })
        }
    }
}

impl DatasetReset for HttpJobClient {
    fn reset(&self) -> Result<(), ResetError> {
        let status = self
            .post(RESET_ENDPOINT)
            .map_err(|e| ResetError::Transport(Box::new(e)))?;
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(ResetError::Rejected { status })
        }
    }
}
