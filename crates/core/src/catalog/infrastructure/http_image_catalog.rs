use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::catalog::domain::image_catalog::{CatalogError, ImageCatalog};
use crate::shared::constants::{
    LIST_DATASET_ENDPOINT, LIST_REFERENCE_ENDPOINT, RESULTS_ENDPOINT,
};
use crate::shared::image_ref::{ImageRef, ResultMapping};

/// Envelope the collection listing endpoints wrap their filenames in.
#[derive(Debug, Deserialize)]
struct ImageListing {
    images: Vec<ImageRef>,
}

/// HTTP-backed catalog reads. One request per call, no caching.
pub struct HttpImageCatalog {
    base_url: String,
    client: Client,
}

impl HttpImageCatalog {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("GET {url}");
        let response = self.client.get(&url).send().map_err(|e| {
            CatalogError::Transport {
                endpoint,
                source: Box::new(e),
            }
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }
        let body = response.text().map_err(|e| CatalogError::Transport {
            endpoint,
            source: Box::new(e),
        })?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Payload {
            endpoint,
            source: e,
        })
    }
}

impl ImageCatalog for HttpImageCatalog {
    fn list_reference(&self) -> Result<Vec<ImageRef>, CatalogError> {
        Ok(self
            .get_json::<ImageListing>(LIST_REFERENCE_ENDPOINT)?
            .images)
    }

    fn list_dataset(&self) -> Result<Vec<ImageRef>, CatalogError> {
        Ok(self.get_json::<ImageListing>(LIST_DATASET_ENDPOINT)?.images)
    }

    fn results(&self) -> Result<ResultMapping, CatalogError> {
        self.get_json(RESULTS_ENDPOINT)
    }
}
