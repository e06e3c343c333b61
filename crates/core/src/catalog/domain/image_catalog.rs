use thiserror::Error;

use crate::shared::image_ref::{ImageRef, ResultMapping};

/// Why a catalog read produced nothing usable. Whatever the variant, the
/// caller keeps its previously displayed state; a failed read never
/// replaces anything.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("unexpected payload from {endpoint}: {source}")]
    Payload {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only view of the server-side image collections and the latest
/// classification results. Each call is a single fresh read; callers
/// decide when to refresh.
pub trait ImageCatalog {
    /// Known-person photos, in server order.
    fn list_reference(&self) -> Result<Vec<ImageRef>, CatalogError>;

    /// Unclassified photos, in server order.
    fn list_dataset(&self) -> Result<Vec<ImageRef>, CatalogError>;

    /// Grouping produced by the most recent classification run; empty
    /// until a run has completed.
    fn results(&self) -> Result<ResultMapping, CatalogError>;
}
