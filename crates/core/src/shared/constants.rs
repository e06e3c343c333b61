/// Default server base URL when no configuration is saved.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

pub const LIST_REFERENCE_ENDPOINT: &str = "/images/people";
pub const LIST_DATASET_ENDPOINT: &str = "/images/dataset";
pub const RESULTS_ENDPOINT: &str = "/results";

pub const UPLOAD_REFERENCE_ENDPOINT: &str = "/upload/person";
pub const UPLOAD_DATASET_ENDPOINT: &str = "/upload/dataset";

pub const CLASSIFY_ENDPOINT: &str = "/classify";
pub const RESET_ENDPOINT: &str = "/reset";

/// Static file mounts the server serves each collection from.
pub const STATIC_REFERENCE_PREFIX: &str = "/static/people";
pub const STATIC_DATASET_PREFIX: &str = "/static/dataset";
pub const STATIC_OUTPUT_PREFIX: &str = "/static/output";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
