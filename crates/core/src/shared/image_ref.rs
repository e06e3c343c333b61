use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque image identifier as reported by the server (a filename).
/// Unique within its collection; the client never parses it beyond
/// passing it back in asset URLs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Grouping of dataset images by server-assigned identity name, produced
/// by the most recent classification run. Replaced in full on every
/// successful job or reset, never merged.
pub type ResultMapping = BTreeMap<String, Vec<ImageRef>>;
