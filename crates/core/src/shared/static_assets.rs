//! By-convention URLs for images the server serves statically. The
//! rendering layer composes these; nothing here validates that the
//! server actually has the file.

use crate::shared::constants::{
    STATIC_DATASET_PREFIX, STATIC_OUTPUT_PREFIX, STATIC_REFERENCE_PREFIX,
};
use crate::shared::image_ref::ImageRef;

/// URL of a known-person photo in the reference collection.
pub fn reference_image_url(base_url: &str, image: &ImageRef) -> String {
    format!(
        "{}{}/{}",
        base_url.trim_end_matches('/'),
        STATIC_REFERENCE_PREFIX,
        image
    )
}

/// URL of an unclassified photo in the dataset collection.
pub fn dataset_image_url(base_url: &str, image: &ImageRef) -> String {
    format!(
        "{}{}/{}",
        base_url.trim_end_matches('/'),
        STATIC_DATASET_PREFIX,
        image
    )
}

/// URL of a grouped output image, filed under the server-assigned
/// identity name.
pub fn output_image_url(base_url: &str, identity: &str, image: &ImageRef) -> String {
    format!(
        "{}{}/{}/{}",
        base_url.trim_end_matches('/'),
        STATIC_OUTPUT_PREFIX,
        identity,
        image
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:8000")]
    #[case("http://localhost:8000/")]
    fn test_reference_url_tolerates_trailing_slash(#[case] base: &str) {
        let url = reference_image_url(base, &ImageRef::new("alice.jpg"));
        assert_eq!(url, "http://localhost:8000/static/people/alice.jpg");
    }

    #[test]
    fn test_dataset_url_uses_dataset_mount() {
        let url = dataset_image_url("http://host", &ImageRef::new("x.png"));
        assert_eq!(url, "http://host/static/dataset/x.png");
    }

    #[test]
    fn test_output_url_includes_identity_segment() {
        let url = output_image_url("http://host", "Alice", &ImageRef::new("a.jpg"));
        assert_eq!(url, "http://host/static/output/Alice/a.jpg");
    }
}
