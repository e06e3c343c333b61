use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;

use crate::shared::constants::{UPLOAD_DATASET_ENDPOINT, UPLOAD_REFERENCE_ENDPOINT};
use crate::transfer::domain::image_uploader::{ImagePayload, ImageUploader, UploadError};

/// Multipart HTTP uploads: a single `file` field for reference photos,
/// a repeated `files` field for dataset batches.
pub struct HttpImageUploader {
    base_url: String,
    client: Client,
}

impl HttpImageUploader {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn post_multipart(&self, endpoint: &'static str, form: Form) -> Result<(), UploadError> {
        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| UploadError::Transport(Box::new(e)))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(UploadError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

fn to_part(image: &ImagePayload) -> Part {
    Part::bytes(image.bytes.clone()).file_name(image.file_name.clone())
}

impl ImageUploader for HttpImageUploader {
    fn upload_reference(&self, image: &ImagePayload) -> Result<(), UploadError> {
        let form = Form::new().part("file", to_part(image));
        self.post_multipart(UPLOAD_REFERENCE_ENDPOINT, form)
    }

    fn upload_dataset(&self, images: &[ImagePayload]) -> Result<(), UploadError> {
        let mut form = Form::new();
        for image in images {
            form = form.part("files", to_part(image));
        }
        self.post_multipart(UPLOAD_DATASET_ENDPOINT, form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_server::{http_response, ok_json, unreachable_url, CannedServer};

    fn payload(name: &str) -> ImagePayload {
        ImagePayload::new(name, b"imagebytes".to_vec())
    }

    #[test]
    fn test_reference_upload_posts_single_file_field() {
        let server = CannedServer::start(vec![ok_json("{}")]);
        let uploader = HttpImageUploader::new(server.url());

        uploader.upload_reference(&payload("ref.jpg")).unwrap();

        let request = &server.requests()[0];
        assert!(request.starts_with("POST /upload/person HTTP/1.1"));
        assert!(request.contains("name=\"file\""));
        assert!(request.contains("filename=\"ref.jpg\""));
    }

    #[test]
    fn test_dataset_upload_repeats_files_field() {
        let server = CannedServer::start(vec![ok_json("{}")]);
        let uploader = HttpImageUploader::new(server.url());

        uploader
            .upload_dataset(&[payload("a.jpg"), payload("b.jpg")])
            .unwrap();

        let request = &server.requests()[0];
        assert!(request.starts_with("POST /upload/dataset HTTP/1.1"));
        assert_eq!(request.matches("name=\"files\"").count(), 2);
        assert!(request.contains("filename=\"a.jpg\""));
        assert!(request.contains("filename=\"b.jpg\""));
    }

    #[test]
    fn test_rejected_status_is_reported() {
        let server = CannedServer::start(vec![http_response(
            500,
            "Internal Server Error",
            "{}",
        )]);
        let uploader = HttpImageUploader::new(server.url());

        let err = uploader.upload_reference(&payload("ref.jpg")).unwrap_err();

        assert!(matches!(err, UploadError::Rejected { status: 500 }));
    }

    #[test]
    fn test_unreachable_server_is_transport_error() {
        let uploader = HttpImageUploader::new(&unreachable_url());

        let err = uploader.upload_dataset(&[payload("a.jpg")]).unwrap_err();

        assert!(matches!(err, UploadError::Transport(_)));
    }
}
