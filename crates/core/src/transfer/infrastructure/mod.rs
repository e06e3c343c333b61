pub mod http_image_uploader;
