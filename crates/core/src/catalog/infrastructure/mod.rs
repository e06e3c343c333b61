pub mod http_image_catalog;
