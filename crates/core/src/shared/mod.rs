pub mod constants;
pub mod image_ref;
pub mod static_assets;

#[cfg(test)]
pub(crate) mod test_server;
