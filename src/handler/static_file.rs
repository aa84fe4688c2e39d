//! Static file responder.
//!
//! Reads the configured file from disk on every request; nothing is cached
//! between requests, so an edit to the file is visible on the next request.

use crate::config::ServerConfig;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

/// Serve the configured static file for the root path.
///
/// A file that is missing or unreadable at request time yields a 404.
pub async fn serve_root(config: &ServerConfig, is_head: bool) -> Response<Full<Bytes>> {
    match load_static_file(config).await {
        Some(content) => {
            http::build_file_response(Bytes::from(content), &config.content_type, is_head)
        }
        None => http::build_404_response(),
    }
}

/// Read the static file fresh from disk.
async fn load_static_file(config: &ServerConfig) -> Option<Vec<u8>> {
    match fs::read(&config.static_file).await {
        Ok(content) => Some(content),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                config.static_file.display(),
                e
            ));
            None
        }
    }
}
