//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, root-path
//! matching, and dispatch to the static file responder. Anything that is not
//! `GET /` or `HEAD /` falls through to the stack's default error responses.

use crate::config::ServerConfig;
use crate::handler::static_file;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling.
///
/// Never fails at this layer; every outcome is mapped to a response.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<ServerConfig>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    let response = match method {
        Method::GET | Method::HEAD => route_request(&path, is_head, &config).await,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    };

    if config.access_log {
        logger::log_request(&method, &path, response.status().as_u16(), body_bytes(&response));
    }

    Ok(response)
}

/// Route by path; only the root path is served.
async fn route_request(path: &str, is_head: bool, config: &ServerConfig) -> Response<Full<Bytes>> {
    if path == "/" {
        static_file::serve_root(config, is_head).await
    } else {
        http::build_404_response()
    }
}

/// Body size for the access log, taken from Content-Length when present.
fn body_bytes(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get(hyper::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0)
}
