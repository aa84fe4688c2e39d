//! Logger module
//!
//! Plain stdout/stderr logging: one startup line on bind, optional
//! per-request access lines, errors and warnings to stderr.

use chrono::Local;
use std::net::SocketAddr;

/// Startup line, printed exactly once when the listener is bound.
pub fn log_server_start(port: u16) {
    println!("Server listening on port {port}!");
}

pub fn log_server_stop(port: u16) {
    println!("Server on port {port} stopped");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

/// Access log line in Common Log Format style with a local timestamp.
/// Only called when access logging is enabled.
pub fn log_request(method: &hyper::Method, path: &str, status: u16, body_bytes: usize) {
    println!(
        "[{}] \"{method} {path}\" {status} {body_bytes}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
    );
}
