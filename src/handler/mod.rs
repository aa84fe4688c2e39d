//! Request handler module
//!
//! Method validation, root-path dispatch, and the static file responder.

pub mod router;
pub mod static_file;

// Re-export main entry point
pub use router::handle_request;
