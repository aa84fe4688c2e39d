//! HTTP protocol layer module
//!
//! Response builders, decoupled from request routing and file loading.

pub mod response;

pub use response::{build_404_response, build_405_response, build_file_response};
