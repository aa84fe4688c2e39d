//! octoserve
//!
//! A single-route HTTP server: every `GET /` returns the contents of one
//! static text file as `text/plain`. Built on Tokio and Hyper. The running
//! listener is exposed to the embedding caller as a [`ServerHandle`] so the
//! owning process controls the lifecycle explicitly.
//!
//! ```no_run
//! use octoserve::{start_server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let handle = start_server(ServerConfig::default()).await?;
//!     // ... serve until the owner decides to stop ...
//!     handle.shutdown().await;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use config::ServerConfig;
pub use server::{start_server, ServerHandle};
