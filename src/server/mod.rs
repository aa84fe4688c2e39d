// Server module entry point
// Listener construction, accept loop, connection handling, and lifecycle.

pub mod connection;
pub mod handle;
pub mod listener;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword), use server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export the lifecycle surface
pub use handle::{start_server, ServerHandle};
pub use listener::create_reusable_listener;
