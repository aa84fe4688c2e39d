// Server loop module
// Accepts connections until the shutdown signal fires.

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::ServerConfig;
use crate::logger;

/// Accept loop for a single listener.
///
/// Runs until `shutdown` is notified. The listener is dropped on exit so the
/// port is released immediately; connections already being served finish in
/// their own tasks.
pub async fn run_accept_loop(
    listener: TcpListener,
    config: Arc<ServerConfig>,
    active_connections: Arc<AtomicUsize>,
    shutdown: Arc<Notify>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &config, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                if let Ok(addr) = listener.local_addr() {
                    logger::log_server_stop(addr.port());
                }
                break;
            }
        }
    }
}
