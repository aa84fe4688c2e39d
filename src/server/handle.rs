//! Server lifecycle: startup and the exported handle.
//!
//! The listener is never module-level state; whoever calls [`start_server`]
//! owns the returned [`ServerHandle`] and decides when the server stops.

use std::io;
use std::net::SocketAddr;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use super::listener::create_reusable_listener;
use super::server_loop::run_accept_loop;
use crate::config::ServerConfig;
use crate::logger;

/// Handle to a running server.
///
/// The server keeps running until `stop` or `shutdown` is called; dropping
/// the handle leaves the accept loop task detached.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Arc<Notify>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    /// Address the listener is actually bound to.
    ///
    /// Differs from the configured address when port 0 was requested and the
    /// OS picked one.
    pub const fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Signal the accept loop to stop without waiting for it.
    pub fn stop(&self) {
        self.shutdown.notify_one();
    }

    /// Stop the accept loop and wait until it has exited and the port is
    /// released.
    pub async fn shutdown(self) {
        self.shutdown.notify_one();
        if let Err(e) = self.task.await {
            logger::log_error(&format!("Server task ended abnormally: {e}"));
        }
    }
}

/// Bind the listener and start serving in a background task.
///
/// The startup line is printed once the listener is bound; bind failures are
/// returned to the caller instead of being logged from the spawned task.
pub async fn start_server(config: ServerConfig) -> io::Result<ServerHandle> {
    let addr = config
        .socket_addr()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let listener = create_reusable_listener(addr)?;
    let addr = listener.local_addr()?;

    logger::log_server_start(addr.port());

    let shutdown = Arc::new(Notify::new());
    let active_connections = Arc::new(AtomicUsize::new(0));
    let config = Arc::new(config);

    let loop_shutdown = Arc::clone(&shutdown);
    let task = tokio::spawn(async move {
        run_accept_loop(listener, config, active_connections, loop_shutdown).await;
    });

    Ok(ServerHandle {
        addr,
        shutdown,
        task,
    })
}
