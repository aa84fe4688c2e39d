// Signal handling module
//
// SIGTERM and SIGINT both trigger a graceful shutdown. There is nothing to
// reload at runtime, so no SIGHUP handling.

/// Wait until a shutdown signal arrives.
#[cfg(unix)]
pub async fn wait_for_shutdown() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => {
            println!("\n[SIGNAL] SIGTERM received, initiating graceful shutdown");
        }
        _ = sigint.recv() => {
            println!("\n[SIGNAL] SIGINT received, initiating graceful shutdown");
        }
    }
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub async fn wait_for_shutdown() {
    if let Ok(()) = tokio::signal::ctrl_c().await {
        println!("\n[SIGNAL] Ctrl+C received, initiating graceful shutdown");
    }
}
