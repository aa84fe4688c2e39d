use octoserve::config::ServerConfig;
use octoserve::server::{self, signal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn std::error::Error>> {
    let handle = server::start_server(ServerConfig::default()).await?;

    signal::wait_for_shutdown().await;
    handle.shutdown().await;

    Ok(())
}
