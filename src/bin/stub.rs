//! Blogdeck Stub Backend
//!
//! Run with: cargo run --bin blogdeck-stub
//!
//! # Configuration
//!
//! Reads the usual config file locations, then environment variables:
//! - `BLOGDECK_STUB_HOST`: Host to bind to (default: 127.0.0.1)
//! - `BLOGDECK_STUB_PORT`: Port to listen on (default: 8000)
//! - `BLOGDECK_LOG_LEVEL` / `BLOGDECK_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full filter directives (wins over the level)

use blogdeck::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Config::load_default();
    blogdeck::logging::init(&loaded.config.logging)?;
    loaded.report();
    let config = loaded.config;

    tracing::info!("Starting Blogdeck stub backend v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Point the front-ends at http://{}/api/",
        config.stub.addr()
    );

    blogdeck::stub::serve(&config.stub).await?;

    tracing::info!("Blogdeck stub backend stopped");
    Ok(())
}
