use std::net::SocketAddr;

use tracing::{info, warn};

use carsales_web::config::StorefrontConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Config file is optional; CARSALES_CONFIG points at one, and the
    // CARSALES_WEB_ADDR / CARSALES_CATALOG_PATH variables override it.
    let cfg = match std::env::var("CARSALES_CONFIG") {
        Ok(path) if !path.trim().is_empty() => {
            let path = std::path::Path::new(path.trim());
            if !path.exists() {
                warn!("Config file {:?} not found, using defaults", path);
            }
            StorefrontConfig::load(path)?
        }
        _ => StorefrontConfig::default(),
    }
    .apply_env();

    let addr: SocketAddr = cfg.listen_addr.parse()?;

    info!("Starting CarSales storefront on http://{}", addr);

    carsales_web::server::serve(addr, cfg).await
}
