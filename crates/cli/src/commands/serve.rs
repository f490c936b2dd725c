//! Run the storefront server in-process

use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};

use carsales_web::config::StorefrontConfig;

#[derive(Args)]
pub struct ServeArgs {
    /// Bind address; falls back to the config file, then 127.0.0.1:8080
    #[arg(long, env = "CARSALES_WEB_ADDR")]
    pub addr: Option<String>,

    /// Configuration file (TOML)
    #[arg(long, env = "CARSALES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog TOML file replacing the built-in listings
    #[arg(long, env = "CARSALES_CATALOG_PATH")]
    pub catalog: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => {
            if !path.exists() {
                warn!("Config file {:?} not found, using defaults", path);
            }
            StorefrontConfig::load(path)?
        }
        None => StorefrontConfig::default(),
    };

    // Flags (and their env fallbacks) win over the config file.
    if let Some(addr) = &args.addr {
        cfg.listen_addr = addr.clone();
    }
    if let Some(catalog) = &args.catalog {
        cfg.catalog_path = Some(catalog.clone());
    }

    let addr: SocketAddr = cfg.listen_addr.parse()?;
    info!("Starting CarSales storefront on http://{}", addr);
    if let Some(path) = &cfg.catalog_path {
        info!("Using catalog file {:?}", path);
    }

    carsales_web::server::serve(addr, cfg).await
}
