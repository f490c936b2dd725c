//! CarSales CLI - Main Entry Point
//!
//! Command-line interface for the CarSales storefront: run the server,
//! browse the catalog, and drive a running cart over its HTTP API.

use clap::{Parser, Subcommand};

mod client;
mod commands;
mod output;

use commands::{cart, catalog, serve};

/// CarSales CLI - Storefront and Cart Tooling
#[derive(Parser)]
#[command(name = "carsales")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Storefront server address
    #[arg(long, default_value = "http://127.0.0.1:8080", global = true)]
    server_addr: String,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the storefront server
    Serve(serve::ServeArgs),

    /// Browse the listing catalog
    #[command(subcommand)]
    Catalog(catalog::CatalogCommands),

    /// Show the hero-search brand list
    Brands,

    /// Inspect and mutate the cart on a running server
    #[command(subcommand)]
    Cart(cart::CartCommands),

    /// Check storefront status
    Status,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve(args) => serve::execute(args).await?,
        Commands::Catalog(cmd) => catalog::execute(cmd, &cli.server_addr, cli.format).await?,
        Commands::Brands => {
            let client = client::StorefrontClient::new(&cli.server_addr);
            let brands = client.brands().await?;
            match cli.format {
                output::OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&brands)?);
                }
                _ => {
                    for brand in brands {
                        println!("{}", brand);
                    }
                }
            }
        }
        Commands::Cart(cmd) => cart::execute(cmd, &cli.server_addr, cli.format).await?,
        Commands::Status => {
            let client = client::StorefrontClient::new(&cli.server_addr);
            if client.health_check().await {
                println!("✅ Storefront is running at {}", cli.server_addr);
            } else {
                println!("❌ Storefront is not responding at {}", cli.server_addr);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("CarSales CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Self-contained storefront for the CarSales India marketplace");
        }
    }

    Ok(())
}
