//! Catalog browsing commands

use anyhow::Result;
use clap::Subcommand;

use crate::client::{ListingRow, StorefrontClient};
use crate::output::{print_item, print_list, OutputFormat, TableDisplay};

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List the featured cars
    List,

    /// Show one listing
    Show {
        /// Listing id
        id: u32,
    },
}

impl TableDisplay for ListingRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "PRICE", "MILEAGE", "LOCATION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.price_display.clone(),
            self.mileage.clone(),
            self.location.clone(),
        ]
    }
}

pub async fn execute(cmd: CatalogCommands, server_addr: &str, format: OutputFormat) -> Result<()> {
    let client = StorefrontClient::new(server_addr);

    match cmd {
        CatalogCommands::List => {
            let listings = client.listings().await?;
            print_list(&listings, format);
        }
        CatalogCommands::Show { id } => {
            let listing = client.listing(id).await?;
            print_item(&listing, format);
        }
    }

    Ok(())
}
