//! Cart and checkout commands against a running storefront

use anyhow::Result;
use clap::Subcommand;

use crate::client::{CartLineRow, CartView, StorefrontClient};
use crate::output::{print_list, print_success, OutputFormat, TableDisplay};

#[derive(Subcommand)]
pub enum CartCommands {
    /// Show the cart contents and checkout progress
    Show,

    /// Add a listing to the cart by id
    Add {
        /// Listing id
        id: u32,
    },

    /// Remove every cart line with this listing id
    Remove {
        /// Listing id
        id: u32,
    },

    /// Advance the checkout stepper (holds at Payment)
    Advance,

    /// Open the cart panel
    Open,

    /// Close the cart panel
    Close,
}

impl TableDisplay for CartLineRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "PRICE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.price_display.clone(),
        ]
    }
}

pub async fn execute(cmd: CartCommands, server_addr: &str, format: OutputFormat) -> Result<()> {
    let client = StorefrontClient::new(server_addr);

    match cmd {
        CartCommands::Show => {
            let view = client.cart().await?;
            print_cart(&view, format);
        }
        CartCommands::Add { id } => {
            let view = client.add_to_cart(id).await?;
            print_success(&format!("Added listing {} to cart", id));
            print_cart(&view, format);
        }
        CartCommands::Remove { id } => {
            let view = client.remove_from_cart(id).await?;
            print_success(&format!("Removed listing {} from cart", id));
            print_cart(&view, format);
        }
        CartCommands::Advance => {
            let view = client.advance_checkout().await?;
            print_success(&format!(
                "Checkout at step {} of 3 ({})",
                view.checkout_step, view.checkout_step_label
            ));
            print_cart(&view, format);
        }
        CartCommands::Open => {
            let view = client.set_cart_open(true).await?;
            print_cart(&view, format);
        }
        CartCommands::Close => {
            let view = client.set_cart_open(false).await?;
            print_cart(&view, format);
        }
    }

    Ok(())
}

fn print_cart(view: &CartView, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(view).unwrap_or_default()
            );
        }
        _ => {
            if view.items.is_empty() {
                println!("Your cart is empty");
            } else {
                print_list(&view.items, format);
            }
            println!("Total: {}", view.total_display);
            println!(
                "Step: {} of 3 ({})",
                view.checkout_step, view.checkout_step_label
            );
            println!("Panel: {}", if view.is_open { "open" } else { "closed" });
            println!("Next action: {}", view.action_label);
        }
    }
}
