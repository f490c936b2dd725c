//! CarSales Storefront Server
//!
//! Serves the embedded storefront pages and the JSON API that the pages
//! and the CLI drive the cart with.

pub mod config;
pub mod pages;
pub mod server;

pub use config::StorefrontConfig;
pub use server::StorefrontServer;
