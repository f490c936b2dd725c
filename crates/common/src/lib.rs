//! CarSales Common Library
//!
//! Shared domain types for the CarSales storefront: the listing catalog,
//! rupee formatting, and the cart/checkout state machine the web server
//! and CLI both drive.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;

// Re-export commonly used types
pub use cart::{AppState, CartState};
pub use catalog::{Catalog, ALL_BRANDS, CAR_BRANDS};
pub use error::{Error, Result};
pub use money::format_inr;
pub use types::*;

/// CarSales version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
