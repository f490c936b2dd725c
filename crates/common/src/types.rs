//! Core types for the CarSales storefront

use serde::{Deserialize, Serialize};

/// One purchasable car listing.
///
/// Prices are whole rupees; display formatting lives in [`crate::money`].
/// Mileage and location are free-text labels straight from the listing
/// source ("New", "1,200 km", "Mumbai, India").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Listing id, unique within a catalog.
    pub id: u32,
    /// Display name, e.g. "2024 Tesla Model 3".
    pub name: String,
    /// Price in whole rupees.
    pub price: u64,
    /// Image URL for the listing card.
    pub image: String,
    /// Mileage label.
    pub mileage: String,
    /// Location label.
    pub location: String,
}

/// Marketing feature shown under the hero banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// Which storefront page is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Contact,
}

impl Default for Page {
    fn default() -> Self {
        Self::Home
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Page::Home => write!(f, "home"),
            Page::Contact => write!(f, "contact"),
        }
    }
}

/// Hero-search selection.
///
/// The storefront records what the visitor picked and echoes it back, but
/// the selection is never applied as a catalog filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSelection {
    /// Brand dropdown value; defaults to the "All Brands" sentinel.
    #[serde(default = "default_brand")]
    pub brand: String,
    /// Free-text model query.
    #[serde(default)]
    pub query: String,
}

fn default_brand() -> String {
    crate::catalog::ALL_BRANDS.to_string()
}

impl Default for SearchSelection {
    fn default() -> Self {
        Self {
            brand: crate::catalog::ALL_BRANDS.to_string(),
            query: String::new(),
        }
    }
}

/// Position in the three-stage checkout flow.
///
/// The flow only moves forward: there is no transition back to an earlier
/// stage and no terminal "order placed" stage. Advancing past Payment
/// stays at Payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    Cart,
    Details,
    Payment,
}

impl CheckoutStep {
    /// Stage number shown in the stepper, 1 through 3.
    pub fn number(self) -> u8 {
        match self {
            Self::Cart => 1,
            Self::Details => 2,
            Self::Payment => 3,
        }
    }

    /// Label shown above the stepper circle.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cart => "Cart",
            Self::Details => "Details",
            Self::Payment => "Payment",
        }
    }

    /// The next stage, saturating at Payment.
    pub fn advanced(self) -> Self {
        match self {
            Self::Cart => Self::Details,
            Self::Details => Self::Payment,
            Self::Payment => Self::Payment,
        }
    }

    /// True at Payment, where the action button reads "Place Order"
    /// instead of "Continue".
    pub fn is_final(self) -> bool {
        matches!(self, Self::Payment)
    }

    /// All stages in stepper order.
    pub fn all() -> [Self; 3] {
        [Self::Cart, Self::Details, Self::Payment]
    }
}

impl Default for CheckoutStep {
    fn default() -> Self {
        Self::Cart
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
