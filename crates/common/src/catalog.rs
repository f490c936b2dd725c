//! Listing catalog: built-in seed data plus optional file override
//!
//! The storefront ships with the featured listings, the brand dropdown,
//! and the marketing feature trio compiled in. A TOML file with
//! `[[items]]` tables can replace the listings for demos without a
//! rebuild; brands and features are fixed.

use crate::error::{Error, Result};
use crate::types::{CatalogItem, Feature};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Sentinel brand meaning "no brand selected".
pub const ALL_BRANDS: &str = "All Brands";

/// Brand dropdown for the hero search, in display order.
pub const CAR_BRANDS: &[&str] = &[
    ALL_BRANDS,
    "Jaguar",
    "Mercedes-Benz",
    "Audi",
    "Mahindra Thar",
    "Suzuki Jimny",
    "Hindustan Ambassador",
    "Nissan Sunny",
    "Porsche",
    "Ferrari",
    "Mahindra Bolero",
    "Mahindra Scorpio",
    "Rolls-Royce",
];

static FEATURES: Lazy<Vec<Feature>> = Lazy::new(|| {
    vec![
        Feature {
            title: "Verified Dealers".to_string(),
            description: "All our dealers are thoroughly vetted and certified across India.".to_string(),
        },
        Feature {
            title: "Best Prices".to_string(),
            description: "Competitive prices with easy EMI options available.".to_string(),
        },
        Feature {
            title: "Satisfaction Guaranteed".to_string(),
            description: "7-day return policy with full refund guarantee.".to_string(),
        },
    ]
});

/// The featured listings shown on the home page.
fn builtin_listings() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: 1,
            name: "2024 Tesla Model 3".to_string(),
            price: 3_499_000,
            image: "https://images.unsplash.com/photo-1560958089-b8a1929cea89?w=400&h=250&fit=crop".to_string(),
            mileage: "New".to_string(),
            location: "Mumbai, India".to_string(),
        },
        CatalogItem {
            id: 2,
            name: "2023 BMW M4 Competition".to_string(),
            price: 6_490_000,
            image: "https://images.unsplash.com/photo-1617531653332-bd46c24f2068?w=400&h=250&fit=crop".to_string(),
            mileage: "1,200 km".to_string(),
            location: "Delhi, India".to_string(),
        },
        CatalogItem {
            id: 3,
            name: "2024 Mercedes-Benz EQS".to_string(),
            price: 8_590_000,
            image: "https://images.unsplash.com/photo-1618843479313-40f8afb4b4d8?w=400&h=250&fit=crop".to_string(),
            mileage: "New".to_string(),
            location: "Bangalore, India".to_string(),
        },
    ]
}

/// On-disk catalog file shape.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<CatalogItem>,
}

/// Immutable listing catalog.
///
/// Built once at startup and shared read-only; cart lines clone out of it.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// The compiled-in featured listings.
    pub fn builtin() -> Self {
        Self {
            items: builtin_listings(),
        }
    }

    /// Load listings from a TOML file, replacing the built-in set.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: CatalogFile = toml::from_str(&raw)?;
        let catalog = Self::from_items(file.items)?;
        info!(
            path = %path.display(),
            listings = catalog.len(),
            "Loaded catalog from file"
        );
        Ok(catalog)
    }

    /// Build a catalog from explicit items, rejecting empty sets and
    /// duplicate ids.
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::InvalidCatalog("catalog has no listings".to_string()));
        }
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate listing id {}",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    /// All listings, in display order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up one listing by id.
    pub fn get(&self, id: u32) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The marketing feature trio.
pub fn features() -> &'static [Feature] {
    &FEATURES
}
