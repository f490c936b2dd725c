//! Storefront HTTP Client

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One listing as served by the storefront API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRow {
    pub id: u32,
    pub name: String,
    pub price: u64,
    pub price_display: String,
    pub image: String,
    pub mileage: String,
    pub location: String,
}

/// One cart line as served by the storefront API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineRow {
    pub id: u32,
    pub name: String,
    pub price: u64,
    pub price_display: String,
    pub image: String,
}

/// Cart snapshot as served by the storefront API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartView {
    pub items: Vec<CartLineRow>,
    pub count: usize,
    pub total: u64,
    pub total_display: String,
    pub checkout_step: u8,
    pub checkout_step_label: String,
    pub action_label: String,
    pub is_open: bool,
}

#[derive(Debug, Deserialize)]
struct ListingsEnvelope {
    listings: Vec<ListingRow>,
}

#[derive(Debug, Deserialize)]
struct BrandsEnvelope {
    brands: Vec<String>,
}

/// Client for communicating with a running storefront server
pub struct StorefrontClient {
    base_url: String,
    http: reqwest::Client,
}

impl StorefrontClient {
    /// Create a new storefront client
    pub fn new(addr: &str) -> Self {
        Self {
            base_url: addr.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Check if the storefront is healthy
    pub async fn health_check(&self) -> bool {
        match self.http.get(self.url("/api/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    // Catalog operations

    /// List the featured listings
    pub async fn listings(&self) -> Result<Vec<ListingRow>> {
        let envelope: ListingsEnvelope = self.get(self.url("/api/catalog")).await?;
        Ok(envelope.listings)
    }

    /// Get one listing by id
    pub async fn listing(&self, id: u32) -> Result<ListingRow> {
        self.get(self.url(&format!("/api/catalog/{}", id))).await
    }

    /// List the hero-search brands
    pub async fn brands(&self) -> Result<Vec<String>> {
        let envelope: BrandsEnvelope = self.get(self.url("/api/brands")).await?;
        Ok(envelope.brands)
    }

    // Cart operations

    /// Get the current cart snapshot
    pub async fn cart(&self) -> Result<CartView> {
        self.get(self.url("/api/cart")).await
    }

    /// Add a listing to the cart
    pub async fn add_to_cart(&self, id: u32) -> Result<CartView> {
        let response = self
            .http
            .post(self.url("/api/cart/items"))
            .json(&serde_json::json!({ "id": id }))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Remove every cart line for a listing
    pub async fn remove_from_cart(&self, id: u32) -> Result<CartView> {
        let response = self
            .http
            .delete(self.url(&format!("/api/cart/items/{}", id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Advance the checkout stepper
    pub async fn advance_checkout(&self) -> Result<CartView> {
        let response = self.http.post(self.url("/api/cart/advance")).send().await?;
        Self::decode(response).await
    }

    /// Open or close the cart panel
    pub async fn set_cart_open(&self, open: bool) -> Result<CartView> {
        let response = self
            .http
            .put(self.url("/api/cart/open"))
            .json(&serde_json::json!({ "open": open }))
            .send()
            .await?;
        Self::decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    /// Turn non-2xx responses into errors carrying the server's message.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("request failed")
                .to_string();
            Err(anyhow!("{} ({})", message, status))
        }
    }
}
