//! Storefront server implementation
//!
//! One process serves both the embedded pages and the JSON API under
//! /api. All cart state lives in a single [`AppState`] behind one
//! RwLock; every mutating endpoint takes the write guard for the whole
//! call, so events apply one at a time in arrival order, the same way
//! clicks land in a single browser session.

use crate::config::StorefrontConfig;
use crate::pages;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{delete, get, post, put},
    Json, Router,
};
use carsales_common::cart::{AppState, CartState};
use carsales_common::money::format_inr;
use carsales_common::types::{CatalogItem, Page, SearchSelection};
use carsales_common::{Catalog, Error};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Storefront server
#[derive(Clone)]
pub struct StorefrontServer {
    state: Arc<StorefrontState>,
}

struct StorefrontState {
    /// Session state; one write lock per UI event.
    app: RwLock<AppState>,
    /// Immutable listing catalog, built once at startup.
    catalog: Catalog,
}

pub async fn serve(addr: SocketAddr, cfg: StorefrontConfig) -> anyhow::Result<()> {
    let server = StorefrontServer::new(cfg)?;
    server.serve(addr).await
}

impl StorefrontServer {
    /// Create a new storefront server
    pub fn new(cfg: StorefrontConfig) -> anyhow::Result<Self> {
        let catalog = cfg.catalog()?;
        info!(listings = catalog.len(), "Catalog ready");

        Ok(Self {
            state: Arc::new(StorefrontState {
                app: RwLock::new(AppState::new()),
                catalog,
            }),
        })
    }

    /// Create router
    pub fn router(&self) -> Router {
        Router::new()
            // Pages
            .route("/", get(home_page_handler))
            .route("/contact", get(contact_page_handler))

            // Health
            .route("/api/health", get(health_handler))

            // Catalog (read-only; hero-search selections never filter it)
            .route("/api/catalog", get(list_catalog_handler))
            .route("/api/catalog/:id", get(get_listing_handler))
            .route("/api/brands", get(list_brands_handler))
            .route("/api/features", get(list_features_handler))

            // Cart and checkout
            .route("/api/cart", get(get_cart_handler))
            .route("/api/cart/items", post(add_cart_item_handler))
            .route("/api/cart/items/:id", delete(remove_cart_item_handler))
            .route("/api/cart/advance", post(advance_checkout_handler))
            .route("/api/cart/open", put(set_cart_open_handler))

            // Hero search and page routing
            .route("/api/search", post(record_search_handler))
            .route("/api/page", put(set_page_handler))

            // Whole-session snapshot
            .route("/api/state", get(get_state_handler))

            // Fallback
            .fallback(not_found_handler)
            .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the storefront server
    pub async fn serve(self, addr: SocketAddr) -> anyhow::Result<()> {
        info!("Storefront starting on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

impl Default for StorefrontServer {
    fn default() -> Self {
        Self {
            state: Arc::new(StorefrontState {
                app: RwLock::new(AppState::new()),
                catalog: Catalog::builtin(),
            }),
        }
    }
}

// ============================================================================
// View types
// ============================================================================

/// Listing as the UI consumes it: raw price plus the pre-formatted
/// rupee string, so clients never reimplement Indian grouping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingView {
    pub id: u32,
    pub name: String,
    pub price: u64,
    pub price_display: String,
    pub image: String,
    pub mileage: String,
    pub location: String,
}

impl From<&CatalogItem> for ListingView {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            price_display: format_inr(item.price),
            image: item.image.clone(),
            mileage: item.mileage.clone(),
            location: item.location.clone(),
        }
    }
}

/// One rendered cart line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineView {
    pub id: u32,
    pub name: String,
    pub price: u64,
    pub price_display: String,
    pub image: String,
}

/// Everything the cart panel renders from, returned by every cart
/// mutation so the UI repaints from one source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub count: usize,
    pub total: u64,
    pub total_display: String,
    pub checkout_step: u8,
    pub checkout_step_label: String,
    /// Stepper button label: "Continue", or "Place Order" at Payment.
    pub action_label: String,
    pub is_open: bool,
}

fn cart_view(cart: &CartState) -> CartView {
    let step = cart.checkout_step();
    CartView {
        items: cart
            .items()
            .iter()
            .map(|item| CartLineView {
                id: item.id,
                name: item.name.clone(),
                price: item.price,
                price_display: format_inr(item.price),
                image: item.image.clone(),
            })
            .collect(),
        count: cart.len(),
        total: cart.total(),
        total_display: format_inr(cart.total()),
        checkout_step: step.number(),
        checkout_step_label: step.label().to_string(),
        action_label: if step.is_final() {
            "Place Order".to_string()
        } else {
            "Continue".to_string()
        },
        is_open: cart.is_open(),
    }
}

// ============================================================================
// Request types
// ============================================================================

#[derive(Debug, Deserialize)]
struct AddCartItemRequest {
    id: u32,
}

#[derive(Debug, Deserialize)]
struct SetCartOpenRequest {
    open: bool,
}

#[derive(Debug, Deserialize)]
struct SetPageRequest {
    page: Page,
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "carsales-web"
    }))
}

async fn home_page_handler() -> impl IntoResponse {
    Html(pages::HOME_HTML)
}

async fn contact_page_handler() -> impl IntoResponse {
    Html(pages::CONTACT_HTML)
}

async fn list_catalog_handler(State(state): State<Arc<StorefrontState>>) -> impl IntoResponse {
    let listings: Vec<ListingView> = state.catalog.items().iter().map(ListingView::from).collect();
    Json(serde_json::json!({ "listings": listings }))
}

async fn get_listing_handler(
    State(state): State<Arc<StorefrontState>>,
    Path(id): Path<u32>,
) -> impl IntoResponse {
    match state.catalog.get(id) {
        Some(item) => (StatusCode::OK, Json(serde_json::json!(ListingView::from(item)))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": Error::listing_not_found(id).to_string()})),
        )
            .into_response(),
    }
}

async fn list_brands_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "brands": carsales_common::CAR_BRANDS }))
}

async fn list_features_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "features": carsales_common::catalog::features() }))
}

async fn get_cart_handler(State(state): State<Arc<StorefrontState>>) -> impl IntoResponse {
    let app = state.app.read().await;
    Json(cart_view(app.cart()))
}

async fn add_cart_item_handler(
    State(state): State<Arc<StorefrontState>>,
    Json(req): Json<AddCartItemRequest>,
) -> impl IntoResponse {
    // Resolve the listing before taking the write lock; an unknown id
    // must leave the cart untouched.
    let Some(item) = state.catalog.get(req.id).cloned() else {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": Error::listing_not_found(req.id).to_string()})),
        )
            .into_response();
    };

    let mut app = state.app.write().await;
    app.cart_mut().add_item(item);
    (StatusCode::CREATED, Json(cart_view(app.cart()))).into_response()
}

async fn remove_cart_item_handler(
    State(state): State<Arc<StorefrontState>>,
    Path(id): Path<u32>,
) -> impl IntoResponse {
    let mut app = state.app.write().await;
    let removed = app.cart_mut().remove_item(id);
    debug!(id, removed, "Cart remove request");
    // Removing an id that is not in the cart is a no-op, not an error.
    Json(cart_view(app.cart()))
}

async fn advance_checkout_handler(State(state): State<Arc<StorefrontState>>) -> impl IntoResponse {
    let mut app = state.app.write().await;
    app.cart_mut().advance_step();
    Json(cart_view(app.cart()))
}

async fn set_cart_open_handler(
    State(state): State<Arc<StorefrontState>>,
    Json(req): Json<SetCartOpenRequest>,
) -> impl IntoResponse {
    let mut app = state.app.write().await;
    app.cart_mut().set_open(req.open);
    Json(cart_view(app.cart()))
}

async fn record_search_handler(
    State(state): State<Arc<StorefrontState>>,
    Json(selection): Json<SearchSelection>,
) -> impl IntoResponse {
    let mut app = state.app.write().await;
    app.set_search(selection);
    Json(serde_json::json!({ "search": app.search() }))
}

async fn set_page_handler(
    State(state): State<Arc<StorefrontState>>,
    Json(req): Json<SetPageRequest>,
) -> impl IntoResponse {
    let mut app = state.app.write().await;
    app.set_page(req.page);
    Json(serde_json::json!({ "page": app.page() }))
}

async fn get_state_handler(State(state): State<Arc<StorefrontState>>) -> impl IntoResponse {
    let app = state.app.read().await;
    Json(serde_json::json!({
        "page": app.page(),
        "search": app.search(),
        "cart": cart_view(app.cart()),
    }))
}

async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
}
