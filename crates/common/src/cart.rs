//! Cart and checkout state machine
//!
//! The cart is the only mutable state in the storefront. Every operation
//! here is total: nothing returns an error, unknown ids are no-ops, and
//! advancing past the last checkout stage holds position. Each call
//! corresponds to one UI event; the structs carry no locking, so a
//! serving layer that shares them across tasks must serialize access at
//! its own boundary.

use crate::types::{CatalogItem, CheckoutStep, Page, SearchSelection};
use tracing::debug;

/// Cart contents plus checkout progress for one browsing session.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    items: Vec<CatalogItem>,
    is_open: bool,
    checkout_step: CheckoutStep,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart lines in add order. Duplicates are real: adding the same
    /// listing twice yields two lines.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the cart panel is showing.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn checkout_step(&self) -> CheckoutStep {
        self.checkout_step
    }

    /// Sum of line prices in rupees. Derived on demand, never stored, so
    /// it cannot drift from the lines.
    pub fn total(&self) -> u64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Append a listing to the cart and open the panel.
    ///
    /// No deduplication and no quantity field: a second add of the same
    /// listing is a second line.
    pub fn add_item(&mut self, item: CatalogItem) {
        debug!(id = item.id, name = %item.name, "cart: add");
        self.items.push(item);
        self.is_open = true;
    }

    /// Remove every line whose listing id matches. Returns how many lines
    /// went away; an absent id removes zero and is not an error. Panel
    /// visibility and checkout stage are untouched.
    pub fn remove_item(&mut self, id: u32) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = before - self.items.len();
        if removed > 0 {
            debug!(id, removed, "cart: remove");
        }
        removed
    }

    /// Move the checkout stepper forward one stage, saturating at
    /// Payment.
    ///
    /// At Payment the storefront labels this action "Place Order", but no
    /// order-placed state exists yet; the call is observable only as an
    /// unchanged stage.
    pub fn advance_step(&mut self) -> CheckoutStep {
        self.checkout_step = self.checkout_step.advanced();
        debug!(step = %self.checkout_step, "cart: advance");
        self.checkout_step
    }

    /// Show or hide the cart panel. Contents and stage are untouched, so
    /// closing mid-checkout and reopening resumes where the visitor left
    /// off.
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }
}

/// Top-level storefront state: the cart plus page routing and the
/// recorded hero-search selection.
///
/// Owned by the serving layer; everything below it mutates only through
/// these methods.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    cart: CartState,
    page: Page,
    search: SearchSelection,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartState {
        &mut self.cart
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Switch pages. The cart rides along unchanged; it is global to the
    /// session, not to a page.
    pub fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    pub fn search(&self) -> &SearchSelection {
        &self.search
    }

    /// Record the hero-search selection. Recorded and echoed only; the
    /// catalog is never filtered by it.
    pub fn set_search(&mut self, selection: SearchSelection) {
        debug!(brand = %selection.brand, query = %selection.query, "search: record");
        self.search = selection;
    }
}
