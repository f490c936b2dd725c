//! End-to-end cart flows against the public API of the crate.
//!
//! These walk the same paths a storefront session does: browse the
//! catalog, add and remove listings, step through checkout, toggle the
//! panel.

use carsales_common::cart::{AppState, CartState};
use carsales_common::catalog::{self, Catalog};
use carsales_common::money::format_inr;
use carsales_common::types::{CheckoutStep, Page, SearchSelection};

#[test]
fn browse_then_buy_two_featured_cars() {
    let catalog = Catalog::builtin();
    let mut cart = CartState::new();

    let tesla = catalog.get(1).cloned().unwrap();
    let bmw = catalog.get(2).cloned().unwrap();

    cart.add_item(tesla);
    cart.add_item(bmw);

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total(), 9_989_000);
    assert_eq!(format_inr(cart.total()), "₹99,89,000");
    assert!(cart.is_open());

    // Walk the stepper to the end; the label flips to Place Order there.
    assert_eq!(cart.advance_step(), CheckoutStep::Details);
    assert_eq!(cart.advance_step(), CheckoutStep::Payment);
    assert!(cart.checkout_step().is_final());

    // Pressing the final button again holds position.
    assert_eq!(cart.advance_step(), CheckoutStep::Payment);
}

#[test]
fn remove_mid_checkout_keeps_progress() {
    let catalog = Catalog::builtin();
    let mut cart = CartState::new();

    cart.add_item(catalog.get(1).cloned().unwrap());
    cart.add_item(catalog.get(2).cloned().unwrap());
    cart.advance_step();

    let removed = cart.remove_item(1);
    assert_eq!(removed, 1);
    assert_eq!(cart.total(), 6_490_000);
    assert_eq!(cart.checkout_step(), CheckoutStep::Details);
    assert!(cart.is_open());
}

#[test]
fn session_survives_page_hops_and_panel_toggles() {
    let catalog = Catalog::builtin();
    let mut app = AppState::new();

    app.cart_mut().add_item(catalog.get(3).cloned().unwrap());
    app.cart_mut().set_open(false);

    app.set_page(Page::Contact);
    app.set_page(Page::Home);

    app.set_search(SearchSelection {
        brand: "Porsche".to_string(),
        query: "911".to_string(),
    });

    // Nothing above disturbed the cart.
    assert_eq!(app.cart().len(), 1);
    assert_eq!(app.cart().total(), 8_590_000);
    assert!(!app.cart().is_open());
    assert_eq!(app.cart().checkout_step(), CheckoutStep::Cart);

    // The selection was recorded verbatim and the catalog stayed whole.
    assert_eq!(app.search().brand, "Porsche");
    assert_eq!(Catalog::builtin().len(), 3);
}

#[test]
fn every_builtin_listing_renders_a_price() {
    for item in Catalog::builtin().items() {
        let display = format_inr(item.price);
        assert!(display.starts_with('₹'));
        assert!(display.contains(','));
    }
    assert!(catalog::features().len() == 3);
    assert_eq!(catalog::CAR_BRANDS[0], catalog::ALL_BRANDS);
}
