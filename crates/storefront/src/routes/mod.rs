//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! GET  /menu                   - Menu with cart panel
//!
//! # Cart (form posts, redirect to /menu)
//! POST /cart/add               - Add one of a set
//! POST /cart/update            - Set a line's quantity (0 removes)
//! POST /cart/remove            - Remove a line
//! POST /cart/proceed           - Continue to checkout
//!
//! # Checkout
//! GET  /checkout               - Checkout page
//! POST /checkout/preferences   - Save order type, payment method and bank
//! POST /checkout/pay           - Save selections and confirm the order
//!
//! # Receipt
//! GET  /receipt                - Latest receipt (redirects to /menu if none)
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod menu;
pub mod receipt;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/proceed", post(cart::proceed))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/menu", get(menu::show))
        .nest("/cart", cart_routes())
        .route("/checkout", get(checkout::show))
        .route("/checkout/preferences", post(checkout::preferences))
        .route("/checkout/pay", post(checkout::pay))
        .route("/receipt", get(receipt::show))
}
