//! Cart route handlers.
//!
//! The cart panel lives on the menu page; every mutation is a plain form post
//! that updates the visitor's stored cart and redirects back to `/menu`.

use axum::{Form, response::Redirect};
use bebek_core::{Cart, CartItem, CartTotals, CheckoutError, MAX_QUANTITY, MenuItemId, menu};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::storage::{BrowserStorage, set_flash};

/// Shown when "continue to checkout" is pressed without the acknowledgement.
pub const ACKNOWLEDGE_FIRST: &str = "Tick the box to confirm you're ready to proceed.";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
    /// Quantity submitted by the "+" control.
    pub increment: i64,
    /// The line is at [`MAX_QUANTITY`]; "+" is disabled.
    pub at_max: bool,
    /// Quantity submitted by the "-" control; zero removes the line.
    pub decrement: i64,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.as_i32(),
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price.to_string(),
            line_total: item.line_total().to_string(),
            increment: i64::from(item.quantity) + 1,
            at_max: item.quantity >= MAX_QUANTITY,
            decrement: i64::from(item.quantity) - 1,
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub subtotal: String,
    pub service_fee: String,
    pub total_due: String,
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let totals = cart.totals();
        let CartTotals {
            item_count,
            subtotal,
            service_fee,
            ..
        } = totals;

        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            item_count,
            subtotal: subtotal.to_string(),
            service_fee: service_fee.to_string(),
            total_due: totals.total_due().to_string(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub id: i32,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: i32,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: i32,
}

/// Continue to checkout form data.
///
/// Unticked checkboxes are not submitted at all.
#[derive(Debug, Deserialize)]
pub struct ProceedForm {
    pub acknowledged: Option<String>,
}

/// Add one of a set to the cart.
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Result<Redirect> {
    let set = menu::find(MenuItemId::new(form.id))
        .ok_or_else(|| AppError::BadRequest(format!("unknown menu item {}", form.id)))?;

    let mut storage = BrowserStorage::load(&session).await?;
    let mut cart = Cart::load(&storage);
    cart.add_item(CartItem::from(set));
    cart.save(&mut storage);
    storage.commit(&session).await?;

    add_breadcrumb("cart", "Added set", Some(&[("name", set.name)][..]));
    tracing::debug!(id = form.id, quantity = cart.quantity_of(set.id), "Set added to cart");

    Ok(Redirect::to("/menu"))
}

/// Set the quantity of a cart line; zero or below removes it.
///
/// Quantities above [`MAX_QUANTITY`] are rejected with 400.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    let mut storage = BrowserStorage::load(&session).await?;
    let mut cart = Cart::load(&storage);
    cart.update_quantity(MenuItemId::new(form.id), form.quantity)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    cart.save(&mut storage);
    storage.commit(&session).await?;

    Ok(Redirect::to("/menu"))
}

/// Remove a cart line.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    let mut storage = BrowserStorage::load(&session).await?;
    let mut cart = Cart::load(&storage);
    cart.remove_item(MenuItemId::new(form.id));
    cart.save(&mut storage);
    storage.commit(&session).await?;

    Ok(Redirect::to("/menu"))
}

/// Move on to checkout once the cart has items and the customer confirmed.
#[instrument(skip(session))]
pub async fn proceed(session: Session, Form(form): Form<ProceedForm>) -> Result<Redirect> {
    let storage = BrowserStorage::load(&session).await?;

    if Cart::load(&storage).is_empty() {
        set_flash(&session, CheckoutError::EmptyCart.to_string()).await?;
        return Ok(Redirect::to("/menu"));
    }
    if form.acknowledged.is_none() {
        set_flash(&session, ACKNOWLEDGE_FIRST).await?;
        return Ok(Redirect::to("/menu"));
    }

    Ok(Redirect::to("/checkout"))
}
