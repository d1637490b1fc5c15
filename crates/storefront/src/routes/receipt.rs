//! Receipt page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use bebek_core::{Cart, ReceiptRecord};
use chrono::FixedOffset;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::cart::CartItemView;
use crate::state::AppState;
use crate::storage::BrowserStorage;

/// Receipt page template.
#[derive(Template, WebTemplate)]
#[template(path = "receipt.html")]
pub struct ReceiptTemplate {
    pub code: String,
    pub issued_at: String,
    pub order_type: &'static str,
    pub payment: String,
    pub items: Vec<CartItemView>,
    pub total: String,
    pub cart_count: u32,
    pub flash: Option<String>,
}

impl ReceiptTemplate {
    fn new(receipt: &ReceiptRecord, offset: FixedOffset, cart_count: u32) -> Self {
        Self {
            code: receipt.code.to_string(),
            issued_at: receipt.issued_at(offset),
            order_type: receipt.order_type.label(),
            payment: receipt.payment.clone(),
            items: receipt.items.iter().map(CartItemView::from).collect(),
            total: receipt.total.to_string(),
            cart_count,
            flash: None,
        }
    }
}

/// Display the latest receipt, or send the visitor back to the menu.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Response> {
    let storage = BrowserStorage::load(&session).await?;

    let receipt = match ReceiptRecord::load(&storage) {
        Ok(receipt) => receipt,
        Err(e) => {
            tracing::debug!(reason = %e, "No receipt to show");
            return Ok(Redirect::to("/menu").into_response());
        }
    };

    let cart_count = Cart::load(&storage).totals().item_count;
    Ok(ReceiptTemplate::new(&receipt, state.display_offset(), cart_count).into_response())
}
