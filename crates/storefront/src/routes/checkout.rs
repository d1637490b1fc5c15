//! Checkout route handlers.
//!
//! The checkout page is one form. "Save selection" persists the order type,
//! payment method and bank; "Pay Now" persists them too and then confirms the
//! order. Guard failures come back as a flash message on the page the
//! customer is redirected to.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::IntoResponse, response::Redirect};
use bebek_core::preferences::find_bank;
use bebek_core::{
    Checkout, CheckoutError, FPX_BANKS, OrderPreferences, OrderType, PaymentMethod, Storage,
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::routes::cart::CartView;
use crate::storage::{BrowserStorage, set_flash, take_flash};

/// Shown when delivery is submitted while it is unavailable.
pub const DELIVERY_UNAVAILABLE: &str = "Delivery is coming soon. Your order stays on pickup.";

/// Payment option display data for templates.
#[derive(Clone)]
pub struct PaymentOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub selected: bool,
}

/// FPX bank display data for templates.
#[derive(Clone)]
pub struct BankView {
    pub name: &'static str,
    pub short: &'static str,
    pub accent: &'static str,
    pub selected: bool,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
    pub cart_count: u32,
    pub pickup_selected: bool,
    pub payment_options: Vec<PaymentOptionView>,
    pub show_banks: bool,
    pub banks: Vec<BankView>,
    pub flash: Option<String>,
}

impl CheckoutTemplate {
    fn new(checkout: &Checkout, flash: Option<String>) -> Self {
        let preferences = &checkout.preferences;
        let cart = CartView::from(&checkout.cart);

        Self {
            cart_count: cart.item_count,
            cart,
            pickup_selected: preferences.order_type == OrderType::Pickup,
            payment_options: PaymentMethod::ALL
                .iter()
                .map(|&method| PaymentOptionView {
                    value: method.as_str(),
                    label: method.label(),
                    description: method.description(),
                    selected: preferences.payment_method == Some(method),
                })
                .collect(),
            show_banks: preferences
                .payment_method
                .is_some_and(PaymentMethod::requires_bank),
            banks: FPX_BANKS
                .iter()
                .map(|bank| BankView {
                    name: bank.name,
                    short: bank.short,
                    accent: bank.accent,
                    selected: preferences.selected_bank.as_deref() == Some(bank.name),
                })
                .collect(),
            flash,
        }
    }
}

/// Checkout form data.
///
/// Fields left out of the submission keep their stored value. An empty
/// payment method or bank clears the selection.
#[derive(Debug, Default, Deserialize)]
pub struct PreferencesForm {
    pub order_type: Option<String>,
    pub payment_method: Option<String>,
    pub bank: Option<String>,
}

/// Outcome of applying a preferences submission.
#[derive(Debug, PartialEq, Eq)]
enum Applied {
    Saved,
    DeliveryRefused,
}

/// Validate the submission and persist the resulting preferences.
fn apply_preferences(storage: &mut impl Storage, form: &PreferencesForm) -> Result<Applied> {
    let mut preferences = OrderPreferences::load(&*storage);
    let mut applied = Applied::Saved;

    if let Some(raw) = form.order_type.as_deref() {
        let order_type: OrderType = raw
            .parse()
            .map_err(|e| AppError::BadRequest(format!("{e}")))?;
        if order_type.is_available() {
            preferences.order_type = order_type;
        } else {
            applied = Applied::DeliveryRefused;
        }
    }

    if let Some(raw) = form.payment_method.as_deref() {
        preferences.payment_method = if raw.is_empty() {
            None
        } else {
            Some(
                raw.parse()
                    .map_err(|e| AppError::BadRequest(format!("{e}")))?,
            )
        };
    }

    if let Some(raw) = form.bank.as_deref() {
        preferences.selected_bank = if raw.is_empty() {
            None
        } else {
            let bank = find_bank(raw)
                .ok_or_else(|| AppError::BadRequest(format!("unknown bank: {raw}")))?;
            Some(bank.name.to_owned())
        };
    }

    preferences.save(storage);
    Ok(applied)
}

/// Display the checkout page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<impl IntoResponse> {
    let storage = BrowserStorage::load(&session).await?;
    let checkout = Checkout::load(&storage);
    let flash = take_flash(&session).await;

    Ok(CheckoutTemplate::new(&checkout, flash))
}

/// Save the order type, payment method and bank.
#[instrument(skip(session))]
pub async fn preferences(
    session: Session,
    Form(form): Form<PreferencesForm>,
) -> Result<Redirect> {
    let mut storage = BrowserStorage::load(&session).await?;
    let applied = apply_preferences(&mut storage, &form)?;
    storage.commit(&session).await?;

    if applied == Applied::DeliveryRefused {
        set_flash(&session, DELIVERY_UNAVAILABLE).await?;
    }

    Ok(Redirect::to("/checkout"))
}

/// Save the selections and confirm the order.
#[instrument(skip(session))]
pub async fn pay(session: Session, Form(form): Form<PreferencesForm>) -> Result<Redirect> {
    let mut storage = BrowserStorage::load(&session).await?;

    if apply_preferences(&mut storage, &form)? == Applied::DeliveryRefused {
        storage.commit(&session).await?;
        set_flash(&session, DELIVERY_UNAVAILABLE).await?;
        return Ok(Redirect::to("/checkout"));
    }

    let checkout = Checkout::load(&storage);
    let outcome = {
        let mut rng = rand::rng();
        checkout.confirm(&mut storage, &mut rng, Utc::now())
    };
    storage.commit(&session).await?;

    match outcome {
        Ok(receipt) => {
            let code = receipt.code.to_string();
            add_breadcrumb("checkout", "Order confirmed", Some(&[("code", code.as_str())][..]));
            Ok(Redirect::to("/receipt"))
        }
        Err(CheckoutError::ReceiptNotStored) => Err(AppError::Internal(
            CheckoutError::ReceiptNotStored.to_string(),
        )),
        Err(err) => {
            tracing::info!(reason = %err, "Checkout rejected");
            set_flash(&session, err.to_string()).await?;
            Ok(Redirect::to(err.redirect_to()))
        }
    }
}
