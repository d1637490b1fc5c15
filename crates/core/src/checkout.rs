//! Checkout confirmation.
//!
//! A checkout starts out *collecting*: the cart and preferences are read from
//! storage and may still change. [`Checkout::confirm`] either rejects the
//! attempt (*invalid*, nothing is written) or produces a receipt (*confirmed*):
//! the receipt is stored, the cart entry is removed, and the caller moves on
//! to the receipt page.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::cart::{Cart, CartTotals};
use crate::preferences::OrderPreferences;
use crate::receipt::ReceiptRecord;
use crate::storage::{Storage, keys};
use crate::types::{OrderCode, PaymentMethod};

/// Reasons a checkout attempt is rejected.
///
/// The messages are shown to the customer verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    /// The cart has no lines.
    #[error("Cart is empty. Add your sets again from the menu.")]
    EmptyCart,

    /// No valid payment method is selected.
    #[error("Select a payment method first!")]
    MissingPaymentMethod,

    /// FPX is selected but no known bank is.
    #[error("Please choose a bank for FPX payment.")]
    MissingBankSelection,

    /// The receipt could not be written; the cart is kept.
    #[error("Your receipt could not be saved. Please try again.")]
    ReceiptNotStored,
}

impl CheckoutError {
    /// Path the customer is sent to after this error.
    #[must_use]
    pub const fn redirect_to(self) -> &'static str {
        match self {
            Self::EmptyCart => "/menu",
            Self::MissingPaymentMethod | Self::MissingBankSelection | Self::ReceiptNotStored => {
                "/checkout"
            }
        }
    }
}

/// A checkout in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub cart: Cart,
    pub preferences: OrderPreferences,
}

impl Checkout {
    /// Read the cart and preferences from storage.
    pub fn load(storage: &impl Storage) -> Self {
        Self {
            cart: Cart::load(storage),
            preferences: OrderPreferences::load(storage),
        }
    }

    /// Cart totals for display.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Check the guards without changing anything.
    ///
    /// # Errors
    ///
    /// Returns the first failing guard, in order: empty cart, missing payment
    /// method, missing FPX bank.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let method = self
            .preferences
            .payment_method
            .ok_or(CheckoutError::MissingPaymentMethod)?;
        if method == PaymentMethod::Fpx && self.preferences.bank().is_none() {
            return Err(CheckoutError::MissingBankSelection);
        }
        Ok(())
    }

    /// Confirm the order.
    ///
    /// On success the receipt is written to storage and the cart is cleared.
    /// On failure storage is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] if any guard fails, or
    /// [`CheckoutError::ReceiptNotStored`] if the receipt cannot be
    /// serialized.
    pub fn confirm<R: Rng>(
        self,
        storage: &mut impl Storage,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<ReceiptRecord, CheckoutError> {
        self.validate()?;

        let total = self.totals().total_due();
        let receipt = ReceiptRecord {
            code: OrderCode::generate(rng),
            created_at: now,
            order_type: self.preferences.order_type,
            payment: self.preferences.payment_summary(),
            items: self.cart.into_items(),
            total,
        };

        store_receipt(storage, receipt.to_json()).inspect_err(|_| {
            tracing::error!(code = %receipt.code, "Receipt not stored, keeping cart");
        })?;

        tracing::info!(
            code = %receipt.code,
            items = receipt.item_count(),
            total = %receipt.total,
            "Order confirmed"
        );
        Ok(receipt)
    }
}

/// Write the serialized receipt and drop the cart, or change nothing.
fn store_receipt(
    storage: &mut impl Storage,
    json: serde_json::Result<String>,
) -> Result<(), CheckoutError> {
    let json = json.map_err(|e| {
        tracing::error!(error = %e, "Failed to serialize receipt");
        CheckoutError::ReceiptNotStored
    })?;
    storage.set(keys::RECEIPT, json);
    Cart::clear(storage);
    Ok(())
}
