//! CLI command implementations.
//!
//! Commands run against any [`bebek_core::Storage`] and return the text to
//! print, so they are tested against an in-memory store.

pub mod cart;
pub mod checkout;
pub mod menu;
pub mod receipt;

use bebek_core::{CartError, CheckoutError, ReceiptError};
use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The ID is not on the menu.
    #[error("Unknown menu item: {0}. Run `bebek-cli menu` to list sets.")]
    UnknownItem(i32),

    /// The bank is not an FPX bank.
    #[error("Unknown bank: {0}")]
    UnknownBank(String),

    /// Delivery was requested.
    #[error("Delivery is coming soon. Orders are pickup only for now.")]
    DeliveryUnavailable,

    /// The cart change was refused.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// A checkout guard failed.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// No receipt to show.
    #[error("No receipt to show: {0}")]
    Receipt(#[from] ReceiptError),
}
