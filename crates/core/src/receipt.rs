//! Receipt records produced by a confirmed checkout.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::storage::{Storage, keys};
use crate::types::{OrderCode, OrderType, Price};

/// Errors that can occur when reading the stored receipt.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    /// No receipt has been stored yet.
    #[error("no receipt stored")]
    Missing,

    /// The stored receipt could not be parsed.
    #[error("malformed receipt data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Immutable snapshot of a confirmed order, shown at pickup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRecord {
    pub code: OrderCode,
    pub created_at: DateTime<Utc>,
    pub order_type: OrderType,
    /// Human-readable payment summary, e.g. `FPX (Maybank2u)`.
    pub payment: String,
    pub items: Vec<CartItem>,
    pub total: Price,
}

impl ReceiptRecord {
    /// Load the most recent receipt.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Missing`] if nothing is stored and
    /// [`ReceiptError::Malformed`] if the stored JSON does not describe a
    /// valid receipt (including an invalid order code).
    pub fn load(storage: &impl Storage) -> Result<Self, ReceiptError> {
        let raw = storage.get(keys::RECEIPT).ok_or(ReceiptError::Missing)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The record as stored under [`keys::RECEIPT`].
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Store this receipt, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized; storage is then
    /// unchanged.
    pub fn save(&self, storage: &mut impl Storage) -> serde_json::Result<()> {
        storage.set(keys::RECEIPT, self.to_json()?);
        Ok(())
    }

    /// Issue time formatted for display, e.g. `19 Oct 2026, 3:04 pm`.
    #[must_use]
    pub fn issued_at(&self, offset: FixedOffset) -> String {
        self.created_at
            .with_timezone(&offset)
            .format("%-d %b %Y, %-I:%M %P")
            .to_string()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count: u32, item| count.saturating_add(item.quantity))
    }
}
