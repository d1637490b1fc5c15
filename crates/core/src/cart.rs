//! The visitor's in-progress order.
//!
//! A cart is an ordered list of line items keyed by menu set ID. Adding an ID
//! that is already present bumps its quantity in place; new IDs append. A
//! quantity never drops below one: setting it to zero removes the line, and
//! never rises above [`MAX_QUANTITY`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::menu::MenuSet;
use crate::storage::{Storage, keys};
use crate::types::{MenuItemId, Price};

/// Largest quantity a single cart line may hold.
pub const MAX_QUANTITY: u32 = 99;

/// Rejected cart changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("At most {max} of one set per order (asked for {requested}).")]
    QuantityTooLarge { requested: i64, max: u32 },
}

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line (`price × quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

impl From<&MenuSet> for CartItem {
    fn from(set: &MenuSet) -> Self {
        Self {
            id: set.id,
            name: set.name.to_owned(),
            price: set.price(),
            quantity: 1,
        }
    }
}

/// Summary figures for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of quantities.
    pub item_count: u32,
    /// Sum of `price × quantity`.
    pub subtotal: Price,
    /// Always zero.
    pub service_fee: Price,
    /// Always zero; pickup is free.
    pub pickup_charge: Price,
}

impl CartTotals {
    /// Amount the customer pays.
    #[must_use]
    pub fn total_due(&self) -> Price {
        self.subtotal + self.service_fee + self.pickup_charge
    }
}

/// An ordered collection of [`CartItem`]s with unique IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from raw items, restoring the cart invariants.
    ///
    /// Zero-quantity lines are dropped, repeated IDs are merged into the
    /// first occurrence by summing quantities, and every line is capped at
    /// [`MAX_QUANTITY`].
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.items.iter_mut().find(|line| line.id == item.id) {
                Some(line) => {
                    line.quantity = line.quantity.saturating_add(item.quantity).min(MAX_QUANTITY);
                }
                None => cart.items.push(CartItem {
                    quantity: item.quantity.min(MAX_QUANTITY),
                    ..item
                }),
            }
        }
        cart
    }

    /// Load the cart from storage.
    ///
    /// A missing entry is an empty cart. Unparsable data is logged and also
    /// treated as an empty cart, so a corrupted entry never blocks ordering.
    pub fn load(storage: &impl Storage) -> Self {
        let Some(raw) = storage.get(keys::CART) else {
            return Self::new();
        };

        match serde_json::from_str::<Vec<CartItem>>(&raw) {
            Ok(items) => Self::from_items(items),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable cart");
                Self::new()
            }
        }
    }

    /// Write the full cart to storage.
    pub fn save(&self, storage: &mut impl Storage) {
        match serde_json::to_string(self) {
            Ok(json) => storage.set(keys::CART, json),
            Err(e) => tracing::error!(error = %e, "Failed to serialize cart"),
        }
    }

    /// Remove the cart entry from storage entirely.
    pub fn clear(storage: &mut impl Storage) {
        storage.remove(keys::CART);
    }

    /// Add one unit of `item`.
    ///
    /// An existing line with the same ID gains one unit and keeps its
    /// position; otherwise the item is appended with quantity 1. A line
    /// already at [`MAX_QUANTITY`] stays there.
    pub fn add_item(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1).min(MAX_QUANTITY),
            None => self.items.push(CartItem { quantity: 1, ..item }),
        }
    }

    /// Set the quantity of line `id`. Zero or negative removes the line.
    ///
    /// Unknown IDs are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityTooLarge`] above [`MAX_QUANTITY`]; the
    /// cart is left unchanged.
    pub fn update_quantity(&mut self, id: MenuItemId, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            self.remove_item(id);
            return Ok(());
        }
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|&q| q <= MAX_QUANTITY)
            .ok_or(CartError::QuantityTooLarge {
                requested: quantity,
                max: MAX_QUANTITY,
            })?;
        if let Some(line) = self.items.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;
        }
        Ok(())
    }

    /// Remove line `id` if present.
    pub fn remove_item(&mut self, id: MenuItemId) {
        self.items.retain(|line| line.id != id);
    }

    /// Quantity of line `id`, zero if absent.
    #[must_use]
    pub fn quantity_of(&self, id: MenuItemId) -> u32 {
        self.items
            .iter()
            .find(|line| line.id == id)
            .map_or(0, |line| line.quantity)
    }

    /// Compute item count and subtotal.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self
                .items
                .iter()
                .fold(0, |count: u32, line| count.saturating_add(line.quantity)),
            subtotal: self.items.iter().map(CartItem::line_total).sum(),
            service_fee: Price::ZERO,
            pickup_charge: Price::ZERO,
        }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consume the cart, returning its lines.
    #[must_use]
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<CartItem>::deserialize(deserializer).map(Self::from_items)
    }
}
