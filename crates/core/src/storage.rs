//! Key/value persistence used by the order lifecycle.
//!
//! The cart, checkout preferences and receipt all live in a flat string map,
//! one entry per key in [`keys`]. Callers inject a [`Storage`] rather than
//! reaching for global state, so the same lifecycle runs against a session,
//! a JSON file, or an in-memory map in tests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Storage keys used by the order lifecycle.
pub mod keys {
    /// JSON array of cart items.
    pub const CART: &str = "bebek-cart";

    /// Plain string order type (`pickup` / `delivery`).
    pub const ORDER_TYPE: &str = "bebek-order-type";

    /// Plain string payment method (`cash` / `fpx`).
    pub const PAYMENT_METHOD: &str = "bebek-payment-method";

    /// Plain string FPX bank name.
    pub const PAYMENT_BANK: &str = "bebek-payment-bank";

    /// JSON receipt record from the most recent checkout.
    pub const RECEIPT: &str = "bebek-receipt";
}

/// A string-keyed, string-valued store.
///
/// Operations are infallible: implementations that talk to something fallible
/// (a session backend, a file) load a snapshot up front and write it back once
/// the domain operation is done.
pub trait Storage {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Delete `key` if present.
    fn remove(&mut self, key: &str);
}

/// In-memory [`Storage`] backed by an ordered map.
///
/// Serializes as a flat JSON object so it can be embedded in a session or
/// written to disk as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over stored entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryStorage::new();
        assert!(store.get(keys::CART).is_none());

        store.set(keys::CART, "[]".to_string());
        assert_eq!(store.get(keys::CART).as_deref(), Some("[]"));

        store.set(keys::CART, "[1]".to_string());
        assert_eq!(store.get(keys::CART).as_deref(), Some("[1]"));
        assert_eq!(store.len(), 1);

        store.remove(keys::CART);
        assert!(store.is_empty());
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut store = MemoryStorage::new();
        store.set(keys::PAYMENT_METHOD, "fpx".to_string());
        store.set(keys::ORDER_TYPE, "pickup".to_string());

        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(
            json,
            r#"{"bebek-order-type":"pickup","bebek-payment-method":"fpx"}"#
        );

        let back: MemoryStorage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }
}
