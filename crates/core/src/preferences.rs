//! Checkout selections: order type, payment method and FPX bank.
//!
//! Each selection is persisted as a plain string under its own key as soon as
//! it changes, so a visitor who leaves the checkout page finds their choices
//! intact when they return.

use crate::storage::{Storage, keys};
use crate::types::{OrderType, PaymentMethod};

/// A bank available through FPX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bank {
    /// Full name, also the stored value.
    pub name: &'static str,
    /// Short label.
    pub short: &'static str,
    /// Brand colour as a CSS hex string.
    pub accent: &'static str,
}

/// Banks offered for FPX payment, in display order.
pub const FPX_BANKS: &[Bank] = &[
    Bank {
        name: "Maybank2u",
        short: "Maybank",
        accent: "#f5c844",
    },
    Bank {
        name: "CIMB Clicks",
        short: "CIMB",
        accent: "#d62828",
    },
    Bank {
        name: "RHB Now",
        short: "RHB",
        accent: "#3a86ff",
    },
    Bank {
        name: "Hong Leong Connect",
        short: "Hong Leong",
        accent: "#1d3557",
    },
    Bank {
        name: "Public Bank",
        short: "Public Bank",
        accent: "#ff6f61",
    },
    Bank {
        name: "Bank Islam",
        short: "Bank Islam",
        accent: "#8d5a97",
    },
];

/// Look up an FPX bank by its full name.
#[must_use]
pub fn find_bank(name: &str) -> Option<&'static Bank> {
    FPX_BANKS.iter().find(|bank| bank.name == name)
}

/// The visitor's current checkout selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPreferences {
    pub order_type: OrderType,
    /// `None` when nothing valid is selected.
    pub payment_method: Option<PaymentMethod>,
    /// Stored bank name, not necessarily a known bank.
    pub selected_bank: Option<String>,
}

impl Default for OrderPreferences {
    fn default() -> Self {
        Self {
            order_type: OrderType::Pickup,
            payment_method: Some(PaymentMethod::Cash),
            selected_bank: None,
        }
    }
}

impl OrderPreferences {
    /// Load selections from storage.
    ///
    /// Missing keys fall back to the defaults (pickup, cash, no bank). An
    /// unrecognised order type also falls back to pickup. A payment method
    /// that is present but empty or unrecognised counts as not selected.
    pub fn load(storage: &impl Storage) -> Self {
        let order_type = storage
            .get(keys::ORDER_TYPE)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();

        let payment_method = match storage.get(keys::PAYMENT_METHOD) {
            None => Some(PaymentMethod::default()),
            Some(raw) => raw.parse().ok(),
        };

        let selected_bank = storage
            .get(keys::PAYMENT_BANK)
            .filter(|bank| !bank.is_empty());

        Self {
            order_type,
            payment_method,
            selected_bank,
        }
    }

    /// Persist every selection under its key.
    pub fn save(&self, storage: &mut impl Storage) {
        storage.set(keys::ORDER_TYPE, self.order_type.as_str().to_owned());
        storage.set(
            keys::PAYMENT_METHOD,
            self.payment_method
                .map(|method| method.as_str().to_owned())
                .unwrap_or_default(),
        );
        storage.set(
            keys::PAYMENT_BANK,
            self.selected_bank.clone().unwrap_or_default(),
        );
    }

    /// The selected bank if it is a known FPX bank.
    #[must_use]
    pub fn bank(&self) -> Option<&'static Bank> {
        self.selected_bank.as_deref().and_then(find_bank)
    }

    /// Human-readable payment summary printed on the receipt.
    #[must_use]
    pub fn payment_summary(&self) -> String {
        match self.payment_method {
            Some(PaymentMethod::Fpx) => format!(
                "FPX ({})",
                self.selected_bank.as_deref().unwrap_or("Select bank")
            ),
            Some(PaymentMethod::Cash) | None => "Cash at outlet".to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_defaults_when_nothing_stored() {
        let prefs = OrderPreferences::load(&MemoryStorage::new());
        assert_eq!(prefs, OrderPreferences::default());
        assert_eq!(prefs.payment_method, Some(PaymentMethod::Cash));
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = MemoryStorage::new();
        let prefs = OrderPreferences {
            order_type: OrderType::Pickup,
            payment_method: Some(PaymentMethod::Fpx),
            selected_bank: Some("RHB Now".to_string()),
        };
        prefs.save(&mut storage);

        assert_eq!(storage.get(keys::PAYMENT_METHOD).as_deref(), Some("fpx"));
        assert_eq!(storage.get(keys::PAYMENT_BANK).as_deref(), Some("RHB Now"));
        assert_eq!(OrderPreferences::load(&storage), prefs);
    }

    #[test]
    fn test_empty_or_unknown_payment_method_is_unselected() {
        let mut storage = MemoryStorage::new();
        storage.set(keys::PAYMENT_METHOD, String::new());
        assert_eq!(OrderPreferences::load(&storage).payment_method, None);

        storage.set(keys::PAYMENT_METHOD, "cheque".to_string());
        assert_eq!(OrderPreferences::load(&storage).payment_method, None);
    }

    #[test]
    fn test_unknown_order_type_falls_back_to_pickup() {
        let mut storage = MemoryStorage::new();
        storage.set(keys::ORDER_TYPE, "drone".to_string());
        assert_eq!(OrderPreferences::load(&storage).order_type, OrderType::Pickup);

        storage.set(keys::ORDER_TYPE, "delivery".to_string());
        assert_eq!(OrderPreferences::load(&storage).order_type, OrderType::Delivery);
    }

    #[test]
    fn test_bank_lookup_only_accepts_known_banks() {
        let mut prefs = OrderPreferences {
            payment_method: Some(PaymentMethod::Fpx),
            selected_bank: Some("Maybank2u".to_string()),
            ..OrderPreferences::default()
        };
        assert_eq!(prefs.bank().unwrap().short, "Maybank");

        prefs.selected_bank = Some("Bank of Nowhere".to_string());
        assert!(prefs.bank().is_none());
    }

    #[test]
    fn test_payment_summary() {
        let mut prefs = OrderPreferences::default();
        assert_eq!(prefs.payment_summary(), "Cash at outlet");

        prefs.payment_method = Some(PaymentMethod::Fpx);
        assert_eq!(prefs.payment_summary(), "FPX (Select bank)");

        prefs.selected_bank = Some("CIMB Clicks".to_string());
        assert_eq!(prefs.payment_summary(), "FPX (CIMB Clicks)");
    }
}
