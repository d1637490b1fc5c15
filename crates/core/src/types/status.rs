//! Order type and payment method enums.
//!
//! Both are persisted as plain lowercase strings (`pickup`, `fpx`, ...), not
//! JSON, so they round-trip through `Display` and `FromStr` as well as serde.

use serde::{Deserialize, Serialize};

/// How the customer collects the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Collect at the outlet counter.
    #[default]
    Pickup,
    /// Delivered to the customer. Shown on the checkout page but not yet offered.
    Delivery,
}

impl OrderType {
    /// Whether customers may currently choose this order type.
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Pickup)
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pickup => "Pickup",
            Self::Delivery => "Delivery",
        }
    }

    /// Stored string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Delivery => "delivery",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known [`OrderType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid order type: {0}")]
pub struct ParseOrderTypeError(pub String);

impl std::str::FromStr for OrderType {
    type Err = ParseOrderTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pickup" => Ok(Self::Pickup),
            "delivery" => Ok(Self::Delivery),
            _ => Err(ParseOrderTypeError(s.to_owned())),
        }
    }
}

/// How the customer intends to pay.
///
/// This is a label only; no payment is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Pay at the pickup counter.
    #[default]
    Cash,
    /// Malaysian online banking. Requires a bank selection.
    Fpx,
}

impl PaymentMethod {
    /// All payment methods in display order.
    pub const ALL: [Self; 2] = [Self::Cash, Self::Fpx];

    /// Option label shown on the checkout page.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cash => "Cash at Outlet",
            Self::Fpx => "FPX / Online Banking",
        }
    }

    /// Short description shown under the label.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Cash => "Pay at pickup counter.",
            Self::Fpx => "Pay with Malaysian banks.",
        }
    }

    /// Whether this method needs a bank to be chosen before checkout.
    #[must_use]
    pub const fn requires_bank(self) -> bool {
        matches!(self, Self::Fpx)
    }

    /// Stored string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Fpx => "fpx",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known [`PaymentMethod`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid payment method: {0}")]
pub struct ParsePaymentMethodError(pub String);

impl std::str::FromStr for PaymentMethod {
    type Err = ParsePaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "fpx" => Ok(Self::Fpx),
            _ => Err(ParsePaymentMethodError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_type_round_trips_through_str() {
        for order_type in [OrderType::Pickup, OrderType::Delivery] {
            assert_eq!(order_type.to_string().parse::<OrderType>(), Ok(order_type));
        }
        assert!("takeaway".parse::<OrderType>().is_err());
    }

    #[test]
    fn test_only_pickup_is_available() {
        assert!(OrderType::Pickup.is_available());
        assert!(!OrderType::Delivery.is_available());
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("cash".parse::<PaymentMethod>(), Ok(PaymentMethod::Cash));
        assert_eq!("fpx".parse::<PaymentMethod>(), Ok(PaymentMethod::Fpx));
        assert_eq!(
            "".parse::<PaymentMethod>(),
            Err(ParsePaymentMethodError(String::new()))
        );
        assert!("FPX".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_only_fpx_requires_bank() {
        assert!(PaymentMethod::Fpx.requires_bank());
        assert!(!PaymentMethod::Cash.requires_bank());
    }
}
