//! Order codes printed on receipts.

use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`OrderCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderCodeError {
    /// The code does not start with `BTG-`.
    #[error("order code must start with {prefix}")]
    MissingPrefix {
        /// Required prefix.
        prefix: &'static str,
    },
    /// The part after the prefix is not exactly five ASCII digits.
    #[error("order code must end with five digits")]
    InvalidDigits,
}

/// A pickup order code such as `BTG-48213`.
///
/// ## Constraints
///
/// - Prefix `BTG-`
/// - Followed by exactly five digits
///
/// Any five digits parse, leading zeros included. Generated codes are drawn
/// from [`OrderCode::MIN`]..=[`OrderCode::MAX`], so they never start with 0.
///
/// ## Examples
///
/// ```
/// use bebek_core::OrderCode;
///
/// assert!(OrderCode::parse("BTG-48213").is_ok());
/// assert_eq!(OrderCode::parse("BTG-01234").unwrap().to_string(), "BTG-01234");
/// assert!(OrderCode::parse("BTG-0123").is_err());
/// assert!(OrderCode::parse("XYZ-12345").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderCode(u32);

impl OrderCode {
    /// Prefix shared by every code.
    pub const PREFIX: &'static str = "BTG-";
    /// Smallest generated number.
    pub const MIN: u32 = 10_000;
    /// Largest generated number.
    pub const MAX: u32 = 99_999;

    /// Draw a fresh code uniformly from the allowed range.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self(rng.random_range(Self::MIN..=Self::MAX))
    }

    /// Parse an `OrderCode` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not `BTG-` followed by exactly five
    /// ASCII digits.
    pub fn parse(s: &str) -> Result<Self, OrderCodeError> {
        let digits = s.strip_prefix(Self::PREFIX).ok_or(OrderCodeError::MissingPrefix {
            prefix: Self::PREFIX,
        })?;

        if digits.len() != 5 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OrderCodeError::InvalidDigits);
        }

        let number = digits.parse().map_err(|_| OrderCodeError::InvalidDigits)?;
        Ok(Self(number))
    }

    /// The numeric part of the code.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrderCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:05}", Self::PREFIX, self.0)
    }
}

impl TryFrom<String> for OrderCode {
    type Error = OrderCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OrderCode> for String {
    fn from(code: OrderCode) -> Self {
        code.to_string()
    }
}
