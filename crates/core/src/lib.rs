//! Bebek Top Global Core - Menu, cart and order lifecycle.
//!
//! This crate provides the domain shared by the storefront and the CLI:
//! - `storefront` - Server-rendered ordering site
//! - `cli` - Command-line driver for the same lifecycle
//!
//! # Architecture
//!
//! The core crate contains only types, the static catalogue and the order
//! lifecycle - no HTTP, no file access. Persistence is injected through the
//! [`storage::Storage`] trait.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, order codes and enums
//! - [`menu`] - The fixed catalogue of sets and sambals
//! - [`cart`] - Cart line items and totals
//! - [`preferences`] - Order type, payment method and FPX bank selection
//! - [`checkout`] - Guards and confirmation
//! - [`receipt`] - The stored receipt snapshot
//! - [`storage`] - Key/value persistence interface

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod menu;
pub mod preferences;
pub mod receipt;
pub mod storage;
pub mod types;

pub use cart::{Cart, CartError, CartItem, CartTotals, MAX_QUANTITY};
pub use checkout::{Checkout, CheckoutError};
pub use preferences::{Bank, FPX_BANKS, OrderPreferences};
pub use receipt::{ReceiptError, ReceiptRecord};
pub use storage::{MemoryStorage, Storage};
pub use types::*;
