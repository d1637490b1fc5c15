//! Core types for Bebek Top Global.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod code;
pub mod id;
pub mod price;
pub mod status;

pub use code::{OrderCode, OrderCodeError};
pub use id::*;
pub use price::Price;
pub use status::*;
