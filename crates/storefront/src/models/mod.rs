//! Domain models for storefront.
//!
//! The order lifecycle types live in `bebek-core`; this module only holds
//! what is specific to the HTTP session.

pub mod session;

pub use session::keys as session_keys;
