//! Session-related types.
//!
//! The session stands in for the visitor's browser storage: the whole
//! key/value map lives under a single session key, next to a one-shot flash
//! message used to report rejected actions.

/// Session keys.
pub mod keys {
    /// Key for the visitor's key/value store (cart, preferences, receipt).
    pub const BROWSER_STORAGE: &str = "browser_storage";

    /// Key for a message shown once on the next rendered page.
    pub const FLASH: &str = "flash";
}
