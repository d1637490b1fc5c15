//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. The session holds the
//! visitor's cart, checkout preferences and latest receipt.

use tower_sessions::{Expiry, SessionManagerLayer};

use super::session_store::SessionRecords;
use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "bebek_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer over `store`.
///
/// # Arguments
///
/// * `config` - Storefront configuration (for cookie security)
/// * `store` - Session records shared with the purge task
#[must_use]
pub fn create_session_layer(
    config: &StorefrontConfig,
    store: SessionRecords,
) -> SessionManagerLayer<SessionRecords> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
