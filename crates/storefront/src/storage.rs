//! Session-backed key/value storage.
//!
//! Each request loads the visitor's store from the session, runs the
//! synchronous order lifecycle against it, and commits it back before the
//! response is sent. Untouched stores are not written.

use bebek_core::{MemoryStorage, Storage};
use tower_sessions::Session;

use crate::models::session_keys;

/// The visitor's browser-style storage, held in their session.
#[derive(Debug, Default)]
pub struct BrowserStorage {
    entries: MemoryStorage,
    dirty: bool,
}

impl BrowserStorage {
    /// Load the store from the session, empty if the session has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the session backend fails or the stored map
    /// cannot be decoded.
    pub async fn load(session: &Session) -> Result<Self, tower_sessions::session::Error> {
        let entries = session
            .get::<MemoryStorage>(session_keys::BROWSER_STORAGE)
            .await?
            .unwrap_or_default();

        Ok(Self {
            entries,
            dirty: false,
        })
    }

    /// Write the store back to the session if anything changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the session backend fails.
    pub async fn commit(self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        if !self.dirty {
            return Ok(());
        }
        session
            .insert(session_keys::BROWSER_STORAGE, &self.entries)
            .await
    }

    /// Whether any write happened since loading.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.set(key, value);
        self.dirty = true;
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.dirty = true;
    }
}

/// Queue a message for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session backend fails.
pub async fn set_flash(
    session: &Session,
    message: impl Into<String>,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::FLASH, message.into()).await
}

/// Take the pending flash message, if any.
pub async fn take_flash(session: &Session) -> Option<String> {
    match session.remove::<String>(session_keys::FLASH).await {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("Failed to read flash message: {e}");
            None
        }
    }
}
