//! In-process session store with expiry purging and a size cap.
//!
//! Records live in a map keyed by session ID. Expired records are dropped by
//! [`SessionRecords::delete_expired`], which a background task runs every
//! [`PURGE_INTERVAL`]. When the map is full, creating a session first purges
//! expired records and then evicts the record closest to expiry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tower_sessions::ExpiredDeletion;
use tower_sessions::cookie::time::OffsetDateTime;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, SessionStore};

/// How often the background task drops expired sessions.
pub const PURGE_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Session store held in process memory.
#[derive(Clone, Debug)]
pub struct SessionRecords {
    records: Arc<Mutex<HashMap<Id, Record>>>,
    capacity: usize,
}

impl SessionRecords {
    /// Create a store holding at most `capacity` sessions (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Arc::default(),
            capacity: capacity.max(1),
        }
    }

    /// Number of stored records, expired ones included.
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }

    /// Spawn the periodic purge of expired sessions.
    pub fn spawn_purge_task(&self, period: Duration) {
        let store = self.clone();
        tracing::info!(period_secs = period.as_secs(), "Spawning session purge task");
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // First tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if let Err(e) = store.delete_expired().await {
                    tracing::error!(error = %e, "Session purge failed");
                }
            }
        });
    }
}

fn is_active(record: &Record, now: OffsetDateTime) -> bool {
    record.expiry_date > now
}

/// Drop expired records, then the soonest-expiring ones until there is room.
fn make_room(records: &mut HashMap<Id, Record>, capacity: usize) {
    if records.len() < capacity {
        return;
    }
    let now = OffsetDateTime::now_utc();
    records.retain(|_, record| is_active(record, now));

    while records.len() >= capacity {
        let Some(oldest) = records
            .values()
            .min_by_key(|record| record.expiry_date)
            .map(|record| record.id)
        else {
            break;
        };
        records.remove(&oldest);
        tracing::debug!("Session store full, evicted the session closest to expiry");
    }
}

#[async_trait]
impl SessionStore for SessionRecords {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        let mut records = self.records.lock().await;
        while records.contains_key(&record.id) {
            record.id = Id::default();
        }
        make_room(&mut records, self.capacity);
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        let mut records = self.records.lock().await;
        if !records.contains_key(&record.id) {
            make_room(&mut records, self.capacity);
        }
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let now = OffsetDateTime::now_utc();
        Ok(self
            .records
            .lock()
            .await
            .get(session_id)
            .filter(|record| is_active(record, now))
            .cloned())
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.records.lock().await.remove(session_id);
        Ok(())
    }
}

#[async_trait]
impl ExpiredDeletion for SessionRecords {
    async fn delete_expired(&self) -> session_store::Result<()> {
        let now = OffsetDateTime::now_utc();
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|_, record| is_active(record, now));

        let purged = before - records.len();
        if purged > 0 {
            tracing::debug!(purged, remaining = records.len(), "Purged expired sessions");
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tower_sessions::cookie::time::Duration as TimeDuration;

    use super::*;

    fn record(expires_in: TimeDuration) -> Record {
        Record {
            id: Id::default(),
            data: HashMap::default(),
            expiry_date: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn test_expired_session_is_gone_after_purge() {
        let store = SessionRecords::new(10);
        let mut expired = record(TimeDuration::minutes(-1));
        let mut active = record(TimeDuration::minutes(30));
        store.create(&mut expired).await.unwrap();
        store.create(&mut active).await.unwrap();
        assert_eq!(store.len().await, 2);
        assert_eq!(store.load(&expired.id).await.unwrap(), None);

        store.delete_expired().await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.load(&active.id).await.unwrap(), Some(active));
    }

    #[tokio::test]
    async fn test_capacity_evicts_closest_to_expiry() {
        let store = SessionRecords::new(2);
        let mut soon = record(TimeDuration::minutes(5));
        let mut later = record(TimeDuration::days(7));
        let mut newest = record(TimeDuration::days(7));
        store.create(&mut soon).await.unwrap();
        store.create(&mut later).await.unwrap();
        store.create(&mut newest).await.unwrap();

        assert_eq!(store.len().await, 2);
        assert_eq!(store.load(&soon.id).await.unwrap(), None);
        assert!(store.load(&later.id).await.unwrap().is_some());
        assert!(store.load(&newest.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_full_store_prefers_dropping_expired() {
        let store = SessionRecords::new(2);
        let mut expired = record(TimeDuration::minutes(-1));
        let mut active = record(TimeDuration::minutes(1));
        store.create(&mut expired).await.unwrap();
        store.create(&mut active).await.unwrap();

        let mut fresh = record(TimeDuration::days(7));
        store.create(&mut fresh).await.unwrap();

        assert_eq!(store.len().await, 2);
        assert!(store.load(&active.id).await.unwrap().is_some());
        assert!(store.load(&fresh.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_save_updates_and_delete_removes() {
        let store = SessionRecords::new(4);
        let mut session = record(TimeDuration::minutes(30));
        store.create(&mut session).await.unwrap();

        session
            .data
            .insert("flash".to_string(), serde_json::json!("hello"));
        store.save(&session).await.unwrap();
        assert_eq!(store.load(&session.id).await.unwrap(), Some(session.clone()));

        store.delete(&session.id).await.unwrap();
        assert!(store.is_empty().await);
    }
}
