//! Server-side session store.
//!
//! Maps an opaque session id (the cookie value) to the user it authenticates.
//! Records live in memory; restarting the server logs everyone out.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionRecord {
    pub user_id: i32,
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, SessionRecord>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    /// Open a session for `user_id` and return its id.
    pub async fn create(&self, user_id: i32) -> Uuid {
        let id = Uuid::new_v4();
        // saturate instead of panicking on an out-of-range ttl
        let expires_at = Utc::now().checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        let record = SessionRecord { user_id, expires_at };
        self.inner.write().await.insert(id, record);
        debug!(user_id, "session created");
        id
    }

    /// User bound to a live session. Expired records are dropped on sight.
    pub async fn resolve(&self, id: Uuid) -> Option<i32> {
        let now = Utc::now();
        {
            let map = self.inner.read().await;
            match map.get(&id) {
                Some(rec) if !rec.is_expired(now) => return Some(rec.user_id),
                Some(_) => {}
                None => return None,
            }
        }
        self.inner.write().await.remove(&id);
        debug!("expired session dropped");
        None
    }

    /// Remove a session; returns whether it existed.
    pub async fn destroy(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    /// Drop every expired record; returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut map = self.inner.write().await;
        let before = map.len();
        map.retain(|_, rec| !rec.is_expired(now));
        before - map.len()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_resolve_destroy() {
        let store = SessionStore::new(Duration::hours(1));
        let id = store.create(7).await;
        assert_eq!(store.resolve(id).await, Some(7));

        assert!(store.destroy(id).await);
        assert_eq!(store.resolve(id).await, None);
        assert!(!store.destroy(id).await);
    }

    #[tokio::test]
    async fn unknown_id_does_not_resolve() {
        let store = SessionStore::new(Duration::hours(1));
        store.create(1).await;
        assert_eq!(store.resolve(Uuid::new_v4()).await, None);
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = SessionStore::new(Duration::hours(1));
        let a = store.create(1).await;
        let b = store.create(1).await;
        assert_ne!(a, b);
        store.destroy(a).await;
        assert_eq!(store.resolve(b).await, Some(1));
    }

    #[tokio::test]
    async fn expired_session_is_rejected_and_dropped() {
        let store = SessionStore::new(Duration::zero());
        let id = store.create(3).await;
        assert_eq!(store.resolve(id).await, None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn huge_ttl_saturates_instead_of_overflowing() {
        let store = SessionStore::new(Duration::try_hours(10_000_000_000).unwrap());
        let id = store.create(5).await;
        assert_eq!(store.resolve(id).await, Some(5));
    }

    #[tokio::test]
    async fn purge_removes_only_expired() {
        let expired = SessionStore::new(Duration::zero());
        let shared = expired.inner.clone();
        expired.create(1).await;
        expired.create(2).await;

        let live = SessionStore { inner: shared, ttl: Duration::hours(1) };
        let keep = live.create(3).await;

        assert_eq!(live.purge_expired().await, 2);
        assert_eq!(live.len().await, 1);
        assert_eq!(live.resolve(keep).await, Some(3));
    }
}
