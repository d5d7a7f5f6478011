// ── Keyed user collection ──
//
// Concurrent storage with O(1) lookups and push-based change
// notification via a `watch` snapshot channel.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::watch;

use crate::model::{User, UserId};

/// The in-memory user collection: id → record.
///
/// Every mutation rebuilds the snapshot that subscribers receive, so
/// view layers can render directly from `all()` without touching the
/// map. The directory only ever holds records with assigned ids.
pub struct UserDirectory {
    by_id: DashMap<UserId, Arc<User>>,

    /// Full snapshot, rebuilt on mutation. Enumeration order is
    /// map order and carries no meaning.
    snapshot: watch::Sender<Arc<Vec<Arc<User>>>>,

    /// When the directory was last bulk-loaded from the server.
    last_hydrated: watch::Sender<Option<DateTime<Utc>>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        let (last_hydrated, _) = watch::channel(None);

        Self {
            by_id: DashMap::new(),
            snapshot,
            last_hydrated,
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Insert or replace a record wholesale. Returns `true` if the id
    /// was new. The record's id must already be assigned; storing a
    /// draft is a caller bug.
    pub fn upsert(&self, user: User) -> bool {
        debug_assert!(user.id.is_assigned(), "draft record reached the directory");

        let is_new = self
            .by_id
            .insert(user.id.clone(), Arc::new(user))
            .is_none();
        self.rebuild_snapshot();
        is_new
    }

    /// Remove a record by id. Removing an absent id is a no-op.
    pub fn remove(&self, id: &UserId) -> Option<Arc<User>> {
        let removed = self.by_id.remove(id).map(|(_, user)| user);
        if removed.is_some() {
            self.rebuild_snapshot();
        }
        removed
    }

    /// Replace the entire collection (server hydration).
    pub fn replace_all(&self, users: Vec<User>) {
        self.by_id.clear();
        for user in users {
            self.by_id.insert(user.id.clone(), Arc::new(user));
        }
        self.rebuild_snapshot();
        let _ = self.last_hydrated.send(Some(Utc::now()));
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Look up a record by id.
    pub fn get(&self, id: &UserId) -> Option<Arc<User>> {
        self.by_id.get(id).map(|r| Arc::clone(r.value()))
    }

    /// Current snapshot of all records (cheap `Arc` clone).
    pub fn all(&self) -> Arc<Vec<Arc<User>>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<User>>>> {
        self.snapshot.subscribe()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// When the directory was last hydrated from the server, if ever.
    pub fn last_hydrated(&self) -> Option<DateTime<Utc>> {
        *self.last_hydrated.borrow()
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Collect all values into a snapshot vec and broadcast to subscribers.
    fn rebuild_snapshot(&self) {
        let values: Vec<Arc<User>> = self.by_id.iter().map(|r| Arc::clone(r.value())).collect();
        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(values));
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
