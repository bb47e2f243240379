//! Concurrent storage of user records.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::store::error::Error;
use crate::store::user::User;

/// A concurrent, in-memory store of user records keyed by identifier.
///
/// All records live in a single map guarded by a reader/writer lock:
/// lookups take shared access, create and delete take exclusive access.
/// Each operation acquires its guard internally for the full critical
/// section and releases it on every exit path, and never suspends while
/// holding it.
///
/// Identifiers are allocated from a counter that lives under the same
/// write lock as the map, so they are strictly increasing and never reused
/// within the lifetime of the process, regardless of deletions.
pub struct UserStore {
    inner: RwLock<Inner>,
}

struct Inner {
    users: HashMap<u64, User>,
    /// Highest identifier handed out so far; 0 means none yet.
    last_id: u64,
}

impl UserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: HashMap::new(),
                last_id: 0,
            }),
        }
    }

    /// Insert a new record and return the identifier assigned to it.
    ///
    /// The store performs no validation; rejecting an empty name is the
    /// caller's responsibility and must happen before this call.
    pub async fn create(&self, user: User) -> u64 {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.users.insert(id, user);
        id
    }

    /// Look up a record by identifier.
    pub async fn get(&self, id: u64) -> Result<User, Error> {
        let inner = self.inner.read().await;
        inner.users.get(&id).cloned().ok_or(Error::NotFound(id))
    }

    /// Remove a record by identifier.
    ///
    /// Removing an absent identifier returns [`Error::NotFound`] and leaves
    /// the store untouched.
    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        let mut inner = self.inner.write().await;
        inner.users.remove(&id).map(|_| ()).ok_or(Error::NotFound(id))
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
