//! Tests for the user store.

#[cfg(test)]
mod store_tests {
    use std::sync::Arc;

    use crate::store::{Error, User, UserStore};

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = UserStore::new();

        let id = store.create(User::new("Alice")).await;
        assert_eq!(id, 1);

        let user = store.get(id).await.unwrap();
        assert_eq!(user.name, "Alice");
    }

    #[tokio::test]
    async fn test_identifiers_are_sequential() {
        let store = UserStore::new();

        let alice = store.create(User::new("Alice")).await;
        let bob = store.create(User::new("Bob")).await;
        assert_eq!(alice, 1);
        assert_eq!(bob, 2);

        assert_eq!(store.get(bob).await.unwrap().name, "Bob");
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = UserStore::new();

        let id = store.create(User::new("Alice")).await;
        store.delete(id).await.unwrap();

        assert!(matches!(store.get(id).await, Err(Error::NotFound(i)) if i == id));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_missing_id() {
        let store = UserStore::new();
        assert!(matches!(store.get(999).await, Err(Error::NotFound(999))));
    }

    #[tokio::test]
    async fn test_delete_missing_id_leaves_store_unchanged() {
        let store = UserStore::new();

        assert!(matches!(store.delete(999).await, Err(Error::NotFound(999))));
        assert_eq!(store.len().await, 0);

        // Same for an id that existed once: a second delete is a no-op
        let id = store.create(User::new("Alice")).await;
        let keep = store.create(User::new("Bob")).await;
        store.delete(id).await.unwrap();
        assert!(matches!(store.delete(id).await, Err(Error::NotFound(_))));
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get(keep).await.unwrap().name, "Bob");
    }

    #[tokio::test]
    async fn test_identifiers_are_not_reused_after_delete() {
        let store = UserStore::new();

        let alice = store.create(User::new("Alice")).await;
        assert_eq!(alice, 1);
        store.delete(alice).await.unwrap();

        // The counter keeps climbing even though the store emptied out, so
        // a new record can never shadow a previously issued identifier
        let carol = store.create(User::new("Carol")).await;
        assert_eq!(carol, 2);
        assert_eq!(store.get(carol).await.unwrap().name, "Carol");
        assert!(matches!(store.get(alice).await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_concurrent_creates_commit_distinct_ids() {
        let store = Arc::new(UserStore::new());
        let count: u64 = 32;

        let mut handles = Vec::new();
        for i in 0..count {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create(User::new(format!("user-{i}"))).await
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        // No create was lost and no identifier was handed out twice
        assert_eq!(store.len().await, count as usize);
        ids.sort_unstable();
        assert_eq!(ids, (1..=count).collect::<Vec<u64>>());

        // Every committed record stays retrievable until deleted
        for id in ids {
            assert!(store.get(id).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_concurrent_reads_and_writes_interleave_safely() {
        let store = Arc::new(UserStore::new());
        for i in 0..8u64 {
            store.create(User::new(format!("seed-{i}"))).await;
        }

        let mut handles = Vec::new();
        for i in 1..=8u64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                // Readers race against the writers below; both must observe
                // either the record or a clean NotFound, never torn state
                match store.get(i).await {
                    Ok(user) => assert!(user.name.starts_with("seed-")),
                    Err(Error::NotFound(id)) => assert_eq!(id, i),
                }
            }));
        }
        for i in 1..=4u64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let _ = store.delete(i).await;
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 4);
    }
}
