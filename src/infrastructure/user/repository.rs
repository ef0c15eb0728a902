//! In-memory user store

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::domain::user::{User, UserId, UserRepository};

/// In-memory, append-only implementation of UserRepository
///
/// Users are kept in insertion order behind a single lock, so a store can be
/// shared through an `Arc` without further synchronization.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with users, in the given order
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    // Appends never leave the vector half-written, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Vec<User>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserRepository for UserStore {
    fn add(&self, user: User) -> usize {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        users.push(user);
        users.len()
    }

    fn list(&self) -> Vec<User> {
        self.read().clone()
    }

    fn find_by_id(&self, id: UserId) -> Option<User> {
        self.read().iter().find(|u| u.id() == id).cloned()
    }

    fn count(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{create_user, validate_user, UserStats};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_add_returns_running_count() {
        let store = UserStore::new();

        for n in 1..=5 {
            let count = store.add(create_user(n, "user", "user@x.com"));
            assert_eq!(count, n as usize);
        }

        assert_eq!(store.count(), 5);
    }

    #[test]
    fn test_add_accepts_invalid_users() {
        let store = UserStore::new();

        assert_eq!(store.add(create_user(1, "", "")), 1);
        assert_eq!(store.add(create_user(1, "", "")), 2);

        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = UserStore::new();

        store.add(create_user(3, "Cid", "cid@x.com"));
        store.add(create_user(1, "Ann", "ann@x.com"));
        store.add(create_user(2, "Bob", "bob@x.com"));

        let ids: Vec<_> = store.list().iter().map(|u| u.id()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let store = UserStore::new();
        store.add(create_user(1, "Ann", "ann@x.com"));

        let mut snapshot = store.list();
        snapshot.clear();
        snapshot.push(create_user(9, "Mallory", "m@x.com"));

        let users = store.list();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id(), 1);
    }

    #[test]
    fn test_find_by_id_on_empty_store() {
        let store = UserStore::new();

        assert!(store.find_by_id(0).is_none());
        assert!(store.find_by_id(1).is_none());
        assert!(store.find_by_id(-1).is_none());
    }

    #[test]
    fn test_find_by_id_returns_first_match() {
        let store = UserStore::new();
        let first = create_user(7, "First", "first@x.com");
        let second = create_user(7, "Second", "second@x.com");

        store.add(first.clone());
        store.add(second);

        assert_eq!(store.find_by_id(7), Some(first));
        assert!(store.find_by_id(8).is_none());
    }

    #[test]
    fn test_with_users() {
        let store = UserStore::with_users(vec![
            create_user(1, "Ann", "ann@x.com"),
            create_user(2, "Bob", "bob@x.com"),
        ]);

        assert_eq!(store.count(), 2);
        assert_eq!(store.add(create_user(3, "Cid", "cid@x.com")), 3);
        assert_eq!(store.find_by_id(2).unwrap().name(), "Bob");
    }

    #[test]
    fn test_stats() {
        let store = UserStore::new();
        store.add(create_user(1, "Ann", "ann@x.com"));
        store.add(create_user(2, " ", "blank@x.com"));
        store.add(create_user(3, "Cid", "cid.x.com"));

        assert_eq!(
            store.stats(),
            UserStats {
                total_users: 3,
                valid_users: 1,
            }
        );
    }

    #[test]
    fn test_end_to_end() {
        let store = UserStore::new();
        let user = create_user(1, "Ann", "ann@x.com");

        assert!(validate_user(Some(&user)));
        assert_eq!(store.add(user.clone()), 1);
        assert_eq!(store.find_by_id(1), Some(user.clone()));
        assert_eq!(store.list(), vec![user]);
    }

    #[test]
    fn test_shared_store_counts_every_add() {
        let store = Arc::new(UserStore::new());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..25 {
                        store.add(create_user(t * 100 + i, "user", "user@x.com"));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.count(), 100);
    }
}
