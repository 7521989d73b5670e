//! HashMap-backed in-memory store.

use std::collections::HashMap;

use legis_base::LegisResult;

use crate::bill::{Bill, BillDraft, BillId, User, UserDraft, UserId};
use crate::store::traits::BillStore;

/// An in-memory bill store backed by HashMaps.
///
/// Records are cloned on insertion, so the store owns its own copies and
/// hands out copies on reads. Lookup by identifier is O(1).
///
/// # Example
///
/// ```
/// use legis_engine::bill::BillDraft;
/// use legis_engine::store::{BillStore, MemStore};
/// use serde_json::json;
///
/// let mut store = MemStore::new();
/// let bill = store
///     .create(BillDraft::new("Act X", "X", json!({})))
///     .unwrap();
///
/// assert_eq!(store.get(bill.id()).unwrap().unwrap().title(), "Act X");
/// assert_eq!(store.len().unwrap(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemStore {
    bills: HashMap<BillId, Bill>,
    users: HashMap<UserId, User>,
}

impl MemStore {
    /// Create a new, empty in-memory store.
    pub fn new() -> Self {
        Self {
            bills: HashMap::new(),
            users: HashMap::new(),
        }
    }
}

impl BillStore for MemStore {
    fn create(&mut self, draft: BillDraft) -> LegisResult<Bill> {
        // 128-bit random ids make a collision negligible; regenerating on
        // the off chance preserves the uniqueness invariant outright.
        let mut id = BillId::generate();
        while self.bills.contains_key(&id) {
            id = BillId::generate();
        }
        let bill = Bill::new(id.clone(), draft);
        self.bills.insert(id, bill.clone());
        Ok(bill)
    }

    fn get(&self, id: &BillId) -> LegisResult<Option<Bill>> {
        Ok(self.bills.get(id).cloned())
    }

    fn list(&self) -> LegisResult<Vec<Bill>> {
        Ok(self.bills.values().cloned().collect())
    }

    fn len(&self) -> LegisResult<usize> {
        Ok(self.bills.len())
    }

    fn is_empty(&self) -> LegisResult<bool> {
        Ok(self.bills.is_empty())
    }

    fn create_user(&mut self, draft: UserDraft) -> LegisResult<User> {
        let mut id = UserId::generate();
        while self.users.contains_key(&id) {
            id = UserId::generate();
        }
        let user = User::new(id.clone(), draft);
        self.users.insert(id, user.clone());
        Ok(user)
    }

    fn get_user(&self, id: &UserId) -> LegisResult<Option<User>> {
        Ok(self.users.get(id).cloned())
    }

    fn get_user_by_username(&self, username: &str) -> LegisResult<Option<User>> {
        Ok(self
            .users
            .values()
            .find(|user| user.username() == username)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreHandle;
    use serde_json::json;

    fn draft(title: &str) -> BillDraft {
        BillDraft::new(title, title, json!({"overview": {"title": title}}))
    }

    #[test]
    fn test_store_new() {
        let store = MemStore::new();
        assert!(store.is_empty().unwrap());
        assert_eq!(store.len().unwrap(), 0);
    }

    #[test]
    fn test_store_create_and_get() {
        let mut store = MemStore::new();
        let bill = store.create(draft("Act X")).unwrap();

        let retrieved = store.get(bill.id()).unwrap();
        assert_eq!(retrieved, Some(bill));
    }

    #[test]
    fn test_store_get_nonexistent_is_absent_not_error() {
        let store = MemStore::new();
        let id = BillId::from_string("00000000-0000-0000-0000-000000000000");

        let retrieved = store.get(&id).unwrap();
        assert!(retrieved.is_none());
    }

    #[test]
    fn test_store_list() {
        let mut store = MemStore::new();
        store.create(draft("First Act")).unwrap();
        store.create(draft("Second Act")).unwrap();

        let list = store.list().unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_store_list_empty() {
        let store = MemStore::new();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_store_create_assigns_distinct_ids() {
        let mut store = MemStore::new();
        let bill1 = store.create(draft("Same Title")).unwrap();
        let bill2 = store.create(draft("Same Title")).unwrap();

        assert_ne!(bill1.id(), bill2.id());
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_store_records_are_not_mutated() {
        // Reads hand out copies; modifying a copy leaves the store intact.
        let mut store = MemStore::new();
        let bill = store.create(draft("Act X")).unwrap();

        let _copy = store.get(bill.id()).unwrap().unwrap();
        let again = store.get(bill.id()).unwrap().unwrap();
        assert_eq!(again, bill);
    }

    #[test]
    fn test_store_user_operations() {
        let mut store = MemStore::new();
        let user = store
            .create_user(UserDraft {
                username: "clerk".to_string(),
                password: "hunter2".to_string(),
            })
            .unwrap();

        assert_eq!(store.get_user(user.id()).unwrap(), Some(user.clone()));
        assert_eq!(
            store.get_user_by_username("clerk").unwrap(),
            Some(user)
        );
        assert_eq!(store.get_user_by_username("nobody").unwrap(), None);
    }

    #[test]
    fn test_store_handle_basic_operations() {
        let handle = StoreHandle::new(MemStore::new());
        let bill = handle.create(draft("Handle Act")).unwrap();

        assert_eq!(handle.len().unwrap(), 1);
        assert_eq!(handle.get(bill.id()).unwrap(), Some(bill));
    }

    #[test]
    fn test_store_handle_clone_shares_state() {
        let handle1 = StoreHandle::new(MemStore::new());
        let bill = handle1.create(draft("Shared Act")).unwrap();

        let handle2 = handle1.clone();
        assert_eq!(handle2.len().unwrap(), 1);
        assert!(handle2.get(bill.id()).unwrap().is_some());
    }
}
