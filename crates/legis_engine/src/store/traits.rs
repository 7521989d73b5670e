//! Storage trait and the shared handle over it.
//!
//! The `BillStore` trait abstracts how bill records are held so the API
//! layer can be exercised against the in-memory implementation or a test
//! double. Absence is a normal outcome (`Ok(None)`), never an error; an
//! `Err` from a store method marks an internal fault.

use std::sync::Arc;

use parking_lot::RwLock;

use legis_base::LegisResult;

use crate::bill::{Bill, BillDraft, BillId, User, UserDraft, UserId};

/// Trait for bill storage implementations.
///
/// The store is the single source of truth while the process runs. Its
/// contents are process-local and volatile: created at startup, discarded
/// at exit. Stored records are never mutated; the only write is `create`,
/// exercised at seeding time.
pub trait BillStore: Send + Sync + 'static {
    /// Store a draft under a freshly generated identifier.
    ///
    /// The generated identifier is guaranteed unique within the store for
    /// the lifetime of the process.
    ///
    /// # Returns
    /// The stored record, including its new identifier.
    fn create(&mut self, draft: BillDraft) -> LegisResult<Bill>;

    /// Retrieve a bill by its identifier.
    ///
    /// # Returns
    /// * `Ok(Some(bill))` - If the bill exists
    /// * `Ok(None)` - If no bill with that identifier exists
    fn get(&self, id: &BillId) -> LegisResult<Option<Bill>>;

    /// List all bills in the store.
    ///
    /// Order is not semantically meaningful; it is stable only within a
    /// session, since the store is never modified after seeding.
    fn list(&self) -> LegisResult<Vec<Bill>>;

    /// Get the number of bills in the store.
    fn len(&self) -> LegisResult<usize>;

    /// Returns true if the store contains no bills.
    fn is_empty(&self) -> LegisResult<bool>;

    /// Store a user draft under a freshly generated identifier.
    /// Internal only: no HTTP surface reaches this.
    fn create_user(&mut self, draft: UserDraft) -> LegisResult<User>;

    /// Retrieve a user by identifier.
    fn get_user(&self, id: &UserId) -> LegisResult<Option<User>>;

    /// Retrieve a user by username.
    fn get_user_by_username(&self, username: &str) -> LegisResult<Option<User>>;
}

/// A thread-safe handle to a bill store.
///
/// Provides cheap cloning (via Arc) and interior mutability (via RwLock),
/// allowing the store to be shared between the seeding path and the
/// serving path. Reads interleave freely; seeding completes before the
/// retrieval surface is exposed, so no further write discipline is needed.
#[derive(Clone)]
pub struct StoreHandle(Arc<RwLock<dyn BillStore>>);

impl StoreHandle {
    /// Create a new StoreHandle wrapping the given store implementation.
    pub fn new<S: BillStore>(store: S) -> Self {
        Self(Arc::new(RwLock::new(store)))
    }

    /// Store a bill draft. See [`BillStore::create`].
    pub fn create(&self, draft: BillDraft) -> LegisResult<Bill> {
        self.0.write().create(draft)
    }

    /// Retrieve a bill by identifier. See [`BillStore::get`].
    pub fn get(&self, id: &BillId) -> LegisResult<Option<Bill>> {
        self.0.read().get(id)
    }

    /// List all bills. See [`BillStore::list`].
    pub fn list(&self) -> LegisResult<Vec<Bill>> {
        self.0.read().list()
    }

    /// Get the number of bills. See [`BillStore::len`].
    pub fn len(&self) -> LegisResult<usize> {
        self.0.read().len()
    }

    /// Check if the store is empty. See [`BillStore::is_empty`].
    pub fn is_empty(&self) -> LegisResult<bool> {
        self.0.read().is_empty()
    }

    /// Store a user draft. See [`BillStore::create_user`].
    pub fn create_user(&self, draft: UserDraft) -> LegisResult<User> {
        self.0.write().create_user(draft)
    }

    /// Retrieve a user by identifier. See [`BillStore::get_user`].
    pub fn get_user(&self, id: &UserId) -> LegisResult<Option<User>> {
        self.0.read().get_user(id)
    }

    /// Retrieve a user by username. See [`BillStore::get_user_by_username`].
    pub fn get_user_by_username(&self, username: &str) -> LegisResult<Option<User>> {
        self.0.read().get_user_by_username(username)
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHandle").finish()
    }
}
