//! Cloneable, thread-safe handle over one [`ItemStore`].
//!
//! All access goes through a single mutex, so actions from different threads
//! are applied one at a time in lock order.

use super::actions::ItemAction;
use super::state::ItemState;
use super::store::ItemStore;
use crate::domain::error::{ListkeeperError, Result};
use crate::domain::Item;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared single-writer handle to an [`ItemStore`].
///
/// # Example
///
/// ```rust
/// use listkeeper::store::{ItemAction, SharedItemStore};
/// use listkeeper::{Item, ItemStore};
///
/// let shared = SharedItemStore::new(ItemStore::new());
/// let writer = shared.clone();
/// std::thread::spawn(move || writer.dispatch(ItemAction::create(Item::new(1, "a"))))
///     .join()
///     .unwrap()?;
///
/// assert_eq!(shared.snapshot()?.items.len(), 1);
/// # Ok::<(), listkeeper::ListkeeperError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SharedItemStore {
    inner: Arc<Mutex<ItemStore>>,
}

impl SharedItemStore {
    #[must_use]
    pub fn new(store: ItemStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ItemStore>> {
        self.inner
            .lock()
            .map_err(|e| ListkeeperError::StorePoisoned(e.to_string()))
    }

    /// Applies `action` under the lock.
    ///
    /// # Errors
    ///
    /// [`ListkeeperError::StorePoisoned`] if a previous holder panicked, or
    /// whatever [`ItemStore::dispatch`] reports.
    pub fn dispatch(&self, action: ItemAction) -> Result<()> {
        self.lock()?.dispatch(action)
    }

    /// Owned copy of the current state.
    ///
    /// # Errors
    ///
    /// [`ListkeeperError::StorePoisoned`] if the lock is poisoned.
    pub fn snapshot(&self) -> Result<ItemState> {
        Ok(self.lock()?.snapshot())
    }

    /// Owned copy of the filtered view.
    ///
    /// # Errors
    ///
    /// [`ListkeeperError::StorePoisoned`] if the lock is poisoned.
    pub fn filtered_items(&self) -> Result<Vec<Item>> {
        Ok(self.lock()?.filtered_items().into_iter().cloned().collect())
    }

    /// # Errors
    ///
    /// [`ListkeeperError::StorePoisoned`] if the lock is poisoned.
    pub fn version(&self) -> Result<u64> {
        Ok(self.lock()?.version())
    }

    /// Runs `f` with exclusive access to the store.
    ///
    /// # Errors
    ///
    /// [`ListkeeperError::StorePoisoned`] if the lock is poisoned.
    pub fn with_store<T>(&self, f: impl FnOnce(&mut ItemStore) -> T) -> Result<T> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_creates_are_all_applied() {
        let shared = SharedItemStore::new(ItemStore::new());

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let store = shared.clone();
                thread::spawn(move || {
                    for n in 0..25 {
                        let id = worker * 100 + n;
                        store
                            .dispatch(ItemAction::create(Item::new(id, format!("item {id}"))))
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.snapshot().unwrap().items.len(), 100);
        assert_eq!(shared.version().unwrap(), 100);
    }

    #[test]
    fn filtered_items_are_owned_copies() {
        let shared = SharedItemStore::new(ItemStore::new());
        shared.dispatch(ItemAction::create(Item::new(1, "Apple"))).unwrap();
        shared.dispatch(ItemAction::create(Item::new(2, "Banana"))).unwrap();
        shared.dispatch(ItemAction::set_search_query("ban")).unwrap();

        let visible = shared.filtered_items().unwrap();
        shared.dispatch(ItemAction::delete(2)).unwrap();

        assert_eq!(visible, vec![Item::new(2, "Banana")]);
        assert!(shared.filtered_items().unwrap().is_empty());
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let shared = SharedItemStore::new(ItemStore::new());
        let poisoner = shared.clone();
        let _ = thread::spawn(move || {
            poisoner
                .with_store(|_| panic!("writer crashed"))
                .ok();
        })
        .join();

        assert!(matches!(
            shared.snapshot(),
            Err(ListkeeperError::StorePoisoned(_))
        ));
    }
}
