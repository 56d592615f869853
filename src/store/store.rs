//! The item store: single owner of [`ItemState`].
//!
//! [`ItemStore`] applies actions through the reducer, keeps a version counter
//! that moves once per applied action, and notifies subscribers in registration
//! order after each change. Readers get shared references or owned snapshots;
//! the only way to change the state is [`ItemStore::dispatch`] and the four
//! operation shorthands built on it.
//!
//! # Example
//!
//! ```rust
//! use listkeeper::{Item, ItemStore};
//!
//! let mut store = ItemStore::new();
//! store.create(Item::new(1, "Apple"))?;
//! store.create(Item::new(2, "Banana"))?;
//! store.set_search_query("an")?;
//!
//! let visible: Vec<_> = store.filtered_items().into_iter().map(|i| i.id).collect();
//! assert_eq!(visible, vec![2]);
//! assert_eq!(store.version(), 3);
//! # Ok::<(), listkeeper::ListkeeperError>(())
//! ```

use super::actions::ItemAction;
use super::reducer::{reduce, Outcome};
use super::state::ItemState;
use crate::domain::error::{ListkeeperError, Result};
use crate::domain::{Item, ItemId, ItemPatch};

/// Behaviour switches for an [`ItemStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Report unmatched update/delete ids as [`ListkeeperError::NotFound`].
    ///
    /// Off by default; the state is left unchanged either way.
    pub strict: bool,
}

/// Handle returned by [`ItemStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

type Listener = Box<dyn FnMut(&ItemState, u64) + Send>;

/// Owner of the item list and search query.
pub struct ItemStore {
    state: ItemState,
    version: u64,
    options: StoreOptions,
    listeners: Vec<(SubscriberId, Listener)>,
    next_subscriber: u64,
}

impl ItemStore {
    /// Creates an empty, permissive store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    #[must_use]
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            state: ItemState::default(),
            version: 0,
            options,
            listeners: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Applies one action.
    ///
    /// On an applied change the version is bumped and subscribers run. An
    /// unmatched id changes nothing; it is an error only in strict mode.
    ///
    /// # Errors
    ///
    /// Returns [`ListkeeperError::NotFound`] for an unmatched update or delete
    /// when [`StoreOptions::strict`] is set. Never fails otherwise.
    pub fn dispatch(&mut self, action: ItemAction) -> Result<()> {
        let _span = tracing::debug_span!(
            "dispatch",
            action = action.kind(),
            version = self.version,
            items = self.state.items.len()
        )
        .entered();

        match reduce(&mut self.state, &action) {
            Outcome::Applied => {
                self.version += 1;
                tracing::debug!(version = self.version, "action applied");
                self.notify();
                Ok(())
            }
            Outcome::NoMatch => {
                tracing::debug!(target_id = ?action.target_id(), strict = self.options.strict, "no item matched");
                match action.target_id() {
                    Some(id) if self.options.strict => Err(ListkeeperError::NotFound { id }),
                    _ => Ok(()),
                }
            }
        }
    }

    /// Appends `item`. Never fails.
    ///
    /// # Errors
    ///
    /// None in practice; the signature matches [`Self::dispatch`].
    pub fn create(&mut self, item: Item) -> Result<()> {
        self.dispatch(ItemAction::create(item))
    }

    /// Merges `patch` into the first item with `id`.
    ///
    /// # Errors
    ///
    /// [`ListkeeperError::NotFound`] in strict mode when nothing matches.
    pub fn update(&mut self, id: ItemId, patch: ItemPatch) -> Result<()> {
        self.dispatch(ItemAction::update(id, patch))
    }

    /// Removes every item with `id`.
    ///
    /// # Errors
    ///
    /// [`ListkeeperError::NotFound`] in strict mode when nothing matches.
    pub fn delete(&mut self, id: ItemId) -> Result<()> {
        self.dispatch(ItemAction::delete(id))
    }

    /// Replaces the search query. Never fails.
    ///
    /// # Errors
    ///
    /// None in practice; the signature matches [`Self::dispatch`].
    pub fn set_search_query(&mut self, query: impl Into<String>) -> Result<()> {
        self.dispatch(ItemAction::set_search_query(query))
    }

    /// Items matching the current query, recomputed on every call.
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&Item> {
        self.state.filtered_items()
    }

    #[must_use]
    pub const fn state(&self) -> &ItemState {
        &self.state
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ItemState {
        self.state.clone()
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    /// Number of actions applied so far.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub const fn options(&self) -> StoreOptions {
        self.options
    }

    /// Registers a callback run after every applied action.
    ///
    /// Callbacks receive the new state and version, in registration order.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriberId
    where
        F: FnMut(&ItemState, u64) + Send + 'static,
    {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.listeners.push((id, Box::new(listener)));
        tracing::trace!(subscriber = id.0, "subscriber registered");
        id
    }

    /// Removes a callback. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let state = &self.state;
        let version = self.version;
        for (_, listener) in &mut self.listeners {
            listener(state, version);
        }
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("state", &self.state)
            .field("version", &self.version)
            .field("options", &self.options)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
