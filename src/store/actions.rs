//! Mutation actions accepted by the item store.
//!
//! Every change to [`ItemState`](super::ItemState) is described by one
//! [`ItemAction`]. Actions are plain data: they serialize to tagged JSON so they
//! can be logged or replayed in tests.
//!
//! # Example
//!
//! ```rust
//! use listkeeper::store::ItemAction;
//! use listkeeper::{Item, ItemPatch};
//!
//! let actions = vec![
//!     ItemAction::create(Item::new(1, "Apple")),
//!     ItemAction::update(1, ItemPatch::rename("Green apple")),
//!     ItemAction::set_search_query("green"),
//!     ItemAction::delete(1),
//! ];
//! assert_eq!(actions.len(), 4);
//! ```

use crate::domain::{Item, ItemId, ItemPatch};
use serde::{Deserialize, Serialize};

/// One mutation of the item store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ItemAction {
    /// Appends a record to the end of the list.
    Create(Item),

    /// Merges `patch` into the first record whose id is `id`.
    Update {
        /// Id to match.
        id: ItemId,
        /// Fields to overwrite.
        patch: ItemPatch,
    },

    /// Removes every record whose id is `id`.
    Delete {
        /// Id to match.
        id: ItemId,
    },

    /// Replaces the search query verbatim.
    SetSearchQuery {
        /// New query text, possibly empty.
        query: String,
    },
}

impl ItemAction {
    #[must_use]
    pub const fn create(item: Item) -> Self {
        Self::Create(item)
    }

    #[must_use]
    pub const fn update(id: ItemId, patch: ItemPatch) -> Self {
        Self::Update { id, patch }
    }

    #[must_use]
    pub const fn delete(id: ItemId) -> Self {
        Self::Delete { id }
    }

    #[must_use]
    pub fn set_search_query(query: impl Into<String>) -> Self {
        Self::SetSearchQuery { query: query.into() }
    }

    /// Short name used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::SetSearchQuery { .. } => "set_search_query",
        }
    }

    /// The id targeted by update and delete actions.
    #[must_use]
    pub const fn target_id(&self) -> Option<ItemId> {
        match self {
            Self::Update { id, .. } | Self::Delete { id } => Some(*id),
            Self::Create(_) | Self::SetSearchQuery { .. } => None,
        }
    }
}
