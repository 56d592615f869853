//! Reducer-based item store.
//!
//! The store is the single owner of the item list and the search query. Every
//! change is an [`ItemAction`] applied by the pure [`reduce`] function; the
//! filtered view is derived from the current state on each read.
//!
//! ```text
//! caller ──ItemAction──▶ ItemStore::dispatch ──▶ reduce ──▶ ItemState
//!                              │                               │
//!                              └── version++ ── subscribers ◀──┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Mutation actions
//! - [`reducer`]: Pure state transition function
//! - [`state`]: State shape and derived view
//! - [`store`]: Owning store with versioning and subscriptions
//! - [`shared`]: Mutex-guarded handle for multi-threaded callers

pub mod actions;
pub mod reducer;
pub mod shared;
pub mod state;
#[allow(clippy::module_inception)]
pub mod store;

pub use actions::ItemAction;
pub use reducer::{reduce, Outcome};
pub use shared::SharedItemStore;
pub use state::ItemState;
pub use store::{ItemStore, StoreOptions, SubscriberId};
