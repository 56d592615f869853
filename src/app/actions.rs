//! Actions produced by the event handler.
//!
//! [`Action::Dispatch`] carries a store mutation; [`apply_actions`] routes it to
//! the store. Everything else is a runtime side effect for the plugin host.
//!
//! [`apply_actions`]: crate::app::handler::apply_actions
//!
//! # Example
//!
//! ```rust
//! use listkeeper::app::Action;
//! use listkeeper::store::ItemAction;
//!
//! let actions = vec![
//!     Action::Dispatch(ItemAction::delete(3)),
//!     Action::CloseFocus,
//! ];
//! assert!(matches!(actions[0], Action::Dispatch(_)));
//! ```

use crate::store::ItemAction;

/// Commands emitted by [`handle_event`](crate::app::handle_event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Apply a mutation to the item store.
    Dispatch(ItemAction),

    /// Hide the plugin pane.
    CloseFocus,
}
