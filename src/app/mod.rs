//! Application layer between the presentation host and the item store.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! Key input → Event → handle_event → Action::Dispatch → apply_actions → ItemStore
//!                          │                                               │
//!                          └── UI state (mode, drafts, cursor)             │
//!                                                                          ▼
//!                                  render ◀── compute_viewmodel ◀── filtered view
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Commands emitted by the event handler
//! - [`handler`]: Event processing, boundary validation, action routing
//! - [`ids`]: Timestamp-derived id generation for new items
//! - [`modes`]: Input mode types
//! - [`state`]: Application state and view model computation

pub mod actions;
pub mod handler;
pub mod ids;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{apply_actions, handle_event, process_event, Event};
pub use ids::IdGenerator;
pub use modes::{FormField, InputMode};
pub use state::AppState;
