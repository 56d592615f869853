//! Domain layer for listkeeper.
//!
//! Core types shared by the store, the application layer and the UI, with no
//! dependency on the plugin host.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`item`]: Item record and partial update types
//! - [`validation`]: Boundary checks run before dispatching

pub mod error;
pub mod item;
pub mod validation;

pub use error::{ListkeeperError, Result};
pub use item::{Item, ItemId, ItemPatch};
