//! Error types for listkeeper.
//!
//! This module defines the centralized error type [`ListkeeperError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! The item store itself is permissive: unmatched ids and empty inputs are no-ops.
//! Errors surface only at the input boundary (validation), in strict store mode
//! (not found), and from ambient concerns (I/O and theme files).

use crate::domain::item::ItemId;
use thiserror::Error;

/// The main error type for listkeeper operations.
///
/// # Examples
///
/// ```
/// use listkeeper::ListkeeperError;
///
/// fn reject_blank() -> Result<(), ListkeeperError> {
///     Err(ListkeeperError::Validation("name must not be empty".to_string()))
/// }
///
/// assert!(reject_blank().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ListkeeperError {
    /// Input rejected at the presentation boundary.
    ///
    /// Raised for an empty name on create or an unparseable id on update. The
    /// store never produces this variant; it exists so callers can refuse the
    /// submission before it reaches the store.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No item carries the requested id.
    ///
    /// Only reported when the store runs in strict mode. The default permissive
    /// store treats an unmatched id as a no-op.
    #[error("No item with id {id}")]
    NotFound {
        /// The id that matched nothing.
        id: ItemId,
    },

    /// The shared store's mutex was poisoned by a panicking writer.
    #[error("Item store lock poisoned: {0}")]
    StorePoisoned(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for listkeeper operations.
pub type Result<T> = std::result::Result<T, ListkeeperError>;
