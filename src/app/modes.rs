//! Input mode state types for the application.
//!
//! The mode decides how key input is interpreted and which component the UI
//! shows above the item table.
//!
//! - **Normal**: navigate the list, start forms, delete the selection
//! - **Search**: keystrokes edit the store's search query
//! - **Adding**: the add form is open
//! - **Editing**: the edit form is open, with one of its two fields focused
//!
//! # Example
//!
//! ```rust
//! use listkeeper::app::modes::{FormField, InputMode};
//!
//! let mode = InputMode::Editing(FormField::Name);
//! assert!(mode.is_form());
//! ```

/// Field of the edit form that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// The id to update.
    Id,
    /// The new name.
    Name,
}

impl FormField {
    /// The other field.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Id => Self::Name,
            Self::Name => Self::Id,
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Keybindings: j/k (navigate), a (add), e (edit), d (delete),
    /// / (search), q (quit).
    Normal,

    /// Search input is active. Every keystroke dispatches a new query.
    Search,

    /// Add form is open.
    Adding,

    /// Edit form is open with the given field focused.
    Editing(FormField),
}

impl InputMode {
    /// True for the add and edit forms.
    #[must_use]
    pub const fn is_form(self) -> bool {
        matches!(self, Self::Adding | Self::Editing(_))
    }
}
