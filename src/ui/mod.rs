//! Terminal user interface.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → Canvas → stdout
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Renderable UI state
//! - [`renderer`]: Top-level rendering entry points
//! - [`components`]: Header, search bar, forms, table, empty state, footer
//! - [`helpers`]: Frame buffer and match highlighting
//! - [`theme`]: Color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{
    DisplayItem, EmptyState, FooterInfo, FormFieldInfo, FormInfo, HeaderInfo, SearchBarInfo,
    UIViewModel,
};
