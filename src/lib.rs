//! listkeeper: a reducer-driven item list with CRUD operations and search.
//!
//! The core is an in-memory [`ItemStore`] holding an ordered list of items and
//! a search query. It changes only through four actions (create, update,
//! delete, set search query) applied by a pure reducer, and it derives the
//! case-insensitive filtered view on every read. Around it sit an application
//! layer that validates form input and dispatches actions, a terminal UI, and
//! an optional Zellij plugin shim (`--features plugin`).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs, feature "plugin")     │  ← Key mapping
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Events, validation
//! │  - Event handling and boundary validation           │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────────────┐   ┌──────────────────────────────┐
//! │ Item Store (store/)   │   │ UI Layer (ui/)               │
//! │ - Actions + reducer   │   │ - Header, search, forms      │
//! │ - Versioning          │   │ - Item table, empty state    │
//! │ - Subscriptions       │   │ - Themes                     │
//! └───────────────────────┘   └──────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/), Infrastructure, Observability    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`store`]: Item store, actions, reducer, shared handle
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Item types, errors, boundary validation
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Sandbox path helpers
//! - [`observability`]: Rotating JSON log output
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/listkeeper.wasm" {
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!         strict "false"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use listkeeper::{Item, ItemPatch, ItemStore};
//!
//! let mut store = ItemStore::new();
//! store.create(Item::new(1, "Apple"))?;
//! store.create(Item::new(2, "Banana"))?;
//! store.update(1, ItemPatch::rename("Green apple"))?;
//! store.set_search_query("APPLE")?;
//!
//! let names: Vec<_> = store.filtered_items().into_iter().map(|i| i.name.clone()).collect();
//! assert_eq!(names, ["Green apple"]);
//! # Ok::<(), listkeeper::ListkeeperError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{apply_actions, handle_event, process_event, Action, AppState, Event, FormField, InputMode};
pub use domain::{Item, ItemId, ItemPatch, ListkeeperError, Result};
pub use store::{ItemAction, ItemState, ItemStore, SharedItemStore, StoreOptions};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration parsed from the plugin host's key/value map.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` maps to the sandbox home.
    pub theme_file: Option<String>,

    /// Tracing filter directive, e.g. `"debug"`. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Report unmatched update/delete ids as errors.
    pub strict: bool,

    /// Directory for the log file. Default: the plugin data directory.
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>` with `~` expanded
    /// - `trace_level`: String → `Option<String>`
    /// - `strict`: `true`/`yes`/`1` or `false`/`no`/`0`; anything else → `false`
    /// - `log_dir`: String → `Option<PathBuf>` with `~` expanded
    ///
    /// Blank values count as missing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use listkeeper::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("strict".to_string(), "yes".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert!(config.strict);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        let strict = get("strict").map_or(false, |raw| match raw.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => true,
            "false" | "no" | "0" => false,
            other => {
                tracing::debug!(value = %other, "unrecognized strict value, using false");
                false
            }
        });

        Self {
            theme_name: get("theme").map(String::from),
            theme_file: get("theme_file").map(infrastructure::expand_tilde),
            trace_level: get("trace_level").map(String::from),
            strict,
            log_dir: get("log_dir").map(|dir| PathBuf::from(infrastructure::expand_tilde(dir))),
        }
    }
}

/// Builds the application state for `config`.
///
/// The theme comes from `theme_file`, then `theme_name`, then the default;
/// a theme that fails to load is logged and replaced by the default. The
/// store starts empty with the configured strictness.
///
/// # Example
///
/// ```rust
/// use listkeeper::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.store.items().is_empty());
/// assert_eq!(state.theme.name, "catppuccin-mocha");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(strict = config.strict, "initializing listkeeper");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let store = ItemStore::with_options(StoreOptions {
        strict: config.strict,
    });
    AppState::new(store, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert!(config.theme_name.is_none());
        assert!(config.theme_file.is_none());
        assert!(config.trace_level.is_none());
        assert!(!config.strict);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn values_are_trimmed_and_blank_is_missing() {
        let config = Config::from_zellij(&map(&[("theme", "  "), ("trace_level", " debug ")]));
        assert!(config.theme_name.is_none());
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn paths_expand_tilde() {
        let config = Config::from_zellij(&map(&[
            ("theme_file", "~/themes/paper.toml"),
            ("log_dir", "~/logs"),
        ]));
        assert_eq!(config.theme_file.as_deref(), Some("/host/themes/paper.toml"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/host/logs")));
    }

    #[test]
    fn strict_parsing() {
        for (raw, expected) in [("TRUE", true), ("1", true), ("no", false), ("maybe", false)] {
            assert_eq!(Config::from_zellij(&map(&[("strict", raw)])).strict, expected, "{raw}");
        }
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");

        let config = Config {
            theme_file: Some("/missing/theme.toml".to_string()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_uses_named_theme_and_strictness() {
        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            strict: true,
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-frappe");
        assert!(state.store.options().strict);
    }
}
