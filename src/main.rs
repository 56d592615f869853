//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the listkeeper library and the Zellij plugin
//! system. Built only with `--features plugin`.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` events
//! 3. **Update**: Map keys to library events, run them through `process_event`
//! 4. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `a`: Add item
//! - `e`/`Enter`: Edit selected item
//! - `d`: Delete selected item
//! - `/`: Enter search mode
//! - `q`: Close plugin
//!
//! In search mode:
//! - Characters: Edit the query (the list filters as you type)
//! - `Enter`: Keep the filter and return to normal mode
//! - `Esc`: Clear the filter and return to normal mode
//!
//! In the add/edit forms:
//! - `Tab`: Switch between id and name fields (edit form)
//! - `Enter`: Submit
//! - `Esc`: Cancel

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use listkeeper::{process_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: listkeeper::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: listkeeper::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        listkeeper::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(strict = config.strict, theme = ?config.theme_name, "parsed configuration");
        self.app = listkeeper::initialize(&config);

        subscribe(&[EventType::Key]);
        tracing::debug!("plugin load complete");
    }

    /// Returns `true` if the plugin UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };

        let span = tracing::debug_span!("plugin_update_event", key = ?key.bare_key);
        let _guard = span.entered();

        let Some(our_event) = self.map_key_event(&key) else {
            return false;
        };

        match process_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                true
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        listkeeper::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard events to application events for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        match self.app.input_mode {
            InputMode::Normal => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('a') => Event::StartAdd,
                BareKey::Char('e') | BareKey::Enter => Event::StartEdit,
                BareKey::Char('d') => Event::DeleteSelected,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Esc => Event::Escape,
                _ => return None,
            }),
            InputMode::Search | InputMode::Adding | InputMode::Editing(_) => {
                Some(match key.bare_key {
                    BareKey::Down => Event::KeyDown,
                    BareKey::Up => Event::KeyUp,
                    BareKey::Enter => Event::Submit,
                    BareKey::Esc => Event::Escape,
                    BareKey::Tab => Event::SwitchField,
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Char(c) => Event::Char(c),
                    _ => return None,
                })
            }
        }
    }

    /// Executes an action left over after store dispatches.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Dispatch(item_action) => {
                tracing::debug!(kind = item_action.kind(), "unexpected undispatched action");
            }
        }
    }
}
