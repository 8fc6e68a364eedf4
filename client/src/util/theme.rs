//! Light/dark theme initialization and toggle.
//!
//! Reads the user's preference from a [`KeyValueStore`] and reflects it as
//! the `light-mode` class on `<body>` plus the toggle button's glyph. Toggle
//! writes `"light"` or `"dark"` back under [`THEME_KEY`].
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a failed write is logged and the page keeps
//! the flipped theme for the rest of its lifetime.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::{KeyValueStore, StoreError};
use crate::view::ThemeView;

/// Storage key holding the preference.
pub const THEME_KEY: &str = "scrapegoat_theme";

/// Body class present in light mode.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

const LIGHT_VALUE: &str = "light";
const DARK_VALUE: &str = "dark";

/// Visual theme. Dark is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Interpret a stored value. Only the exact string `"light"` selects
    /// light mode; anything else, including no value, is dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some(LIGHT_VALUE) { Self::Light } else { Self::Dark }
    }

    /// Value persisted for this theme.
    #[must_use]
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Dark => DARK_VALUE,
            Self::Light => LIGHT_VALUE,
        }
    }

    /// Toggle button glyph: sun in light mode, moon in dark mode.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Dark => "🌙",
            Self::Light => "☀️",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}

/// Owns the current theme, its store and its view.
#[derive(Debug)]
pub struct ThemeToggle<S, V> {
    store: S,
    view: V,
    theme: Theme,
}

impl<S: KeyValueStore, V: ThemeView> ThemeToggle<S, V> {
    /// Read the stored preference and apply it to `view` immediately.
    /// Nothing is written back on initialization.
    pub fn init(store: S, view: V) -> Self {
        let theme = Theme::from_stored(store.get(THEME_KEY).as_deref());
        let mut toggle = Self { store, view, theme };
        toggle.apply();
        log::debug!("theme initialized: {}", theme.as_stored());
        toggle
    }

    /// Flip the theme, persist it, and update the view. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        if let Err(e) = self.try_toggle() {
            log::warn!("theme preference not saved: {e}");
        }
        self.theme
    }

    /// Like [`toggle`](Self::toggle) but reports a failed write. The theme
    /// and view flip either way.
    ///
    /// # Errors
    ///
    /// Returns the store's [`StoreError`] if the preference was not saved.
    pub fn try_toggle(&mut self) -> Result<Theme, StoreError> {
        self.theme = self.theme.toggled();
        let saved = self.store.set(THEME_KEY, self.theme.as_stored());
        self.apply();
        saved.map(|()| self.theme)
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    fn apply(&mut self) {
        self.view.set_theme_class(self.theme.is_light());
        self.view.set_toggle_glyph(self.theme.glyph());
    }
}
