//! View seams for the two page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The poller and the theme toggle never touch the DOM directly. The browser
//! build implements these traits over `web-sys` elements (see `dom`), the CLI
//! over the terminal, and tests over plain recorders.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::util::theme::LIGHT_MODE_CLASS;

/// Element holding the status line.
pub const STATUS_ELEMENT_ID: &str = "crawl-status";

/// Element whose `width` style reflects progress.
pub const PROGRESS_ELEMENT_ID: &str = "progress-bar";

/// Button that flips the theme.
pub const THEME_BUTTON_ID: &str = "theme-toggle-btn";

/// Inline style property carrying the progress bar width.
pub const PROGRESS_STYLE_PROPERTY: &str = "width";

/// Style `(property, value)` pair for a progress bar at `percent`.
#[must_use]
pub fn progress_style(percent: f64) -> (&'static str, String) {
    (PROGRESS_STYLE_PROPERTY, status::percent_width(percent))
}

/// Edit to apply to the `<body>` class list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassEdit {
    Add(&'static str),
    Remove(&'static str),
}

impl ClassEdit {
    /// Light mode adds the light-mode class; dark mode removes it.
    #[must_use]
    pub fn for_theme(light: bool) -> Self {
        if light { Self::Add(LIGHT_MODE_CLASS) } else { Self::Remove(LIGHT_MODE_CLASS) }
    }
}

/// Output surface for [`crate::StatusPoller`].
pub trait StatusView {
    /// Replace the status line.
    fn set_status_text(&mut self, text: &str);

    /// Set the progress bar to `percent` (0–100). Implementations without a
    /// progress element ignore the call.
    fn set_progress(&mut self, percent: f64);

    /// Reload the page once the task has finished.
    fn reload_page(&mut self);
}

/// Output surface for [`crate::ThemeToggle`].
pub trait ThemeView {
    /// Add (`true`) or remove (`false`) the light-mode class.
    fn set_theme_class(&mut self, light: bool);

    /// Replace the toggle button's glyph.
    fn set_toggle_glyph(&mut self, glyph: &str);
}
