//! Terminal renderings of the status and theme views.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::io::Write;

use client::{StatusView, ThemeView};

const BAR_WIDTH: usize = 20;

/// Draw a fixed-width bar for `percent` (0–100), e.g. `[######..............]`.
#[must_use]
pub fn progress_bar(percent: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Writes one line per status update.
#[derive(Debug)]
pub struct TerminalStatusView<W> {
    out: W,
}

impl<W: Write> TerminalStatusView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %e, "status output failed");
        }
    }
}

impl<W: Write> StatusView for TerminalStatusView<W> {
    fn set_status_text(&mut self, text: &str) {
        self.line(&format!("status: {text}"));
    }

    fn set_progress(&mut self, percent: f64) {
        self.line(&format!("{} {}", progress_bar(percent), status::percent_width(percent)));
    }

    fn reload_page(&mut self) {
        // Nothing to reload in a terminal; mark the end of the watch instead.
        self.line("finished");
    }
}

/// Tracks what a page would show for the theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TerminalThemeView {
    pub light: bool,
    pub glyph: String,
}

impl TerminalThemeView {
    /// One-line description, e.g. `🌙 dark`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} {}", self.glyph, if self.light { "light" } else { "dark" })
    }
}

impl ThemeView for TerminalThemeView {
    fn set_theme_class(&mut self, light: bool) {
        self.light = light;
    }

    fn set_toggle_glyph(&mut self, glyph: &str) {
        glyph.clone_into(&mut self.glyph);
    }
}
