//! Status line and progress bar backed by page elements.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::view::{PROGRESS_ELEMENT_ID, STATUS_ELEMENT_ID, StatusView, progress_style};

/// `#crawl-status` text plus optional `#progress-bar` width.
#[derive(Clone, Debug)]
pub struct DomStatusView {
    status: Element,
    progress: Option<HtmlElement>,
}

impl DomStatusView {
    /// Look up the status elements. `None` when `#crawl-status` is missing;
    /// a missing progress bar only disables progress updates.
    #[must_use]
    pub fn find(document: &Document) -> Option<Self> {
        let status = document.get_element_by_id(STATUS_ELEMENT_ID)?;
        let progress = document
            .get_element_by_id(PROGRESS_ELEMENT_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Some(Self { status, progress })
    }
}

impl StatusView for DomStatusView {
    fn set_status_text(&mut self, text: &str) {
        self.status.set_text_content(Some(text));
    }

    fn set_progress(&mut self, percent: f64) {
        let Some(progress) = &self.progress else {
            return;
        };
        let (property, value) = progress_style(percent);
        let _ = progress.style().set_property(property, &value);
    }

    fn reload_page(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::warn!("page reload failed: {e:?}");
            }
        }
    }
}
