//! WASM entry points called by the host page.
//!
//! The module's start hook wires logging and the theme toggle. The crawl page
//! additionally calls `start_status_poller(taskId)` with the task id it
//! rendered; pages without a task simply never call it (or pass `null`).

use tokio_util::sync::CancellationToken;
use wasm_bindgen::prelude::*;

use crate::dom::{DomStatusView, mount_theme_toggle};
use crate::net::source::GlooStatusSource;
use crate::poller::{PollConfig, PollExit, StatusPoller};
use crate::timer::GlooTimer;

/// Handle returned to JS so the page can stop polling early.
#[wasm_bindgen]
pub struct PollHandle {
    cancel: CancellationToken,
}

#[wasm_bindgen]
impl PollHandle {
    /// Stop polling. No further requests are sent and the page is not
    /// reloaded.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if !mount_theme_toggle() {
        log::debug!("no theme toggle on this page");
    }
}

/// Start polling `/status/{task_id}` if the page has a status element.
///
/// Returns `undefined` when the task id is missing or the page has no
/// `#crawl-status` element; nothing is fetched in that case.
#[wasm_bindgen]
pub fn start_status_poller(task_id: Option<String>) -> Option<PollHandle> {
    let view = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| DomStatusView::find(&doc));
    let Some(mut poller) = StatusPoller::activate(task_id, view, GlooStatusSource, GlooTimer, PollConfig::default())
    else {
        log::debug!("status poller not activated");
        return None;
    };

    let cancel = CancellationToken::new();
    let token = cancel.clone();
    wasm_bindgen_futures::spawn_local(async move {
        if let PollExit::Halted { cycles, .. } = poller.run(&token).await {
            log::debug!("status poller halted after {cycles} polls");
        }
    });
    Some(PollHandle { cancel })
}
