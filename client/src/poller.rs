//! Task status poller.
//!
//! `StatusPoller` fetches `/status/{task_id}` until the server reports the
//! task finished, mirroring each response into a [`StatusView`]:
//!
//! ```text
//! Idle --activate--> Polling --finished=false, sleep 2000 ms--> Polling
//!                       |
//!                       +--finished=true--> Done (100%, " (Done)", sleep 1200 ms, reload)
//! ```
//!
//! Only one request is ever in flight: the next sleep starts after the
//! previous response has been applied.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch halts the loop. Nothing is retried and the page is not
//! reloaded; the error is logged and returned in [`PollExit::Halted`].

#[cfg(test)]
#[path = "poller_test.rs"]
mod poller_test;

use std::time::Duration;

use status::{TaskStatus, WAITING_PLACEHOLDER};
use tokio_util::sync::CancellationToken;

use crate::net::source::{FetchError, StatusSource};
use crate::timer::Timer;
use crate::view::StatusView;

/// Delay between a running response and the next request.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Delay between the finished response and the page reload.
pub const RELOAD_DELAY: Duration = Duration::from_millis(1200);

/// Tunables for [`StatusPoller`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollConfig {
    pub interval: Duration,
    pub reload_delay: Duration,
    /// Status line shown when a response carries no status text.
    pub placeholder: String,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: POLL_INTERVAL,
            reload_delay: RELOAD_DELAY,
            placeholder: WAITING_PLACEHOLDER.to_owned(),
        }
    }
}

/// Lifecycle of a poller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PollPhase {
    /// Activated but not running (or stopped early).
    #[default]
    Idle,
    /// Fetch/sleep loop in progress.
    Polling,
    /// Server reported the task finished.
    Done,
}

/// How a [`StatusPoller::run`] ended. `cycles` counts completed fetches.
#[derive(Debug)]
pub enum PollExit {
    /// Task finished and the page reload was requested.
    Finished { cycles: u32 },
    /// The cancellation token fired first.
    Cancelled { cycles: u32 },
    /// A fetch failed; polling stopped without reloading.
    Halted { cycles: u32, error: FetchError },
}

/// Polls one task until it finishes.
pub struct StatusPoller<V, S, T> {
    task_id: String,
    view: V,
    source: S,
    timer: T,
    config: PollConfig,
    phase: PollPhase,
}

impl<V, S, T> StatusPoller<V, S, T>
where
    V: StatusView,
    S: StatusSource,
    T: Timer,
{
    /// Build a poller if both a task id and a status view are present.
    ///
    /// Returns `None` (and nothing is ever fetched) when the task id is
    /// missing or empty, or when the page has no status element.
    pub fn activate(task_id: Option<String>, view: Option<V>, source: S, timer: T, config: PollConfig) -> Option<Self> {
        let task_id = task_id.filter(|id| !id.is_empty())?;
        let view = view?;
        Some(Self { task_id, view, source, timer, config, phase: PollPhase::Idle })
    }

    #[must_use]
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    #[must_use]
    pub fn phase(&self) -> PollPhase {
        self.phase
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Run the poll loop until the task finishes, a fetch fails, or `cancel`
    /// fires. Each fetch and each sleep is raced against `cancel`.
    pub async fn run(&mut self, cancel: &CancellationToken) -> PollExit {
        self.phase = PollPhase::Polling;
        let mut cycles = 0;
        log::debug!("polling status for task {}", self.task_id);

        loop {
            if cancel.is_cancelled() {
                return self.stop_cancelled(cycles);
            }

            let fetched = cancel.run_until_cancelled(self.source.fetch(&self.task_id)).await;
            let Some(fetched) = fetched else {
                return self.stop_cancelled(cycles);
            };
            cycles = cycles.saturating_add(1);

            let status = match fetched {
                Ok(status) => status,
                Err(error) => {
                    log::warn!("status polling for task {} stopped: {error}", self.task_id);
                    self.phase = PollPhase::Idle;
                    return PollExit::Halted { cycles, error };
                }
            };

            if self.apply(&status) {
                return self.finish(&status, cycles, cancel).await;
            }

            if cancel.run_until_cancelled(self.timer.sleep(self.config.interval)).await.is_none() {
                return self.stop_cancelled(cycles);
            }
        }
    }

    /// Mirror one response into the view. Returns the finished flag.
    fn apply(&mut self, status: &TaskStatus) -> bool {
        self.view.set_status_text(status.status_text(&self.config.placeholder));
        if let Some(percent) = status.percent() {
            self.view.set_progress(percent);
        }
        status.finished
    }

    async fn finish(&mut self, status: &TaskStatus, cycles: u32, cancel: &CancellationToken) -> PollExit {
        self.phase = PollPhase::Done;
        self.view.set_progress(100.0);
        self.view.set_status_text(&status.done_text());
        log::info!("task {} finished after {cycles} polls", self.task_id);

        let slept = cancel.run_until_cancelled(self.timer.sleep(self.config.reload_delay)).await;
        if slept.is_none() || cancel.is_cancelled() {
            log::info!("reload for task {} cancelled", self.task_id);
            return PollExit::Cancelled { cycles };
        }
        self.view.reload_page();
        PollExit::Finished { cycles }
    }

    fn stop_cancelled(&mut self, cycles: u32) -> PollExit {
        log::info!("status polling for task {} cancelled", self.task_id);
        self.phase = PollPhase::Idle;
        PollExit::Cancelled { cycles }
    }
}
