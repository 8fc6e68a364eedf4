//! # client
//!
//! Browser glue for the ScrapeGoat crawl pages: a task status poller and a
//! light/dark theme toggle.
//!
//! Both components are written against small traits (`StatusView`,
//! `ThemeView`, `KeyValueStore`, `StatusSource`, `Timer`) so the same logic
//! runs in the browser (`hydrate` feature, via `web-sys`) and natively (the
//! `cli` crate and unit tests).

pub mod net;
pub mod poller;
pub mod timer;
pub mod util;
pub mod view;

#[cfg(feature = "hydrate")]
pub mod boot;
#[cfg(feature = "hydrate")]
pub mod dom;

pub use net::source::{FetchError, StatusSource};
pub use poller::{PollConfig, PollExit, PollPhase, StatusPoller};
pub use timer::Timer;
pub use util::storage::{KeyValueStore, MemoryStore, StoreError};
pub use util::theme::{Theme, ThemeToggle};
pub use view::{StatusView, ThemeView};
