//! Networking for the status endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `source` defines how a poll cycle obtains a `TaskStatus`; the browser
//! implementation lives behind `hydrate`, the native one in the `cli` crate.

pub mod source;
