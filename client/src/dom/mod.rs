//! `web-sys` implementations of the view seams.
//!
//! Browser-only; compiled with the `hydrate` feature.

pub mod status_view;
pub mod theme_view;

pub use status_view::DomStatusView;
pub use theme_view::{DomThemeView, mount_theme_toggle};
