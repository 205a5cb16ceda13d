//! Dioxus front end for the plume post composer.

mod app;
/// Shared components: the post editor and its pieces.
pub mod components;
pub mod dom;
pub mod navigation;
pub mod session;
/// Route targets.
mod views;

pub use app::{App, ComposerContext, Route};
