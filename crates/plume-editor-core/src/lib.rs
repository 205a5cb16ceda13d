//! plume-editor-core: Pure Rust composer logic without framework dependencies.
//!
//! This crate provides:
//! - `TextBuffer` trait for text storage abstraction
//! - `EditorRope` - ropey-backed implementation
//! - `wrap_selection` - delimiter wrapping behind every formatting shortcut
//! - `PostDraft`, `SubmissionStatus`, `CategoryMenu` - composer state

pub mod draft;
pub mod formatting;
pub mod menu;
pub mod status;
pub mod text;
pub mod types;
pub mod wrap;

pub use draft::{MissingField, PostDraft};
pub use formatting::{Delimiters, FormatAction, apply_format, link_from_prompt};
pub use menu::CategoryMenu;
pub use smol_str::SmolStr;
pub use status::SubmissionStatus;
pub use text::{EditorRope, TextBuffer};
pub use types::Selection;
pub use wrap::{Wrapped, wrap_selection, wrap_str};
