//! Selection-based delimiter wrapping.
//!
//! Every toolbar shortcut in the composer funnels through [`wrap_selection`]:
//! the selected text (or a placeholder when nothing is selected) gets a
//! prefix and suffix, and the returned selection covers the wrapped text so
//! the host can re-select it once the edit has been rendered.

use crate::text::{EditorRope, TextBuffer};
use crate::types::Selection;

/// Result of wrapping a plain string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wrapped {
    pub text: String,
    pub selection: Selection,
}

/// Wrap the selected range of `buf` in `prefix`/`suffix`.
///
/// An empty selection inserts `fallback` between the delimiters instead.
/// Offsets past the end of the buffer are clamped, and a backwards selection
/// is ordered first. Returns the selection covering the wrapped text,
/// starting right after `prefix`.
pub fn wrap_selection<B: TextBuffer>(
    buf: &mut B,
    selection: Selection,
    prefix: &str,
    suffix: &str,
    fallback: &str,
) -> Selection {
    let sel = selection.clamped(buf.len_chars());
    let start = sel.start();

    let inner_len = if sel.is_collapsed() {
        buf.insert(start, fallback);
        fallback.chars().count()
    } else {
        sel.len()
    };

    // Suffix first so `start` stays valid for the prefix insert.
    buf.insert(start + inner_len, suffix);
    buf.insert(start, prefix);

    let inner_start = start + prefix.chars().count();
    tracing::trace!(start, inner_len, "wrapped selection");
    Selection::new(inner_start, inner_start + inner_len)
}

/// Wrap `text[start..end]` (char offsets) and return the new string.
pub fn wrap_str(
    text: &str,
    start: usize,
    end: usize,
    prefix: &str,
    suffix: &str,
    fallback: &str,
) -> Wrapped {
    let mut rope = EditorRope::from_str(text);
    let selection = wrap_selection(
        &mut rope,
        Selection::new(start, end),
        prefix,
        suffix,
        fallback,
    );
    Wrapped {
        text: rope.to_string(),
        selection,
    }
}
