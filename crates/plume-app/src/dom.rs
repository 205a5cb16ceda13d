//! Browser glue for the body textarea: reading the selection, putting focus
//! and selection back after a re-render, and the link prompt.
//!
//! The DOM counts selection offsets in UTF-16 code units while the editor
//! core counts chars, so every crossing goes through the conversions below.
//! Outside the browser these calls fall back to a caret at the end of the
//! text and do nothing else.

use plume_editor_core::Selection;

/// Char offset of a UTF-16 offset into `text`. Offsets inside a surrogate
/// pair round up to the following char.
pub fn utf16_to_char(text: &str, utf16: usize) -> usize {
    let mut units = 0;
    for (i, c) in text.chars().enumerate() {
        if units >= utf16 {
            return i;
        }
        units += c.len_utf16();
    }
    text.chars().count()
}

/// UTF-16 offset of a char offset into `text`.
pub fn char_to_utf16(text: &str, chars: usize) -> usize {
    text.chars().take(chars).map(char::len_utf16).sum()
}

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
fn textarea(id: &str) -> Option<web_sys::HtmlTextAreaElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .ok()
}

/// Selection of the textarea `id` in char offsets of `text`.
pub fn read_selection(id: &str, text: &str) -> Selection {
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    {
        let offsets = textarea(id).and_then(|el| {
            let start = el.selection_start().ok()??;
            let end = el.selection_end().ok()??;
            Some((start as usize, end as usize))
        });
        if let Some((start, end)) = offsets {
            return Selection::new(utf16_to_char(text, start), utf16_to_char(text, end));
        }
    }
    #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
    let _ = id;

    Selection::collapsed(text.chars().count())
}

/// Focus the textarea `id` and select `selection` once the browser has
/// painted the new `text`.
pub fn restore_selection(id: &'static str, text: &str, selection: Selection) {
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::*;

        let start = char_to_utf16(text, selection.start()) as u32;
        let end = char_to_utf16(text, selection.end()) as u32;

        if let Some(window) = web_sys::window() {
            let closure = Closure::once(move || {
                let Some(el) = textarea(id) else {
                    tracing::debug!(id, "textarea gone before selection restore");
                    return;
                };
                let _ = el.focus();
                if let Err(e) = el.set_selection_range(start, end) {
                    tracing::warn!("Selection restoration failed: {:?}", e);
                }
            });

            let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
    #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
    let _ = (id, text, selection);
}

/// Blocking text prompt. `None` when cancelled or unavailable.
pub fn prompt(message: &str) -> Option<String> {
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    {
        web_sys::window()?.prompt_with_message(message).ok()?
    }
    #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
    {
        let _ = message;
        None
    }
}
