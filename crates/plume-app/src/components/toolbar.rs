//! Formatting toolbar for the post body.

use dioxus::prelude::*;
use plume_editor_core::{FormatAction, link_from_prompt};

use crate::dom;

/// Formatting buttons. Each click reports the action to apply to the body
/// selection; the link button asks for the URL first and reports nothing
/// if the prompt is cancelled or left blank.
#[component]
pub fn FormatToolbar(
    on_format: EventHandler<FormatAction>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let actions = [
        (FormatAction::Bold, "Bold"),
        (FormatAction::Italic, "Italic"),
        (FormatAction::heading(1), "Heading 1"),
        (FormatAction::heading(2), "Heading 2"),
        (FormatAction::heading(3), "Heading 3"),
        (FormatAction::CodeBlock, "Code block"),
    ]
    .map(|(action, title)| (action.label(), title, action));

    rsx! {
        div { class: "editor-toolbar",
            for (label, title, action) in actions {
                button {
                    key: "{title}",
                    class: "toolbar-button",
                    r#type: "button",
                    title,
                    disabled,
                    onclick: move |_| on_format.call(action.clone()),
                    "{label}"
                }
            }

            span { class: "toolbar-separator" }

            button {
                class: "toolbar-button",
                r#type: "button",
                title: "Link",
                disabled,
                onclick: move |_| {
                    if let Some(action) = link_from_prompt(dom::prompt("Enter URL").as_deref()) {
                        on_format.call(action);
                    }
                },
                "🔗"
            }
        }
    }
}
