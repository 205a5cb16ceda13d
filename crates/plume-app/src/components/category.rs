use dioxus::prelude::*;
use plume_common::Category;
use plume_editor_core::CategoryMenu;

/// Category picker. While open, a full-screen backdrop sits under the list
/// and closes it on click; it is only in the tree while the menu is open.
#[component]
pub fn CategoryDropdown(
    selected: Option<Category>,
    menu: CategoryMenu,
    on_toggle: EventHandler<()>,
    on_select: EventHandler<Category>,
    on_dismiss: EventHandler<()>,
) -> Element {
    let label = selected.map(|c| c.label()).unwrap_or("Select category");

    rsx! {
        div { class: "category-dropdown",
            button {
                class: "category-trigger",
                r#type: "button",
                aria_haspopup: "listbox",
                aria_expanded: menu.open,
                onclick: move |_| on_toggle.call(()),
                "{label}"
            }

            if menu.open {
                div {
                    class: "category-backdrop",
                    onclick: move |_| on_dismiss.call(()),
                }
                ul { class: "category-list", role: "listbox",
                    for (category, is_selected) in menu.entries(selected) {
                        li {
                            key: "{category}",
                            class: if is_selected { "category-option selected" } else { "category-option" },
                            role: "option",
                            aria_selected: is_selected,
                            onclick: move |_| on_select.call(category),
                            "{category.label()}"
                        }
                    }
                }
            }
        }
    }
}
