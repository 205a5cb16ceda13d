//! The post composer component.
//!
//! All state lives in one `Signal<Composer>`. Service-backed actions take
//! their job out of the composer, await the service without holding the
//! signal, then write the outcome back.

use dioxus::prelude::*;
use n0_future::time::sleep;
use plume_common::{ComposerConfig, MediaFile, PlumeError, PostRecord, Session};
use plume_composer::{Composer, HttpServices, run_generate, run_submit, run_upload};
use plume_editor_core::FormatAction;

use super::{CategoryDropdown, FormatToolbar, ImageUploadButton};
use crate::app::Route;
use crate::dom;
use crate::navigation::RouterNavigator;

/// DOM id of the body textarea.
pub const BODY_ID: &str = "plume-post-body";

/// Title and body inputs, formatting toolbar, image upload, category picker,
/// content generation and the submit button.
///
/// Pass `editing` to update an existing post instead of creating one.
#[component]
pub fn PostEditor(
    config: ComposerConfig,
    session: Session,
    #[props(default)] editing: Option<PostRecord>,
) -> Element {
    let services = use_hook(|| HttpServices::new(&config, session.clone()));
    let mut composer = use_signal(|| match editing.clone() {
        Some(post) => Composer::editing(session.did.clone(), config.clone(), post),
        None => Composer::new(session.did.clone(), config.clone()),
    });
    let route = use_route::<Route>();
    let nav = use_navigator();

    let on_format = move |action: FormatAction| {
        let body = composer.peek().draft().body_text();
        let selection = dom::read_selection(BODY_ID, &body);
        let restored = composer.write().apply_format(&action, selection);
        let body = composer.peek().draft().body_text();
        dom::restore_selection(BODY_ID, &body, restored);
    };

    let upload_services = services.clone();
    let on_image = move |file: MediaFile| {
        let services = upload_services.clone();
        let job = composer.write().begin_upload(file);
        spawn(async move {
            let result = run_upload(&services, job).await;
            composer.write().finish_upload(result);
        });
    };

    let generate_services = services.clone();
    let do_generate = move |_| {
        let services = generate_services.clone();
        let Some(prompt) = composer.write().begin_generate() else {
            return;
        };
        spawn(async move {
            let result = run_generate(&services, prompt).await;
            composer.write().finish_generate(result);
        });
    };

    let do_submit = move |_| {
        let services = services.clone();
        let navigator = RouterNavigator::new(nav, &route);
        let job = match composer.write().begin_submit() {
            Ok(job) => job,
            Err(e) => {
                tracing::debug!(error = %e, "submit ignored");
                return;
            }
        };
        spawn(async move {
            let result = run_submit(&services, job).await;
            let _ = composer.write().finish_submit(result);
            let delay = composer.peek().config().status_delay();
            sleep(delay).await;
            composer.write().settle_submit(&navigator);
        });
    };

    let state = composer.read();
    let draft = state.draft();
    let body = draft.body_text();
    let busy = state.status().is_submitting();

    rsx! {
        div { class: "post-editor",
            div { class: "post-editor-header",
                input {
                    class: "post-title",
                    r#type: "text",
                    placeholder: "Title",
                    value: "{draft.title}",
                    disabled: busy,
                    oninput: move |e| composer.write().set_title(e.value()),
                }
                CategoryDropdown {
                    selected: draft.category,
                    menu: *state.menu(),
                    on_toggle: move |_| composer.write().toggle_category_menu(),
                    on_select: move |category| composer.write().select_category(category),
                    on_dismiss: move |_| composer.write().dismiss_category_menu(),
                }
            }

            div { class: "post-editor-tools",
                FormatToolbar { on_format, disabled: busy }
                ImageUploadButton {
                    on_file: on_image,
                    on_error: move |e: PlumeError| composer.write().finish_upload(Err(e)),
                    uploading: state.is_uploading(),
                }
                button {
                    class: "generate-button",
                    r#type: "button",
                    disabled: state.is_generating() || busy,
                    onclick: do_generate,
                    if state.is_generating() { "Generating..." } else { "Generate" }
                }
            }

            if let Some(message) = state.upload_error() {
                p { class: "inline-error", "{message}" }
            }
            if let Some(message) = state.generate_error() {
                p { class: "inline-error", "{message}" }
            }

            textarea {
                id: BODY_ID,
                class: "post-body",
                placeholder: "Write your post in Markdown",
                rows: "12",
                value: "{body}",
                disabled: busy,
                oninput: move |e| composer.write().set_body(&e.value()),
            }

            if !draft.media.is_empty() {
                ul { class: "post-media",
                    for media in draft.media.iter() {
                        li { key: "{media.cid}",
                            img { src: "{media.link}", alt: "{media.name}" }
                        }
                    }
                }
            }

            div { class: "post-editor-footer",
                if let Some(message) = state.status().error_message() {
                    p { class: "inline-error", "{message}" }
                }
                button {
                    class: "submit-button",
                    r#type: "button",
                    disabled: !state.can_submit(),
                    onclick: do_submit,
                    "{state.submit_label()}"
                }
            }
        }
    }
}
