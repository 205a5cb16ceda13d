//! Image picker for the composer.

use std::fmt::Display;

use dioxus::prelude::*;
use plume_common::{MediaFile, PlumeError};

/// A button that opens a file picker and hands the chosen image's bytes on.
/// A file that cannot be read is reported through `on_error`.
#[component]
pub fn ImageUploadButton(
    on_file: EventHandler<MediaFile>,
    on_error: EventHandler<PlumeError>,
    #[props(default = false)] uploading: bool,
) -> Element {
    let on_file_change = move |evt: Event<FormData>| {
        spawn(async move {
            let files = evt.files();
            let Some(file) = files.first() else {
                return;
            };
            let name = file.name();
            match file.read_bytes().await {
                Ok(data) => on_file.call(MediaFile::new(name, data)),
                Err(e) => {
                    tracing::error!(%name, "could not read picked file: {e}");
                    on_error.call(read_error(&name, e));
                }
            }
        });
    };

    rsx! {
        label {
            class: "toolbar-button",
            title: "Image",
            aria_label: "Add image",
            input {
                r#type: "file",
                accept: "image/*",
                style: "display: none;",
                disabled: uploading,
                onchange: on_file_change,
            }
            if uploading { "Uploading..." } else { "🖼" }
        }
    }
}

fn read_error(name: &str, cause: impl Display) -> PlumeError {
    PlumeError::Io(std::io::Error::other(format!("could not read {name}: {cause}")))
}
