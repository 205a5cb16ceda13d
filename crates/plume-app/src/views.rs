use dioxus::prelude::*;

use crate::app::{ComposerContext, Route};
use crate::components::PostEditor;

#[component]
pub fn Shell() -> Element {
    rsx! {
        nav { class: "shell-nav",
            Link { to: Route::Home {}, "plume" }
            Link { to: Route::Compose {}, "New post" }
        }
        main { class: "shell-main", Outlet::<Route> {} }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "home",
            h1 { "plume" }
            p { "Share what you are working on." }
            Link { class: "home-compose", to: Route::Compose {}, "Write a post" }
        }
    }
}

#[component]
pub fn Compose() -> Element {
    let ctx = use_context::<ComposerContext>();

    match ctx.session {
        Ok(session) => rsx! {
            PostEditor { config: ctx.config, session }
        },
        Err(reason) => rsx! {
            div { class: "composer-signed-out",
                p { "Sign in to write a post." }
                p { class: "composer-signed-out-detail", "{reason}" }
            }
        },
    }
}
