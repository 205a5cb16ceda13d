use dioxus::prelude::*;
use plume_common::{ComposerConfig, Session};

use crate::session::load_session;
use crate::views::{Compose, Home, Shell};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/compose")]
        Compose {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Configuration and session shared by every view.
#[derive(Clone, Debug)]
pub struct ComposerContext {
    pub config: ComposerConfig,
    /// The acting user's session, or why there is none.
    pub session: Result<Session, String>,
}

impl ComposerContext {
    pub fn load() -> Self {
        let config = ComposerConfig::from_env().unwrap_or_else(|e| {
            tracing::error!(error = %e, "invalid composer config, using defaults");
            ComposerConfig::default()
        });
        let session = load_session().map_err(|e| {
            tracing::warn!(error = %e, "no session available");
            e.to_string()
        });
        Self { config, session }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(ComposerContext::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
