use dioxus::router::Navigator;

use crate::app::Route;

/// Composer navigation on top of the Dioxus router.
///
/// The current path is captured when the navigator is built, i.e. when the
/// submission starts.
#[derive(Clone)]
pub struct RouterNavigator {
    nav: Navigator,
    current: String,
}

impl RouterNavigator {
    pub fn new(nav: Navigator, current: &Route) -> Self {
        Self {
            nav,
            current: current.to_string(),
        }
    }
}

impl plume_composer::Navigator for RouterNavigator {
    fn current_path(&self) -> String {
        self.current.clone()
    }

    fn redirect(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                self.nav.push(route);
            }
            Err(e) => tracing::warn!(%path, "cannot route redirect: {e}"),
        }
    }
}
