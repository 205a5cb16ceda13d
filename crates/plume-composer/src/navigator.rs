/// Client-side routing, as far as the composer needs it.
pub trait Navigator {
    fn current_path(&self) -> String;
    fn redirect(&self, path: &str);
}

/// Path the composer returns to after a successful submission.
pub const ROOT_PATH: &str = "/";

/// Redirect to the root unless already there. Returns whether a redirect happened.
pub fn return_to_root<N: Navigator + ?Sized>(navigator: &N) -> bool {
    let current = navigator.current_path();
    if current == ROOT_PATH || current.is_empty() {
        return false;
    }
    tracing::debug!(from = %current, "returning to root");
    navigator.redirect(ROOT_PATH);
    true
}
