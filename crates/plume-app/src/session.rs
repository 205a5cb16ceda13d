//! Where the acting user's PDS session comes from.
//!
//! Logging in is handled elsewhere; the composer only reads the result.

use plume_common::{PlumeError, Session};

/// Local-storage key holding the session JSON in the browser.
pub const SESSION_KEY: &str = "plume.session";

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub fn load_session() -> Result<Session, PlumeError> {
    use gloo_storage::{LocalStorage, Storage};

    LocalStorage::get(SESSION_KEY)
        .map_err(|e| PlumeError::Config(format!("{SESSION_KEY}: {e}")))
}

#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
pub fn load_session() -> Result<Session, PlumeError> {
    Session::from_env()
}
