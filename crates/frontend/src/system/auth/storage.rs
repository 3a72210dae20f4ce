//! Browser-storage persistence of the cached session.
//!
//! The only readers and writers of the `user` key; everything else goes
//! through [`super::context::SessionContext`].

use contracts::system::auth::SessionUser;
use web_sys::window;

const SESSION_STORAGE_KEY: &str = "user";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the cached session. Unparseable or token-less blobs count as absent.
pub fn load_session() -> Option<SessionUser> {
    let raw = local_storage()?.get_item(SESSION_STORAGE_KEY).ok()??;
    let user: SessionUser = serde_json::from_str(&raw).ok()?;
    if user.jwt.is_empty() {
        return None;
    }
    Some(user)
}

pub fn save_session(user: &SessionUser) {
    let Some(storage) = local_storage() else {
        return;
    };
    let Ok(raw) = serde_json::to_string(user) else {
        return;
    };
    let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
}

/// Remove the cached session. Safe to call repeatedly.
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}
