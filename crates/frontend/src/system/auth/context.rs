//! The single authoritative boundary around the cached session.
//!
//! Provided once at the app root; views and fetchers read through it instead
//! of touching browser storage themselves. Writers are the login action
//! (create) and `invalidate` (logout or a 401 from the API) — both idempotent.

use contracts::system::auth::SessionUser;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<Option<SessionUser>>,
}

/// Take the cached user out of the slot, reporting whether one was present.
/// Repeated calls are no-ops, so the login redirect fires at most once no
/// matter how many concurrent fetches observe a 401.
fn take_user(slot: &mut Option<SessionUser>) -> bool {
    slot.take().is_some()
}

impl SessionContext {
    #[cfg(test)]
    pub(crate) fn seeded(user: Option<SessionUser>) -> Self {
        Self {
            state: RwSignal::new(user),
        }
    }

    fn restore() -> Self {
        Self {
            state: RwSignal::new(storage::load_session()),
        }
    }

    /// Reactive: flips when the session is established or destroyed.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_some())
    }

    pub fn current(&self) -> Option<SessionUser> {
        self.state.get()
    }

    /// Token for an outgoing request; untracked so fetches do not subscribe.
    pub fn jwt(&self) -> Option<String> {
        self.state
            .with_untracked(|s| s.as_ref().map(|u| u.jwt.clone()))
            .filter(|t| !t.is_empty())
    }

    pub fn display_name(&self) -> String {
        self.state
            .with(|s| s.as_ref().map(|u| u.username.clone()))
            .unwrap_or_default()
    }

    pub fn role(&self) -> Option<String> {
        self.state.with(|s| s.as_ref().map(|u| u.user_role.clone()))
    }

    /// Successful login: persist and publish the session.
    pub fn establish(&self, user: SessionUser) {
        storage::save_session(&user);
        self.state.set(Some(user));
    }

    /// Destroy the session (logout, or the API rejected the token). Returns
    /// whether there was a session to destroy; callers use this to signal the
    /// redirect-to-login exactly once.
    pub fn invalidate(&self) -> bool {
        let had = self.state.try_update(take_user).unwrap_or(false);
        storage::clear_session();
        had
    }
}

pub fn provide_session() {
    provide_context(SessionContext::restore());
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            username: "dina".to_string(),
            user_role: "Admin".to_string(),
            jwt: "token".to_string(),
        }
    }

    #[test]
    fn session_is_taken_exactly_once() {
        let mut slot = Some(user());
        assert!(take_user(&mut slot));
        assert!(!take_user(&mut slot));
        assert!(!take_user(&mut slot));
    }
}
