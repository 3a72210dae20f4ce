//! Role gates layered on top of the base authentication check.
//!
//! The auth gate in `routes` guarantees a session exists before any protected
//! view mounts; these guards additionally compare the session's role against
//! an allow-list and send mismatches to the home view (not to login).

use leptos::prelude::*;

use crate::layout::nav::use_nav;
use crate::system::auth::context::use_session;

pub const ADMIN_ONLY: &[&str] = &["admin"];
pub const ADMIN_OR_SUPERVISOR: &[&str] = &["admin", "pharmacy supervisor"];

/// Case-insensitive allow-list check on the role string.
pub fn role_allowed(role: &str, allow: &[&str]) -> bool {
    let role = role.trim();
    allow.iter().any(|a| a.eq_ignore_ascii_case(role))
}

/// Renders children only when the session's role is on the allow-list;
/// otherwise navigates to the home view.
#[component]
pub fn RequireRole(allow: &'static [&'static str], children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let nav = use_nav();

    let allowed = Signal::derive(move || {
        session
            .role()
            .map(|r| role_allowed(&r, allow))
            .unwrap_or(false)
    });

    Effect::new(move |_| {
        if !allowed.get() {
            nav.go_home();
        }
    });

    view! {
        <Show when=move || allowed.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_comparison_ignores_case() {
        assert!(role_allowed("Pharmacy Supervisor", ADMIN_OR_SUPERVISOR));
        assert!(role_allowed("PHARMACY SUPERVISOR", ADMIN_OR_SUPERVISOR));
        assert!(role_allowed("pharmacy supervisor", ADMIN_OR_SUPERVISOR));
        assert!(role_allowed("ADMIN", ADMIN_ONLY));
    }

    #[test]
    fn unlisted_roles_are_rejected() {
        assert!(!role_allowed("user", ADMIN_OR_SUPERVISOR));
        assert!(!role_allowed("user", ADMIN_ONLY));
        assert!(!role_allowed("", ADMIN_ONLY));
    }

    #[test]
    fn supervisors_pass_the_report_gate_but_not_the_admin_gate() {
        assert!(role_allowed("Pharmacy Supervisor", ADMIN_OR_SUPERVISOR));
        assert!(!role_allowed("Pharmacy Supervisor", ADMIN_ONLY));
        assert!(role_allowed("Admin", ADMIN_OR_SUPERVISOR));
    }
}
