//! Auth gate and the view registry.
//!
//! There is exactly one authentication boundary: until a session exists,
//! only the login page renders. Everything behind it assumes a session and
//! never re-checks; a 401 from the API destroys the session, which flips the
//! gate back to login.

use leptos::prelude::*;

use crate::dashboards::home::HomePage;
use crate::domain::contests::ui::list::ContestsList;
use crate::domain::detailed_sales::ui::list::DetailedSalesList;
use crate::domain::incentive_items::ui::list::IncentiveItemsList;
use crate::domain::pharmacies::ui::list::PharmaciesList;
use crate::layout::nav::NavContext;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::{RequireRole, ADMIN_OR_SUPERVISOR};
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::list::UsersPage;

/// Map a `view` key from the URL to its page. Unknown keys land on home
/// rather than erroring; stale bookmarks should still open the app.
/// The report views are for supervisors and admins; plain users get sent
/// back home by the gate.
fn resolve_view(key: &str) -> AnyView {
    match key {
        "home" => view! { <HomePage /> }.into_any(),
        "pharmacies" => view! { <PharmaciesList /> }.into_any(),
        "detailed-sales" => view! {
            <RequireRole allow=ADMIN_OR_SUPERVISOR>
                <DetailedSalesList />
            </RequireRole>
        }
        .into_any(),
        "contests" => view! {
            <RequireRole allow=ADMIN_OR_SUPERVISOR>
                <ContestsList />
            </RequireRole>
        }
        .into_any(),
        "incentive-items" => view! {
            <RequireRole allow=ADMIN_OR_SUPERVISOR>
                <IncentiveItemsList />
            </RequireRole>
        }
        .into_any(),
        "users" => view! { <UsersPage /> }.into_any(),
        _ => view! { <HomePage /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let nav = NavContext::new();
    provide_context(nav);
    nav.init_history_integration();

    view! {
        <Shell>
            {move || resolve_view(&nav.active.get())}
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
