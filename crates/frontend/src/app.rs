use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::theme::provide_theme;
use crate::system::auth::context::provide_session;

#[component]
pub fn App() -> impl IntoView {
    provide_session();
    provide_theme();

    view! { <AppRoutes /> }
}
