use leptos::prelude::*;

use crate::layout::nav::use_nav;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::context::use_session;

#[component]
pub fn TopHeader() -> impl IntoView {
    let nav = use_nav();
    let session = use_session();

    let logout = move |_| {
        // The auth gate unmounts everything below it once this returns true.
        session.invalidate();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| nav.toggle_sidebar()
                    title="Toggle navigation"
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Pharmacy Network"</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />

                <span class="top-header__user">
                    {icon("user")}
                    <span>{move || session.display_name()}</span>
                </span>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
