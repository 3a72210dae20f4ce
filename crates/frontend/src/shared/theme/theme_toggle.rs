use leptos::prelude::*;

use super::{use_theme, Theme};
use crate::shared::icons::icon;

/// Light/dark switch for the top header.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| ctx.theme.update(|t| *t = t.toggled())
            title=move || match ctx.theme.get() {
                Theme::Light => "Switch to dark theme",
                Theme::Dark => "Switch to light theme",
            }
        >
            {move || match ctx.theme.get() {
                Theme::Light => icon("moon"),
                Theme::Dark => icon("sun"),
            }}
        </button>
    }
}
