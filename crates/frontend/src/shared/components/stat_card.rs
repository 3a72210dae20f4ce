use leptos::prelude::*;

use crate::shared::icons::icon;

/// Dashboard statistic tile: icon, big value, label and optional subtitle.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] icon_name: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] subtitle: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__value">{move || value.get()}</div>
                <div class="stat-card__label">{label}</div>
                {subtitle
                    .map(|s| {
                        view! {
                            <div class="stat-card__subtitle">{move || s.get()}</div>
                        }
                    })}
            </div>
        </div>
    }
}
