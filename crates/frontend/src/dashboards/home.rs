//! Landing view: headline sales aggregates for the whole network.

use contracts::domain::sales::SalesSummary;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::stat_card::StatCard;
use crate::shared::format::{format_compact, format_int};
use crate::shared::icons::icon;
use crate::shared::list_controller::fetch::fetch_object;
use crate::shared::list_controller::response::LoadOutcome;
use crate::system::auth::context::use_session;

const SUMMARY_ENDPOINT: &str = "/api/sales/summary";

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    let (summary, set_summary) = signal(SalesSummary::default());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        let Some(jwt) = session.jwt() else {
            session.invalidate();
            return;
        };
        set_is_loading.set(true);
        set_error.set(None);
        leptos::task::spawn_local(async move {
            let outcome = fetch_object::<SalesSummary>(SUMMARY_ENDPOINT, Some(&jwt)).await;
            set_is_loading.set(false);
            match outcome {
                LoadOutcome::Ok(s) => set_summary.set(s),
                LoadOutcome::Unauthenticated => {
                    if session.invalidate() {
                        log::warn!("session rejected by the API, returning to login");
                    }
                }
                LoadOutcome::Denied { message, reason } => {
                    set_error.set(Some(match reason {
                        Some(r) => format!("{} ({})", message, r),
                        None => message,
                    }));
                }
                LoadOutcome::Failed(message) => set_error.set(Some(message)),
            }
        });
    };

    let loaded = StoredValue::new(false);
    Effect::new(move |_| {
        if !loaded.get_value() {
            loaded.set_value(true);
            load();
        }
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("home")}
                    <h1 class="page__title">"Overview"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || is_loading.get())
                    >
                        {icon("refresh")}
                        {move || if is_loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            {move || {
                if let Some(e) = error.get() {
                    view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <div class="stat-grid">
                <StatCard
                    label="Total Sales"
                    icon_name="cash"
                    value=Signal::derive(move || format_compact(summary.get().total_amount))
                />
                <StatCard
                    label="Units Sold"
                    icon_name="bar-chart"
                    value=Signal::derive(move || format_int(summary.get().total_quantity))
                />
                <StatCard
                    label="Reporting Pharmacies"
                    icon_name="building"
                    value=Signal::derive(move || summary.get().pharmacy_count.to_string())
                />
                <StatCard
                    label="Top Pharmacy"
                    icon_name="trophy"
                    value=Signal::derive(move || {
                        summary.get().top_pharmacy.unwrap_or_else(|| "-".to_string())
                    })
                />
            </div>
        </div>
    }
}
