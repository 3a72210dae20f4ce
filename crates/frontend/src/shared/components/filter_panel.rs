use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Collapsible filter panel shared by every list page.
///
/// The page keeps its draft filter signals and passes the form fields in as
/// `filter_content`; Apply and Clear are the only ways the draft reaches the
/// committed query state.
#[component]
pub fn FilterPanel(
    /// Whether the panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of committed filter criteria (badge in the header)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Pagination controls rendered in the header center
    #[prop(into)]
    pagination_controls: ViewFn,

    /// Draft form fields
    #[prop(into)]
    filter_content: ViewFn,

    /// Commit the draft
    on_apply: Callback<()>,

    /// Reset draft and committed state in one step
    on_clear: Callback<()>,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }
                            .into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__center">{pagination_controls.run()}</div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content.run()}
                    <div class="filter-panel__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_apply.run(())
                        >
                            "Apply"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_clear.run(())
                        >
                            "Clear"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}
