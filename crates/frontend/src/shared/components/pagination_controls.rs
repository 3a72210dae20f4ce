use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::list_controller::pagination::{page_window, PageItem};

/// Pagination bar: prev/next arrows plus the windowed page numbers with
/// ellipses. Renders nothing when there is at most one page.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total record count across all pages
    #[prop(into)]
    total_count: Signal<u64>,

    /// Callback with the requested page number
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let go = move |page: u32| {
        // Clamp instead of trusting the caller; stale windows must not crash.
        let total = total_pages.get_untracked().max(1);
        on_page_change.run(page.clamp(1, total));
    };

    view! {
        <Show when=move || { total_pages.get() > 1 } fallback=|| ()>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get_untracked();
                        if page > 1 {
                            go(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>

                {move || {
                    page_window(current_page.get(), total_pages.get())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(n) => {
                                let class = if current_page.get() == n {
                                    "pagination-btn pagination-btn--active"
                                } else {
                                    "pagination-btn"
                                };
                                view! {
                                    <button class=class on:click=move |_| go(n)>
                                        {n.to_string()}
                                    </button>
                                }
                                .into_any()
                            }
                            PageItem::Ellipsis => {
                                view! { <span class="pagination-ellipsis">"…"</span> }.into_any()
                            }
                        })
                        .collect_view()
                }}

                <button
                    class="pagination-btn"
                    on:click=move |_| go(current_page.get_untracked() + 1)
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>

                <span class="pagination-info">
                    {move || format!("{} records", total_count.get())}
                </span>
            </div>
        </Show>
    }
}
