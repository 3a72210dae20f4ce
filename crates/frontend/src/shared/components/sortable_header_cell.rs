use leptos::prelude::*;
use thaw::*;

use crate::shared::list_controller::sort::{sort_indicator, SortDescriptor};

/// Table header cell that drives the column sort cycle on click.
#[component]
pub fn SortableHeaderCell(
    /// Column label
    #[prop(into)]
    label: String,

    /// Field key sent to the server in `sort=`
    #[prop(into)]
    field: String,

    /// Currently active sort, if any
    #[prop(into)]
    sort: Signal<Option<SortDescriptor>>,

    /// Callback with the clicked field key
    on_sort: Callback<String>,

    #[prop(optional, into)] min_width: Option<f64>,
) -> impl IntoView {
    let indicator_field = field.clone();
    let click_field = field.clone();

    view! {
        <TableHeaderCell resizable=false min_width=min_width.unwrap_or(100.0)>
            <div
                class="sortable-header"
                on:click=move |_| on_sort.run(click_field.clone())
            >
                <span>{label}</span>
                <span class="sortable-header__indicator">
                    {move || sort_indicator(sort.get().as_ref(), &indicator_field)}
                </span>
            </div>
        </TableHeaderCell>
    }
}
