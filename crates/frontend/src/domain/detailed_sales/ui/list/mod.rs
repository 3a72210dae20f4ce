use std::collections::BTreeMap;

use contracts::domain::sales::SalesLine;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::error_box::ListErrorBox;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::table_support::placeholder_row;
use crate::shared::format::{format_int, format_money};
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListConfig, ListController, PagingStyle};

// The sales endpoint pages with skip/limit rather than page/limit.
const CONFIG: ListConfig = ListConfig {
    endpoint: "/api/sales/detailed",
    page_size: 100,
    paging: PagingStyle::SkipLimit,
    filter_fields: &["month", "pharmacy", "category"],
    sort_fields: &["saleDate", "amount", "quantity", "pharmacy", "product"],
};

const COLSPAN: &str = "7";

#[component]
pub fn DetailedSalesList() -> impl IntoView {
    let ctrl = ListController::<SalesLine>::mount(CONFIG);

    let filter_expanded = RwSignal::new(false);

    let month = RwSignal::new(String::new());
    let pharmacy = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());

    Effect::new(move |_| {
        let q = ctrl.query.get();
        month.set(q.filters.get("month").cloned().unwrap_or_default());
        pharmacy.set(q.filters.get("pharmacy").cloned().unwrap_or_default());
        category.set(q.filters.get("category").cloned().unwrap_or_default());
    });

    let apply = Callback::new(move |_: ()| {
        let mut filters = BTreeMap::new();
        filters.insert("month".to_string(), month.get_untracked());
        filters.insert("pharmacy".to_string(), pharmacy.get_untracked());
        filters.insert("category".to_string(), category.get_untracked());
        ctrl.apply_filters(filters);
    });

    let clear = Callback::new(move |_: ()| ctrl.clear_filters());
    let on_sort = Callback::new(move |field: String| ctrl.toggle_sort(&field));
    let on_page = Callback::new(move |page: u32| ctrl.go_to_page(page));
    let sort = Signal::derive(move || ctrl.query.get().sort);

    view! {
        <div class="page page--wide">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("bar-chart")}
                    <h1 class="page__title">"Detailed Sales"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || ctrl.total_count.get().to_string()}</span>
                    </Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || ctrl.query.get().search)
                        on_change=Callback::new(move |s: String| ctrl.apply_search(s))
                        placeholder="Product or pharmacy (min. 3 characters)..."
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctrl.reload()
                        disabled=Signal::derive(move || ctrl.is_loading.get())
                    >
                        {icon("refresh")}
                        {move || if ctrl.is_loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <ListErrorBox error=ctrl.error />

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=Signal::derive(move || {
                    ctrl.query.get().active_filter_count()
                })
                pagination_controls=move || {
                    view! {
                        <PaginationControls
                            current_page=Signal::derive(move || ctrl.query.get().page)
                            total_pages=Signal::derive(move || ctrl.total_pages.get())
                            total_count=Signal::derive(move || ctrl.total_count.get())
                            on_page_change=on_page
                        />
                    }
                }
                filter_content=move || {
                    view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="min-width: 160px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Month:"</Label>
                                    <Input value=month placeholder="YYYY-MM" />
                                </Flex>
                            </div>
                            <div style="min-width: 220px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Pharmacy:"</Label>
                                    <Input value=pharmacy placeholder="Pharmacy name" />
                                </Flex>
                            </div>
                            <div style="min-width: 200px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Category:"</Label>
                                    <Input value=category placeholder="Product category" />
                                </Flex>
                            </div>
                        </Flex>
                    }
                }
                on_apply=apply
                on_clear=clear
            />

            <div class="page-content">
                <div style="width: 100%; overflow-x: auto;">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell
                                    label="Pharmacy"
                                    field="pharmacy"
                                    sort=sort
                                    on_sort=on_sort
                                    min_width=200.0
                                />
                                <TableHeaderCell resizable=false min_width=100.0>
                                    "Branch"
                                </TableHeaderCell>
                                <SortableHeaderCell
                                    label="Product"
                                    field="product"
                                    sort=sort
                                    on_sort=on_sort
                                    min_width=240.0
                                />
                                <TableHeaderCell resizable=false min_width=140.0>
                                    "Category"
                                </TableHeaderCell>
                                <SortableHeaderCell
                                    label="Quantity"
                                    field="quantity"
                                    sort=sort
                                    on_sort=on_sort
                                    min_width=110.0
                                />
                                <SortableHeaderCell
                                    label="Amount"
                                    field="amount"
                                    sort=sort
                                    on_sort=on_sort
                                    min_width=130.0
                                />
                                <SortableHeaderCell
                                    label="Date"
                                    field="saleDate"
                                    sort=sort
                                    on_sort=on_sort
                                    min_width=120.0
                                />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                if ctrl.is_loading.get() && ctrl.items.get().is_empty() {
                                    return placeholder_row(COLSPAN, "Loading...");
                                }
                                let data = ctrl.items.get();
                                if data.is_empty() {
                                    return placeholder_row(COLSPAN, "No sales found");
                                }
                                data.into_iter()
                                    .map(|row| {
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{row.pharmacy}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.branch.unwrap_or_default()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{row.product}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.category.unwrap_or_default()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell class="table__cell--right">
                                                    <TableCellLayout>{format_int(row.quantity)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell class="table__cell--right">
                                                    <TableCellLayout>{format_money(row.amount)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {row.sale_date.format("%Y-%m-%d").to_string()}
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                        .into_any()
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}
