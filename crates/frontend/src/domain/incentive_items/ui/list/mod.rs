use std::collections::BTreeMap;

use contracts::domain::incentive::IncentiveItem;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::error_box::ListErrorBox;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::table_support::{active_badge, placeholder_row};
use crate::shared::format::format_number_with_decimals;
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListConfig, ListController, PagingStyle};

const CONFIG: ListConfig = ListConfig {
    endpoint: "/api/incentives",
    page_size: 100,
    paging: PagingStyle::SkipLimit,
    filter_fields: &["category", "status"],
    sort_fields: &["product", "points", "category"],
};

const COLSPAN: &str = "5";

#[component]
pub fn IncentiveItemsList() -> impl IntoView {
    let ctrl = ListController::<IncentiveItem>::mount(CONFIG);

    let filter_expanded = RwSignal::new(false);

    let category = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());

    Effect::new(move |_| {
        let q = ctrl.query.get();
        category.set(q.filters.get("category").cloned().unwrap_or_default());
        status.set(q.filters.get("status").cloned().unwrap_or_default());
    });

    let apply = Callback::new(move |_: ()| {
        let mut filters = BTreeMap::new();
        filters.insert("category".to_string(), category.get_untracked());
        filters.insert("status".to_string(), status.get_untracked());
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
                    {icon("gift")}
                    <h1 class="page__title">"Incentive Items"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || ctrl.total_count.get().to_string()}</span>
                    </Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || ctrl.query.get().search)
                        on_change=Callback::new(move |s: String| ctrl.apply_search(s))
                        placeholder="Product name (min. 3 characters)..."
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
                            <div style="min-width: 200px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Category:"</Label>
                                    <Input value=category placeholder="Product category" />
                                </Flex>
                            </div>
                            <div style="min-width: 160px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Status:"</Label>
                                    <Select value=status>
                                        <option value="">"All"</option>
                                        <option value="active">"Active"</option>
                                        <option value="inactive">"Inactive"</option>
                                    </Select>
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
                                    label="Product"
                                    field="product"
                                    sort=sort
                                    on_sort=on_sort
                                    min_width=260.0
                                />
                                <SortableHeaderCell
                                    label="Category"
                                    field="category"
                                    sort=sort
                                    on_sort=on_sort
                                    min_width=160.0
                                />
                                <SortableHeaderCell
                                    label="Points"
                                    field="points"
                                    sort=sort
                                    on_sort=on_sort
                                    min_width=110.0
                                />
                                <TableHeaderCell resizable=false min_width=180.0>
                                    "Supplier"
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>
                                    "Status"
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                if ctrl.is_loading.get() && ctrl.items.get().is_empty() {
                                    return placeholder_row(COLSPAN, "Loading...");
                                }
                                let data = ctrl.items.get();
                                if data.is_empty() {
                                    return placeholder_row(COLSPAN, "No incentive items found");
                                }
                                data.into_iter()
                                    .map(|row| {
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{row.product}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.category.unwrap_or_default()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell class="table__cell--right">
                                                    <TableCellLayout>
                                                        {format_number_with_decimals(row.points, 1)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {row.supplier.unwrap_or_default()}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{active_badge(row.is_active)}</TableCellLayout>
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
