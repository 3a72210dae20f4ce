use std::collections::BTreeMap;

use contracts::domain::pharmacy::Pharmacy;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::error_box::ListErrorBox;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::table_support::{active_badge, placeholder_row};
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListConfig, ListController, PagingStyle};

const CONFIG: ListConfig = ListConfig {
    endpoint: "/api/pharmacies",
    page_size: 50,
    paging: PagingStyle::PageLimit,
    filter_fields: &["area", "city", "status"],
    sort_fields: &["name", "area", "city"],
};

const COLSPAN: &str = "7";

#[component]
pub fn PharmaciesList() -> impl IntoView {
    let ctrl = ListController::<Pharmacy>::mount(CONFIG);

    let filter_expanded = RwSignal::new(false);

    // Draft filter inputs; they reach the committed state only through Apply.
    let area = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());

    // Resync drafts when the committed state changes under us (Clear,
    // back/forward navigation).
    Effect::new(move |_| {
        let q = ctrl.query.get();
        area.set(q.filters.get("area").cloned().unwrap_or_default());
        city.set(q.filters.get("city").cloned().unwrap_or_default());
        status.set(q.filters.get("status").cloned().unwrap_or_default());
    });

    let apply = Callback::new(move |_: ()| {
        let mut filters = BTreeMap::new();
        filters.insert("area".to_string(), area.get_untracked());
        filters.insert("city".to_string(), city.get_untracked());
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
                    {icon("building")}
                    <h1 class="page__title">"Pharmacies"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || ctrl.total_count.get().to_string()}</span>
                    </Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || ctrl.query.get().search)
                        on_change=Callback::new(move |s: String| ctrl.apply_search(s))
                        placeholder="Name or branch (min. 3 characters)..."
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
                                    <Label>"Area:"</Label>
                                    <Input value=area placeholder="e.g. North Cairo" />
                                </Flex>
                            </div>
                            <div style="min-width: 200px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"City:"</Label>
                                    <Input value=city placeholder="e.g. Giza" />
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
                                    label="Name"
                                    field="name"
                                    sort=sort
                                    on_sort=on_sort
                                    min_width=220.0
                                />
                                <TableHeaderCell resizable=false min_width=100.0>
                                    "Branch"
                                </TableHeaderCell>
                                <SortableHeaderCell
                                    label="Area"
                                    field="area"
                                    sort=sort
                                    on_sort=on_sort
                                    min_width=140.0
                                />
                                <SortableHeaderCell
                                    label="City"
                                    field="city"
                                    sort=sort
                                    on_sort=on_sort
                                    min_width=140.0
                                />
                                <TableHeaderCell resizable=false min_width=140.0>
                                    "Phone"
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>
                                    "Supervisor"
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
                                    return placeholder_row(COLSPAN, "No pharmacies found");
                                }
                                data.into_iter()
                                    .map(|row| {
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{row.name}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.branch.unwrap_or_default()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.area.unwrap_or_default()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.city.unwrap_or_default()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.phone.unwrap_or_default()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {row.supervisor.unwrap_or_default()}
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

