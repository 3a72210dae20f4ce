use std::collections::BTreeMap;

use contracts::system::auth::{ROLE_ADMIN, ROLE_SUPERVISOR, ROLE_USER};
use contracts::system::users::User;
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
use crate::system::auth::guard::{RequireRole, ADMIN_ONLY};
use crate::system::users::ui::details::UserDetails;

const CONFIG: ListConfig = ListConfig {
    endpoint: "/api/users",
    page_size: 50,
    paging: PagingStyle::PageLimit,
    filter_fields: &["role", "status"],
    sort_fields: &["username", "role"],
};

const COLSPAN: &str = "7";

/// Which account the inline form targets, if it is open at all.
#[derive(Clone)]
enum FormTarget {
    Create,
    Edit(User),
}

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <RequireRole allow=ADMIN_ONLY>
            <UsersList />
        </RequireRole>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let ctrl = ListController::<User>::mount(CONFIG);

    let filter_expanded = RwSignal::new(false);
    let form_target = RwSignal::new(Option::<FormTarget>::None);

    let role = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());

    Effect::new(move |_| {
        let q = ctrl.query.get();
        role.set(q.filters.get("role").cloned().unwrap_or_default());
        status.set(q.filters.get("status").cloned().unwrap_or_default());
    });

    let apply = Callback::new(move |_: ()| {
        let mut filters = BTreeMap::new();
        filters.insert("role".to_string(), role.get_untracked());
        filters.insert("status".to_string(), status.get_untracked());
        ctrl.apply_filters(filters);
    });

    let clear = Callback::new(move |_: ()| ctrl.clear_filters());
    let on_sort = Callback::new(move |field: String| ctrl.toggle_sort(&field));
    let on_page = Callback::new(move |page: u32| ctrl.go_to_page(page));
    let sort = Signal::derive(move || ctrl.query.get().sort);

    let on_saved = Callback::new(move |_: ()| {
        form_target.set(None);
        ctrl.reload();
    });
    let on_cancel = Callback::new(move |_: ()| form_target.set(None));

    view! {
        <div class="page page--wide">
            {move || {
                if let Some(target) = form_target.get() {
                    let edit = match target {
                        FormTarget::Create => None,
                        FormTarget::Edit(user) => Some(user),
                    };
                    return view! {
                        <UserDetails target=edit on_saved=on_saved on_cancel=on_cancel />
                    }
                    .into_any();
                }

                view! {
                    <div>
                        <div class="page__header">
                            <div class="page__header-left">
                                {icon("users")}
                                <h1 class="page__title">"Users"</h1>
                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                    <span>{move || ctrl.total_count.get().to_string()}</span>
                                </Badge>
                            </div>
                            <div class="page__header-right">
                                <SearchInput
                                    value=Signal::derive(move || ctrl.query.get().search)
                                    on_change=Callback::new(move |s: String| ctrl.apply_search(s))
                                    placeholder="Username or name (min. 3 characters)..."
                                />
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| form_target.set(Some(FormTarget::Create))
                                >
                                    {icon("plus")}
                                    " New User"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| ctrl.reload()
                                    disabled=Signal::derive(move || ctrl.is_loading.get())
                                >
                                    {icon("refresh")}
                                    {move || {
                                        if ctrl.is_loading.get() { " Loading..." } else { " Refresh" }
                                    }}
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
                                        <div style="min-width: 220px;">
                                            <Flex vertical=true gap=FlexGap::Small>
                                                <Label>"Role:"</Label>
                                                <Select value=role>
                                                    <option value="">"All"</option>
                                                    <option value=ROLE_USER>{ROLE_USER}</option>
                                                    <option value=ROLE_SUPERVISOR>{ROLE_SUPERVISOR}</option>
                                                    <option value=ROLE_ADMIN>{ROLE_ADMIN}</option>
                                                </Select>
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
                                                label="Username"
                                                field="username"
                                                sort=sort
                                                on_sort=on_sort
                                                min_width=160.0
                                            />
                                            <TableHeaderCell resizable=false min_width=200.0>
                                                "Full name"
                                            </TableHeaderCell>
                                            <TableHeaderCell resizable=false min_width=200.0>
                                                "Email"
                                            </TableHeaderCell>
                                            <SortableHeaderCell
                                                label="Role"
                                                field="role"
                                                sort=sort
                                                on_sort=on_sort
                                                min_width=160.0
                                            />
                                            <TableHeaderCell resizable=false min_width=180.0>
                                                "Pharmacy"
                                            </TableHeaderCell>
                                            <TableHeaderCell resizable=false min_width=90.0>
                                                "Status"
                                            </TableHeaderCell>
                                            <TableHeaderCell resizable=false min_width=90.0>
                                                ""
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
                                                return placeholder_row(COLSPAN, "No users found");
                                            }
                                            data.into_iter()
                                                .map(|row| {
                                                    let edit_row = row.clone();
                                                    view! {
                                                        <TableRow>
                                                            <TableCell>
                                                                <TableCellLayout>{row.username}</TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout truncate=true>
                                                                    {row.full_name.unwrap_or_default()}
                                                                </TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout truncate=true>
                                                                    {row.email.unwrap_or_default()}
                                                                </TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout>{row.role}</TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout truncate=true>
                                                                    {row.pharmacy.unwrap_or_default()}
                                                                </TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout>
                                                                    {active_badge(row.is_active)}
                                                                </TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout>
                                                                    <Button
                                                                        appearance=ButtonAppearance::Subtle
                                                                        size=ButtonSize::Small
                                                                        on_click=move |_| {
                                                                            form_target
                                                                                .set(Some(FormTarget::Edit(edit_row.clone())))
                                                                        }
                                                                    >
                                                                        "Edit"
                                                                    </Button>
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
                .into_any()
            }}
        </div>
    }
}
