use leptos::prelude::*;

use crate::layout::nav::use_nav;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::{role_allowed, ADMIN_ONLY};

struct MenuItem {
    key: &'static str,
    label: &'static str,
    icon: &'static str,
}

struct MenuGroup {
    title: &'static str,
    items: &'static [MenuItem],
}

const MENU: &[MenuGroup] = &[
    MenuGroup {
        title: "Overview",
        items: &[MenuItem {
            key: "home",
            label: "Home",
            icon: "home",
        }],
    },
    MenuGroup {
        title: "Network",
        items: &[MenuItem {
            key: "pharmacies",
            label: "Pharmacies",
            icon: "building",
        }],
    },
    MenuGroup {
        title: "Reports",
        items: &[
            MenuItem {
                key: "detailed-sales",
                label: "Detailed Sales",
                icon: "bar-chart",
            },
            MenuItem {
                key: "contests",
                label: "Contests",
                icon: "trophy",
            },
            MenuItem {
                key: "incentive-items",
                label: "Incentive Items",
                icon: "gift",
            },
        ],
    },
];

// Rendered only for admins; the users view itself is role-gated as well.
const ADMIN_MENU: MenuGroup = MenuGroup {
    title: "Administration",
    items: &[MenuItem {
        key: "users",
        label: "Users",
        icon: "users",
    }],
};

fn menu_group(group: &'static MenuGroup) -> AnyView {
    let nav = use_nav();
    view! {
        <div class="sidebar__group">
            <div class="sidebar__group-title">{group.title}</div>
            {group
                .items
                .iter()
                .map(|item| {
                    view! {
                        <button
                            class=move || {
                                if nav.active.get() == item.key {
                                    "sidebar__item sidebar__item--active"
                                } else {
                                    "sidebar__item"
                                }
                            }
                            on:click=move |_| nav.open_view(item.key)
                        >
                            {icon(item.icon)}
                            <span>{item.label}</span>
                        </button>
                    }
                    .into_any()
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();

    let is_admin = Signal::derive(move || {
        session
            .role()
            .map(|r| role_allowed(&r, ADMIN_ONLY))
            .unwrap_or(false)
    });

    view! {
        <nav class="sidebar">
            {MENU.iter().map(menu_group).collect_view()}
            <Show when=move || is_admin.get() fallback=|| ()>
                {menu_group(&ADMIN_MENU)}
            </Show>
        </nav>
    }
}
