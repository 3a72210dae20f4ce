//! Application shell.
//!
//! ```text
//! +------------------------------------------+
//! |              TopHeader                   |
//! +------------------------------------------+
//! |  Sidebar  |           Content            |
//! +------------------------------------------+
//! ```

pub mod nav;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;

use nav::use_nav;
use sidebar::Sidebar;
use top_header::TopHeader;

#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    let nav = use_nav();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div class=move || {
                    if nav.sidebar_open.get() {
                        "app-sidebar"
                    } else {
                        "app-sidebar app-sidebar--collapsed"
                    }
                }>
                    <Sidebar />
                </div>
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
