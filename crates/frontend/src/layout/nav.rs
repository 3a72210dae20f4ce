//! Navigation context: the active view key plus URL integration.
//!
//! The full navigable location is `?view=<key>&<view's query state>`. The nav
//! context owns the `view` parameter and the history writes; each mounted list
//! controller owns the rest of the query string. A single `popstate` listener
//! keeps both sides in sync after back/forward navigation by bumping
//! `location_epoch`.

use std::collections::HashMap;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

const PARAM_VIEW: &str = "view";
const HOME_VIEW: &str = "home";

/// Query string of the current location, with the leading `?` included (as
/// the browser reports it) or empty.
pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn view_from_location() -> String {
    let params: HashMap<String, String> =
        serde_qs::from_str(current_search().trim_start_matches('?')).unwrap_or_default();
    params
        .get(PARAM_VIEW)
        .cloned()
        .unwrap_or_else(|| HOME_VIEW.to_string())
}

fn push_url(url: &str) {
    if current_search() == url {
        return;
    }
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ =
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url));
        }
    }
}

#[derive(Clone, Copy)]
pub struct NavContext {
    pub active: RwSignal<String>,
    pub sidebar_open: RwSignal<bool>,
    /// Incremented on every `popstate`; list controllers watch this to
    /// re-decode the URL they do not own themselves.
    pub location_epoch: RwSignal<u32>,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(view_from_location()),
            sidebar_open: RwSignal::new(true),
            location_epoch: RwSignal::new(0),
        }
    }

    /// Install the `popstate` listener. Call once from the main layout.
    pub fn init_history_integration(&self) {
        let this = *self;
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let view = view_from_location();
            if this.active.get_untracked() != view {
                this.active.set(view);
            }
            this.location_epoch.update(|e| *e += 1);
        }) as Box<dyn FnMut()>);
        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "popstate",
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
            );
        }
        closure.forget();
    }

    /// Switch to another view. The new view starts from a pristine query
    /// state; its own URL parameters appear once it commits something.
    pub fn open_view(&self, key: &str) {
        if self.active.get_untracked() == key {
            return;
        }
        self.active.set(key.to_string());
        push_url(&format!("?{}={}", PARAM_VIEW, key));
    }

    /// Target for denied role gates; distinct from the login redirect.
    pub fn go_home(&self) {
        self.open_view(HOME_VIEW);
    }

    /// Mirror the active view's committed query state into the URL.
    pub fn write_query(&self, encoded: &str) {
        let view = self.active.get_untracked();
        let url = if encoded.is_empty() {
            format!("?{}={}", PARAM_VIEW, view)
        } else {
            format!("?{}={}&{}", PARAM_VIEW, view, encoded)
        };
        push_url(&url);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|v| *v = !*v);
    }
}

impl Default for NavContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_nav() -> NavContext {
    use_context::<NavContext>().expect("NavContext not provided")
}
